//! The backend collaborator consumed by the application
//!
//! The application never talks to HTTP directly: it holds something that
//! implements [`SessionRepository`] and spawns its calls on tokio.

use tutordesk_core::prelude::*;
use tutordesk_core::{SessionId, SessionRecord, TestEvent};

/// Access to the session list and its only write operation.
///
/// Implement the `Send` variant, [`SessionRepository`]; the local variant is
/// derived for it.
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Fetch the current snapshot of sessions
    async fn fetch_sessions(&self) -> Result<Vec<SessionRecord>>;

    /// Change one session's status and return the updated record
    async fn update_session_status(&self, id: SessionId, status: &str) -> Result<SessionRecord>;

    /// Fetch upcoming school tests for the tests panel
    async fn fetch_upcoming_tests(&self) -> Result<Vec<TestEvent>>;
}
