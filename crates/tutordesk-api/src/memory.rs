//! In-memory repository for demo mode and tests

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use tutordesk_core::prelude::*;
use tutordesk_core::{SessionId, SessionRecord, TestEvent};

use crate::repository::SessionRepository;

#[derive(Debug, Default)]
struct Store {
    sessions: Vec<SessionRecord>,
    tests: Vec<TestEvent>,
    /// Ids whose next update fails with the given message
    failures: HashMap<SessionId, String>,
    update_calls: usize,
}

/// [`SessionRepository`] backed by a vector behind a tokio `RwLock`.
///
/// Clones share the same store, so a test can keep a handle while the
/// application owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    store: Arc<RwLock<Store>>,
    latency: Option<Duration>,
}

impl InMemorySessionRepository {
    pub fn new(sessions: Vec<SessionRecord>) -> Self {
        Self::with_tests(sessions, Vec::new())
    }

    pub fn with_tests(sessions: Vec<SessionRecord>, tests: Vec<TestEvent>) -> Self {
        Self {
            store: Arc::new(RwLock::new(Store {
                sessions,
                tests,
                ..Store::default()
            })),
            latency: None,
        }
    }

    /// Repository seeded with the demo day
    pub fn demo() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::with_tests(crate::demo::demo_sessions(today), crate::demo::demo_tests(today))
    }

    /// Delay every call, to make in-flight states observable
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make the next update of `id` fail with `message`
    pub async fn fail_next_update(&self, id: SessionId, message: impl Into<String>) {
        self.store.write().await.failures.insert(id, message.into());
    }

    /// Remove one session, as if deleted by another user
    pub async fn remove_session(&self, id: SessionId) {
        self.store.write().await.sessions.retain(|s| s.id != id);
    }

    pub async fn session(&self, id: SessionId) -> Option<SessionRecord> {
        self.store
            .read()
            .await
            .sessions
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    /// Number of update calls received, successful or not
    pub async fn update_calls(&self) -> usize {
        self.store.read().await.update_calls
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn fetch_sessions(&self) -> Result<Vec<SessionRecord>> {
        self.simulate_latency().await;
        Ok(self.store.read().await.sessions.clone())
    }

    async fn update_session_status(&self, id: SessionId, status: &str) -> Result<SessionRecord> {
        self.simulate_latency().await;

        let mut store = self.store.write().await;
        store.update_calls += 1;

        if let Some(message) = store.failures.remove(&id) {
            warn!("Injected update failure for session {}: {}", id, message);
            return Err(Error::api(message));
        }

        let session = store
            .sessions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::session_not_found(id))?;
        session.session_status = status.to_string();
        debug!("Session {} -> {}", id, status);

        Ok(session.clone())
    }

    async fn fetch_upcoming_tests(&self) -> Result<Vec<TestEvent>> {
        self.simulate_latency().await;
        Ok(self.store.read().await.tests.clone())
    }
}
