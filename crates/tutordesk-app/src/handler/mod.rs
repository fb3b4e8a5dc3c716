//! Handler module - TEA update function and key dispatch
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: The single key dispatcher, routing on focus
//! - `command`: Command bar parsing

pub(crate) mod command;
pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::time::Duration;

use tutordesk_core::SessionId;

use crate::detail::Generation;
use crate::message::Message;
use crate::notifications::NotificationId;

// Re-export main entry points
pub use keys::handle_key;
pub use update::update;

/// One status change to send to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRequest {
    pub id: SessionId,
    pub status: String,
    /// Overlay opening that issued it; `None` from the session list
    pub generation: Option<Generation>,
}

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch the session snapshot in the background
    FetchSessions,

    /// Fetch upcoming tests in the background
    FetchTests,

    /// Send status updates, one background task per request
    UpdateStatuses { requests: Vec<StatusRequest> },

    /// Clear notification `id` after `after`
    ExpireNotification { id: NotificationId, after: Duration },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
