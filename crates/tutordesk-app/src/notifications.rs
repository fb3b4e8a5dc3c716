//! Notification bus for transient status messages
//!
//! Owned by [`crate::state::AppState`]. Each published message gets its own
//! id, and the scheduled clear for it carries that id: dismissing an id that
//! is no longer current does nothing, so an older timer can never clear a
//! newer message. Every message is also kept in a bounded history that backs
//! the activity feed.

use std::collections::VecDeque;
use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::sync::broadcast;

pub type NotificationId = u64;

/// Default time a message stays in the status bar
pub const DEFAULT_TTL: Duration = Duration::from_millis(4000);

/// Default number of messages kept for the activity feed
pub const DEFAULT_HISTORY: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub level: NotificationLevel,
    pub text: String,
    pub created_at: DateTime<Local>,
}

/// Receiving end of a bus subscription; dropping it unsubscribes
#[derive(Debug)]
pub struct Subscription {
    rx: broadcast::Receiver<Notification>,
}

impl Subscription {
    pub async fn recv(&mut self) -> Option<Notification> {
        loop {
            match self.rx.recv().await {
                Ok(notification) => return Some(notification),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    pub fn try_recv(&mut self) -> Option<Notification> {
        loop {
            match self.rx.try_recv() {
                Ok(notification) => return Some(notification),
                Err(broadcast::error::TryRecvError::Lagged(_)) => continue,
                Err(_) => return None,
            }
        }
    }
}

#[derive(Debug)]
pub struct NotificationBus {
    next_id: NotificationId,
    current: Option<Notification>,
    history: VecDeque<Notification>,
    capacity: usize,
    ttl: Duration,
    tx: broadcast::Sender<Notification>,
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new(DEFAULT_TTL, DEFAULT_HISTORY)
    }
}

impl NotificationBus {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(64);
        Self {
            next_id: 1,
            current: None,
            history: VecDeque::new(),
            capacity: capacity.max(1),
            ttl,
            tx,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Show a message, replacing the current one. Returns its id.
    pub fn publish(&mut self, level: NotificationLevel, text: impl Into<String>) -> NotificationId {
        let id = self.next_id;
        self.next_id += 1;

        let notification = Notification {
            id,
            level,
            text: text.into(),
            created_at: Local::now(),
        };

        self.history.push_front(notification.clone());
        self.history.truncate(self.capacity);
        self.current = Some(notification.clone());

        // No subscribers is fine
        let _ = self.tx.send(notification);
        id
    }

    /// Clear the current message if it is still `id`. Returns whether it was.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Most recent first
    pub fn history(&self) -> impl ExactSizeIterator<Item = &Notification> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn subscribe(&self) -> Subscription {
        Subscription {
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
