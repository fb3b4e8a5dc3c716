//! Message types for the application (TEA pattern)

use tutordesk_core::{SessionId, SessionRecord, TestEvent};

use crate::detail::Generation;
use crate::focus::FocusSection;
use crate::input_key::InputKey;
use crate::notifications::{NotificationId, NotificationLevel};
use crate::quick_actions::QuickAction;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Focus Messages
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    /// Focus a section directly
    FocusSection(FocusSection),

    // ─────────────────────────────────────────────────────────
    // Session List Messages
    // ─────────────────────────────────────────────────────────
    CursorUp,
    CursorDown,
    CursorPageUp,
    CursorPageDown,
    CursorFirst,
    CursorLast,
    /// Move the cursor to a flat index (clamped)
    CursorTo(usize),

    /// Toggle selection of the session under the cursor
    ToggleSelect,
    SelectAll,
    SelectActionable,
    ClearSelection,

    // ─────────────────────────────────────────────────────────
    // Detail Overlay & Quick Actions
    // ─────────────────────────────────────────────────────────
    /// Open the overlay for the session under the cursor
    OpenDetail,
    /// Close the overlay (Esc)
    CloseDetail,

    /// Apply a quick action on the focused surface
    QuickAction(QuickAction),

    /// Backend accepted a status change
    StatusUpdated {
        session: SessionRecord,
        /// Overlay opening that issued the request, if any
        generation: Option<Generation>,
    },

    /// Backend rejected a status change or could not be reached
    StatusUpdateFailed {
        id: SessionId,
        error: String,
        generation: Option<Generation>,
    },

    // ─────────────────────────────────────────────────────────
    // Data Loading Messages
    // ─────────────────────────────────────────────────────────
    /// Refetch sessions and tests
    RefreshRequested,
    RefreshTests,
    SessionsLoaded(Vec<SessionRecord>),
    SessionsLoadFailed { error: String },
    TestsLoaded(Vec<TestEvent>),
    TestsLoadFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Notification Messages
    // ─────────────────────────────────────────────────────────
    /// Publish a status-bar message
    Notify {
        level: NotificationLevel,
        text: String,
    },
    /// Scheduled clear of one message
    NotificationExpired { id: NotificationId },

    // ─────────────────────────────────────────────────────────
    // Side Panel Messages
    // ─────────────────────────────────────────────────────────
    TestsUp,
    TestsDown,
    ActivityUp,
    ActivityDown,
    DistributionPrev,
    DistributionNext,

    // ─────────────────────────────────────────────────────────
    // Command Bar Messages
    // ─────────────────────────────────────────────────────────
    CommandInput(char),
    CommandBackspace,
    CommandClear,
    CommandSubmit,
    CommandCancel,
}

impl Message {
    pub fn info(text: impl Into<String>) -> Self {
        Message::Notify {
            level: NotificationLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Message::Notify {
            level: NotificationLevel::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Message::Notify {
            level: NotificationLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Message::Notify {
            level: NotificationLevel::Error,
            text: text.into(),
        }
    }
}
