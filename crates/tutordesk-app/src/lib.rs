//! tutordesk-app - Application state and orchestration for Tutordesk
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! session list: the model ([`AppState`]), messages, the `update` function,
//! the focus coordinator, cursor/selection state, the detail overlay, the
//! shared quick-action table, the notification bus and configuration loading.
//! It has no terminal library types; the TUI feeds it [`InputKey`]s.

pub mod actions;
pub mod config;
pub mod detail;
pub mod focus;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notifications;
pub mod process;
pub mod quick_actions;
pub mod selection;
pub mod signals;
pub mod state;

// Re-export primary types
pub use focus::{FocusCoordinator, FocusSection, FOCUS_CYCLE};
pub use handler::{StatusRequest, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use notifications::{Notification, NotificationBus, NotificationLevel};
pub use quick_actions::{QuickAction, QUICK_ACTIONS};
pub use state::{AppPhase, AppState};
