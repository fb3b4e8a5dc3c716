//! tutordesk-tui - Terminal UI for Tutordesk
//!
//! This crate provides the ratatui-based terminal interface. It owns the
//! terminal, converts crossterm key events into [`tutordesk_app::InputKey`]s,
//! renders [`tutordesk_app::AppState`] and drives the event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
