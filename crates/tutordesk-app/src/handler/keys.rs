//! Key dispatch
//!
//! The one place keys are routed: the focused section decides which handler
//! sees the key, and no other handler does.

use crate::focus::FocusSection;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::quick_actions;
use crate::state::AppState;

/// Convert a key event to a message based on the focused section
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.focus.current() {
        FocusSection::Detail => handle_key_detail(key),
        FocusSection::Command => handle_key_command(key),
        section => handle_key_global(key).or_else(|| match section {
            FocusSection::Sessions => handle_key_sessions(key),
            FocusSection::Tests => handle_key_tests(key),
            FocusSection::Activity => handle_key_activity(key),
            FocusSection::Distribution => handle_key_distribution(key),
            FocusSection::Command | FocusSection::Detail => None,
        }),
    }
}

/// Keys shared by every cyclic section except the command bar
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrev),
        InputKey::Char(':') => Some(Message::FocusSection(FocusSection::Command)),
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char('r') => Some(Message::RefreshRequested),
        _ => None,
    }
}

/// The overlay consumes every key, including Tab, so nothing leaks to the
/// cyclic sections
fn handle_key_detail(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('q') => Some(Message::CloseDetail),
        InputKey::Char(c) => {
            quick_actions::lookup(c, FocusSection::Detail).map(|spec| Message::QuickAction(spec.action))
        }
        _ => None,
    }
}

fn handle_key_command(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CommandCancel),
        InputKey::Enter => Some(Message::CommandSubmit),
        InputKey::Backspace => Some(Message::CommandBackspace),
        InputKey::CharCtrl('u') => Some(Message::CommandClear),
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrev),
        InputKey::Char(c) => Some(Message::CommandInput(c)),
        _ => None,
    }
}

fn handle_key_sessions(key: InputKey) -> Option<Message> {
    if let Some(digit) = key.digit() {
        return quick_actions::lookup(digit, FocusSection::Sessions)
            .map(|spec| Message::QuickAction(spec.action));
    }

    match key {
        InputKey::Char('j') | InputKey::Down => Some(Message::CursorDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::CursorUp),
        InputKey::Char('g') | InputKey::Home => Some(Message::CursorFirst),
        InputKey::Char('G') | InputKey::End => Some(Message::CursorLast),
        InputKey::PageUp => Some(Message::CursorPageUp),
        InputKey::PageDown => Some(Message::CursorPageDown),

        InputKey::Char(' ') => Some(Message::ToggleSelect),
        InputKey::Char('a') => Some(Message::SelectActionable),
        InputKey::Char('A') => Some(Message::SelectAll),
        InputKey::Char('c') | InputKey::Esc => Some(Message::ClearSelection),

        InputKey::Enter => Some(Message::OpenDetail),
        _ => None,
    }
}

fn handle_key_tests(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('j') | InputKey::Down => Some(Message::TestsDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::TestsUp),
        _ => None,
    }
}

fn handle_key_activity(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('j') | InputKey::Down => Some(Message::ActivityDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::ActivityUp),
        _ => None,
    }
}

fn handle_key_distribution(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('h') | InputKey::Left | InputKey::Char('k') | InputKey::Up => {
            Some(Message::DistributionPrev)
        }
        InputKey::Char('l') | InputKey::Right | InputKey::Char('j') | InputKey::Down => {
            Some(Message::DistributionNext)
        }
        _ => None,
    }
}
