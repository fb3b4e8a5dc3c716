//! Command bar parsing
//!
//! Only a handful of commands exist; everything else is reported as unknown.

use crate::message::Message;

/// Translate a submitted command line into a message.
/// Blank input gives `None`.
pub fn parse_command(input: &str) -> Option<Message> {
    let normalized = input.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();

    let message = match normalized.as_str() {
        "" => return None,
        "refresh" | "r" => Message::RefreshRequested,
        "quit" | "q" => Message::Quit,
        "select all" => Message::SelectAll,
        "select actionable" => Message::SelectActionable,
        "clear" => Message::ClearSelection,
        _ => Message::warning(format!("Unknown command: {}", input.trim())),
    };
    Some(message)
}
