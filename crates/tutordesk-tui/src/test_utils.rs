//! Test utilities for TUI rendering verification
//!
//! Provides helpers for testing widgets and full-screen rendering
//! using ratatui's TestBackend.
//!
//! # Example
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.render_widget(Header::new(&state), term.area());
//! assert!(term.buffer_contains("Tutordesk"));
//! ```

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;
use tutordesk_app::{AppPhase, AppState};
use tutordesk_core::SessionRecord;

/// Standard test terminal size (wide enough for the side panels)
pub const TEST_WIDTH: u16 = 120;
pub const TEST_HEIGHT: u16 = 32;

/// Compact terminal for testing responsive layouts
pub const COMPACT_WIDTH: u16 = 60;
pub const COMPACT_HEIGHT: u16 = 20;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a widget to the terminal
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draws a frame using a custom rendering function, e.g. `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Row index of the first line containing `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        let buffer = self.buffer();
        (0..buffer.area.height).find(|y| get_line_content(buffer, *y).contains(text))
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// A small day: two slots, two tutors, one cancellation and one unscheduled
pub fn test_sessions() -> Vec<SessionRecord> {
    vec![
        SessionRecord::new(1, "Scheduled")
            .with_time_slot("09:00 - 10:00")
            .with_tutor("Ms. Chan")
            .with_student("Ho Ka Yan", "1001")
            .with_school("SKH")
            .with_grade("F1", "E"),
        SessionRecord::new(2, "Cancelled")
            .with_time_slot("09:00 - 10:00")
            .with_tutor("Ms. Chan")
            .with_student("Lam Tsz", "1002")
            .with_school("SKH")
            .with_grade("F1", "E"),
        SessionRecord::new(3, "Attended")
            .with_time_slot("11:00 - 12:00")
            .with_tutor("Mr. Wong")
            .with_student("Lee Ming", "1003")
            .with_school("DBS")
            .with_grade("F2", "C"),
        SessionRecord::new(4, "Make-up Class")
            .with_tutor("Mr. Wong")
            .with_student("Yip Sum", "1004")
            .with_school("DBS")
            .with_grade("F3", "E"),
    ]
}

/// Create a minimal AppState for testing
pub fn create_test_state() -> AppState {
    AppState::new()
}

/// AppState with [`test_sessions`] loaded
pub fn create_loaded_state() -> AppState {
    let mut state = create_test_state();
    state.apply_snapshot(test_sessions());
    state.phase = AppPhase::Running;
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_contains_and_lines() {
        use ratatui::widgets::Paragraph;

        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello\nWorld"), term.area());

        assert!(term.buffer_contains("Hello"));
        assert!(term.line_contains(1, "World"));
        assert_eq!(term.find_line("World"), Some(1));
        assert_eq!(term.find_line("Goodbye"), None);
    }

    #[test]
    fn test_loaded_state_fixture() {
        let state = create_loaded_state();
        assert_eq!(state.grouped.len(), 4);
        assert_eq!(state.phase, AppPhase::Running);
    }
}
