//! Status bar widget
//!
//! Displays the connection phase, the current notification and the key hints
//! for the focused section.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tutordesk_app::{AppState, FocusSection};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn phase_span(&self) -> Span<'static> {
        let (icon, label, style) = if self.state.load_error.is_some() {
            styles::phase_indicator_offline()
        } else {
            styles::phase_indicator(self.state.phase)
        };
        Span::styled(format!(" {icon} {label}"), style)
    }

    /// `(key, action)` pairs for the focused section
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.focus.current() {
            FocusSection::Sessions => &[
                ("j/k", "move"),
                ("space", "select"),
                ("1-5", "mark"),
                ("enter", "detail"),
                ("r", "refresh"),
                ("q", "quit"),
            ],
            FocusSection::Detail => &[("1-5", "mark"), ("esc", "close")],
            FocusSection::Command => &[("enter", "run"), ("esc", "cancel")],
            FocusSection::Tests | FocusSection::Activity => {
                &[("j/k", "scroll"), ("tab", "next"), ("q", "quit")]
            }
            FocusSection::Distribution => &[("h/l", "move"), ("tab", "next"), ("q", "quit")],
        }
    }

    fn hints_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (key, action) in self.hints() {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}  "), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut left = vec![self.phase_span()];
        if let Some(note) = self.state.notifications.current() {
            let (icon, style) = styles::notification_indicator(note.level);
            left.push(Span::styled(" │ ", styles::border_inactive()));
            left.push(Span::styled(format!("{icon} {}", note.text), style));
        }

        let hints = self.hints_line();
        let hints_width = (hints.width() as u16).min(area.width - area.width / 3);
        let [left_area, right_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).areas(area);

        Paragraph::new(Line::from(left)).render(left_area, buf);
        Paragraph::new(hints)
            .alignment(Alignment::Right)
            .render(right_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_loaded_state, create_test_state, TestTerminal};
    use tutordesk_app::NotificationLevel;

    #[test]
    fn test_phase_and_hints() {
        let mut term = TestTerminal::with_size(120, 1);
        let state = create_loaded_state();
        term.render_widget(StatusBar::new(&state), term.area());
        assert!(term.buffer_contains("Live"));
        assert!(term.buffer_contains("enter detail"));
    }

    #[test]
    fn test_shows_current_notification() {
        let mut term = TestTerminal::with_size(120, 1);
        let mut state = create_loaded_state();
        state
            .notifications
            .publish(NotificationLevel::Success, "Ho Ka Yan marked Attended");

        term.render_widget(StatusBar::new(&state), term.area());
        assert!(term.buffer_contains("Ho Ka Yan marked Attended"));
    }

    #[test]
    fn test_offline_after_load_error() {
        let mut term = TestTerminal::with_size(120, 1);
        let mut state = create_test_state();
        state.load_error = Some("timeout".into());
        term.render_widget(StatusBar::new(&state), term.area());
        assert!(term.buffer_contains("Offline"));
    }

    #[test]
    fn test_hints_follow_focus() {
        let mut term = TestTerminal::with_size(120, 1);
        let mut state = create_loaded_state();
        state.focus.enter_detail();
        term.render_widget(StatusBar::new(&state), term.area());
        assert!(term.buffer_contains("esc close"));
        assert!(!term.buffer_contains("space select"));
    }
}
