//! Activity feed: notification history, most recent first

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tutordesk_app::{AppState, FocusSection};

use crate::theme::styles;

pub struct ActivityFeed<'a> {
    state: &'a AppState,
}

impl<'a> ActivityFeed<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for ActivityFeed<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus.is_focused(FocusSection::Activity);
        let block = styles::panel_block("Activity", focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let notifications = &self.state.notifications;
        if notifications.history_len() == 0 {
            Paragraph::new(Span::styled("No activity yet", styles::text_muted()))
                .render(inner, buf);
            return;
        }

        let lines: Vec<Line> = notifications
            .history()
            .skip(self.state.activity_scroll)
            .take(inner.height as usize)
            .map(|note| {
                let (icon, style) = styles::notification_indicator(note.level);
                Line::from(vec![
                    Span::styled(
                        note.created_at.format("%H:%M:%S ").to_string(),
                        styles::text_muted(),
                    ),
                    Span::styled(format!("{icon} "), style),
                    Span::styled(note.text.clone(), styles::text_primary()),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
