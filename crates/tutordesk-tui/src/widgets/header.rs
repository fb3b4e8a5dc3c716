//! Header bar: title, day and the session stats

use chrono::Local;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tutordesk_app::AppState;

use crate::theme::{palette, styles};

pub struct Header<'a> {
    state: &'a AppState,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Date of the loaded snapshot, falling back to today
    fn day_label(&self) -> String {
        self.state
            .grouped
            .flat
            .iter()
            .find_map(|s| s.session_date)
            .map(|d| d.format("%a %d %b %Y").to_string())
            .unwrap_or_else(|| Local::now().format("%a %d %b %Y").to_string())
    }

    fn stat(label: &'static str, value: usize, style: Style) -> [Span<'static>; 2] {
        [
            Span::styled(format!("{label} "), styles::text_muted()),
            Span::styled(value.to_string(), style),
        ]
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let stats = self.state.grouped.stats;
        let separator = Span::styled(" │ ", styles::border_inactive());

        let mut spans = vec![
            Span::styled(" Tutordesk", styles::accent_bold()),
            Span::styled(format!("  {}", self.day_label()), styles::text_secondary()),
            separator.clone(),
        ];
        spans.extend(Self::stat("Total", stats.total, styles::text_primary()));
        spans.push(separator.clone());
        spans.extend(Self::stat(
            "Completed",
            stats.completed,
            Style::default().fg(palette::STATUS_GREEN),
        ));
        spans.push(separator.clone());
        spans.extend(Self::stat("Upcoming", stats.upcoming, styles::accent()));
        spans.push(separator.clone());
        spans.extend(Self::stat(
            "Cancelled",
            stats.cancelled,
            Style::default().fg(palette::STATUS_RED),
        ));

        let selected = self.state.selection.selected_count();
        if selected > 0 {
            spans.push(separator.clone());
            spans.push(Span::styled(
                format!("{selected} selected"),
                Style::default().fg(palette::SELECTION_MARK),
            ));
        }

        let busy = self.state.busy.len();
        if busy > 0 {
            spans.push(separator);
            spans.push(Span::styled(
                format!("⟳ {busy} updating"),
                Style::default().fg(palette::BUSY),
            ));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
