//! Per-status bar chart of the current snapshot

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph, Widget},
};
use tutordesk_app::{AppState, FocusSection};
use tutordesk_core::{status_color, status_glyph};

use crate::theme::styles;

pub struct DistributionChart<'a> {
    state: &'a AppState,
}

impl<'a> DistributionChart<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// "Distribution · Scheduled: 5" for the highlighted bar
    fn title(&self) -> String {
        match self.state.distribution.get(self.state.distribution_cursor) {
            Some(entry) => format!("Distribution · {}: {}", entry.status, entry.count),
            None => "Distribution".to_string(),
        }
    }
}

impl Widget for DistributionChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus.is_focused(FocusSection::Distribution);
        let title = self.title();
        let block = styles::panel_block(&title, focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.state.distribution.is_empty() {
            Paragraph::new(Span::styled("No sessions", styles::text_muted())).render(inner, buf);
            return;
        }

        let bars: Vec<Bar> = self
            .state
            .distribution
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let mut style = styles::status_style(status_color(&entry.status));
                if focused && i == self.state.distribution_cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Bar::default()
                    .value(entry.count as u64)
                    .label(Line::from(status_glyph(&entry.status).to_string()))
                    .style(style)
                    .value_style(style.add_modifier(Modifier::BOLD | Modifier::REVERSED))
            })
            .collect();

        BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .bar_width(3)
            .bar_gap(1)
            .render(inner, buf);
    }
}
