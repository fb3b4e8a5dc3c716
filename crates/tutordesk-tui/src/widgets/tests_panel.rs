//! Upcoming school tests

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tutordesk_app::{AppState, FocusSection};

use crate::theme::styles;

pub struct TestsPanel<'a> {
    state: &'a AppState,
}

impl<'a> TestsPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for TestsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus.is_focused(FocusSection::Tests);
        let block = styles::panel_block("Upcoming tests", focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.state.tests.is_empty() {
            Paragraph::new(Span::styled("No upcoming tests", styles::text_muted()))
                .render(inner, buf);
            return;
        }

        let lines: Vec<Line> = self
            .state
            .tests
            .iter()
            .enumerate()
            .map(|(i, test)| {
                let line = Line::from(vec![
                    Span::styled(
                        test.test_date.format("%a %d %b").to_string(),
                        styles::accent(),
                    ),
                    Span::styled(
                        format!("  {} {}", test.school, test.grade),
                        styles::text_secondary(),
                    ),
                    Span::styled(format!("  {}", test.title), styles::text_primary()),
                ]);
                if focused && i == self.state.tests_cursor {
                    line.style(styles::focused_selected())
                } else {
                    line
                }
            })
            .collect();

        let offset = (self.state.tests_cursor + 1).saturating_sub(inner.height as usize);
        Paragraph::new(lines)
            .scroll((offset.min(u16::MAX as usize) as u16, 0))
            .render(inner, buf);
    }
}
