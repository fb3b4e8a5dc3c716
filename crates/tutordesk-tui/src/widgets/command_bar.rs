//! Command bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tutordesk_app::{AppState, FocusSection};

use crate::theme::{palette, styles};

pub struct CommandBar<'a> {
    state: &'a AppState,
}

impl<'a> CommandBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus.is_focused(FocusSection::Command);
        let block = styles::glass_block(focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = if focused {
            Line::from(vec![
                Span::styled(":", styles::accent_bold()),
                Span::styled(self.state.command_input.clone(), styles::text_primary()),
                Span::styled(
                    " ",
                    Style::default()
                        .bg(palette::ACCENT)
                        .add_modifier(Modifier::SLOW_BLINK),
                ),
            ])
        } else {
            Line::from(vec![
                Span::styled(":", styles::keybinding()),
                Span::styled(
                    " command  (refresh, select all, select actionable, clear, quit)",
                    styles::text_muted(),
                ),
            ])
        };

        Paragraph::new(line).render(inner, buf);
    }
}
