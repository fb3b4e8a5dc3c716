//! Session list widget
//!
//! Renders the grouped view: a header per time slot, a sub-header per tutor
//! block, then one row per session in flat order. Scrolls so the cursor row
//! stays visible.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tutordesk_app::{AppState, FocusSection};
use tutordesk_core::{status_color, status_glyph, SessionRecord, TimeSlotGroup, TutorBlock};

use crate::theme::{palette, styles};

const NAME_WIDTH: usize = 18;

pub struct SessionList<'a> {
    state: &'a AppState,
}

impl<'a> SessionList<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn focused(&self) -> bool {
        self.state.focus.is_focused(FocusSection::Sessions)
    }

    /// All list lines and the line index of the cursor row
    fn build_lines(&self) -> (Vec<Line<'a>>, Option<usize>) {
        let cursor = self.state.selection.cursor();
        let mut lines = Vec::new();
        let mut cursor_line = None;
        let mut index = 0;

        for group in &self.state.grouped.groups {
            lines.push(slot_header(group));

            let mut rows = group.sessions.iter();
            for block in &group.tutors {
                lines.push(tutor_header(block));
                for session in rows.by_ref().take(block.len) {
                    if index == cursor {
                        cursor_line = Some(lines.len());
                    }
                    lines.push(self.session_row(session, index == cursor));
                    index += 1;
                }
            }
        }

        (lines, cursor_line)
    }

    fn session_row(&self, session: &'a SessionRecord, at_cursor: bool) -> Line<'a> {
        let status_style = styles::status_style(status_color(&session.session_status));

        let mark = if self.state.selection.is_selected(session.id) {
            Span::styled("◆", Style::default().fg(palette::SELECTION_MARK))
        } else {
            Span::raw(" ")
        };

        let mut spans = vec![
            Span::raw("  "),
            mark,
            Span::raw(" "),
            Span::styled(status_glyph(&session.session_status).to_string(), status_style),
            Span::raw(" "),
            Span::styled(
                format!("{:<width$}", session.student_name, width = NAME_WIDTH),
                styles::text_primary(),
            ),
            Span::styled(
                format!(" {:<6}", session.school_student_id),
                styles::text_muted(),
            ),
            Span::styled(format!(" {:<4}", session.grade_label()), styles::text_secondary()),
            Span::styled(format!(" {}", session.session_status), status_style),
        ];

        if self.state.is_busy(session.id) {
            spans.push(Span::styled(
                "  ⟳ updating",
                Style::default()
                    .fg(palette::BUSY)
                    .add_modifier(Modifier::ITALIC),
            ));
        }

        let line = Line::from(spans);
        match (at_cursor, self.focused()) {
            (true, true) => line.style(styles::focused_selected()),
            (true, false) => line.style(styles::unfocused_selected()),
            _ => line,
        }
    }

    fn empty_message(&self) -> Line<'static> {
        if let Some(error) = &self.state.load_error {
            Line::from(Span::styled(
                format!("Could not load sessions: {error}"),
                Style::default().fg(palette::STATUS_RED),
            ))
        } else if self.state.fetch_in_flight {
            Line::from(Span::styled("Loading sessions…", styles::text_muted()))
        } else {
            Line::from(Span::styled("No sessions today", styles::text_muted()))
        }
    }
}

fn slot_header(group: &TimeSlotGroup) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {} ", group.time_slot),
            Style::default()
                .fg(palette::SLOT_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("({})", group.sessions.len()), styles::text_muted()),
    ])
}

fn tutor_header(block: &TutorBlock) -> Line<'static> {
    let name = if block.tutor_name.trim().is_empty() {
        "(no tutor)".to_string()
    } else {
        block.tutor_name.clone()
    };

    let mut spans = vec![Span::styled(
        format!("   {name}"),
        Style::default().fg(palette::TUTOR_HEADER),
    )];
    if let Some(group) = &block.main_group {
        spans.push(Span::styled(format!(" · {group}"), styles::text_muted()));
    }
    Line::from(spans)
}

impl Widget for SessionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!("Sessions ({})", self.state.grouped.len());
        let block = styles::panel_block(&title, self.focused());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.state.grouped.is_empty() {
            Paragraph::new(self.empty_message())
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        let (lines, cursor_line) = self.build_lines();
        let height = inner.height as usize;
        let offset = cursor_line
            .map(|line| (line + 1).saturating_sub(height))
            .unwrap_or(0);

        Paragraph::new(lines)
            .scroll((offset.min(u16::MAX as usize) as u16, 0))
            .render(inner, buf);
    }
}
