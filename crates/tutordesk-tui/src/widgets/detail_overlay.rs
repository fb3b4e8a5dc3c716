//! Detail overlay for one session, with the quick-action keys

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};
use tutordesk_app::{AppState, FocusSection, QUICK_ACTIONS};
use tutordesk_core::{is_markable, status_color, status_glyph, SessionRecord};

use super::modal_overlay::{centered_rect, dim_background, render_shadow};
use crate::theme::{palette, styles};

const MODAL_WIDTH: u16 = 80;
const MODAL_HEIGHT: u16 = 18;
const LABEL_WIDTH: usize = 14;

pub struct DetailOverlayView<'a> {
    state: &'a AppState,
}

impl<'a> DetailOverlayView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn field(label: &'static str, value: impl Into<String>) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<LABEL_WIDTH$}"), styles::text_muted()),
            Span::styled(value.into(), styles::text_primary()),
        ])
    }

    fn session_lines(session: &SessionRecord) -> Vec<Line<'static>> {
        let status_style = styles::status_style(status_color(&session.session_status));

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    session.student_name.clone(),
                    Style::default()
                        .fg(palette::TEXT_BRIGHT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  #{}", session.id), styles::text_muted()),
            ]),
            Line::from(vec![
                Span::styled(format!("{:<LABEL_WIDTH$}", "Status"), styles::text_muted()),
                Span::styled(
                    format!(
                        "{} {}",
                        status_glyph(&session.session_status),
                        session.session_status
                    ),
                    status_style,
                ),
            ]),
            Self::field("Time", session.time_slot_label()),
        ];

        if let Some(date) = session.session_date {
            lines.push(Self::field("Date", date.format("%a %d %b %Y").to_string()));
        }
        lines.push(Self::field("Tutor", session.tutor_name.clone()));
        lines.push(Self::field(
            "School",
            format!("{}  {}", session.school, session.grade_label()),
        ));
        lines.push(Self::field("Student ID", session.school_student_id.clone()));

        if let Some(id) = session.make_up_for_id {
            lines.push(Self::field("Make-up for", format!("#{id}")));
        }
        if let Some(id) = session.rescheduled_to_id {
            lines.push(Self::field("Make-up at", format!("#{id}")));
        }
        if let Some(notes) = session.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            lines.push(Self::field("Notes", notes.to_string()));
        }

        lines
    }

    fn action_lines(&self, session: &SessionRecord) -> Vec<Line<'static>> {
        let mut lines = vec![Line::default()];

        if is_markable(&session.session_status) {
            let mut spans = Vec::new();
            for spec in QUICK_ACTIONS
                .iter()
                .filter(|spec| spec.surfaces.contains(&FocusSection::Detail))
            {
                spans.push(Span::styled(format!("[{}]", spec.key), styles::keybinding()));
                spans.push(Span::styled(format!(" {}  ", spec.label), styles::text_secondary()));
            }
            lines.push(Line::from(spans));
        } else {
            lines.push(Line::from(Span::styled(
                "Quick actions are not available for this status",
                styles::text_muted(),
            )));
        }

        if let Some(overlay) = &self.state.detail {
            if overlay.pending {
                lines.push(Line::from(Span::styled(
                    "⟳ Updating…",
                    Style::default().fg(palette::BUSY),
                )));
            }
            if let Some(error) = &overlay.error {
                lines.push(Line::from(Span::styled(
                    format!("✗ {error}"),
                    Style::default().fg(palette::STATUS_RED),
                )));
                lines.push(Line::from(Span::styled(
                    "Press a number key to retry",
                    styles::text_muted(),
                )));
            }
        }

        lines.push(Line::from(vec![
            Span::styled("[Esc]", styles::keybinding()),
            Span::styled(" Close", styles::text_secondary()),
        ]));
        lines
    }
}

impl Widget for DetailOverlayView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.state.detail.is_none() {
            return;
        }

        dim_background(buf, area);
        let modal = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        Clear.render(modal, buf);
        render_shadow(buf, modal, area);

        let block = styles::modal_block(" Session ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        let lines = match self.state.detail_session() {
            Some(session) => {
                let mut lines = Self::session_lines(session);
                lines.extend(self.action_lines(session));
                lines
            }
            None => vec![Line::from(Span::styled(
                "Session is no longer available",
                styles::text_muted(),
            ))],
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
