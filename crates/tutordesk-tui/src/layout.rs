//! Screen layout definitions for the TUI
//!
//! The session list takes the left of the body; tests, activity and the
//! status distribution stack on the right. Narrow terminals drop the side
//! column and give the whole body to the session list.

use ratatui::layout::{Constraint, Layout, Rect};

/// Below this width the side column is hidden
pub const MIN_SIDE_PANEL_WIDTH: u16 = 90;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and day stats
    pub header: Rect,
    pub sessions: Rect,
    pub tests: Rect,
    pub activity: Rect,
    pub distribution: Rect,
    pub command: Rect,
    /// Single-row status line with the current notification
    pub status: Rect,
}

impl ScreenAreas {
    pub fn has_side_panels(&self) -> bool {
        !self.tests.is_empty()
    }
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, command, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    if area.width < MIN_SIDE_PANEL_WIDTH {
        return ScreenAreas {
            header,
            sessions: body,
            tests: Rect::default(),
            activity: Rect::default(),
            distribution: Rect::default(),
            command,
            status,
        };
    }

    let [sessions, side] =
        Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)]).areas(body);

    let [tests, activity, distribution] = Layout::vertical([
        Constraint::Percentage(30),
        Constraint::Percentage(35),
        Constraint::Percentage(35),
    ])
    .areas(side);

    ScreenAreas {
        header,
        sessions,
        tests,
        activity,
        distribution,
        command,
        status,
    }
}
