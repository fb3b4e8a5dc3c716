//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use tutordesk_app::AppState;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it does not modify state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::Header::new(state), areas.header);
    frame.render_widget(widgets::SessionList::new(state), areas.sessions);

    if areas.has_side_panels() {
        frame.render_widget(widgets::TestsPanel::new(state), areas.tests);
        frame.render_widget(widgets::ActivityFeed::new(state), areas.activity);
        frame.render_widget(widgets::DistributionChart::new(state), areas.distribution);
    }

    frame.render_widget(widgets::CommandBar::new(state), areas.command);
    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    // Overlay last so it sits above every panel
    if state.detail.is_some() {
        frame.render_widget(widgets::DetailOverlayView::new(state), area);
    }
}
