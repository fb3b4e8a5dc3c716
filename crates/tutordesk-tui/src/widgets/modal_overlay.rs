//! Shared modal overlay helpers: centering, dimming and drop shadow.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::theme::palette;

/// Center a fixed-size rect within `area`, clamped to the area dimensions.
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use tutordesk_tui::widgets::modal_overlay::centered_rect;
///
/// let modal = centered_rect(40, 10, Rect::new(0, 0, 80, 24));
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim every cell in `area` so the overlay stands out
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);
    set_style(buf, area, dim_style);
}

/// 1-cell shadow along the right and bottom edges of `modal`, clipped to `bounds`
pub fn render_shadow(buf: &mut Buffer, modal: Rect, bounds: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);

    let right = Rect::new(modal.right(), modal.y.saturating_add(1), 1, modal.height);
    let bottom = Rect::new(modal.x.saturating_add(1), modal.bottom(), modal.width, 1);

    set_style(buf, right.intersection(bounds), shadow_style);
    set_style(buf, bottom.intersection(bounds), shadow_style);
}

fn set_style(buf: &mut Buffer, area: Rect, style: Style) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(style);
            }
        }
    }
}
