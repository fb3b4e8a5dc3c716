//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use tutordesk_app::{AppPhase, NotificationLevel};
use tutordesk_core::StatusColor;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Selection styles ---

/// "Black on Cyan" - cursor row of the focused list
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Cursor row of a list that does not have focus
pub fn unfocused_selected() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

/// Bordered panel with a title that picks up the focus color
pub fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let title_style = if focused { accent_bold() } else { text_secondary() };
    glass_block(focused).title(ratatui::text::Span::styled(format!(" {title} "), title_style))
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Status mapping ---

/// Style for a session status color class
pub fn status_style(color: StatusColor) -> Style {
    let fg = match color {
        StatusColor::Success => palette::STATUS_GREEN,
        StatusColor::Error => palette::STATUS_RED,
        StatusColor::Warning => palette::STATUS_YELLOW,
        StatusColor::Accent => palette::ACCENT,
        StatusColor::Dim => palette::TEXT_MUTED,
    };
    Style::default().fg(fg)
}

/// Icon and style for a notification level
pub fn notification_indicator(level: NotificationLevel) -> (&'static str, Style) {
    match level {
        NotificationLevel::Info => ("ℹ", Style::default().fg(palette::STATUS_BLUE)),
        NotificationLevel::Success => ("✓", Style::default().fg(palette::STATUS_GREEN)),
        NotificationLevel::Warning => ("!", Style::default().fg(palette::STATUS_YELLOW)),
        NotificationLevel::Error => (
            "✗",
            Style::default()
                .fg(palette::STATUS_RED)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

/// Phase indicator for the status bar.
///
/// Returns `(icon_char, label, Style)` for the given AppPhase.
pub fn phase_indicator(phase: AppPhase) -> (&'static str, &'static str, Style) {
    match phase {
        AppPhase::Loading => ("○", "Loading", Style::default().fg(palette::TEXT_MUTED)),
        AppPhase::Running => (
            "●",
            "Live",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        AppPhase::Quitting => ("✗", "Quitting", Style::default().fg(palette::STATUS_RED)),
    }
}

/// Indicator shown instead of the phase while the last fetch failed
pub fn phase_indicator_offline() -> (&'static str, &'static str, Style) {
    (
        "○",
        "Offline",
        Style::default()
            .fg(palette::STATUS_RED)
            .add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BORDER_ACTIVE));
    }

    #[test]
    fn test_focused_selected_uses_black_on_cyan() {
        let style = focused_selected();
        assert_eq!(style.fg, Some(palette::CONTRAST_FG));
        assert_eq!(style.bg, Some(palette::ACCENT));
    }

    #[test]
    fn test_status_style_per_color_class() {
        assert_eq!(
            status_style(StatusColor::Success).fg,
            Some(palette::STATUS_GREEN)
        );
        assert_eq!(status_style(StatusColor::Error).fg, Some(palette::STATUS_RED));
        assert_eq!(
            status_style(StatusColor::Warning).fg,
            Some(palette::STATUS_YELLOW)
        );
        assert_eq!(status_style(StatusColor::Accent).fg, Some(palette::ACCENT));
        assert_eq!(status_style(StatusColor::Dim).fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_error_notifications_are_bold() {
        let (icon, style) = notification_indicator(NotificationLevel::Error);
        assert_eq!(icon, "✗");
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_phase_indicator_all_phases_covered() {
        for phase in [AppPhase::Loading, AppPhase::Running, AppPhase::Quitting] {
            let (icon, label, _style) = phase_indicator(phase);
            assert!(!icon.is_empty());
            assert!(!label.is_empty());
        }
        assert_eq!(phase_indicator(AppPhase::Running).1, "Live");
    }
}
