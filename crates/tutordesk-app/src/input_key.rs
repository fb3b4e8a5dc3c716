//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary so
//! that key dispatch and its tests never touch crossterm types.

/// Keyboard input as seen by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (letters, digits, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, ...)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

impl InputKey {
    /// The digit of a plain number key, if any
    pub fn digit(self) -> Option<char> {
        match self {
            InputKey::Char(c) if c.is_ascii_digit() => Some(c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_char_differs_from_plain_char() {
        assert_eq!(InputKey::CharCtrl('c'), InputKey::CharCtrl('c'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }

    #[test]
    fn test_digit() {
        assert_eq!(InputKey::Char('3').digit(), Some('3'));
        assert_eq!(InputKey::Char('x').digit(), None);
        assert_eq!(InputKey::CharCtrl('1').digit(), None);
        assert_eq!(InputKey::Enter.digit(), None);
    }
}
