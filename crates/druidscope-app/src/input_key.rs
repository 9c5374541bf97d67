//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into `InputKey` at its boundary so
//! the state machine in this crate never depends on crossterm.

/// Abstract input key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
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
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// Digit keys `1`-`9` as a zero-based index.
    pub fn digit_index(self) -> Option<usize> {
        match self {
            InputKey::Char(c @ '1'..='9') => Some(c as usize - '1' as usize),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::Char('b'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }

    #[test]
    fn test_digit_index() {
        assert_eq!(InputKey::Char('1').digit_index(), Some(0));
        assert_eq!(InputKey::Char('4').digit_index(), Some(3));
        assert_eq!(InputKey::Char('0').digit_index(), None);
        assert_eq!(InputKey::F(1).digit_index(), None);
    }
}
