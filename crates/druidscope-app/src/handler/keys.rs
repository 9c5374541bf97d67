//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};
use druidscope_core::ViewMode;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(key),
        UiMode::Details => handle_key_details(key),
        UiMode::Help => handle_key_help(key),
    }
}

/// Handle key events on the diagram
fn handle_key_normal(key: InputKey) -> Option<Message> {
    if let Some(index) = key.digit_index() {
        return ViewMode::from_index(index).map(Message::SelectView);
    }

    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        // View tabs
        InputKey::Tab | InputKey::Char('l') | InputKey::Right => Some(Message::NextView),
        InputKey::BackTab | InputKey::Char('h') | InputKey::Left => Some(Message::PreviousView),

        // Card selection
        InputKey::Char('j') | InputKey::Down => Some(Message::SelectNextCard),
        InputKey::Char('k') | InputKey::Up => Some(Message::SelectPreviousCard),
        InputKey::Char('g') | InputKey::Home => Some(Message::SelectFirstCard),
        InputKey::Char('G') | InputKey::End => Some(Message::SelectLastCard),

        // Free scrolling, independent of the selection
        InputKey::Char('J') => Some(Message::ScrollDown),
        InputKey::Char('K') => Some(Message::ScrollUp),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        InputKey::Enter | InputKey::Char(' ') => Some(Message::OpenDetails),
        InputKey::Char('o') => Some(Message::OpenDocs),

        InputKey::Char('i') => Some(Message::ToggleIcons),
        InputKey::Char('a') => Some(Message::ToggleAnimations),
        InputKey::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Handle key events while the detail popover is open
fn handle_key_details(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter | InputKey::Char('q') => Some(Message::CloseDetails),
        InputKey::Up | InputKey::Char('k') => Some(Message::DetailScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::DetailScrollDown),
        InputKey::Char('o') => Some(Message::OpenDocs),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events on the help overlay
fn handle_key_help(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('?' | 'q') | InputKey::Esc => Some(Message::ToggleHelp),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
