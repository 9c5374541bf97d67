//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, NoticeLevel, UiMode};

use super::{keys::handle_key, navigation, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            tracing::info!("Quit requested");
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // View Selection
        // ─────────────────────────────────────────────────────────
        Message::SelectView(mode) => {
            state.select_view(mode);
            UpdateResult::none()
        }
        Message::NextView => navigation::handle_next_view(state),
        Message::PreviousView => navigation::handle_previous_view(state),

        // ─────────────────────────────────────────────────────────
        // Card Selection
        // ─────────────────────────────────────────────────────────
        Message::SelectNextCard => {
            state.select_next_card();
            UpdateResult::none()
        }
        Message::SelectPreviousCard => {
            state.select_previous_card();
            UpdateResult::none()
        }
        Message::SelectFirstCard => navigation::handle_select_first_card(state),
        Message::SelectLastCard => navigation::handle_select_last_card(state),

        // ─────────────────────────────────────────────────────────
        // Detail Popover
        // ─────────────────────────────────────────────────────────
        Message::OpenDetails => {
            state.open_details();
            UpdateResult::none()
        }
        Message::CloseDetails => {
            state.close_details();
            UpdateResult::none()
        }
        Message::DetailScrollUp => navigation::handle_detail_scroll_up(state),
        Message::DetailScrollDown => navigation::handle_detail_scroll_down(state),

        // ─────────────────────────────────────────────────────────
        // Diagram Scrolling
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => navigation::handle_scroll_up(state),
        Message::ScrollDown => navigation::handle_scroll_down(state),
        Message::PageUp => navigation::handle_page_up(state),
        Message::PageDown => navigation::handle_page_down(state),

        // ─────────────────────────────────────────────────────────
        // Documentation Links
        // ─────────────────────────────────────────────────────────
        Message::OpenDocs => handle_open_docs(state),

        Message::DocsOpenFailed { url, error } => {
            tracing::warn!("Failed to open {}: {}", url, error);
            state.set_notice(error, NoticeLevel::Error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Display Toggles
        // ─────────────────────────────────────────────────────────
        Message::ToggleHelp => {
            state.toggle_help();
            UpdateResult::none()
        }

        Message::ToggleIcons => {
            let icons = state.settings.ui.icons.toggled();
            state.settings.ui.icons = icons;
            state.set_notice(format!("Icons: {}", icons), NoticeLevel::Info);
            UpdateResult::none()
        }

        Message::ToggleAnimations => {
            let enabled = !state.settings.ui.animations;
            state.settings.ui.animations = enabled;
            state.reveal.set_enabled(enabled);
            if enabled {
                state.reveal.restart();
            }
            let label = if enabled { "on" } else { "off" };
            state.set_notice(format!("Animations {}", label), NoticeLevel::Info);
            UpdateResult::none()
        }
    }
}

fn handle_open_docs(state: &mut AppState) -> UpdateResult {
    if !matches!(state.ui_mode, UiMode::Normal | UiMode::Details) {
        return UpdateResult::none();
    }
    let Some(record) = state.selected_record() else {
        return UpdateResult::none();
    };

    match record.docs_url {
        Some(url) => {
            tracing::debug!("Opening documentation for {}: {}", record.title, url);
            state.set_notice(format!("Opening {}", url), NoticeLevel::Info);
            UpdateResult::action(UpdateAction::OpenUrl {
                url: url.to_string(),
                browser: state.settings.behavior.browser.clone(),
            })
        }
        None => {
            state.set_notice(
                format!("No documentation link for {}", record.title),
                NoticeLevel::Info,
            );
            UpdateResult::none()
        }
    }
}
