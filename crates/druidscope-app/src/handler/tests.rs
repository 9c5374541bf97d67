//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, NoticeLevel, UiMode};
use druidscope_core::ViewMode;

/// Run a key through `handle_key` and `update` the way the event loop does.
fn press(state: &mut AppState, key: InputKey) -> UpdateResult {
    let mut result = update(state, Message::Key(key));
    while let Some(msg) = result.message.take() {
        result = update(state, msg);
    }
    result
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting() {
    let mut state = AppState::new();
    assert!(!state.should_quit());

    update(&mut state, Message::Quit);

    assert!(state.should_quit());
}

#[test]
fn test_q_and_escape_quit_in_normal_mode() {
    let state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::Quit));
    assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));
}

#[test]
fn test_ctrl_c_quits_from_every_mode() {
    let mut state = AppState::new();
    for mode in [UiMode::Normal, UiMode::Details, UiMode::Help] {
        state.ui_mode = mode;
        assert_eq!(
            handle_key(&state, InputKey::CharCtrl('c')),
            Some(Message::Quit),
            "mode {:?}",
            mode
        );
    }
}

// ─────────────────────────────────────────────────────────
// View Selection
// ─────────────────────────────────────────────────────────

#[test]
fn test_digit_keys_select_views() {
    let state = AppState::new();
    for (digit, mode) in ['1', '2', '3', '4'].into_iter().zip(ViewMode::ALL) {
        assert_eq!(
            handle_key(&state, InputKey::Char(digit)),
            Some(Message::SelectView(mode))
        );
    }
    assert_eq!(handle_key(&state, InputKey::Char('5')), None);
}

#[test]
fn test_tab_cycles_views_and_wraps() {
    let mut state = AppState::new();
    for expected in [
        ViewMode::DruidCluster,
        ViewMode::DataFlow,
        ViewMode::Deployment,
        ViewMode::Infrastructure,
    ] {
        press(&mut state, InputKey::Tab);
        assert_eq!(state.active_view, expected);
    }

    press(&mut state, InputKey::BackTab);
    assert_eq!(state.active_view, ViewMode::Deployment);
    press(&mut state, InputKey::Char('h'));
    assert_eq!(state.active_view, ViewMode::DataFlow);
    press(&mut state, InputKey::Right);
    assert_eq!(state.active_view, ViewMode::Deployment);
}

#[test]
fn test_switching_view_restarts_reveal_and_selection() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('j'));
    for _ in 0..30 {
        update(&mut state, Message::Tick);
    }

    press(&mut state, InputKey::Char('3'));

    assert_eq!(state.active_view, ViewMode::DataFlow);
    assert_eq!(state.selected_card, 0);
    assert_eq!(state.reveal.elapsed_ms(), 0);
}

#[test]
fn test_selecting_active_view_is_a_no_op() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('j'));
    press(&mut state, InputKey::Char('j'));
    for _ in 0..30 {
        update(&mut state, Message::Tick);
    }
    let before = state.clone();

    press(&mut state, InputKey::Char('1'));

    assert_eq!(state, before);
}

// ─────────────────────────────────────────────────────────
// Card Selection
// ─────────────────────────────────────────────────────────

#[test]
fn test_card_navigation_keys() {
    let mut state = AppState::new();
    let last = state.card_count() - 1;

    press(&mut state, InputKey::Down);
    assert_eq!(state.selected_card, 1);
    press(&mut state, InputKey::Char('k'));
    assert_eq!(state.selected_card, 0);
    press(&mut state, InputKey::Char('G'));
    assert_eq!(state.selected_card, last);
    press(&mut state, InputKey::Home);
    assert_eq!(state.selected_card, 0);
    press(&mut state, InputKey::End);
    assert_eq!(state.selected_card, last);
    press(&mut state, InputKey::Char('g'));
    assert_eq!(state.selected_card, 0);
}

#[test]
fn test_selection_wraps_around() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Up);
    assert_eq!(state.selected_card, state.card_count() - 1);
    press(&mut state, InputKey::Down);
    assert_eq!(state.selected_card, 0);
}

// ─────────────────────────────────────────────────────────
// Detail Popover
// ─────────────────────────────────────────────────────────

#[test]
fn test_enter_opens_and_escape_closes_details() {
    let mut state = AppState::new();

    press(&mut state, InputKey::Enter);
    assert_eq!(state.ui_mode, UiMode::Details);

    press(&mut state, InputKey::Esc);
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(!state.should_quit());

    press(&mut state, InputKey::Char(' '));
    assert_eq!(state.ui_mode, UiMode::Details);
    press(&mut state, InputKey::Char('q'));
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_detail_scroll_keys() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Enter);

    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Down);
    assert_eq!(state.detail_scroll, 2);
    press(&mut state, InputKey::Up);
    assert_eq!(state.detail_scroll, 1);
    press(&mut state, InputKey::Up);
    press(&mut state, InputKey::Up);
    assert_eq!(state.detail_scroll, 0);

    // Card selection is frozen while the popover is open
    assert_eq!(state.selected_card, 0);
}

#[test]
fn test_view_keys_ignored_in_details() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Enter);
    assert_eq!(handle_key(&state, InputKey::Char('2')), None);
    assert_eq!(handle_key(&state, InputKey::Tab), None);
}

// ─────────────────────────────────────────────────────────
// Documentation Links
// ─────────────────────────────────────────────────────────

#[test]
fn test_open_docs_emits_open_url_action() {
    let mut state = AppState::new();
    state.settings.behavior.browser = "firefox".to_string();

    let result = press(&mut state, InputKey::Char('o'));

    assert_eq!(
        result.action,
        Some(UpdateAction::OpenUrl {
            url: "https://docs.aws.amazon.com/vpc/latest/userguide/vpc-nat-gateway.html"
                .to_string(),
            browser: "firefox".to_string(),
        })
    );
}

#[test]
fn test_open_docs_from_details() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Enter);

    let result = press(&mut state, InputKey::Char('o'));

    assert!(matches!(result.action, Some(UpdateAction::OpenUrl { .. })));
    assert_eq!(state.ui_mode, UiMode::Details);
}

#[test]
fn test_open_docs_without_link_sets_notice() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('3'));

    let result = press(&mut state, InputKey::Char('o'));

    assert!(result.action.is_none());
    let notice = state.notice.expect("notice");
    assert_eq!(notice.level, NoticeLevel::Info);
    assert_eq!(notice.text, "No documentation link for Router");
}

#[test]
fn test_docs_open_failure_sets_error_notice() {
    let mut state = AppState::new();

    update(
        &mut state,
        Message::DocsOpenFailed {
            url: "https://druid.apache.org/docs/latest/".to_string(),
            error: "not found".to_string(),
        },
    );

    let notice = state.notice.expect("notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.text.contains("not found"));
}

// ─────────────────────────────────────────────────────────
// Scrolling
// ─────────────────────────────────────────────────────────

#[test]
fn test_scroll_keys_move_viewport() {
    let mut state = AppState::new();
    state.viewport.content_height = 200;
    state.viewport.viewport_height = 40;

    press(&mut state, InputKey::PageDown);
    assert_eq!(state.viewport.offset, 39);
    press(&mut state, InputKey::Char('J'));
    assert_eq!(state.viewport.offset, 40);
    press(&mut state, InputKey::Char('K'));
    assert_eq!(state.viewport.offset, 39);
    press(&mut state, InputKey::PageUp);
    assert_eq!(state.viewport.offset, 0);
    assert!(!state.viewport.follow_selection);
}

#[test]
fn test_scroll_clamps_to_content() {
    let mut state = AppState::new();
    state.viewport.content_height = 30;
    state.viewport.viewport_height = 25;

    for _ in 0..10 {
        press(&mut state, InputKey::Char('J'));
    }
    assert_eq!(state.viewport.offset, 5);
}

// ─────────────────────────────────────────────────────────
// Toggles and Help
// ─────────────────────────────────────────────────────────

#[test]
fn test_toggle_icons() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('i'));
    assert_eq!(state.settings.ui.icons, crate::config::IconMode::NerdFonts);
    press(&mut state, InputKey::Char('i'));
    assert_eq!(state.settings.ui.icons, crate::config::IconMode::Unicode);
}

#[test]
fn test_toggle_animations_reveals_everything() {
    let mut state = AppState::new();
    assert!(!state.reveal.is_revealed(1_000));

    press(&mut state, InputKey::Char('a'));
    assert!(!state.settings.ui.animations);
    assert!(state.reveal.is_revealed(1_000));

    press(&mut state, InputKey::Char('a'));
    assert!(state.settings.ui.animations);
    assert!(!state.reveal.is_revealed(1_000));
}

#[test]
fn test_help_overlay_open_and_close() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('?'));
    assert_eq!(state.ui_mode, UiMode::Help);

    // Navigation keys do nothing under the overlay
    assert_eq!(handle_key(&state, InputKey::Char('j')), None);

    press(&mut state, InputKey::Esc);
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(!state.should_quit());

    press(&mut state, InputKey::Char('?'));
    press(&mut state, InputKey::Char('q'));
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(!state.should_quit());
}

#[test]
fn test_tick_advances_reveal_clock() {
    let mut state = AppState::new();
    for _ in 0..4 {
        update(&mut state, Message::Tick);
    }
    assert_eq!(state.reveal.elapsed_ms(), 200);
}
