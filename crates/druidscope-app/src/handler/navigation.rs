//! View, card selection and scroll handlers

use crate::state::AppState;

use super::UpdateResult;

/// Rows moved by a single line-scroll key.
const SCROLL_LINES: u16 = 1;

pub fn handle_next_view(state: &mut AppState) -> UpdateResult {
    state.select_view(state.active_view.next());
    UpdateResult::none()
}

pub fn handle_previous_view(state: &mut AppState) -> UpdateResult {
    state.select_view(state.active_view.previous());
    UpdateResult::none()
}

pub fn handle_select_first_card(state: &mut AppState) -> UpdateResult {
    state.select_card(0);
    UpdateResult::none()
}

pub fn handle_select_last_card(state: &mut AppState) -> UpdateResult {
    state.select_card(state.card_count().saturating_sub(1));
    UpdateResult::none()
}

pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    state.viewport.scroll_up(SCROLL_LINES);
    UpdateResult::none()
}

pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    state.viewport.scroll_down(SCROLL_LINES);
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.viewport.page_up();
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.viewport.page_down();
    UpdateResult::none()
}

/// The popover clamps the offset against its content when it renders.
pub fn handle_detail_scroll_down(state: &mut AppState) -> UpdateResult {
    state.detail_scroll = state.detail_scroll.saturating_add(SCROLL_LINES);
    UpdateResult::none()
}

pub fn handle_detail_scroll_up(state: &mut AppState) -> UpdateResult {
    state.detail_scroll = state.detail_scroll.saturating_sub(SCROLL_LINES);
    UpdateResult::none()
}
