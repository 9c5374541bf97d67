//! Main render/view function (View in TEA pattern)


use druidscope_app::state::{AppState, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::{icons::IconSet, palette};
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Only the viewport (content height, card positions, clamped offset) and
/// the popover scroll offset are written back; both depend on the terminal
/// size, which only the renderer knows.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    let spinner = state.reveal.spinner_frame(icons.spinner_frames());
    frame.render_widget(
        widgets::MainHeader::new(state.active_view, icons).spinner_frame(spinner),
        areas.header,
    );
    frame.render_widget(widgets::ViewHeading::new(state.active_view), areas.heading);

    let canvas = widgets::ViewCanvas::new(
        state.diagram(),
        &state.reveal,
        &state.settings,
        state.selected_card,
    );
    frame.render_stateful_widget(canvas, areas.canvas, &mut state.viewport);

    if areas.footer.height > 0 {
        frame.render_widget(widgets::FooterStats::new(icons), areas.footer);
    }
    frame.render_widget(widgets::StatusBar::new(state), areas.status_bar);

    // Overlays go last so they sit on top of everything
    match state.ui_mode {
        UiMode::Normal => {}
        UiMode::Details => {
            if let Some(record) = state.selected_record() {
                let popover = widgets::DetailPopover::new(record, state.status_for(record), icons);
                frame.render_stateful_widget(popover, area, &mut state.detail_scroll);
            }
        }
        UiMode::Help => frame.render_widget(widgets::HelpOverlay::new(icons), area),
    }
}
