//! Helpers shared by the detail popover and the help overlay: placing a
//! modal, dimming what is behind it and giving it a drop shadow.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Margin kept between a modal and the edge of the screen.
pub const SCREEN_MARGIN: u16 = 2;

/// A `width` x `height` rect centered in `area`, shrunk to fit with
/// [`SCREEN_MARGIN`] to spare on every side where possible.
///
/// ```
/// use ratatui::layout::Rect;
/// use druidscope_tui::widgets::modal_overlay::centered_rect;
///
/// let modal = centered_rect(40, 10, Rect::new(0, 0, 80, 24));
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let max_w = area.width.saturating_sub(SCREEN_MARGIN * 2).max(area.width.min(1));
    let max_h = area.height.saturating_sub(SCREEN_MARGIN).max(area.height.min(1));
    let w = width.min(max_w);
    let h = height.min(max_h);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// Fade everything in `area` into the background.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let faded = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);
    buf.set_style(area.intersection(buf.area), faded);
}

/// One-cell shadow along the right and bottom edges of `modal`.
pub fn render_shadow(buf: &mut Buffer, modal: Rect) {
    let shadow = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let right = Rect::new(modal.right(), modal.y + 1, 1, modal.height);
    let bottom = Rect::new(modal.x + 1, modal.bottom(), modal.width, 1);
    for edge in [right, bottom] {
        let edge = edge.intersection(buf.area);
        if edge.is_empty() {
            continue;
        }
        for position in edge.positions() {
            if let Some(cell) = buf.cell_mut(position) {
                cell.set_char(' ').set_style(shadow);
            }
        }
    }
}

/// Dim the screen, draw the shadow and blank the modal's own cells.
pub fn prepare_modal(buf: &mut Buffer, screen: Rect, modal: Rect) {
    dim_background(buf, screen);
    render_shadow(buf, modal);
    Clear.render(modal, buf);
}
