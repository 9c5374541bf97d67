//! Layer bands and dashed group containers.
//!
//! Both are frames only: the canvas paints their contents first and then
//! draws the frame around them, so a frame never clears what is inside.

use druidscope_core::{Group, Layer};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

use super::text;

/// Rows above a layer's contents: border, title, subtitle.
pub const LAYER_HEADER_ROWS: u16 = 3;
/// Rows below a layer's contents.
pub const LAYER_FOOTER_ROWS: u16 = 1;
/// Horizontal inset of a layer's contents from its outer edge.
pub const LAYER_INSET: u16 = 2;

/// Rows above a group's contents: border and one blank line.
pub const GROUP_HEADER_ROWS: u16 = 2;
pub const GROUP_FOOTER_ROWS: u16 = 2;
pub const GROUP_INSET: u16 = 2;

/// Tone-colored band with a title and subtitle.
pub struct LayerBlock<'a> {
    layer: &'a Layer,
    revealed: bool,
}

impl<'a> LayerBlock<'a> {
    pub fn new(layer: &'a Layer) -> Self {
        Self {
            layer,
            revealed: true,
        }
    }

    pub fn revealed(mut self, revealed: bool) -> Self {
        self.revealed = revealed;
        self
    }
}

impl Widget for LayerBlock<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.revealed {
            styles::layer_block(self.layer.tone)
                .border_style(styles::border_placeholder())
                .render(area, buf);
            return;
        }

        styles::layer_block(self.layer.tone).render(area, buf);

        let x = area.x + LAYER_INSET;
        let width = area.width.saturating_sub(LAYER_INSET * 2);
        if width == 0 || area.height < LAYER_HEADER_ROWS {
            return;
        }

        let title = Line::from(vec![
            Span::styled("▌ ", styles::tone(self.layer.tone)),
            Span::styled(
                text::truncate(self.layer.title, width.saturating_sub(2)),
                styles::tone_bold(self.layer.tone),
            ),
        ]);
        buf.set_line(x, area.y + 1, &title, width);
        buf.set_string(
            x + 2,
            area.y + 2,
            text::truncate(self.layer.subtitle, width.saturating_sub(2)),
            styles::text_muted(),
        );
    }
}

/// Dashed container with its label on the top border and an optional badge
/// on the right of it.
pub struct GroupFrame<'a> {
    group: &'a Group,
}

impl<'a> GroupFrame<'a> {
    pub fn new(group: &'a Group) -> Self {
        Self { group }
    }
}

impl Widget for GroupFrame<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = styles::group_block(self.group.tone).title(Line::from(Span::styled(
            format!(" {} ", self.group.label),
            styles::tone_bold(self.group.tone),
        )));
        if let Some(badge) = self.group.badge {
            block = block.title(
                Line::from(Span::styled(
                    format!(" {} ", badge),
                    styles::badge(self.group.tone),
                ))
                .right_aligned(),
            );
        }
        block.render(area, buf);
    }
}
