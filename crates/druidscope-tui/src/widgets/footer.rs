//! Footer statistics strip

use druidscope_core::catalog::FOOTER_STATS;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::icons::{IconSet, IconSize};
use crate::theme::styles;

/// Centered row of headline numbers. Stats that do not fit are dropped from
/// the right.
pub struct FooterStats {
    icons: IconSet,
}

impl FooterStats {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }
}

impl Widget for FooterStats {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut width = 0u16;
        for stat in FOOTER_STATS {
            let mut item = Vec::new();
            if !spans.is_empty() {
                item.push(Span::styled("  │  ", styles::text_muted()));
            }
            item.extend(self.icons.spans(stat.icon, IconSize::Small));
            item.push(Span::raw(" "));
            item.push(Span::styled(stat.value, styles::accent_bold()));
            item.push(Span::raw(" "));
            item.push(Span::styled(stat.label, styles::text_muted()));

            let item_width = Line::from(item.clone()).width() as u16;
            if width + item_width > area.width {
                break;
            }
            width += item_width;
            spans.extend(item);
        }

        let x = area.x + (area.width - width) / 2;
        buf.set_line(x, area.y, &Line::from(spans), width);
    }
}
