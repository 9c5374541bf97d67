//! View selector tabs

use druidscope_core::ViewMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use crate::theme::styles;

/// One tab per view, numbered by the key that selects it.
pub struct ViewTabs {
    active: ViewMode,
}

impl ViewTabs {
    pub fn new(active: ViewMode) -> Self {
        Self { active }
    }

    fn titles() -> Vec<Line<'static>> {
        ViewMode::ALL
            .into_iter()
            .map(|mode| {
                Line::from(vec![
                    Span::styled(format!(" {}", mode.index() + 1), styles::keybinding()),
                    Span::raw(format!(" {} ", mode.label())),
                ])
            })
            .collect()
    }
}

impl Widget for ViewTabs {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let padded = Rect {
            x: area.x + 1,
            width: area.width.saturating_sub(2),
            ..area
        };
        Tabs::new(Self::titles())
            .select(self.active.index())
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider("│")
            .padding("", "")
            .render(padded, buf);
    }
}
