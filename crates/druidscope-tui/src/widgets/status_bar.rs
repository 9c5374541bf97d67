//! Status bar widget
//!
//! Shows the current notice when there is one, otherwise the key hints for
//! the active mode, with the card position on the right.

use druidscope_app::state::{AppState, NoticeLevel, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.state.ui_mode {
            UiMode::Normal => vec![
                ("1-4", "view"),
                ("j/k", "card"),
                ("Enter", "details"),
                ("o", "docs"),
                ("PgUp/PgDn", "scroll"),
                ("?", "help"),
                ("q", "quit"),
            ],
            UiMode::Details => vec![
                ("Esc", "close"),
                ("↑/↓", "scroll"),
                ("o", "docs"),
            ],
            UiMode::Help => vec![("?/Esc", "close")],
        }
    }

    fn left(&self) -> Line<'static> {
        if let Some(notice) = &self.state.notice {
            let style = match notice.level {
                NoticeLevel::Info => styles::accent(),
                NoticeLevel::Error => Style::default()
                    .fg(palette::STATUS_RED)
                    .add_modifier(Modifier::BOLD),
            };
            return Line::from(vec![Span::raw(" "), Span::styled(notice.text.clone(), style)]);
        }

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}"), styles::text_muted()));
        }
        Line::from(spans)
    }

    fn right(&self) -> Line<'static> {
        let count = self.state.card_count();
        let position = if count == 0 {
            0
        } else {
            self.state.selected_card + 1
        };
        Line::from(vec![
            Span::styled(self.state.active_view.label(), styles::text_secondary()),
            Span::styled(" · ", styles::text_muted()),
            Span::styled(format!("card {position}/{count}"), styles::text_secondary()),
            Span::raw(" "),
        ])
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, Style::default().bg(palette::CARD_BG));

        let right = self.right();
        let right_width = (right.width() as u16).min(area.width);
        let left_width = area.width.saturating_sub(right_width + 1);
        buf.set_line(area.x, area.y, &self.left(), left_width);
        if right_width + 1 < area.width {
            buf.set_line(area.right() - right_width, area.y, &right, right_width);
        }
    }
}
