//! Key binding overlay

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use druidscope_core::catalog::LEGEND;

use crate::theme::icons::IconSet;
use crate::theme::styles;

use super::modal_overlay::{centered_rect, prepare_modal};

const KEY_COLUMN: usize = 16;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Views",
        &[
            ("1 2 3 4", "Jump to a view"),
            ("Tab / l / →", "Next view"),
            ("S-Tab / h / ←", "Previous view"),
        ],
    ),
    (
        "Cards",
        &[
            ("j / ↓", "Next card"),
            ("k / ↑", "Previous card"),
            ("g / G", "First / last card"),
            ("Enter / Space", "Open details"),
            ("o", "Open documentation"),
        ],
    ),
    (
        "Scrolling",
        &[("J / K", "Scroll one line"), ("PgUp / PgDn", "Scroll one page")],
    ),
    (
        "Display",
        &[
            ("i", "Toggle Nerd Font icons"),
            ("a", "Toggle animations"),
            ("?", "Toggle this help"),
            ("q / Esc", "Quit"),
        ],
    ),
];

pub struct HelpOverlay {
    icons: IconSet,
}

impl HelpOverlay {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (i, (title, keys)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(*title, styles::accent_bold())));
            for (key, action) in keys.iter() {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {key:<width$}", width = KEY_COLUMN),
                        styles::keybinding(),
                    ),
                    Span::styled(*action, styles::text_primary()),
                ]));
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Legend", styles::accent_bold())));
        for entry in LEGEND {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(self.icons.dot(), styles::tone(entry.tone)),
                Span::styled(
                    format!(" {:<width$}", entry.label, width = KEY_COLUMN - 2),
                    styles::text_muted(),
                ),
                Span::styled(entry.caption, styles::text_primary()),
            ]));
        }
        lines
    }
}

impl Widget for HelpOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let modal = centered_rect(48, lines.len() as u16 + 2, area);
        prepare_modal(buf, area, modal);

        let block = styles::modal_block().title(Line::from(Span::styled(
            " Keys ",
            styles::accent_bold(),
        )));
        let inner = block.inner(modal);
        block.render(modal, buf);
        Paragraph::new(lines).render(
            Rect {
                x: inner.x + 1,
                width: inner.width.saturating_sub(2),
                ..inner
            },
            buf,
        );
    }
}
