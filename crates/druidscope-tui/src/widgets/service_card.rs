//! Service card widget
//!
//! The bordered block behind every description record: icon, title, status
//! dot, a short description, the first few features and a "+N more..." hint
//! pointing at the detail popover.

use druidscope_core::{ServiceRecord, Status};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::icons::{IconSet, IconSize};
use crate::theme::{palette, styles};

use super::text;

/// Rows taken by the border, title and description.
const CHROME_ROWS: u16 = 4;

/// Below this inner width the title row uses the bare glyph.
const MEDIUM_ICON_MIN_WIDTH: u16 = 30;

pub struct ServiceCard<'a> {
    record: &'a ServiceRecord,
    icons: IconSet,
    status: Status,
    selected: bool,
    revealed: bool,
    pulse_on: bool,
    summary_items: usize,
}

impl<'a> ServiceCard<'a> {
    pub fn new(record: &'a ServiceRecord, icons: IconSet) -> Self {
        Self {
            record,
            icons,
            status: record.status,
            selected: false,
            revealed: true,
            pulse_on: true,
            summary_items: 2,
        }
    }

    /// Status after configured overrides
    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// An unrevealed card draws only a placeholder border.
    pub fn revealed(mut self, revealed: bool) -> Self {
        self.revealed = revealed;
        self
    }

    pub fn pulse_on(mut self, on: bool) -> Self {
        self.pulse_on = on;
        self
    }

    pub fn summary_items(mut self, n: usize) -> Self {
        self.summary_items = n;
        self
    }

    /// Rows needed for this card. Independent of width and reveal state, so
    /// the layout never jumps while cards enter.
    pub fn height(&self) -> u16 {
        let (shown, hidden) = self.record.summary(self.summary_items);
        let mut rows = CHROME_ROWS + shown.len() as u16;
        if hidden > 0 {
            rows += 1;
        }
        if !self.record.metrics.is_empty() {
            rows += 1;
        }
        rows
    }

    fn status_dot(&self) -> Span<'static> {
        let glyph = if self.status.pulses() && !self.pulse_on {
            self.icons.circle()
        } else {
            self.icons.dot()
        };
        Span::styled(glyph, Style::default().fg(styles::status_color(self.status)))
    }

    fn render_title_row(&self, area: Rect, buf: &mut Buffer) {
        let size = if area.width >= MEDIUM_ICON_MIN_WIDTH {
            IconSize::Medium
        } else {
            IconSize::Small
        };
        let icon = Line::from(self.icons.spans(self.record.icon, size));
        let icon_width = icon.width() as u16;
        buf.set_line(area.x, area.y, &icon, area.width);

        // Status dot and info marker hug the right edge
        let marker_x = area.right().saturating_sub(3);
        let title_x = area.x + icon_width + 1;
        let title_width = marker_x.saturating_sub(title_x + 1);
        let title_style = if self.selected {
            styles::accent_bold()
        } else {
            styles::text_bright()
        };
        buf.set_string(
            title_x,
            area.y,
            text::truncate(self.record.title, title_width),
            title_style,
        );

        if marker_x > title_x {
            let markers = Line::from(vec![
                self.status_dot(),
                Span::raw(" "),
                Span::styled(self.icons.info(), styles::text_muted()),
            ]);
            buf.set_line(marker_x, area.y, &markers, 3);
        }
    }

    fn render_body(&self, area: Rect, buf: &mut Buffer) {
        let mut y = area.y + 1;
        let width = area.width;

        buf.set_string(
            area.x,
            y,
            text::truncate(self.record.description, width),
            styles::text_secondary(),
        );
        y += 1;

        let (shown, hidden) = self.record.summary(self.summary_items);
        for detail in shown {
            let line = Line::from(vec![
                Span::styled(self.icons.chevron_right(), styles::accent()),
                Span::raw(" "),
                Span::styled(
                    text::truncate(detail, width.saturating_sub(2)),
                    styles::text_primary(),
                ),
            ]);
            buf.set_line(area.x, y, &line, width);
            y += 1;
        }
        if hidden > 0 {
            buf.set_string(
                area.x,
                y,
                format!("+{} more...", hidden),
                styles::text_muted().add_modifier(Modifier::ITALIC),
            );
            y += 1;
        }

        if !self.record.metrics.is_empty() {
            let mut spans = Vec::new();
            for (i, metric) in self.record.metrics.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(" · ", styles::text_muted()));
                }
                spans.push(Span::styled(metric.label, styles::text_muted()));
                spans.push(Span::raw(" "));
                spans.push(Span::styled(metric.value, styles::accent_bold()));
            }
            buf.set_line(area.x, y, &Line::from(spans), width);
        }
    }
}

impl Widget for ServiceCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.revealed {
            styles::glass_block(false)
                .border_style(styles::border_placeholder())
                .render(area, buf);
            return;
        }

        let block = styles::glass_block(self.selected).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        // One column of padding inside the border
        let inner = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };
        if inner.width < 4 || inner.height < 2 {
            return;
        }

        self.render_title_row(inner, buf);
        self.render_body(inner, buf);
    }
}
