//! Detail popover
//!
//! Expanded view of one card: the full feature list, the metrics grid, tags
//! and the documentation link. Content taller than the screen scrolls; the
//! offset lives in `AppState::detail_scroll` and is clamped here, since only
//! the renderer knows how many lines the content wraps to.

use druidscope_core::{ServiceRecord, Status};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use crate::theme::icons::{IconSet, IconSize};
use crate::theme::styles;

use super::modal_overlay::{centered_rect, prepare_modal, SCREEN_MARGIN};
use super::text;

const MAX_WIDTH: u16 = 72;
/// Metric labels are padded to this width so values line up.
const METRIC_LABEL_WIDTH: u16 = 14;

pub struct DetailPopover<'a> {
    record: &'a ServiceRecord,
    status: Status,
    icons: IconSet,
}

impl<'a> DetailPopover<'a> {
    pub fn new(record: &'a ServiceRecord, status: Status, icons: IconSet) -> Self {
        Self {
            record,
            status,
            icons,
        }
    }

    fn heading(title: &'static str) -> Line<'static> {
        Line::from(Span::styled(title, styles::accent_bold()))
    }

    /// Wrap `body` to `width`, prefixing the first line with `bullet` and
    /// indenting the rest to match.
    fn bulleted(bullet: &str, body: &str, width: u16, style: Style) -> Vec<Line<'static>> {
        let indent = " ".repeat(usize::from(text::width(bullet)));
        text::wrap(body, width.saturating_sub(text::width(bullet)))
            .into_iter()
            .enumerate()
            .map(|(i, chunk)| {
                let prefix = if i == 0 { bullet.to_string() } else { indent.clone() };
                Line::from(vec![
                    Span::styled(prefix, styles::accent()),
                    Span::styled(chunk, style),
                ])
            })
            .collect()
    }

    /// Every line of the popover body at `width` columns.
    pub fn content_lines(&self, width: u16) -> Vec<Line<'static>> {
        let record = self.record;
        let mut lines = Vec::new();

        let mut title = self.icons.spans(record.icon, IconSize::Large);
        title.push(Span::raw(" "));
        title.push(Span::styled(record.title, styles::text_bright()));
        lines.push(Line::from(title));

        lines.push(Line::from(vec![
            Span::styled(
                self.icons.dot(),
                Style::default().fg(styles::status_color(self.status)),
            ),
            Span::raw(" "),
            Span::styled(
                self.status.label(),
                Style::default()
                    .fg(styles::status_color(self.status))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::default());

        for chunk in text::wrap(record.description, width) {
            lines.push(Line::from(Span::styled(chunk, styles::text_secondary())));
        }

        lines.push(Line::default());
        lines.push(Self::heading("Features"));
        for detail in record.details {
            lines.extend(Self::bulleted("  • ", detail, width, styles::text_primary()));
        }

        if !record.metrics.is_empty() {
            lines.push(Line::default());
            lines.push(Self::heading("Metrics"));
            for metric in record.metrics {
                let label = format!(
                    "  {:<pad$}",
                    metric.label,
                    pad = usize::from(METRIC_LABEL_WIDTH)
                );
                lines.push(Line::from(vec![
                    Span::styled(label, styles::text_muted()),
                    Span::styled(metric.value, styles::text_bright()),
                ]));
            }
        }

        if !record.tags.is_empty() {
            lines.push(Line::default());
            lines.push(Self::heading("Tags"));
            let tags: Vec<String> = record.tags.iter().map(|t| format!("#{t}")).collect();
            for chunk in text::pack(&tags, "  ", width.saturating_sub(2)) {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(chunk, styles::accent()),
                ]));
            }
        }

        if let Some(url) = record.docs_url {
            lines.push(Line::default());
            lines.push(Self::heading("Documentation"));
            let bullet = format!("  {} ", self.icons.link());
            lines.extend(Self::bulleted(
                &bullet,
                url,
                width,
                styles::text_primary().add_modifier(Modifier::UNDERLINED),
            ));
        }

        lines
    }
}

impl StatefulWidget for DetailPopover<'_> {
    /// Scroll offset in lines
    type State = u16;

    fn render(self, area: Rect, buf: &mut Buffer, scroll: &mut u16) {
        // Border plus one column of padding each side
        let width = area
            .width
            .saturating_sub(SCREEN_MARGIN * 2)
            .min(MAX_WIDTH);
        let text_width = width.saturating_sub(4);
        let lines = self.content_lines(text_width);
        let wanted_height = lines.len() as u16 + 2;

        let modal = centered_rect(width, wanted_height, area);
        let visible = modal.height.saturating_sub(2);
        let max_scroll = (lines.len() as u16).saturating_sub(visible);
        *scroll = (*scroll).min(max_scroll);

        prepare_modal(buf, area, modal);

        let mut hint = vec![
            Span::styled(" Esc", styles::keybinding()),
            Span::styled(" close ", styles::text_muted()),
        ];
        if self.record.docs_url.is_some() {
            hint.push(Span::styled("o", styles::keybinding()));
            hint.push(Span::styled(" docs ", styles::text_muted()));
        }
        if max_scroll > 0 {
            hint.push(Span::styled("↑↓", styles::keybinding()));
            hint.push(Span::styled(" scroll ", styles::text_muted()));
        }

        let mut block = styles::modal_block().title_bottom(Line::from(hint).centered());
        if max_scroll > 0 {
            block = block.title(
                Line::from(Span::styled(
                    format!(" {}/{} ", *scroll + 1, max_scroll + 1),
                    styles::text_muted(),
                ))
                .right_aligned(),
            );
        }
        let inner = block.inner(modal);
        block.render(modal, buf);

        let body = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };
        Paragraph::new(lines)
            .scroll((*scroll, 0))
            .render(body, buf);
    }
}
