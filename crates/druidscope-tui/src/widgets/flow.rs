//! Flow primitives: arrows, connector lines, endpoints, notes and numbered
//! step sequences.
//!
//! Every primitive reports its natural size so the canvas can lay a flow out
//! left to right and wrap it when the terminal is narrow.

use druidscope_app::reveal::{RevealClock, CONNECTION_CYCLE_MS};
use druidscope_core::{Arrow, ArrowDirection, Connection, Endpoint, LineDirection, Tone};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::icons::IconSet;
use crate::theme::{palette, styles};

use super::text;

/// Color of arrows and connectors, matching the "Data Flow" legend entry.
const FLOW_TONE: Tone = Tone::Teal;

fn label_width(label: Option<&str>) -> u16 {
    label.map(text::width).unwrap_or(0)
}

// ── Arrows ────────────────────────────────────────────────────────────────────

pub struct DataFlowArrow<'a> {
    arrow: &'a Arrow,
}

impl<'a> DataFlowArrow<'a> {
    pub fn new(arrow: &'a Arrow) -> Self {
        Self { arrow }
    }

    /// Natural (width, height).
    pub fn size(arrow: &Arrow) -> (u16, u16) {
        let label = label_width(arrow.label);
        match arrow.direction {
            ArrowDirection::Right | ArrowDirection::Left => ((label + 4).max(8), 2),
            ArrowDirection::Down | ArrowDirection::Up => (label + 3, 3),
        }
    }
}

impl Widget for DataFlowArrow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let line_style = styles::tone(FLOW_TONE);
        let label = self.arrow.label.unwrap_or("");

        match self.arrow.direction {
            ArrowDirection::Right | ArrowDirection::Left => {
                // Shaft on the middle row, label just above it
                let y = area.y + area.height / 2;
                let shaft = "─".repeat(usize::from(area.width.saturating_sub(1)));
                let line = if self.arrow.direction == ArrowDirection::Right {
                    format!("{shaft}▶")
                } else {
                    format!("◀{shaft}")
                };
                buf.set_string(area.x, y, line, line_style);

                if !label.is_empty() && y > area.y {
                    let label = text::truncate(label, area.width);
                    let x = area.x + (area.width - text::width(&label)) / 2;
                    buf.set_string(x, y - 1, label, styles::text_secondary());
                }
            }
            ArrowDirection::Down | ArrowDirection::Up => {
                let x = area.x + 1;
                let last = area.bottom() - 1;
                for y in area.y..area.bottom() {
                    let glyph = match self.arrow.direction {
                        ArrowDirection::Down if y == last => "▼",
                        ArrowDirection::Up if y == area.y => "▲",
                        _ => "│",
                    };
                    buf.set_string(x, y, glyph, line_style);
                }
                if !label.is_empty() && area.width > 3 {
                    buf.set_string(
                        x + 2,
                        area.y + area.height / 2,
                        text::truncate(label, area.width - 3),
                        styles::text_secondary(),
                    );
                }
            }
        }
    }
}

// ── Connector lines ───────────────────────────────────────────────────────────

/// Dashed connector. Animated connectors carry a dot that travels the line
/// once per cycle.
pub struct ConnectionLine<'a> {
    connection: &'a Connection,
    clock: Option<&'a RevealClock>,
}

impl<'a> ConnectionLine<'a> {
    pub fn new(connection: &'a Connection) -> Self {
        Self {
            connection,
            clock: None,
        }
    }

    pub fn clock(mut self, clock: &'a RevealClock) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn size(connection: &Connection) -> (u16, u16) {
        let label = label_width(connection.label);
        match connection.direction {
            LineDirection::Horizontal => ((label + 6).max(10), 2),
            LineDirection::Vertical => (label + 3, 3),
            LineDirection::Diagonal => (6, 3),
        }
    }

    fn phase(&self, span: usize) -> Option<usize> {
        if !self.connection.animated {
            return None;
        }
        self.clock
            .and_then(|clock| clock.arrow_phase(CONNECTION_CYCLE_MS, span))
    }
}

impl Widget for ConnectionLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let line_style = styles::tone(FLOW_TONE);
        let dot_style = Style::default()
            .fg(palette::ACCENT)
            .add_modifier(Modifier::BOLD);

        match self.connection.direction {
            LineDirection::Horizontal => {
                let y = area.y + area.height / 2;
                let inner = area.width.saturating_sub(2);
                let line = format!("◀{}▶", "╌".repeat(usize::from(inner)));
                buf.set_string(area.x, y, line, line_style);
                if let Some(p) = self.phase(usize::from(inner)) {
                    buf.set_string(area.x + 1 + p as u16, y, "●", dot_style);
                }
                if let Some(label) = self.connection.label {
                    if y > area.y {
                        let label = text::truncate(label, area.width);
                        let x = area.x + (area.width - text::width(&label)) / 2;
                        buf.set_string(x, y - 1, label, styles::text_secondary());
                    }
                }
            }
            LineDirection::Vertical => {
                let x = area.x + 1;
                for y in area.y..area.bottom() {
                    buf.set_string(x, y, "┆", line_style);
                }
                if let Some(p) = self.phase(usize::from(area.height)) {
                    buf.set_string(x, area.y + p as u16, "●", dot_style);
                }
                if let Some(label) = self.connection.label {
                    if area.width > 3 {
                        buf.set_string(
                            x + 2,
                            area.y + area.height / 2,
                            text::truncate(label, area.width - 3),
                            styles::text_secondary(),
                        );
                    }
                }
            }
            LineDirection::Diagonal => {
                let steps = area.height.max(1);
                let phase = self.phase(usize::from(steps));
                for row in 0..steps {
                    let x = area.x + row * area.width.saturating_sub(1) / steps.saturating_sub(1).max(1);
                    let (glyph, style) = if phase == Some(usize::from(row)) {
                        ("●", dot_style)
                    } else {
                        ("╲", line_style)
                    };
                    buf.set_string(x, area.y + row, glyph, style);
                }
            }
        }
    }
}

// ── Endpoints and notes ───────────────────────────────────────────────────────

/// Round start/end node of a flow.
pub struct EndpointNode<'a> {
    endpoint: &'a Endpoint,
    icons: IconSet,
    revealed: bool,
}

impl<'a> EndpointNode<'a> {
    pub fn new(endpoint: &'a Endpoint, icons: IconSet) -> Self {
        Self {
            endpoint,
            icons,
            revealed: true,
        }
    }

    pub fn revealed(mut self, revealed: bool) -> Self {
        self.revealed = revealed;
        self
    }

    pub fn size(endpoint: &Endpoint) -> (u16, u16) {
        let label = text::width(endpoint.label) + 2;
        let caption = text::width(endpoint.caption);
        (label.max(caption) + 4, 4)
    }
}

impl Widget for EndpointNode<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let tone = self.endpoint.tone;
        if !self.revealed {
            styles::layer_block(tone)
                .border_style(styles::border_placeholder())
                .render(area, buf);
            return;
        }

        let block = styles::layer_block(tone).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 3 || inner.height == 0 {
            return;
        }

        let x = inner.x + 1;
        let width = inner.width - 2;
        let title = Line::from(vec![
            Span::styled(self.icons.endpoint(self.endpoint.kind), styles::tone(tone)),
            Span::raw(" "),
            Span::styled(
                text::truncate(self.endpoint.label, width.saturating_sub(2)),
                styles::tone_bold(tone),
            ),
        ]);
        buf.set_line(x, inner.y, &title, width);
        if inner.height > 1 {
            buf.set_string(
                x,
                inner.y + 1,
                text::truncate(self.endpoint.caption, width),
                styles::text_muted(),
            );
        }
    }
}

/// Free-standing annotation inside a flow ("↑ Fetch segments").
pub struct FlowNote<'a> {
    text: &'a str,
}

impl<'a> FlowNote<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn size(text: &str) -> (u16, u16) {
        (text::width(text), 1)
    }
}

impl Widget for FlowNote<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_string(
            area.x,
            area.y + area.height / 2,
            text::truncate(self.text, area.width),
            styles::text_muted().add_modifier(Modifier::ITALIC),
        );
    }
}

// ── Step sequences ────────────────────────────────────────────────────────────

/// Numbered sequence drawn as `1 Network → 2 EKS → ...`, wrapping onto as
/// many lines as the width needs.
pub struct StepSequence<'a> {
    title: &'a str,
    steps: &'a [&'a str],
    tone: Tone,
    revealed: bool,
}

impl<'a> StepSequence<'a> {
    pub fn new(title: &'a str, steps: &'a [&'a str], tone: Tone) -> Self {
        Self {
            title,
            steps,
            tone,
            revealed: true,
        }
    }

    pub fn revealed(mut self, revealed: bool) -> Self {
        self.revealed = revealed;
        self
    }

    /// One token per step: the numbered pill, the name and the joining arrow.
    fn tokens(&self) -> Vec<Vec<Span<'a>>> {
        let last = self.steps.len().saturating_sub(1);
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let mut spans = vec![
                    Span::styled(format!(" {} ", i + 1), styles::badge(self.tone)),
                    Span::styled(format!(" {}", step), styles::text_primary()),
                ];
                if i < last {
                    spans.push(Span::styled(" → ", styles::tone(FLOW_TONE)));
                }
                spans
            })
            .collect()
    }

    fn wrap(&self, width: u16) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        let mut current: Vec<Span<'a>> = Vec::new();
        let mut used = 0u16;
        for token in self.tokens() {
            let w: u16 = token.iter().map(|s| text::width(&s.content)).sum();
            if used > 0 && used + w > width {
                lines.push(Line::from(std::mem::take(&mut current)));
                used = 0;
            }
            used += w;
            current.extend(token);
        }
        if !current.is_empty() {
            lines.push(Line::from(current));
        }
        lines
    }

    /// Title row plus the wrapped sequence.
    pub fn height(&self, width: u16) -> u16 {
        1 + self.wrap(width).len() as u16
    }
}

impl Widget for StepSequence<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.revealed || area.is_empty() {
            return;
        }
        buf.set_string(
            area.x,
            area.y,
            text::truncate(self.title, area.width),
            styles::text_secondary().add_modifier(Modifier::BOLD),
        );
        for (i, line) in self.wrap(area.width).iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= area.bottom() {
                break;
            }
            buf.set_line(area.x, y, line, area.width);
        }
    }
}
