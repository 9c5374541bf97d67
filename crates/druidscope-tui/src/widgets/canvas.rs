//! View canvas
//!
//! Lays the active view out as one tall document, painted into an off-screen
//! buffer as wide as the canvas, then copies the scrolled window into the
//! frame. Card positions are recorded while painting so the viewport can keep
//! the selected card on screen.
//!
//! Every element is painted at `(x, y, width)` and reports the rows it used.
//! Containers paint their contents first and their frame last.

use druidscope_app::config::Settings;
use druidscope_app::reveal::RevealClock;
use druidscope_app::viewport::{CardSpan, ViewportState};
use druidscope_core::{
    FlowStep, Group, Layer, Row, Section, ServiceRecord, TileGrid, Tone, ViewDiagram,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget},
};

use crate::theme::icons::IconSet;
use crate::theme::palette;

use super::flow::{ConnectionLine, DataFlowArrow, EndpointNode, FlowNote, StepSequence};
use super::layer::{
    GroupFrame, LayerBlock, GROUP_FOOTER_ROWS, GROUP_HEADER_ROWS, GROUP_INSET, LAYER_FOOTER_ROWS,
    LAYER_HEADER_ROWS, LAYER_INSET,
};
use super::service_card::ServiceCard;
use super::tiles::{effective_columns, GridHeading, TileCard};

const SECTION_GAP: u16 = 1;
const ROW_GAP: u16 = 1;
const CARD_GAP: u16 = 2;
const FLOW_GAP: u16 = 1;
const TILE_GAP: u16 = 1;
/// Cards in a flow line may grow this much past their minimum width.
const FLOW_CARD_GROWTH: u16 = 10;
/// Column reserved on the right for the scrollbar.
const SCROLLBAR_WIDTH: u16 = 1;

/// The painted view before it is clipped to the screen.
#[derive(Debug)]
pub struct Document {
    pub buffer: Buffer,
    /// One span per card, in `ViewDiagram::cards()` order.
    pub card_spans: Vec<CardSpan>,
}

impl Document {
    pub fn height(&self) -> u16 {
        self.buffer.area.height
    }

    pub fn width(&self) -> u16 {
        self.buffer.area.width
    }
}

pub struct ViewCanvas<'a> {
    diagram: &'static ViewDiagram,
    reveal: &'a RevealClock,
    settings: &'a Settings,
    selected: usize,
}

impl<'a> ViewCanvas<'a> {
    pub fn new(
        diagram: &'static ViewDiagram,
        reveal: &'a RevealClock,
        settings: &'a Settings,
        selected: usize,
    ) -> Self {
        Self {
            diagram,
            reveal,
            settings,
            selected,
        }
    }

    /// Paint the whole view at `width` columns.
    pub fn paint(&self, width: u16) -> Document {
        let mut painter = Painter {
            canvas: self,
            icons: IconSet::new(self.settings.ui.icons),
            buf: Buffer::empty(Rect::new(0, 0, width, 0)),
            spans: Vec::new(),
        };
        painter.sections(self.diagram.sections, 0, 0, width);
        Document {
            buffer: painter.buf,
            card_spans: painter.spans,
        }
    }
}

impl StatefulWidget for ViewCanvas<'_> {
    type State = ViewportState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.is_empty() {
            return;
        }
        let doc_width = area.width.saturating_sub(SCROLLBAR_WIDTH);
        let doc = self.paint(doc_width);
        state.sync(doc.height(), area.height, doc.card_spans.clone(), self.selected);

        let offset = state.offset;
        for row in 0..area.height {
            let doc_y = offset.saturating_add(row);
            if doc_y >= doc.height() {
                break;
            }
            for col in 0..doc_width {
                buf[(area.x + col, area.y + row)] = doc.buffer[(col, doc_y)].clone();
            }
        }

        if doc.height() > area.height {
            let mut scrollbar = ScrollbarState::new(usize::from(state.max_offset()))
                .position(usize::from(offset));
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .style(Style::default().fg(palette::BORDER_DIM))
                .render(area, buf, &mut scrollbar);
        }
    }
}

struct Painter<'c, 'a> {
    canvas: &'c ViewCanvas<'a>,
    icons: IconSet,
    buf: Buffer,
    spans: Vec<CardSpan>,
}

impl Painter<'_, '_> {
    /// Extend the document down to `bottom` rows. Width never changes, so
    /// existing rows survive the resize.
    fn grow(&mut self, bottom: u16) {
        let old = self.buf.area;
        if bottom <= old.height {
            return;
        }
        self.buf.resize(Rect {
            height: bottom,
            ..old
        });
        self.buf.set_style(
            Rect::new(old.x, old.height, old.width, bottom - old.height),
            Style::default().bg(palette::DEEPEST_BG),
        );
    }

    fn draw<W: Widget>(&mut self, widget: W, area: Rect) {
        if area.is_empty() {
            return;
        }
        self.grow(area.bottom());
        widget.render(area, &mut self.buf);
    }

    fn revealed(&self, delay_ms: u32) -> bool {
        self.canvas.reveal.is_revealed(delay_ms)
    }

    fn card_widget(&self, record: &'static ServiceRecord) -> ServiceCard<'static> {
        ServiceCard::new(record, self.icons)
            .status(self.canvas.settings.status_for(record))
            .summary_items(self.canvas.settings.ui.summary_items)
            .pulse_on(self.canvas.reveal.pulse_on())
    }

    /// Paint a card and record its span. Spans are pushed in painting order,
    /// which is document order.
    fn place_card(&mut self, record: &'static ServiceRecord, area: Rect, shown: bool) {
        let index = self.spans.len();
        self.spans.push(CardSpan {
            top: area.y,
            height: area.height,
        });
        let card = self
            .card_widget(record)
            .selected(index == self.canvas.selected)
            .revealed(shown && self.revealed(record.delay_ms));
        self.draw(card, area);
    }

    // ── Sections ─────────────────────────────────────────────────────────────

    fn sections(&mut self, sections: &'static [Section], x: u16, y: u16, width: u16) -> u16 {
        let mut cursor = y;
        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                cursor += SECTION_GAP;
            }
            cursor += match section {
                Section::Group(group) => self.group(group, x, cursor, width),
                Section::Layer(layer) => self.layer(layer, x, cursor, width),
                Section::Tiles(grid) => self.tile_grid(grid, x, cursor, width, true),
            };
        }
        cursor - y
    }

    fn group(&mut self, group: &'static Group, x: u16, y: u16, width: u16) -> u16 {
        let body = self.sections(
            group.sections,
            x + GROUP_INSET,
            y + GROUP_HEADER_ROWS,
            width.saturating_sub(GROUP_INSET * 2),
        );
        let height = GROUP_HEADER_ROWS + body + GROUP_FOOTER_ROWS;
        self.draw(GroupFrame::new(group), Rect::new(x, y, width, height));
        height
    }

    fn layer(&mut self, layer: &'static Layer, x: u16, y: u16, width: u16) -> u16 {
        let shown = self.revealed(layer.delay_ms);
        let inner_x = x + LAYER_INSET;
        let inner_width = width.saturating_sub(LAYER_INSET * 2);

        let mut cursor = y + LAYER_HEADER_ROWS;
        for (i, row) in layer.rows.iter().enumerate() {
            if i > 0 {
                cursor += ROW_GAP;
            }
            cursor += self.row(row, layer.tone, inner_x, cursor, inner_width, shown);
        }
        let height = cursor - y + LAYER_FOOTER_ROWS;
        self.draw(
            LayerBlock::new(layer).revealed(shown),
            Rect::new(x, y, width, height),
        );
        height
    }

    fn row(&mut self, row: &'static Row, tone: Tone, x: u16, y: u16, width: u16, shown: bool) -> u16 {
        match row {
            Row::Cards { columns, cards } => self.card_grid(*columns, cards, x, y, width, shown),
            Row::Flow { steps } => self.flow(steps, x, y, width, shown),
            Row::Tiles(grid) => self.tile_grid(grid, x, y, width, shown),
            Row::Steps {
                title,
                steps,
                delay_ms,
            } => {
                let sequence = StepSequence::new(title, steps, tone)
                    .revealed(shown && self.revealed(*delay_ms));
                let height = sequence.height(width);
                self.draw(sequence, Rect::new(x, y, width, height));
                height
            }
        }
    }

    // ── Card grids ───────────────────────────────────────────────────────────

    fn card_grid(
        &mut self,
        columns: u16,
        cards: &'static [ServiceRecord],
        x: u16,
        y: u16,
        width: u16,
        shown: bool,
    ) -> u16 {
        let min_width = cards
            .iter()
            .map(|card| card.size.min_width())
            .max()
            .unwrap_or(0);
        let fit = (width + CARD_GAP) / (min_width + CARD_GAP);
        let cols = columns.min(fit).max(1);
        let card_width = width.saturating_sub(CARD_GAP * (cols - 1)) / cols;

        let mut cursor = y;
        for (r, chunk) in cards.chunks(usize::from(cols)).enumerate() {
            if r > 0 {
                cursor += ROW_GAP;
            }
            // Cards in a row share the tallest height
            let height = chunk
                .iter()
                .map(|card| self.card_widget(card).height())
                .max()
                .unwrap_or(0);
            for (i, card) in chunk.iter().enumerate() {
                let cx = x + i as u16 * (card_width + CARD_GAP);
                self.place_card(card, Rect::new(cx, cursor, card_width, height), shown);
            }
            cursor += height;
        }
        cursor - y
    }

    // ── Flows ────────────────────────────────────────────────────────────────

    fn step_size(&self, step: &'static FlowStep) -> (u16, u16) {
        match step {
            FlowStep::Card(card) => (card.size.min_width(), self.card_widget(card).height()),
            FlowStep::Arrow(arrow) => DataFlowArrow::size(arrow),
            FlowStep::Link(link) => ConnectionLine::size(link),
            FlowStep::Endpoint(endpoint) => EndpointNode::size(endpoint),
            FlowStep::Note { text, .. } => FlowNote::size(text),
        }
    }

    /// Lay steps left to right, wrapping greedily onto new lines. Each line
    /// is centered, and its cards share whatever width is left over.
    fn flow(&mut self, steps: &'static [FlowStep], x: u16, y: u16, width: u16, shown: bool) -> u16 {
        let sizes: Vec<(u16, u16)> = steps
            .iter()
            .map(|step| {
                let (w, h) = self.step_size(step);
                (w.min(width), h)
            })
            .collect();

        let mut lines: Vec<std::ops::Range<usize>> = Vec::new();
        let mut start = 0;
        let mut used = 0u16;
        for (i, (w, _)) in sizes.iter().enumerate() {
            let needed = if i == start { *w } else { used + FLOW_GAP + w };
            if i > start && needed > width {
                lines.push(start..i);
                start = i;
                used = *w;
            } else {
                used = needed;
            }
        }
        if start < steps.len() {
            lines.push(start..steps.len());
        }

        let mut cursor = y;
        for (n, line) in lines.into_iter().enumerate() {
            if n > 0 {
                cursor += ROW_GAP;
            }
            let items = &sizes[line.clone()];
            let natural: u16 =
                items.iter().map(|(w, _)| *w).sum::<u16>() + FLOW_GAP * (items.len() as u16 - 1);
            let card_count = steps[line.clone()]
                .iter()
                .filter(|step| matches!(step, FlowStep::Card(_)))
                .count() as u16;
            let growth = if card_count > 0 {
                (width.saturating_sub(natural) / card_count).min(FLOW_CARD_GROWTH)
            } else {
                0
            };
            let line_width = natural + growth * card_count;
            let line_height = items.iter().map(|(_, h)| *h).max().unwrap_or(0);

            let mut cx = x + width.saturating_sub(line_width) / 2;
            for (step, (w, h)) in steps[line].iter().zip(items) {
                let w = match step {
                    FlowStep::Card(_) => (*w + growth).min(width),
                    _ => *w,
                };
                let area = Rect::new(cx, cursor + (line_height - h) / 2, w, *h);
                self.flow_step(step, area, shown);
                cx += w + FLOW_GAP;
            }
            cursor += line_height;
        }
        cursor - y
    }

    fn flow_step(&mut self, step: &'static FlowStep, area: Rect, shown: bool) {
        match step {
            FlowStep::Card(card) => self.place_card(card, area, shown),
            FlowStep::Arrow(arrow) if shown => self.draw(DataFlowArrow::new(arrow), area),
            FlowStep::Link(link) if shown => {
                let line = ConnectionLine::new(link).clock(self.canvas.reveal);
                self.draw(line, area);
            }
            FlowStep::Endpoint(endpoint) => {
                let node = EndpointNode::new(endpoint, self.icons)
                    .revealed(shown && self.revealed(endpoint.delay_ms));
                self.draw(node, area);
            }
            FlowStep::Note { text, .. } if shown => self.draw(FlowNote::new(text), area),
            // Hidden connectors still take up their room
            _ => self.grow(area.bottom()),
        }
    }

    // ── Tiles ────────────────────────────────────────────────────────────────

    fn tile_grid(&mut self, grid: &'static TileGrid, x: u16, y: u16, width: u16, shown: bool) -> u16 {
        let heading = GridHeading::height(grid);
        if shown {
            self.draw(GridHeading::new(grid, self.icons), Rect::new(x, y, width, heading));
        }
        let mut cursor = y + heading;

        let cols = effective_columns(grid, width);
        let tile_width = width.saturating_sub(TILE_GAP * (cols - 1)) / cols;
        for chunk in grid.tiles.chunks(usize::from(cols)) {
            let height = chunk.iter().map(TileCard::height).max().unwrap_or(0);
            for (i, tile) in chunk.iter().enumerate() {
                let tx = x + i as u16 * (tile_width + TILE_GAP);
                let card = TileCard::new(tile, self.icons)
                    .revealed(shown && self.revealed(tile.delay_ms));
                self.draw(card, Rect::new(tx, cursor, tile_width, height));
            }
            cursor += height;
        }
        cursor - y
    }
}
