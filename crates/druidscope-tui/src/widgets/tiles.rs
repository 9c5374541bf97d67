//! Tile grids: compact boxes for addons, node pools, nested stacks, chart
//! components and extensions. Tiles are not selectable.

use druidscope_core::{Tile, TileGrid, TileLine};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::icons::{IconSet, IconSize};
use crate::theme::{palette, styles};

use super::text;

/// Narrowest tile before the grid drops a column.
pub const MIN_TILE_WIDTH: u16 = 18;

/// Columns a grid can actually use at `width`.
pub fn effective_columns(grid: &TileGrid, width: u16) -> u16 {
    let fit = (width + 1) / (MIN_TILE_WIDTH + 1);
    grid.columns.min(fit).max(1)
}

pub struct TileCard<'a> {
    tile: &'a Tile,
    icons: IconSet,
    revealed: bool,
}

impl<'a> TileCard<'a> {
    pub fn new(tile: &'a Tile, icons: IconSet) -> Self {
        Self {
            tile,
            icons,
            revealed: true,
        }
    }

    pub fn revealed(mut self, revealed: bool) -> Self {
        self.revealed = revealed;
        self
    }

    pub fn height(tile: &Tile) -> u16 {
        let mut rows = 3 + tile.lines.len() as u16;
        if !tile.description.is_empty() {
            rows += 1;
        }
        if tile.badge.is_some() {
            rows += 1;
        }
        rows
    }

    fn line(&self, line: &TileLine, width: u16) -> Line<'static> {
        let mut spans = Vec::new();
        let mut used = 0;
        if let Some(dot) = line.dot {
            spans.push(Span::styled(self.icons.dot(), styles::tone(dot)));
            spans.push(Span::raw(" "));
            used += 2;
        }
        if let Some(label) = line.label {
            spans.push(Span::styled(label, styles::text_muted()));
            spans.push(Span::raw(" "));
            used += text::width(label) + 1;
        }
        let style = line
            .accent
            .map(styles::tone)
            .unwrap_or_else(styles::text_primary);
        spans.push(Span::styled(
            text::truncate(line.text, width.saturating_sub(used)),
            style,
        ));
        used += text::width(line.text);

        // The hint only shows when it fits whole
        if let Some(hint) = line.hint {
            let suffix = format!(" · {hint}");
            if used + text::width(&suffix) <= width {
                spans.push(Span::styled(suffix, styles::text_muted()));
            }
        }
        Line::from(spans)
    }
}

impl Widget for TileCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.revealed {
            styles::glass_block(false)
                .border_style(styles::border_placeholder())
                .render(area, buf);
            return;
        }

        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);
        let inner = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };
        if inner.width < 2 || inner.height == 0 {
            return;
        }

        let mut y = inner.y;
        let mut name_x = inner.x;
        if let Some(icon) = self.tile.icon {
            let glyph = Line::from(self.icons.spans(icon, IconSize::Small));
            buf.set_line(inner.x, y, &glyph, inner.width);
            name_x += glyph.width() as u16 + 1;
        }
        let name_width = inner.right().saturating_sub(name_x);
        let name = if text::width(self.tile.name) <= name_width {
            self.tile.name
        } else {
            self.tile.short_name()
        };
        buf.set_string(
            name_x,
            y,
            text::truncate(name, name_width),
            styles::text_bright(),
        );
        y += 1;

        if !self.tile.description.is_empty() && y < inner.bottom() {
            buf.set_string(
                inner.x,
                y,
                text::truncate(self.tile.description, inner.width),
                styles::text_secondary(),
            );
            y += 1;
        }
        if let Some(badge) = self.tile.badge {
            if y < inner.bottom() {
                let label = text::truncate(badge.label, inner.width.saturating_sub(2));
                buf.set_string(inner.x, y, format!(" {} ", label), styles::badge(badge.tone));
                y += 1;
            }
        }
        for line in self.tile.lines {
            if y >= inner.bottom() {
                break;
            }
            buf.set_line(inner.x, y, &self.line(line, inner.width), inner.width);
            y += 1;
        }
    }
}

/// Title line (and optional subtitle line) above a tile grid.
pub struct GridHeading<'a> {
    grid: &'a TileGrid,
    icons: IconSet,
}

impl<'a> GridHeading<'a> {
    pub fn new(grid: &'a TileGrid, icons: IconSet) -> Self {
        Self { grid, icons }
    }

    pub fn height(grid: &TileGrid) -> u16 {
        if grid.subtitle.is_some() {
            2
        } else {
            1
        }
    }
}

impl Widget for GridHeading<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let mut spans = Vec::new();
        if let Some(icon) = self.grid.icon {
            spans.extend(self.icons.spans(icon, IconSize::Small));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(self.grid.title, styles::text_bright()));
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        if let Some(subtitle) = self.grid.subtitle {
            if area.height > 1 {
                buf.set_string(
                    area.x,
                    area.y + 1,
                    text::truncate(subtitle, area.width),
                    styles::text_muted(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use druidscope_app::config::IconMode;
    use druidscope_core::{Badge, IconKind, Tone};

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    const STACK: Tile = Tile {
        icon: Some(IconKind::Vpc),
        name: "NetworkNestedStack",
        description: "VPC, Subnets, NAT",
        badge: None,
        lines: &[TileLine {
            dot: None,
            label: Some("Depends:"),
            text: "None",
            accent: Some(Tone::Teal),
            hint: None,
        }],
        delay_ms: 0,
    };

    #[test]
    fn test_tile_height() {
        assert_eq!(TileCard::height(&STACK), 5);
        let extension = Tile {
            icon: None,
            name: "druid-s3-extensions",
            description: "S3 deep storage support",
            badge: Some(Badge {
                label: "Storage",
                tone: Tone::Teal,
            }),
            lines: &[],
            delay_ms: 0,
        };
        assert_eq!(TileCard::height(&extension), 5);
    }

    #[test]
    fn test_tile_uses_short_name_when_narrow() {
        let mut term = TestTerminal::with_size(40, 5);
        term.render_widget(TileCard::new(&STACK, icons()), term.area());
        assert!(term.buffer_contains("NetworkNestedStack"));
        assert!(term.buffer_contains("Depends: None"));

        let mut term = TestTerminal::with_size(16, 5);
        term.render_widget(TileCard::new(&STACK, icons()), term.area());
        assert!(term.buffer_contains("Network"));
        assert!(!term.buffer_contains("NestedStack"));
    }

    #[test]
    fn test_line_hint_shown_only_when_it_fits() {
        const ZONE: Tile = Tile {
            icon: None,
            name: "Availability Zone: us-west-2a",
            description: "",
            badge: None,
            lines: &[TileLine {
                dot: Some(Tone::Green),
                label: None,
                text: "Public Subnet",
                accent: None,
                hint: Some("NAT Gateway attached"),
            }],
            delay_ms: 0,
        };

        let mut term = TestTerminal::with_size(60, 5);
        term.render_widget(TileCard::new(&ZONE, icons()), term.area());
        assert!(term.buffer_contains("Public Subnet · NAT Gateway attached"));

        let mut term = TestTerminal::with_size(24, 5);
        term.render_widget(TileCard::new(&ZONE, icons()), term.area());
        assert!(term.buffer_contains("Public Subnet"));
        assert!(!term.buffer_contains("NAT Gateway"));
    }

    #[test]
    fn test_effective_columns_shrink_with_width() {
        let grid = TileGrid {
            title: "Chart Components",
            subtitle: None,
            icon: None,
            columns: 6,
            tiles: &[],
        };
        assert_eq!(effective_columns(&grid, 200), 6);
        assert_eq!(effective_columns(&grid, 60), 3);
        assert_eq!(effective_columns(&grid, 10), 1);
    }
}
