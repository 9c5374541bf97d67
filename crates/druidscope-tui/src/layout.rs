//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Top border + title row + tabs row + bottom border
pub const HEADER_HEIGHT: u16 = 4;

/// Below this height the footer statistics give their row to the canvas.
pub const FOOTER_MIN_SCREEN_HEIGHT: u16 = 20;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Page header with the view tabs inside
    pub header: Rect,

    /// "<View> View · description"
    pub heading: Rect,

    /// Scrollable diagram
    pub canvas: Rect,

    /// Footer statistics (zero height on short screens)
    pub footer: Rect,

    /// Notices and key hints
    pub status_bar: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let footer_height = if area.height >= FOOTER_MIN_SCREEN_HEIGHT {
        1
    } else {
        0
    };

    let [header, heading, canvas, footer, status_bar] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(footer_height),
        Constraint::Length(1),
    ])
    .areas(area);

    ScreenAreas {
        header,
        heading,
        canvas,
        footer,
        status_bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_standard_screen() {
        let areas = create(Rect::new(0, 0, 120, 36));

        assert_eq!(areas.header.height, HEADER_HEIGHT);
        assert_eq!(areas.heading.y, 4);
        assert_eq!(areas.canvas.y, 5);
        // 36 - 4 - 1 - 1 - 1
        assert_eq!(areas.canvas.height, 29);
        assert_eq!(areas.footer.y, 34);
        assert_eq!(areas.status_bar.y, 35);
    }

    #[test]
    fn test_layout_short_screen_drops_footer() {
        let areas = create(Rect::new(0, 0, 80, 14));

        assert_eq!(areas.footer.height, 0);
        assert_eq!(areas.canvas.height, 8);
        assert_eq!(areas.status_bar.y, 13);
    }

    #[test]
    fn test_layout_spans_full_width() {
        let areas = create(Rect::new(0, 0, 100, 30));
        for area in [areas.header, areas.heading, areas.canvas, areas.status_bar] {
            assert_eq!(area.width, 100);
        }
    }

    #[test]
    fn test_layout_rows_snapshot() {
        let areas = create(Rect::new(0, 0, 120, 36));
        let rows: Vec<String> = [
            ("header", areas.header),
            ("heading", areas.heading),
            ("canvas", areas.canvas),
            ("footer", areas.footer),
            ("status", areas.status_bar),
        ]
        .iter()
        .map(|(name, r)| format!("{name}: y={} h={}", r.y, r.height))
        .collect();

        insta::assert_snapshot!(rows.join("\n"), @r"
        header: y=0 h=4
        heading: y=4 h=1
        canvas: y=5 h=29
        footer: y=34 h=1
        status: y=35 h=1
        ");
    }
}
