//! Header widgets
//!
//! The bordered page header (spinning logo, page title, legend and the view
//! tabs) and the one-line heading of the active view below it.

use druidscope_core::catalog::{LEGEND, PAGE};
use druidscope_core::ViewMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::icons::IconSet;
use crate::theme::{palette, styles};

use super::ViewTabs;

/// Page header with the view tabs rendered inside the bordered area
pub struct MainHeader {
    active: ViewMode,
    icons: IconSet,
    spinner_frame: usize,
}

impl MainHeader {
    pub fn new(active: ViewMode, icons: IconSet) -> Self {
        Self {
            active,
            icons,
            spinner_frame: 0,
        }
    }

    /// Frame of the rotating logo
    pub fn spinner_frame(mut self, frame: usize) -> Self {
        self.spinner_frame = frame;
        self
    }

    fn legend(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, entry) in LEGEND.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(self.icons.dot(), styles::tone(entry.tone)));
            spans.push(Span::styled(format!(" {}", entry.label), styles::text_muted()));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }

    fn render_title_row(&self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.spinner(self.spinner_frame), styles::accent()),
            Span::raw(" "),
            Span::styled(PAGE.header, styles::accent_bold()),
            Span::styled("  ·  ", styles::text_muted()),
            Span::styled(PAGE.subtitle, styles::text_secondary()),
        ]);
        let title_width = title.width() as u16;
        buf.set_line(area.x, area.y, &title, area.width);

        // Legend goes right, and only when it does not collide with the title
        let legend = self.legend();
        let legend_width = legend.width() as u16;
        if title_width + legend_width + 2 <= area.width {
            buf.set_line(area.right() - legend_width, area.y, &legend, legend_width);
        }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        self.render_title_row(Rect { height: 1, ..inner }, buf);
        if inner.height >= 2 {
            let tabs_area = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            ViewTabs::new(self.active).render(tabs_area, buf);
        }
    }
}

/// "Data Flow View · Query & Ingestion Paths"
pub struct ViewHeading {
    active: ViewMode,
}

impl ViewHeading {
    pub fn new(active: ViewMode) -> Self {
        Self { active }
    }
}

impl Widget for ViewHeading {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.active.heading(), styles::text_bright()),
            Span::styled(" · ", styles::text_muted()),
            Span::styled(self.active.description(), styles::text_secondary()),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use druidscope_app::config::IconMode;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_header_shows_title_legend_and_tabs() {
        let mut term = TestTerminal::with_size(120, 4);
        term.render_widget(MainHeader::new(ViewMode::Infrastructure, icons()), term.area());

        assert!(term.line_contains(1, "Apache Druid on AWS"));
        assert!(term.line_contains(1, "Production Analytics Infrastructure"));
        assert!(term.line_contains(1, "Active"));
        assert!(term.line_contains(1, "AWS Service"));
        assert!(term.line_contains(2, "Druid Cluster"));
    }

    #[test]
    fn test_narrow_header_drops_legend() {
        let mut term = TestTerminal::with_size(60, 4);
        term.render_widget(MainHeader::new(ViewMode::Infrastructure, icons()), term.area());

        assert!(term.line_contains(1, "Apache Druid on AWS"));
        assert!(!term.line_contains(1, "AWS Service"));
    }

    #[test]
    fn test_spinner_frame_changes_logo() {
        let mut first = TestTerminal::with_size(120, 4);
        first.render_widget(MainHeader::new(ViewMode::Deployment, icons()), first.area());
        let mut second = TestTerminal::with_size(120, 4);
        second.render_widget(
            MainHeader::new(ViewMode::Deployment, icons()).spinner_frame(1),
            second.area(),
        );

        assert_ne!(first.cell_at(2, 1), second.cell_at(2, 1));
    }

    #[test]
    fn test_view_heading() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(ViewHeading::new(ViewMode::DataFlow), term.area());
        assert!(term.buffer_contains("Data Flow View · Query & Ingestion Paths"));
    }
}
