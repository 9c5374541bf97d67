//! Test utilities for TUI rendering verification
//!
//! Widgets and whole screens are rendered into ratatui's `TestBackend` and
//! asserted on as text, cell by cell when colors matter.
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.render_widget(ViewHeading::new(ViewMode::DataFlow), term.area());
//! assert!(term.buffer_contains("Data Flow View"));
//! ```

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{StatefulWidget, Widget};
use ratatui::{Frame, Terminal};

/// A common laptop terminal
pub const TEST_WIDTH: u16 = 120;
pub const TEST_HEIGHT: u16 = 36;

/// Small terminal for checking that nothing panics or overlaps
pub const COMPACT_WIDTH: u16 = 50;
pub const COMPACT_HEIGHT: u16 = 14;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        self.buffer().area
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.draw_with(|frame| frame.render_widget(widget, area));
    }

    pub fn render_stateful_widget<W, S>(&mut self, widget: W, area: Rect, state: &mut S)
    where
        W: StatefulWidget<State = S>,
    {
        self.draw_with(|frame| frame.render_stateful_widget(widget, area, state));
    }

    /// Draw a whole frame, e.g. `render::view`.
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        line_content(self.buffer(), line).contains(text)
    }

    pub fn cell_at(&self, x: u16, y: u16) -> Option<&str> {
        let area = self.buffer().area;
        (x < area.width && y < area.height).then(|| self.buffer()[(x, y)].symbol())
    }

    /// Find the first cell showing `symbol`, scanning rows top to bottom.
    pub fn find_symbol(&self, symbol: &str) -> Option<(u16, u16)> {
        let area = self.buffer().area;
        area.positions()
            .find(|p| self.buffer()[(p.x, p.y)].symbol() == symbol)
            .map(|p| (p.x, p.y))
    }

    /// Every row, newline separated.
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        (0..buffer.area.height)
            .map(|y| line_content(buffer, y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn line_content(buffer: &Buffer, line: u16) -> String {
    if line >= buffer.area.height {
        return String::new();
    }
    (0..buffer.area.width)
        .map(|x| buffer[(x, line)].symbol())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_sizes() {
        assert_eq!(TestTerminal::new().area(), Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT));
        assert_eq!(
            TestTerminal::compact().area(),
            Rect::new(0, 0, COMPACT_WIDTH, COMPACT_HEIGHT)
        );
    }

    #[test]
    fn test_text_queries() {
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(Paragraph::new("Deep Storage"), term.area());

        assert!(term.buffer_contains("Deep Storage"));
        assert!(term.line_contains(0, "Deep"));
        assert!(!term.line_contains(1, "Deep"));
        assert_eq!(term.cell_at(0, 0), Some("D"));
        assert_eq!(term.cell_at(20, 0), None);
        assert_eq!(term.find_symbol("S"), Some((5, 0)));
        assert_eq!(term.content().lines().count(), 3);
    }
}
