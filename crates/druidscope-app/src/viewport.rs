//! Vertical scroll state of the diagram canvas.
//!
//! The renderer reports the laid-out document height, the visible height and
//! where each card ended up; the handlers move the offset. When
//! `follow_selection` is set the next layout scrolls the selected card into
//! view and clears the flag, so manual scrolling is never fought.

/// Vertical extent of a laid-out card: first row and height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardSpan {
    pub top: u16,
    pub height: u16,
}

impl CardSpan {
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewportState {
    /// First visible document row
    pub offset: u16,
    /// Scroll to the selected card on the next layout
    pub follow_selection: bool,
    /// Height of the laid-out document
    pub content_height: u16,
    /// Height of the visible window
    pub viewport_height: u16,
    /// Card positions from the last layout, indexed like `ViewDiagram::cards()`
    pub card_spans: Vec<CardSpan>,
}

impl ViewportState {
    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn scroll_up(&mut self, n: u16) {
        self.offset = self.offset.saturating_sub(n);
        self.follow_selection = false;
    }

    pub fn scroll_down(&mut self, n: u16) {
        self.offset = self.offset.saturating_add(n).min(self.max_offset());
        self.follow_selection = false;
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page_size());
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page_size());
    }

    fn page_size(&self) -> u16 {
        self.viewport_height.saturating_sub(1).max(1)
    }

    /// Back to the top, dropping the previous layout.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.follow_selection = false;
        self.card_spans.clear();
    }

    /// Record a fresh layout and apply a pending follow request.
    pub fn sync(
        &mut self,
        content_height: u16,
        viewport_height: u16,
        card_spans: Vec<CardSpan>,
        selected: usize,
    ) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.card_spans = card_spans;
        if self.follow_selection {
            self.reveal_card(selected);
            self.follow_selection = false;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    /// Minimal scroll that brings card `index` fully into view (or its top,
    /// when the card is taller than the window).
    pub fn reveal_card(&mut self, index: usize) {
        let Some(span) = self.card_spans.get(index).copied() else {
            return;
        };
        if span.top < self.offset {
            self.offset = span.top;
        } else if span.bottom() > self.offset.saturating_add(self.viewport_height) {
            let aligned_bottom = span.bottom().saturating_sub(self.viewport_height);
            self.offset = aligned_bottom.min(span.top);
        }
    }
}
