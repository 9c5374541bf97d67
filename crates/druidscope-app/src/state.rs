//! Application state (Model in TEA pattern)

use druidscope_core::catalog;
use druidscope_core::{ServiceRecord, Status, ViewDiagram, ViewMode};

use crate::config::Settings;
use crate::reveal::{RevealClock, TICK_MS};
use crate::viewport::ViewportState;

/// How long a status-bar notice stays up.
pub const NOTICE_MS: u64 = 4_000;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UiMode {
    /// Diagram with card selection
    #[default]
    Normal,
    /// Detail popover for the selected card
    Details,
    /// Key binding overlay
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Transient status-bar message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    ticks_left: u64,
}

impl Notice {
    pub fn new(text: impl Into<String>, level: NoticeLevel) -> Self {
        Self {
            text: text.into(),
            level,
            ticks_left: NOTICE_MS / TICK_MS,
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// The active-view selector
    pub active_view: ViewMode,

    pub ui_mode: UiMode,

    /// Index into the active diagram's `cards()`
    pub selected_card: usize,

    /// Scroll offset inside the detail popover
    pub detail_scroll: u16,

    pub viewport: ViewportState,

    pub reveal: RevealClock,

    pub settings: Settings,

    pub notice: Option<Notice>,

    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state honoring `initial_view` and `animations` from settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            active_view: settings.ui.initial_view,
            ui_mode: UiMode::Normal,
            selected_card: 0,
            detail_scroll: 0,
            viewport: ViewportState::default(),
            reveal: RevealClock::new(settings.ui.animations),
            settings,
            notice: None,
            quitting: false,
        }
    }

    // ─────────────────────────────────────────────────────────
    // View selection
    // ─────────────────────────────────────────────────────────

    /// Switch views.
    ///
    /// Re-selecting the active view leaves everything untouched, including the
    /// entrance animation. Any other view starts at its first card, scrolled
    /// to the top, with the entrance sequence restarted and no popover open.
    pub fn select_view(&mut self, mode: ViewMode) {
        if mode == self.active_view {
            return;
        }
        tracing::debug!("Switching view {} -> {}", self.active_view, mode);
        self.active_view = mode;
        self.selected_card = 0;
        self.detail_scroll = 0;
        self.viewport.reset();
        self.reveal.restart();
        if self.ui_mode == UiMode::Details {
            self.ui_mode = UiMode::Normal;
        }
    }

    pub fn diagram(&self) -> &'static ViewDiagram {
        catalog::diagram(self.active_view)
    }

    pub fn cards(&self) -> Vec<&'static ServiceRecord> {
        self.diagram().cards()
    }

    pub fn card_count(&self) -> usize {
        self.diagram().card_count()
    }

    pub fn selected_record(&self) -> Option<&'static ServiceRecord> {
        self.cards().get(self.selected_card).copied()
    }

    /// Status shown for a card after configured overrides.
    pub fn status_for(&self, record: &ServiceRecord) -> Status {
        self.settings.status_for(record)
    }

    // ─────────────────────────────────────────────────────────
    // Card selection
    // ─────────────────────────────────────────────────────────

    pub fn select_card(&mut self, index: usize) {
        let count = self.card_count();
        if count == 0 {
            return;
        }
        let index = index.min(count - 1);
        if index != self.selected_card {
            self.selected_card = index;
            self.detail_scroll = 0;
        }
        self.viewport.follow_selection = true;
    }

    pub fn select_next_card(&mut self) {
        let count = self.card_count();
        if count > 0 {
            self.select_card((self.selected_card + 1) % count);
        }
    }

    pub fn select_previous_card(&mut self) {
        let count = self.card_count();
        if count > 0 {
            self.select_card((self.selected_card + count - 1) % count);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Popovers
    // ─────────────────────────────────────────────────────────

    pub fn open_details(&mut self) {
        if self.selected_record().is_some() {
            self.detail_scroll = 0;
            self.ui_mode = UiMode::Details;
        }
    }

    pub fn close_details(&mut self) {
        if self.ui_mode == UiMode::Details {
            self.ui_mode = UiMode::Normal;
        }
    }

    pub fn toggle_help(&mut self) {
        self.ui_mode = match self.ui_mode {
            UiMode::Help => UiMode::Normal,
            _ => UiMode::Help,
        };
    }

    // ─────────────────────────────────────────────────────────
    // Notices and lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn set_notice(&mut self, text: impl Into<String>, level: NoticeLevel) {
        self.notice = Some(Notice::new(text, level));
    }

    /// Advance animation time and expire notices.
    pub fn tick(&mut self) {
        self.reveal.tick();
        if let Some(notice) = &mut self.notice {
            notice.ticks_left = notice.ticks_left.saturating_sub(1);
            if notice.ticks_left == 0 {
                self.notice = None;
            }
        }
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}
