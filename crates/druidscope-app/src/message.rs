//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use druidscope_core::ViewMode;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for animation timing (every 50ms)
    Tick,

    /// Quit the application (q, Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // View Selection
    // ─────────────────────────────────────────────────────────
    /// Switch to a view. Selecting the active view is a no-op.
    SelectView(ViewMode),
    NextView,
    PreviousView,

    // ─────────────────────────────────────────────────────────
    // Card Selection
    // ─────────────────────────────────────────────────────────
    SelectNextCard,
    SelectPreviousCard,
    SelectFirstCard,
    SelectLastCard,

    // ─────────────────────────────────────────────────────────
    // Detail Popover
    // ─────────────────────────────────────────────────────────
    /// Expand the selected card into its detail popover
    OpenDetails,
    CloseDetails,
    DetailScrollUp,
    DetailScrollDown,

    // ─────────────────────────────────────────────────────────
    // Diagram Scrolling
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Documentation Links
    // ─────────────────────────────────────────────────────────
    /// Open the selected card's documentation link in a browser
    OpenDocs,
    /// The browser could not be launched
    DocsOpenFailed { url: String, error: String },

    // ─────────────────────────────────────────────────────────
    // Display Toggles
    // ─────────────────────────────────────────────────────────
    ToggleHelp,
    /// Switch between Unicode and Nerd Font glyphs
    ToggleIcons,
    /// Enable or disable entrance and pulse animations
    ToggleAnimations,
}
