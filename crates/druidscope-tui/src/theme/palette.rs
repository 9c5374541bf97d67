//! Color palette.
//!
//! The AWS-console look of the diagram: a near-black canvas, slate borders,
//! and one accent family per layer tone.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(10, 12, 16);
pub const CARD_BG: Color = Color::Rgb(18, 21, 28);
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(45, 51, 59);
pub const BORDER_ACTIVE: Color = Color::Rgb(88, 166, 255);
/// Border of a card that has not entered yet
pub const BORDER_PLACEHOLDER: Color = Color::Rgb(28, 32, 38);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(88, 166, 255);
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(201, 209, 217);
pub const TEXT_SECONDARY: Color = Color::Rgb(125, 133, 144);
pub const TEXT_MUTED: Color = Color::Rgb(72, 79, 88);
pub const TEXT_BRIGHT: Color = Color::Rgb(240, 246, 252);

// --- Status dots ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8);
pub const STATUS_RED: Color = Color::Rgb(244, 63, 94);

// --- Tone families (layer borders, badges, endpoints) ---
pub const TONE_ORANGE: Color = Color::Rgb(255, 153, 0);
pub const TONE_TEAL: Color = Color::Rgb(20, 184, 166);
pub const TONE_PURPLE: Color = Color::Rgb(168, 85, 247);
pub const TONE_BLUE: Color = Color::Rgb(59, 130, 246);
pub const TONE_GREEN: Color = Color::Rgb(34, 197, 94);
pub const TONE_PINK: Color = Color::Rgb(236, 72, 153);
pub const TONE_RED: Color = Color::Rgb(239, 68, 68);
pub const TONE_YELLOW: Color = Color::Rgb(234, 179, 8);
pub const TONE_CYAN: Color = Color::Rgb(6, 182, 212);
pub const TONE_SLATE: Color = Color::Rgb(100, 116, 139);

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(5, 6, 8);
