//! Semantic style builders.

use druidscope_core::{Status, Tone};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::border;
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default()
        .fg(palette::BORDER_ACTIVE)
        .add_modifier(Modifier::BOLD)
}

pub fn border_placeholder() -> Style {
    Style::default().fg(palette::BORDER_PLACEHOLDER)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

/// Key names in hints and the help overlay
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on accent" for the active view tab
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Diagram colors ---

/// Indicator dot color. Fixed per status, independent of theme or tone.
pub fn status_color(status: Status) -> Color {
    match status {
        Status::Active => palette::STATUS_GREEN,
        Status::Provisioning => palette::STATUS_YELLOW,
        Status::Degraded => palette::STATUS_RED,
    }
}

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Orange => palette::TONE_ORANGE,
        Tone::Teal => palette::TONE_TEAL,
        Tone::Purple => palette::TONE_PURPLE,
        Tone::Blue => palette::TONE_BLUE,
        Tone::Green => palette::TONE_GREEN,
        Tone::Pink => palette::TONE_PINK,
        Tone::Red => palette::TONE_RED,
        Tone::Yellow => palette::TONE_YELLOW,
        Tone::Cyan => palette::TONE_CYAN,
        Tone::Slate => palette::TONE_SLATE,
    }
}

pub fn tone(tone: Tone) -> Style {
    Style::default().fg(tone_color(tone))
}

pub fn tone_bold(t: Tone) -> Style {
    tone(t).add_modifier(Modifier::BOLD)
}

/// Small pill such as "Spot" or "Storage"
pub fn badge(t: Tone) -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(tone_color(t))
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---

/// Rounded card block.
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

/// Layer frame in its tone color.
pub fn layer_block(t: Tone) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(tone(t))
}

/// Dashed group container ("AWS Cloud", the Druid cluster).
pub const DASHED: border::Set = border::Set {
    top_left: "┌",
    top_right: "┐",
    bottom_left: "└",
    bottom_right: "┘",
    vertical_left: "┆",
    vertical_right: "┆",
    horizontal_top: "┄",
    horizontal_bottom: "┄",
};

pub fn group_block(t: Tone) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(DASHED)
        .border_style(tone(t))
}

pub fn modal_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}
