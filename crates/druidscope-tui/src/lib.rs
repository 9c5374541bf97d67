//! druidscope-tui - Terminal UI for druidscope
//!
//! Renders the architecture diagram with ratatui: the page header and view
//! tabs, the scrollable diagram canvas with its cards, layers, flows and
//! tiles, the detail popover, and the help overlay. State and key handling
//! live in `druidscope-app`; this crate only draws and polls the terminal.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
