//! Centralized theme for the diagram.
//!
//! This module provides:
//! - `palette` - Raw color constants, including the tone families
//! - `styles` - Semantic style builder functions
//! - `icons` - Glyphs for every diagram symbol, Unicode or Nerd Font
pub mod icons;
pub mod palette;
pub mod styles;
