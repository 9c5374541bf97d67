//! druidscope-app - Application state and orchestration for druidscope
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the view container state, key mapping, the entrance animation
//! clock, scroll state, configuration loading, the one side effect (opening a
//! documentation link) and the headless catalog export. Nothing in here knows
//! about the terminal.

pub mod actions;
pub mod config;
pub mod export;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod reveal;
pub mod signals;
pub mod state;
pub mod viewport;

// Re-export primary types
pub use config::{IconMode, Settings};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use reveal::RevealClock;
pub use state::{AppState, Notice, NoticeLevel, UiMode};
pub use viewport::{CardSpan, ViewportState};
