//! Configuration file parsing for druidscope
//!
//! Settings live in `<config_dir>/druidscope/config.toml` unless a path is
//! given on the command line.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, generate_default_config, init_config_file, load_settings,
    load_settings_from,
};
pub use types::*;
