//! # druidscope-core - Core Domain Types
//!
//! Foundation crate for druidscope. Provides the diagram data model, the icon
//! library, the static architecture catalog, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, url, toml, dirs).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ViewMode`] - The four switchable views
//! - [`ServiceRecord`] - Description record behind every card
//! - [`Status`] - Active / Provisioning / Degraded indicator
//! - [`Layer`], [`Section`], [`Row`], [`FlowStep`], [`TileGrid`] - Document structure
//!
//! ### Icons (`icons`)
//! - [`IconKind`] - Every symbol the diagram can draw, with brand colors
//!
//! ### Catalog (`catalog`)
//! - [`catalog::diagram()`] - Static diagram for a view
//! - [`catalog::validate()`] - Authoring checks over the whole catalog
//! - [`catalog::PAGE`], [`catalog::LEGEND`], [`catalog::FOOTER_STATS`] - Page framing
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `is_fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use druidscope_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod icons;
pub mod logging;
pub mod prelude;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use icons::IconKind;
pub use types::{
    Arrow, ArrowDirection, Badge, CardSize, Connection, Endpoint, EndpointKind, FlowStep, Group,
    Layer, LineDirection, Metric, Row, Section, ServiceRecord, Status, Tile, TileGrid, TileLine,
    Tone, ViewDiagram, ViewMode,
};
