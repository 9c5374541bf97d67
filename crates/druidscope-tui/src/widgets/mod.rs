//! Widget components for the TUI

pub mod canvas;
pub mod flow;
mod footer;
mod header;
mod help;
pub mod layer;
pub mod modal_overlay;
mod popover;
pub mod service_card;
mod status_bar;
mod tabs;
pub mod text;
pub mod tiles;

pub use canvas::{Document, ViewCanvas};
pub use flow::{ConnectionLine, DataFlowArrow, EndpointNode, FlowNote, StepSequence};
pub use footer::FooterStats;
pub use header::{MainHeader, ViewHeading};
pub use help::HelpOverlay;
pub use layer::{GroupFrame, LayerBlock};
pub use popover::DetailPopover;
pub use service_card::ServiceCard;
pub use status_bar::StatusBar;
pub use tabs::ViewTabs;
pub use tiles::{GridHeading, TileCard};
