//! # Diagram Domain Types
//!
//! The vocabulary shared by the static catalog, the application state and the
//! renderer. Every value here is a compile-time constant: records borrow
//! `'static` strings and slices, so the whole catalog lives in read-only data
//! and a card can be handed around as `&'static ServiceRecord`.
//!
//! The document structure of a view is:
//!
//! ```text
//! ViewDiagram
//! └── Section (Group | Layer | Tiles)
//!     └── Layer
//!         └── Row (Cards | Flow | Tiles | Steps)
//!             └── ServiceRecord / FlowStep / Tile
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::icons::IconKind;

// ── ViewMode ──────────────────────────────────────────────────────────────────

/// The active-view selector: one of four fixed diagram compositions.
///
/// There are no transition restrictions between views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    #[default]
    Infrastructure,
    DruidCluster,
    DataFlow,
    Deployment,
}

impl ViewMode {
    /// All views in tab order.
    pub const ALL: [ViewMode; 4] = [
        ViewMode::Infrastructure,
        ViewMode::DruidCluster,
        ViewMode::DataFlow,
        ViewMode::Deployment,
    ];

    /// Stable identifier used on the command line and in config files.
    pub fn id(self) -> &'static str {
        match self {
            ViewMode::Infrastructure => "infrastructure",
            ViewMode::DruidCluster => "druid-cluster",
            ViewMode::DataFlow => "data-flow",
            ViewMode::Deployment => "deployment",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Infrastructure => "Infrastructure",
            ViewMode::DruidCluster => "Druid Cluster",
            ViewMode::DataFlow => "Data Flow",
            ViewMode::Deployment => "Deployment",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ViewMode::Infrastructure => "AWS Cloud Resources",
            ViewMode::DruidCluster => "Apache Druid Components",
            ViewMode::DataFlow => "Query & Ingestion Paths",
            ViewMode::Deployment => "CDK & Helm Pipeline",
        }
    }

    /// Heading shown above the active diagram, e.g. "Data Flow View".
    pub fn heading(self) -> String {
        format!("{} View", self.label())
    }

    /// Position in [`ViewMode::ALL`].
    pub fn index(self) -> usize {
        match self {
            ViewMode::Infrastructure => 0,
            ViewMode::DruidCluster => 1,
            ViewMode::DataFlow => 2,
            ViewMode::Deployment => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next view, wrapping from the last back to the first.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous view, wrapping from the first to the last.
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|mode| mode.id() == needle)
            .ok_or_else(|| Error::unknown_view(s))
    }
}

// ── Status ────────────────────────────────────────────────────────────────────

/// Health marker of a card, drawn as a colored dot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Provisioning,
    Degraded,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Provisioning => "Provisioning",
            Status::Degraded => "Degraded",
        }
    }

    /// Provisioning dots pulse while the rest stay solid.
    pub fn pulses(self) -> bool {
        matches!(self, Status::Provisioning)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Tone ──────────────────────────────────────────────────────────────────────

/// Accent color family of a layer, group, badge or endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Orange,
    Teal,
    Purple,
    Blue,
    Green,
    Pink,
    Red,
    Yellow,
    Cyan,
    Slate,
}

// ── CardSize ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSize {
    #[serde(rename = "sm")]
    Small,
    #[default]
    #[serde(rename = "md")]
    Medium,
    #[serde(rename = "lg")]
    Large,
}

impl CardSize {
    /// Minimum card width in terminal cells.
    pub fn min_width(self) -> u16 {
        match self {
            CardSize::Small => 20,
            CardSize::Medium => 24,
            CardSize::Large => 30,
        }
    }
}

// ── ServiceRecord ─────────────────────────────────────────────────────────────

/// A key/value pair shown in the metrics grid of a detail popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

/// The description record behind every card.
///
/// Built with the `const` builder methods so catalog entries can be declared
/// as `const` items:
///
/// ```
/// use druidscope_core::{CardSize, IconKind, ServiceRecord};
///
/// const ROUTER: ServiceRecord = ServiceRecord::new(IconKind::Router, "Router", "API gateway")
///     .details(&["Request routing", "Port 9088 (external)"])
///     .size(CardSize::Large)
///     .delay(500);
///
/// assert_eq!(ROUTER.details.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceRecord {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
    /// Feature bullets. Collapsed cards show a prefix, the popover shows all.
    pub details: &'static [&'static str],
    pub metrics: &'static [Metric],
    pub tags: &'static [&'static str],
    pub docs_url: Option<&'static str>,
    pub status: Status,
    pub size: CardSize,
    /// Entrance delay after the view is selected.
    pub delay_ms: u32,
}

impl ServiceRecord {
    pub const fn new(icon: IconKind, title: &'static str, description: &'static str) -> Self {
        Self {
            icon,
            title,
            description,
            details: &[],
            metrics: &[],
            tags: &[],
            docs_url: None,
            status: Status::Active,
            size: CardSize::Medium,
            delay_ms: 0,
        }
    }

    pub const fn details(self, details: &'static [&'static str]) -> Self {
        Self { details, ..self }
    }

    pub const fn metrics(self, metrics: &'static [Metric]) -> Self {
        Self { metrics, ..self }
    }

    pub const fn tags(self, tags: &'static [&'static str]) -> Self {
        Self { tags, ..self }
    }

    pub const fn docs(self, url: &'static str) -> Self {
        Self {
            docs_url: Some(url),
            ..self
        }
    }

    pub const fn status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    pub const fn size(self, size: CardSize) -> Self {
        Self { size, ..self }
    }

    pub const fn delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// The first `n` details and the number of details left out.
    pub fn summary(&self, n: usize) -> (&'static [&'static str], usize) {
        let shown = n.min(self.details.len());
        (&self.details[..shown], self.details.len() - shown)
    }
}

// ── Flow primitives ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowDirection {
    #[default]
    Right,
    Down,
    Left,
    Up,
}

/// A directional arrow between two flow steps, optionally labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Arrow {
    pub label: Option<&'static str>,
    pub direction: ArrowDirection,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineDirection {
    #[default]
    Horizontal,
    Vertical,
    Diagonal,
}

/// A connector line; animated lines carry a travelling dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Connection {
    pub direction: LineDirection,
    pub animated: bool,
    pub label: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointKind {
    Client,
    Results,
    Source,
    Files,
}

/// Round start or end node of a flow (the client, the data source, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    /// Serialized as `shape`; `kind` is the flow step tag.
    #[serde(rename = "shape")]
    pub kind: EndpointKind,
    pub label: &'static str,
    pub caption: &'static str,
    pub tone: Tone,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FlowStep {
    Card(ServiceRecord),
    Arrow(Arrow),
    Link(Connection),
    Endpoint(Endpoint),
    /// `hint` says when the note applies ("On cache miss").
    Note {
        text: &'static str,
        hint: Option<&'static str>,
    },
}

// ── Tiles ─────────────────────────────────────────────────────────────────────

/// Small colored label such as "Spot" or "Storage".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub tone: Tone,
}

/// One annotation line inside a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileLine {
    /// Colored bullet in front of the text.
    pub dot: Option<Tone>,
    /// Dim prefix such as "Depends:".
    pub label: Option<&'static str>,
    pub text: &'static str,
    /// Color of `text`; plain when `None`.
    pub accent: Option<Tone>,
    /// Longer explanation, kept for export and the tile's hint row.
    pub hint: Option<&'static str>,
}

/// A compact, non-selectable box (addons, node pools, nested stacks...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub icon: Option<IconKind>,
    pub name: &'static str,
    pub description: &'static str,
    pub badge: Option<Badge>,
    pub lines: &'static [TileLine],
    pub delay_ms: u32,
}

impl Tile {
    /// Display name: CDK nested stacks drop their `NestedStack` suffix.
    pub fn short_name(&self) -> &'static str {
        self.name
            .strip_suffix("NestedStack")
            .filter(|s| !s.is_empty())
            .unwrap_or(self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileGrid {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub icon: Option<IconKind>,
    pub columns: u16,
    pub tiles: &'static [Tile],
}

// ── Document structure ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Row {
    /// A grid of cards.
    Cards {
        columns: u16,
        cards: &'static [ServiceRecord],
    },
    /// A left-to-right pipeline of cards, arrows and endpoints.
    Flow { steps: &'static [FlowStep] },
    Tiles(TileGrid),
    /// Numbered sequence such as the CDK deployment order.
    Steps {
        title: &'static str,
        steps: &'static [&'static str],
        delay_ms: u32,
    },
}

/// A titled horizontal band grouping related rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layer {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tone: Tone,
    pub delay_ms: u32,
    pub rows: &'static [Row],
}

/// Dashed container around several sections ("AWS Cloud", the Druid cluster).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Group {
    pub label: &'static str,
    pub badge: Option<&'static str>,
    pub tone: Tone,
    pub sections: &'static [Section],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Section {
    Group(Group),
    Layer(Layer),
    /// Free-standing tile box outside any layer.
    Tiles(TileGrid),
}

/// One complete view composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewDiagram {
    pub mode: ViewMode,
    pub sections: &'static [Section],
}

impl ViewDiagram {
    /// All cards in document order. The position in this list is the card's
    /// identity for selection.
    pub fn cards(&self) -> Vec<&'static ServiceRecord> {
        let mut out = Vec::new();
        collect_section_cards(self.sections, &mut out);
        out
    }

    /// All layers in document order, including those nested in groups.
    pub fn layers(&self) -> Vec<&'static Layer> {
        let mut out = Vec::new();
        collect_layers(self.sections, &mut out);
        out
    }

    pub fn card_count(&self) -> usize {
        self.cards().len()
    }
}

fn collect_section_cards(sections: &'static [Section], out: &mut Vec<&'static ServiceRecord>) {
    for section in sections {
        match section {
            Section::Group(group) => collect_section_cards(group.sections, out),
            Section::Tiles(_) => {}
            Section::Layer(layer) => {
                for row in layer.rows {
                    match row {
                        Row::Cards { cards, .. } => out.extend(cards.iter()),
                        Row::Flow { steps } => out.extend(steps.iter().filter_map(|s| match s {
                            FlowStep::Card(card) => Some(card),
                            _ => None,
                        })),
                        Row::Tiles(_) | Row::Steps { .. } => {}
                    }
                }
            }
        }
    }
}

fn collect_layers(sections: &'static [Section], out: &mut Vec<&'static Layer>) {
    for section in sections {
        match section {
            Section::Group(group) => collect_layers(group.sections, out),
            Section::Layer(layer) => out.push(layer),
            Section::Tiles(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_ids_round_trip_through_from_str() {
        for mode in ViewMode::ALL {
            assert_eq!(mode.id().parse::<ViewMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_view_mode_from_str_is_lenient_on_case_and_underscores() {
        assert_eq!(
            "Druid_Cluster".parse::<ViewMode>().unwrap(),
            ViewMode::DruidCluster
        );
        assert!("topology".parse::<ViewMode>().is_err());
    }

    #[test]
    fn test_view_mode_cycles_wrap() {
        assert_eq!(ViewMode::Deployment.next(), ViewMode::Infrastructure);
        assert_eq!(ViewMode::Infrastructure.previous(), ViewMode::Deployment);
        assert_eq!(ViewMode::DruidCluster.next(), ViewMode::DataFlow);
    }

    #[test]
    fn test_view_mode_index_matches_all() {
        for (i, mode) in ViewMode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), i);
            assert_eq!(ViewMode::from_index(i), Some(*mode));
        }
        assert_eq!(ViewMode::from_index(4), None);
    }

    #[test]
    fn test_view_mode_heading() {
        assert_eq!(ViewMode::DataFlow.heading(), "Data Flow View");
    }

    #[test]
    fn test_view_mode_serde_uses_ids() {
        let json = serde_json::to_string(&ViewMode::DruidCluster).unwrap();
        assert_eq!(json, "\"druid-cluster\"");
    }

    #[test]
    fn test_status_serde_lowercase() {
        let status: Status = serde_json::from_str("\"provisioning\"").unwrap();
        assert_eq!(status, Status::Provisioning);
        assert!(status.pulses());
        assert!(!Status::Degraded.pulses());
    }

    #[test]
    fn test_card_size_widths_increase() {
        assert!(CardSize::Small.min_width() < CardSize::Medium.min_width());
        assert!(CardSize::Medium.min_width() < CardSize::Large.min_width());
    }

    #[test]
    fn test_summary_clips_and_counts_hidden() {
        const CARD: ServiceRecord = ServiceRecord::new(IconKind::Broker, "Broker", "Query")
            .details(&["a", "b", "c", "d"]);
        let (shown, hidden) = CARD.summary(2);
        assert_eq!(shown, &["a", "b"]);
        assert_eq!(hidden, 2);

        let (shown, hidden) = CARD.summary(10);
        assert_eq!(shown.len(), 4);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn test_builder_defaults() {
        const CARD: ServiceRecord = ServiceRecord::new(IconKind::S3, "S3", "Storage");
        assert_eq!(CARD.status, Status::Active);
        assert_eq!(CARD.size, CardSize::Medium);
        assert_eq!(CARD.docs_url, None);
        assert!(CARD.details.is_empty());
    }

    #[test]
    fn test_tile_short_name_strips_nested_stack() {
        let tile = Tile {
            icon: None,
            name: "NetworkNestedStack",
            description: "VPC, Subnets, NAT",
            badge: None,
            lines: &[],
            delay_ms: 0,
        };
        assert_eq!(tile.short_name(), "Network");

        let tile = Tile {
            name: "ObservabilityAddonsStack",
            ..tile
        };
        assert_eq!(tile.short_name(), "ObservabilityAddonsStack");
    }

    #[test]
    fn test_cards_walk_groups_and_flows_in_order() {
        const A: ServiceRecord = ServiceRecord::new(IconKind::Vpc, "A", "a");
        const B: ServiceRecord = ServiceRecord::new(IconKind::Eks, "B", "b");
        const C: ServiceRecord = ServiceRecord::new(IconKind::S3, "C", "c");
        static DIAGRAM: ViewDiagram = ViewDiagram {
            mode: ViewMode::DataFlow,
            sections: &[
                Section::Group(Group {
                    label: "Outer",
                    badge: None,
                    tone: Tone::Orange,
                    sections: &[Section::Layer(Layer {
                        title: "First",
                        subtitle: "",
                        tone: Tone::Blue,
                        delay_ms: 0,
                        rows: &[Row::Cards {
                            columns: 2,
                            cards: &[A, B],
                        }],
                    })],
                }),
                Section::Layer(Layer {
                    title: "Second",
                    subtitle: "",
                    tone: Tone::Green,
                    delay_ms: 0,
                    rows: &[Row::Flow {
                        steps: &[
                            FlowStep::Note {
                                text: "start",
                                hint: None,
                            },
                            FlowStep::Card(C),
                        ],
                    }],
                }),
            ],
        };

        let titles: Vec<_> = DIAGRAM.cards().iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        let layers: Vec<_> = DIAGRAM.layers().iter().map(|l| l.title).collect();
        assert_eq!(layers, vec!["First", "Second"]);
    }
}
