//! # Static Catalog
//!
//! Hard-coded descriptive content for the four diagram views, plus the page
//! metadata, legend and footer statistics that frame them.
//!
//! Nothing here is fetched or computed. A missing field is an authoring error
//! caught by [`validate`], which the binary runs once at startup and the test
//! suite runs on every build.

mod cluster;
mod data_flow;
mod deployment;
mod infrastructure;

use serde::Serialize;
use url::Url;

use crate::error::{Error, Result};
use crate::icons::IconKind;
use crate::types::{FlowStep, Row, Section, ServiceRecord, Tile, TileGrid, Tone, ViewDiagram, ViewMode};

// ── Page framing ──────────────────────────────────────────────────────────────

/// Title and metadata strings of the rendered page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PageMeta {
    pub title: &'static str,
    pub header: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

pub const PAGE: PageMeta = PageMeta {
    title: "Apache Druid on AWS | Production Analytics Infrastructure",
    header: "Apache Druid on AWS",
    subtitle: "Production Analytics Infrastructure",
    description: "Interactive architecture diagram for Apache Druid deployment on AWS EKS. \
                  Built with CDK, Helm, PostgreSQL, MSK, and S3 deep storage.",
    keywords: &[
        "Apache Druid",
        "AWS",
        "EKS",
        "Kubernetes",
        "Architecture",
        "CDK",
        "Helm",
        "Analytics",
        "OLAP",
    ],
};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub tone: Tone,
    /// What the marker means, for the help overlay and export.
    pub caption: &'static str,
}

pub const LEGEND: &[LegendEntry] = &[
    LegendEntry {
        label: "Active",
        tone: Tone::Green,
        caption: "Services that are running",
    },
    LegendEntry {
        label: "Data Flow",
        tone: Tone::Teal,
        caption: "Data flow direction",
    },
    LegendEntry {
        label: "AWS Service",
        tone: Tone::Orange,
        caption: "AWS managed services",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FooterStat {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: IconKind,
}

pub const FOOTER_STATS: &[FooterStat] = &[
    FooterStat {
        label: "Druid Version",
        value: "35.0.0",
        icon: IconKind::Druid,
    },
    FooterStat {
        label: "CDK Stacks",
        value: "6",
        icon: IconKind::Cdk,
    },
    FooterStat {
        label: "S3 Buckets",
        value: "3",
        icon: IconKind::S3,
    },
    FooterStat {
        label: "EKS Addons",
        value: "8+",
        icon: IconKind::Kubernetes,
    },
    FooterStat {
        label: "Security Layers",
        value: "5",
        icon: IconKind::Tls,
    },
    FooterStat {
        label: "Availability Zones",
        value: "3",
        icon: IconKind::Vpc,
    },
];

// ── Lookup ────────────────────────────────────────────────────────────────────

/// The static diagram for a view.
pub fn diagram(mode: ViewMode) -> &'static ViewDiagram {
    match mode {
        ViewMode::Infrastructure => &infrastructure::DIAGRAM,
        ViewMode::DruidCluster => &cluster::DIAGRAM,
        ViewMode::DataFlow => &data_flow::DIAGRAM,
        ViewMode::Deployment => &deployment::DIAGRAM,
    }
}

/// Every distinct card title in the catalog.
pub fn card_titles() -> Vec<&'static str> {
    let mut titles: Vec<&'static str> = ViewMode::ALL
        .into_iter()
        .flat_map(|mode| diagram(mode).cards())
        .map(|card| card.title)
        .collect();
    titles.sort_unstable();
    titles.dedup();
    titles
}

// ── Validation ────────────────────────────────────────────────────────────────

/// Check the authoring rules of the whole catalog.
///
/// Required strings must be non-empty, every view must contain at least one
/// selectable card, flows need at least one step, and documentation links
/// must be absolute http(s) URLs.
pub fn validate() -> Result<()> {
    for mode in ViewMode::ALL {
        let diagram = diagram(mode);
        if diagram.mode != mode {
            return Err(Error::catalog(
                mode.id(),
                format!("registered under the wrong view ({})", diagram.mode.id()),
            ));
        }
        if diagram.cards().is_empty() {
            return Err(Error::catalog(mode.id(), "view has no cards"));
        }
        validate_sections(mode.id(), diagram.sections)?;
    }
    tracing::debug!("Catalog validated: {} distinct cards", card_titles().len());
    Ok(())
}

fn validate_sections(path: &str, sections: &[Section]) -> Result<()> {
    for section in sections {
        match section {
            Section::Group(group) => {
                let path = format!("{path} / {}", group.label);
                require(&path, "group label", group.label)?;
                validate_sections(&path, group.sections)?;
            }
            Section::Tiles(grid) => validate_tiles(path, grid)?,
            Section::Layer(layer) => {
                let path = format!("{path} / {}", layer.title);
                require(&path, "layer title", layer.title)?;
                require(&path, "layer subtitle", layer.subtitle)?;
                if layer.rows.is_empty() {
                    return Err(Error::catalog(path, "layer has no rows"));
                }
                for row in layer.rows {
                    validate_row(&path, row)?;
                }
            }
        }
    }
    Ok(())
}

fn validate_row(path: &str, row: &Row) -> Result<()> {
    match row {
        Row::Cards { columns, cards } => {
            if *columns == 0 {
                return Err(Error::catalog(path, "card grid with zero columns"));
            }
            cards.iter().try_for_each(|card| validate_card(path, card))
        }
        Row::Flow { steps } => {
            if steps.is_empty() {
                return Err(Error::catalog(path, "empty flow"));
            }
            for step in steps.iter() {
                match step {
                    FlowStep::Card(card) => validate_card(path, card)?,
                    FlowStep::Endpoint(endpoint) => require(path, "endpoint label", endpoint.label)?,
                    FlowStep::Note { text, .. } => require(path, "note", text)?,
                    FlowStep::Arrow(_) | FlowStep::Link(_) => {}
                }
            }
            Ok(())
        }
        Row::Tiles(grid) => validate_tiles(path, grid),
        Row::Steps { title, steps, .. } => {
            require(path, "steps title", title)?;
            steps.iter().try_for_each(|step| require(path, "step", step))
        }
    }
}

fn validate_tiles(path: &str, grid: &TileGrid) -> Result<()> {
    let path = format!("{path} / {}", grid.title);
    require(&path, "tile grid title", grid.title)?;
    if grid.columns == 0 || grid.tiles.is_empty() {
        return Err(Error::catalog(path, "tile grid is empty"));
    }
    grid.tiles
        .iter()
        .try_for_each(|tile: &Tile| require(&path, "tile name", tile.name))
}

fn validate_card(path: &str, card: &ServiceRecord) -> Result<()> {
    let path = format!("{path} / {}", card.title);
    require(&path, "card title", card.title)?;
    require(&path, "card description", card.description)?;
    if card.details.is_empty() {
        return Err(Error::catalog(path, "card has no details"));
    }
    for detail in card.details {
        require(&path, "detail", detail)?;
    }
    for metric in card.metrics {
        require(&path, "metric label", metric.label)?;
        require(&path, "metric value", metric.value)?;
    }
    for tag in card.tags {
        require(&path, "tag", tag)?;
    }
    if let Some(docs) = card.docs_url {
        let url = Url::parse(docs)
            .map_err(|e| Error::catalog(path.clone(), format!("invalid docs URL {docs}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::catalog(
                path,
                format!("docs URL must be http(s): {docs}"),
            ));
        }
    }
    Ok(())
}

fn require(path: &str, what: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::catalog(path, format!("{what} is empty")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_validates() {
        validate().unwrap();
    }

    #[test]
    fn test_each_view_maps_to_its_own_diagram() {
        for mode in ViewMode::ALL {
            assert_eq!(diagram(mode).mode, mode);
        }
    }

    #[test]
    fn test_card_counts_per_view() {
        assert_eq!(diagram(ViewMode::Infrastructure).card_count(), 13);
        assert_eq!(diagram(ViewMode::DruidCluster).card_count(), 10);
        assert_eq!(diagram(ViewMode::DataFlow).card_count(), 15);
        assert_eq!(diagram(ViewMode::Deployment).card_count(), 7);
    }

    #[test]
    fn test_layer_titles_are_unique_per_view() {
        for mode in ViewMode::ALL {
            let layers = diagram(mode).layers();
            let titles: HashSet<_> = layers.iter().map(|l| l.title).collect();
            assert_eq!(titles.len(), layers.len(), "{}", mode.id());
        }
    }

    #[test]
    fn test_infrastructure_is_wrapped_in_aws_cloud() {
        let sections = diagram(ViewMode::Infrastructure).sections;
        assert!(matches!(
            sections,
            [Section::Group(group)] if group.label == "AWS Cloud"
        ));
    }

    #[test]
    fn test_security_layer_sits_outside_cluster_group() {
        let sections = diagram(ViewMode::DruidCluster).sections;
        assert_eq!(sections.len(), 2);
        assert!(matches!(
            sections[0],
            Section::Group(group) if group.badge == Some("ZooKeeper-less (K8s Discovery)")
        ));
        assert!(matches!(
            sections[1],
            Section::Layer(layer) if layer.title == "Security Configuration"
        ));
    }

    #[test]
    fn test_nested_stack_names_display_without_suffix() {
        let layers = diagram(ViewMode::Deployment).layers();
        let Row::Tiles(grid) = layers[0].rows[0] else {
            panic!("expected nested stack tiles first");
        };
        let names: Vec<_> = grid.tiles.iter().map(|t| t.short_name()).collect();
        assert_eq!(
            names,
            vec![
                "Network",
                "Eks",
                "Addons",
                "ObservabilityAddonsStack",
                "DruidSetup",
                "Druid"
            ]
        );
    }

    #[test]
    fn test_card_titles_are_sorted_and_distinct() {
        let titles = card_titles();
        let mut sorted = titles.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(titles, sorted);
        assert!(titles.contains(&"Aurora PostgreSQL"));
    }

    #[test]
    fn test_footer_stats_snapshot() {
        let line: Vec<String> = FOOTER_STATS
            .iter()
            .map(|s| format!("{} {}", s.value, s.label))
            .collect();
        insta::assert_snapshot!(line.join(" | "), @"35.0.0 Druid Version | 6 CDK Stacks | 3 S3 Buckets | 8+ EKS Addons | 5 Security Layers | 3 Availability Zones");
    }

    #[test]
    fn test_legend_order() {
        let labels: Vec<_> = LEGEND.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Active", "Data Flow", "AWS Service"]);
        assert!(LEGEND.iter().all(|l| !l.caption.is_empty()));
    }

    #[test]
    fn test_require_rejects_blank() {
        assert!(require("x", "title", "  ").is_err());
        assert!(require("x", "title", "Broker").is_ok());
    }
}
