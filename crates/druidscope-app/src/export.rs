//! Headless catalog export (`--export json`).
//!
//! Serializes the page framing and all four diagrams as one document, so the
//! catalog can be diffed or fed to other tools without opening the terminal.

use chrono::{DateTime, Utc};
use serde::Serialize;

use druidscope_core::catalog::{self, FooterStat, LegendEntry, PageMeta};
use druidscope_core::prelude::*;
use druidscope_core::{Section, ViewMode};

/// Everything the diagram shows, as plain data.
#[derive(Debug, Serialize)]
pub struct CatalogExport {
    pub generator: String,
    pub generated_at: DateTime<Utc>,
    pub page: PageMeta,
    pub legend: &'static [LegendEntry],
    pub footer_stats: &'static [FooterStat],
    pub views: Vec<ViewExport>,
}

#[derive(Debug, Serialize)]
pub struct ViewExport {
    pub id: &'static str,
    pub label: &'static str,
    pub heading: String,
    pub description: &'static str,
    pub card_count: usize,
    pub sections: &'static [Section],
}

impl ViewExport {
    fn new(mode: ViewMode) -> Self {
        let diagram = catalog::diagram(mode);
        Self {
            id: mode.id(),
            label: mode.label(),
            heading: mode.heading(),
            description: mode.description(),
            card_count: diagram.card_count(),
            sections: diagram.sections,
        }
    }
}

/// Build the export document. Status overrides from config are not applied.
pub fn export_catalog() -> CatalogExport {
    CatalogExport {
        generator: format!("druidscope {}", env!("CARGO_PKG_VERSION")),
        generated_at: Utc::now(),
        page: catalog::PAGE,
        legend: catalog::LEGEND,
        footer_stats: catalog::FOOTER_STATS,
        views: ViewMode::ALL.into_iter().map(ViewExport::new).collect(),
    }
}

/// Render the export document as JSON.
pub fn export_catalog_json(pretty: bool) -> Result<String> {
    let export = export_catalog();
    let json = if pretty {
        serde_json::to_string_pretty(&export)?
    } else {
        serde_json::to_string(&export)?
    };
    debug!("Exported catalog ({} bytes)", json.len());
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_has_all_views_in_tab_order() {
        let export = export_catalog();
        let ids: Vec<_> = export.views.iter().map(|v| v.id).collect();
        insta::assert_debug_snapshot!(ids, @r#"
        [
            "infrastructure",
            "druid-cluster",
            "data-flow",
            "deployment",
        ]
        "#);
    }

    #[test]
    fn test_export_json_round_trips_through_value() {
        let json = export_catalog_json(false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["page"]["header"], "Apache Druid on AWS");
        assert_eq!(value["views"].as_array().unwrap().len(), 4);
        assert_eq!(value["views"][2]["heading"], "Data Flow View");
        assert_eq!(value["footer_stats"][0]["value"], "35.0.0");
    }

    #[test]
    fn test_export_tags_flow_steps() {
        let json = export_catalog_json(false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let query_flow = &value["views"][2]["sections"][0];
        assert_eq!(query_flow["kind"], "layer");
        assert_eq!(query_flow["title"], "Query Flow");

        let first_step = &query_flow["rows"][0]["steps"][0];
        assert_eq!(first_step["kind"], "endpoint");
        assert_eq!(first_step["shape"], "client");
        assert_eq!(first_step["label"], "Client");
    }

    #[test]
    fn test_export_keeps_marker_captions() {
        let json = export_catalog_json(false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["legend"][0]["caption"], "Services that are running");

        let zones = &value["views"][0]["sections"][0]["sections"][0]["rows"][0];
        assert_eq!(zones["kind"], "tiles");
        assert_eq!(zones["tiles"][0]["lines"][0]["hint"], "NAT Gateway attached");
        assert_eq!(zones["tiles"][0]["lines"][1]["hint"], "Private workloads");

        assert!(json.contains(r#""kind":"note","text":"↑ Fetch segments","hint":"On cache miss""#));
    }

    #[test]
    fn test_pretty_export_is_multiline() {
        let json = export_catalog_json(true).unwrap();
        assert!(json.lines().count() > 100);
        assert!(json.contains("\"Coordinator\""));
    }
}
