//! Configuration types for druidscope
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `UiSettings`, `BehaviorSettings`, `CatalogSettings` - Its sections
//! - `IconMode` - Glyph set used for icons

use std::collections::BTreeMap;

use druidscope_core::{catalog, ServiceRecord, Status, ViewMode};
use serde::{Deserialize, Serialize};

/// Smallest number of details a collapsed card may show.
pub const MIN_SUMMARY_ITEMS: usize = 1;
/// Largest number of details a collapsed card may show.
pub const MAX_SUMMARY_ITEMS: usize = 8;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,
}

impl Settings {
    /// Clamp out-of-range values, logging what was changed.
    pub fn sanitize(&mut self) {
        let clamped = self
            .ui
            .summary_items
            .clamp(MIN_SUMMARY_ITEMS, MAX_SUMMARY_ITEMS);
        if clamped != self.ui.summary_items {
            tracing::warn!(
                "ui.summary_items = {} is out of range, using {}",
                self.ui.summary_items,
                clamped
            );
            self.ui.summary_items = clamped;
        }

        let titles = catalog::card_titles();
        for title in self.catalog.status_overrides.keys() {
            if !titles.contains(&title.as_str()) {
                tracing::warn!("status override for unknown card {:?} has no effect", title);
            }
        }
    }

    /// Status shown for a card: an override keyed by title, else the authored one.
    pub fn status_for(&self, record: &ServiceRecord) -> Status {
        self.catalog
            .status_overrides
            .get(record.title)
            .copied()
            .unwrap_or(record.status)
    }
}

/// Icon display mode.
///
/// Unicode works in every terminal; Nerd Font glyphs need a patched font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl IconMode {
    pub fn toggled(self) -> Self {
        match self {
            IconMode::Unicode => IconMode::NerdFonts,
            IconMode::NerdFonts => IconMode::Unicode,
        }
    }
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Staggered entrance, pulsing status dots and travelling arrows
    #[serde(default = "default_true")]
    pub animations: bool,

    /// View shown at startup
    #[serde(default)]
    pub initial_view: ViewMode,

    /// Details listed on a collapsed card before "+N more..."
    #[serde(default = "default_summary_items")]
    pub summary_items: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            animations: true,
            initial_view: ViewMode::default(),
            summary_items: default_summary_items(),
        }
    }
}

/// Behavior settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Browser command for documentation links. Empty = platform default.
    #[serde(default)]
    pub browser: String,
}

/// Presentation overrides for the static catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Card title → status shown instead of the authored one
    #[serde(default)]
    pub status_overrides: BTreeMap<String, Status>,
}

fn default_true() -> bool {
    true
}

fn default_summary_items() -> usize {
    2
}

#[cfg(test)]
mod tests {
    use super::*;
    use druidscope_core::IconKind;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.ui.icons, IconMode::Unicode);
        assert!(settings.ui.animations);
        assert_eq!(settings.ui.initial_view, ViewMode::Infrastructure);
        assert_eq!(settings.ui.summary_items, 2);
        assert!(settings.behavior.browser.is_empty());
        assert!(settings.catalog.status_overrides.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let settings: Settings = toml::from_str(
            r#"
[ui]
icons = "nerd_fonts"
animations = false
initial_view = "data-flow"
summary_items = 3

[behavior]
browser = "firefox"

[catalog.status_overrides]
"MSK Serverless" = "provisioning"
"Broker" = "degraded"
"#,
        )
        .unwrap();

        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert!(!settings.ui.animations);
        assert_eq!(settings.ui.initial_view, ViewMode::DataFlow);
        assert_eq!(settings.ui.summary_items, 3);
        assert_eq!(settings.behavior.browser, "firefox");
        assert_eq!(
            settings.catalog.status_overrides.get("Broker"),
            Some(&Status::Degraded)
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let settings: Settings = toml::from_str("[ui]\nanimations = false\n").unwrap();
        assert!(!settings.ui.animations);
        assert_eq!(settings.ui.summary_items, 2);
        assert_eq!(settings.ui.icons, IconMode::Unicode);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result: Result<Settings, _> =
            toml::from_str("[catalog.status_overrides]\n\"Broker\" = \"on-fire\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_sanitize_clamps_summary_items() {
        let mut settings = Settings::default();
        settings.ui.summary_items = 0;
        settings.sanitize();
        assert_eq!(settings.ui.summary_items, MIN_SUMMARY_ITEMS);

        settings.ui.summary_items = 50;
        settings.sanitize();
        assert_eq!(settings.ui.summary_items, MAX_SUMMARY_ITEMS);
    }

    #[test]
    fn test_sanitize_keeps_unknown_overrides() {
        let mut settings = Settings::default();
        settings
            .catalog
            .status_overrides
            .insert("Not A Card".to_string(), Status::Degraded);
        settings.sanitize();
        assert_eq!(settings.catalog.status_overrides.len(), 1);
    }

    #[test]
    fn test_status_for_prefers_override() {
        const BROKER: ServiceRecord = ServiceRecord::new(IconKind::Broker, "Broker", "Query");
        let mut settings = Settings::default();
        assert_eq!(settings.status_for(&BROKER), Status::Active);

        settings
            .catalog
            .status_overrides
            .insert("Broker".to_string(), Status::Provisioning);
        assert_eq!(settings.status_for(&BROKER), Status::Provisioning);
    }

    #[test]
    fn test_icon_mode_display_and_toggle() {
        assert_eq!(IconMode::Unicode.to_string(), "unicode");
        assert_eq!(IconMode::NerdFonts.to_string(), "nerd_fonts");
        assert_eq!(IconMode::Unicode.toggled(), IconMode::NerdFonts);
        assert_eq!(IconMode::NerdFonts.toggled(), IconMode::Unicode);
    }
}
