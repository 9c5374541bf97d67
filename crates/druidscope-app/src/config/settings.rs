//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use druidscope_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "druidscope";

/// `<config_dir>/druidscope/config.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings.
///
/// With an explicit path the file must exist and parse. Without one, the
/// default location is tried and any problem there falls back to defaults
/// with a warning.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        return load_settings_from(path);
    }

    let Some(config_path) = default_config_path() else {
        debug!("No platform config directory, using default settings");
        return Ok(Settings::default());
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Ok(Settings::default());
    }

    match load_settings_from(&config_path) {
        Ok(settings) => Ok(settings),
        Err(e) => {
            warn!("Ignoring {:?}: {}", config_path, e);
            Ok(Settings::default())
        }
    }
}

/// Strictly load and sanitize settings from `path`.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let mut settings: Settings = toml::from_str(&content).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    settings.sanitize();
    debug!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// Write a commented default config file at `path` unless one exists.
///
/// Returns `true` when a new file was written.
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(path, generate_default_config())?;
    info!("Wrote default config to {:?}", path);
    Ok(true)
}

/// Default config.toml contents.
pub fn generate_default_config() -> String {
    r#"# druidscope configuration

[ui]
icons = "unicode"           # or "nerd_fonts"
animations = true           # staggered entrance, pulsing dots, travelling arrows
initial_view = "infrastructure"  # druid-cluster, data-flow, deployment
summary_items = 2           # details shown on a collapsed card (1-8)

[behavior]
browser = ""                # Empty = platform default opener

# Show a different status dot for a card, keyed by its title.
[catalog.status_overrides]
# "MSK Serverless" = "provisioning"
# "Historical" = "degraded"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconMode;
    use druidscope_core::{Status, ViewMode};
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_from_custom_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[ui]
icons = "nerd_fonts"
initial_view = "deployment"
summary_items = 12

[catalog.status_overrides]
"Aurora PostgreSQL" = "degraded"
"#,
        )
        .unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert_eq!(settings.ui.initial_view, ViewMode::Deployment);
        // sanitized
        assert_eq!(settings.ui.summary_items, 8);
        assert_eq!(
            settings.catalog.status_overrides.get("Aurora PostgreSQL"),
            Some(&Status::Degraded)
        );
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing.toml");
        let err = load_settings(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_explicit_invalid_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        let err = load_settings(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_unknown_view_in_config_is_a_parse_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\ninitial_view = \"topology\"\n").unwrap();

        assert!(matches!(
            load_settings_from(&path),
            Err(Error::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_init_config_file_writes_valid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        assert!(init_config_file(&path).unwrap());
        let content = std::fs::read_to_string(&path).unwrap();
        let settings: Settings =
            toml::from_str(&content).expect("Default config should be valid TOML");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_file_is_idempotent() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\nanimations = false\n").unwrap();

        assert!(!init_config_file(&path).unwrap());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("animations = false"));
    }

    #[test]
    fn test_default_config_path_is_namespaced() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("druidscope/config.toml"));
        }
    }

    /// Point the platform config dir at `dir` for the duration of `f`.
    #[cfg(target_os = "linux")]
    fn with_config_home<T>(dir: &Path, f: impl FnOnce() -> T) -> T {
        let previous = std::env::var_os("XDG_CONFIG_HOME");
        std::env::set_var("XDG_CONFIG_HOME", dir);
        let result = f();
        match previous {
            Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
        result
    }

    #[cfg(target_os = "linux")]
    #[test]
    #[serial_test::serial]
    fn test_default_location_is_loaded() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("druidscope");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "[ui]\nanimations = false\n").unwrap();

        let settings = with_config_home(temp.path(), || load_settings(None)).unwrap();
        assert!(!settings.ui.animations);
    }

    #[cfg(target_os = "linux")]
    #[test]
    #[serial_test::serial]
    fn test_broken_default_file_falls_back_to_defaults() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("druidscope");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "[ui\nicons = ").unwrap();

        let settings = with_config_home(temp.path(), || load_settings(None)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[cfg(target_os = "linux")]
    #[test]
    #[serial_test::serial]
    fn test_missing_default_file_gives_defaults() {
        let temp = tempdir().unwrap();
        let settings = with_config_home(temp.path(), || load_settings(None)).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
