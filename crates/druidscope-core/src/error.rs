//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration in {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unknown view: {name} (expected one of infrastructure, druid-cluster, data-flow, deployment)")]
    UnknownView { name: String },

    // ─────────────────────────────────────────────────────────────
    // Catalog Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Catalog error in {location}: {message}")]
    Catalog { location: String, message: String },

    // ─────────────────────────────────────────────────────────────
    // Browser Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to open {url}: {reason}")]
    Browser { url: String, reason: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn unknown_view(name: impl Into<String>) -> Self {
        Self::UnknownView { name: name.into() }
    }

    pub fn catalog(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Catalog {
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn browser(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Browser {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::TerminalInit(_)
                | Error::ConfigNotFound { .. }
                | Error::ConfigParse { .. }
                | Error::Catalog { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::config("bad value");
        assert_eq!(err.to_string(), "Configuration error: bad value");

        let err = Error::catalog("Query Flow / Router", "title is empty");
        assert_eq!(
            err.to_string(),
            "Catalog error in Query Flow / Router: title is empty"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_unknown_view_lists_choices() {
        let err = Error::unknown_view("topology");
        let msg = err.to_string();
        assert!(msg.contains("topology"));
        assert!(msg.contains("druid-cluster"));
    }

    #[test]
    fn test_config_parse_error_mentions_path() {
        let source = toml::from_str::<toml::Value>("ui = [").unwrap_err();
        let err = Error::ConfigParse {
            path: PathBuf::from("/tmp/config.toml"),
            source,
        };
        assert!(err.to_string().contains("/tmp/config.toml"));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::TerminalInit("no tty".into()).is_fatal());
        assert!(Error::ConfigNotFound {
            path: PathBuf::from("/missing.toml")
        }
        .is_fatal());
        assert!(!Error::browser("https://druid.apache.org", "no opener").is_fatal());
    }

    #[test]
    fn test_result_ext_preserves_error() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("reading config").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
