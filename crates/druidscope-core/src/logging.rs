//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "DRUIDSCOPE_LOG";

/// Log file name inside the log directory
pub const LOG_FILE: &str = "druidscope.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/druidscope/logs/` on Linux (the
/// platform data-local directory elsewhere). The terminal is left alone so
/// the diagram is never overdrawn by log output.
///
/// Log level is controlled by the `DRUIDSCOPE_LOG` environment variable.
///
/// # Examples
/// ```bash
/// DRUIDSCOPE_LOG=debug druidscope
/// DRUIDSCOPE_LOG=druidscope_app=trace druidscope --view data-flow
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("druidscope {} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Filter used when `DRUIDSCOPE_LOG` is unset or unparsable
pub fn default_directive() -> &'static str {
    "druidscope=info,druidscope_app=info,druidscope_tui=info,warn"
}

/// Get the log directory path
pub fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("druidscope").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_is_namespaced() {
        let dir = get_log_directory().unwrap();
        assert!(dir.ends_with("druidscope/logs"));
    }

    #[test]
    fn test_default_directive_parses() {
        assert!(EnvFilter::try_new(default_directive()).is_ok());
    }
}
