//! File logging setup.
//!
//! Logs go to `<base>/logs/sodhpuch.log` so the TUI keeps the terminal to
//! itself. The filter comes from `SODHPUCH_LOG` (default `info`).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::paths;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "SODHPUCH_LOG";

const LOG_FILE: &str = "sodhpuch.log";
const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber writing to the default logs directory.
///
/// Keep the returned guard alive for the lifetime of the program; dropping
/// it flushes buffered log lines.
///
/// # Errors
/// Returns an error if the logs directory cannot be created or a global
/// subscriber is already installed.
pub fn init() -> Result<WorkerGuard> {
    init_in(&paths::logs_dir())
}

/// Installs the global subscriber writing into `dir`.
///
/// # Errors
/// Returns an error if `dir` cannot be created or a global subscriber is
/// already installed.
pub fn init_in(dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = env_filter(std::env::var(LOG_ENV).ok().as_deref());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(guard)
}

/// Builds the filter from a directive, falling back to `info` when it is
/// missing or invalid.
fn env_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_init_in_writes_log_file_once() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("logs");

        let guard = init_in(&dir).unwrap();
        tracing::warn!("logging test marker");
        drop(guard);

        let contents = fs::read_to_string(dir.join(LOG_FILE)).unwrap();
        assert!(contents.contains("logging test marker"));

        let err = init_in(&dir).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to install log subscriber"));
    }

    #[test]
    fn test_env_filter_defaults_to_info() {
        assert_eq!(env_filter(None).to_string(), "info");
        assert_eq!(env_filter(Some("sodhpuch=loud")).to_string(), "info");
        assert_eq!(
            env_filter(Some("sodhpuch_core=debug")).to_string(),
            "sodhpuch_core=debug"
        );
    }
}
