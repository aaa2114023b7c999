//! Tracing setup for the terminal client.
//!
//! Everything at the `RUST_LOG` level (default `info`) goes to
//! `poke-search.log` in the log directory. Warnings and errors are also
//! echoed to stderr so a failed lookup is visible next to the menu.
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::LogConfig;

pub const LOG_FILE_NAME: &str = "poke-search.log";

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// lifetime of the process.
pub fn setup_logging(config: &LogConfig) -> Result<WorkerGuard> {
    let log_dir = config.dir.clone().unwrap_or_else(get_log_directory);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_filter(LevelFilter::WARN);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Log file: {}", log_dir.join(LOG_FILE_NAME).display());

    Ok(guard)
}

/// Platform log directory, e.g. `~/.cache/poke-search/logs` on Linux.
///
/// Falls back to the system temp directory when no home directory exists.
pub fn get_log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "poke-search")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("poke-search").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_directory_is_project_scoped() {
        let dir = get_log_directory();
        assert!(dir.ends_with("logs"));
        assert!(dir.to_string_lossy().contains("poke-search"));
    }

    #[test]
    fn setup_creates_log_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("logs");
        let config = LogConfig {
            dir: Some(dir.clone()),
        };

        // Another test may already own the global subscriber; the directory
        // is created before installation either way.
        let _ = setup_logging(&config);
        assert!(dir.is_dir());
    }
}
