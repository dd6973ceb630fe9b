//! Tracing setup.
//!
//! The TUI owns stdout, so events go to a file instead of the terminal.

use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Default log location: `<cache dir>/unibrowse/unibrowse.log`.
pub fn default_log_path() -> PathBuf {
    let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    cache_dir.join("unibrowse").join("unibrowse.log")
}

/// Builds the filter: `RUST_LOG` wins, then the configured level, then "info".
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber and returns the file it writes to.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<PathBuf> {
    let path = config.file.clone().unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory '{}'", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file '{}'", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install tracing subscriber: {err}"))?;

    Ok(path)
}
