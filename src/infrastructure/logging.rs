//! # Logging Setup
//!
//! Installs the global `tracing` subscriber: an env-filtered stdout layer, a
//! non-blocking session log file and the in-memory buffer behind `:logs`.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::domain::paths;
use crate::infrastructure::log_buffer::LogBuffer;

const DEFAULT_FILTER: &str = "info";

/// Keep the returned guard alive for the lifetime of the process, or the file
/// writer stops flushing.
pub fn init(data_dir: &Path, buffer: &LogBuffer, console: bool) -> Result<WorkerGuard> {
    if !data_dir.exists() {
        fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create {}", data_dir.display()))?;
    }

    // Clear previous session log
    let log_path = data_dir.join(paths::LOG_FILE);
    if log_path.exists() {
        let _ = fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(data_dir, paths::LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    let console_layer = if console {
        Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .with(buffer.layer())
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
