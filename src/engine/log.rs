use anyhow::{Context, Result, anyhow};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Resolve the log file path; relative paths land in the current directory
pub fn log_path(config: &LoggingConfig) -> Result<PathBuf> {
    let path = Path::new(&config.file);
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

fn filter_for(level: &str) -> EnvFilter {
    // RUST_LOG wins over the configured level
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Send tracing output to the log file, appending and creating it if needed.
///
/// The TUI owns the terminal, so nothing is written to stdout/stderr.
pub fn init_file_logging(config: &LoggingConfig) -> Result<PathBuf> {
    let path = log_path(config)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_for(&config.level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!(err))?;

    Ok(path)
}

/// Compact stderr logging for headless commands
pub fn init_stderr_logging(level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
