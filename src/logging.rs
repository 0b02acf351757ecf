//! File-backed tracing setup.
//!
//! The terminal belongs to the TUI, so log output goes to a file.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

/// Install the global subscriber writing to `path` with filter `level`
pub fn init(path: &Path, level: &str) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_new(level).map_err(|_| ConfigError::LogFilter(level.to_string()))?;

    let log_file_error = |source| ConfigError::LogFile {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(log_file_error)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(log_file_error)?;

    // A second init (e.g. in tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    tracing::info!(version = crate::cli::VERSION, log = %path.display(), "listing-tui starting");
    Ok(())
}
