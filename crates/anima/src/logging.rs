//! Log file setup.
//!
//! The terminal belongs to the canvas, so log output goes to a file in the
//! platform data directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anima_config::Config;
use color_eyre::eyre::{Result, WrapErr, eyre};

/// Install the global tracing subscriber. Returns the log file path, or
/// `None` when the platform has no data directory and logging is disabled.
pub fn init(config: &Config) -> Result<Option<PathBuf>> {
    let Some(path) = anima_config::log_file_path() else {
        return Ok(None);
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))?;

    Ok(Some(path))
}
