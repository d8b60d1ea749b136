//! Configuration for the anima demo.
//!
//! Settings are read from `config.toml` in the platform configuration
//! directory. Every field is optional and a missing file yields the
//! defaults, which reproduce the classic behaviour: a canvas titled
//! `Animation` repainting 30 times per second with the sine wave.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anima_core::AnimationKind;
use color_eyre::eyre::{Result, WrapErr};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "anima.log";

/// Highest frame rate accepted from the configuration.
pub const MAX_FRAMES_PER_SECOND: u32 = 240;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Title shown on the canvas border.
    pub title: String,
    /// Redraw requests per second.
    pub frames_per_second: u32,
    /// Delay before the first timed redraw, in milliseconds.
    pub start_delay_ms: u64,
    /// Animation to run.
    pub animation: AnimationKind,
    /// Try to resize the terminal to the canvas's preferred size.
    pub resize_terminal: bool,
    /// Maximum level written to the log file.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Animation".to_string(),
            frames_per_second: 30,
            start_delay_ms: 0,
            animation: AnimationKind::default(),
            resize_terminal: true,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load the configuration from the default location.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the configuration from `path`. A missing file gives the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err)
                    .wrap_err_with(|| format!("failed to read config file {}", path.display()));
            }
        };
        Self::from_toml(&contents)
            .wrap_err_with(|| format!("invalid config file {}", path.display()))
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Interval between redraw requests.
    ///
    /// Computed in whole milliseconds, so 30 frames per second ticks every
    /// 33 ms.
    pub fn frame_interval(&self) -> Duration {
        let fps = self.frames_per_second.clamp(1, MAX_FRAMES_PER_SECOND);
        Duration::from_millis(1000 / fps as u64)
    }

    /// Delay before the first timed redraw.
    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }

    /// Log level, falling back to `INFO` for unknown names.
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.trim()).unwrap_or(tracing::Level::INFO)
    }
}

/// Platform directories for the application.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "anima")
}

/// Default path of the configuration file.
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Default path of the log file.
pub fn log_file_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
}
