//! Settings loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_core::SortOrder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// User-configurable settings.
///
/// Every field has a default, so an empty or partial file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Initial order of the move list.
    #[serde(default)]
    sort_order: SortOrder,

    /// File that receives log output (the terminal belongs to the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("rewind.log")
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::default(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(sort_order = settings.sort_order.label(), "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path`, or defaults if the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns a copy with the move list order replaced.
    #[must_use]
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
