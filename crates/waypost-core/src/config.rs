//! Configuration management for the Waypost binary.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (`WAYPOST__` prefix, e.g. `WAYPOST__CLEAR_SCREEN=false`)
//! 2. Config file (`waypost.toml`, top-level keys)
//! 3. Defaults

use serde::Deserialize;

use crate::error::{CoreError, Result};

/// Top-level Waypost configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WaypostConfig {
    /// Clear the terminal between menu operations.
    #[serde(default = "default_true")]
    pub clear_screen: bool,

    /// Print the weight table after every path change.
    #[serde(default)]
    pub show_table_after_edit: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit log lines as JSON objects.
    #[serde(default)]
    pub log_json: bool,

    /// Render query results as JSON instead of text.
    #[serde(default)]
    pub json_output: bool,
}

impl WaypostConfig {
    /// Load from `<file_prefix>.toml` (optional) overlaid with `WAYPOST__*`
    /// environment variables.
    pub fn load(file_prefix: &str) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(
                config::Environment::with_prefix("WAYPOST")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| CoreError::Config(e.to_string()))?;

        let loaded: Self = cfg
            .try_deserialize()
            .map_err(|e| CoreError::Config(e.to_string()))?;
        tracing::debug!(file_prefix, ?loaded, "Configuration loaded");
        Ok(loaded)
    }
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for WaypostConfig {
    fn default() -> Self {
        Self {
            clear_screen: default_true(),
            show_table_after_edit: false,
            log_filter: default_log_filter(),
            log_json: false,
            json_output: false,
        }
    }
}
