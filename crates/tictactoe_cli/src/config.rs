//! Display configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::Mark;
use tracing::{debug, info, instrument};

/// Config file looked up when no `--config` is given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Front-end settings, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Config {
    /// Display name for the X player.
    #[serde(default = "default_x_label")]
    x_label: String,

    /// Display name for the O player.
    #[serde(default = "default_o_label")]
    o_label: String,

    /// Show free cell indices on the board.
    #[serde(default = "default_show_hints")]
    show_hints: bool,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_x_label() -> String {
    "X".to_string()
}

fn default_o_label() -> String {
    "O".to_string()
}

fn default_show_hints() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            x_label: default_x_label(),
            o_label: default_o_label(),
            show_hints: default_show_hints(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(x = %config.x_label, o = %config.o_label, "Config loaded");
        Ok(config)
    }

    /// Resolves the config to use.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present and defaults are used otherwise.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Display name for a mark.
    pub fn label(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x_label,
            Mark::O => &self.o_label,
        }
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(r#"x_label = "Ada""#).unwrap();
        assert_eq!(config.label(Mark::X), "Ada");
        assert_eq!(config.label(Mark::O), "O");
        assert!(*config.show_hints());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
