//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts::Seat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "NOUGHTS_CONFIG";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "noughts.toml";

/// Settings for interactive play.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name shown for the human player.
    #[serde(default = "default_player_name")]
    player_name: String,

    /// Name shown for the computer.
    #[serde(default = "default_computer_name")]
    computer_name: String,

    /// Who moves first. When unset the start menu asks.
    #[serde(default)]
    first: Option<Seat>,

    /// Print the numbered board layout before play.
    #[serde(default = "default_show_guide")]
    show_guide: bool,
}

fn default_player_name() -> String {
    "You".to_string()
}

fn default_computer_name() -> String {
    "AI".to_string()
}

fn default_show_guide() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: default_player_name(),
            computer_name: default_computer_name(),
            first: None,
            show_guide: default_show_guide(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(player = %config.player_name, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves and loads the config.
    ///
    /// An explicit path must exist. Otherwise `$NOUGHTS_CONFIG` is used if
    /// set, then `./noughts.toml` if present, then the defaults.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::from_file(PathBuf::from(path));
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::from_file(local);
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Overrides who moves first when `first` is set.
    pub fn with_first(mut self, first: Option<Seat>) -> Self {
        if first.is_some() {
            self.first = first;
        }
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
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.player_name(), "You");
        assert_eq!(config.computer_name(), "AI");
        assert_eq!(config.first(), &None);
        assert!(*config.show_guide());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GameConfig = toml::from_str("first = \"computer\"").unwrap();
        assert_eq!(config.first(), &Some(Seat::Computer));
        assert_eq!(config.player_name(), "You");
    }

    #[test]
    fn test_with_first_overrides_only_when_set() {
        let config = GameConfig::default().with_first(Some(Seat::Human));
        assert_eq!(config.first(), &Some(Seat::Human));
        let config = config.with_first(None);
        assert_eq!(config.first(), &Some(Seat::Human));
    }
}
