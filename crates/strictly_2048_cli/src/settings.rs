//! Game settings: defaults, TOML file loading, and CLI overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_2048::{DEFAULT_BASE, DEFAULT_SIZE, EngineConfig};
use tracing::{debug, info, instrument};

/// Settings for a regular (non-custom) game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSettings {
    /// Grid side length for regular games.
    #[serde(default = "default_size")]
    size: usize,

    /// Base number for regular games.
    #[serde(default = "default_base")]
    base: u64,

    /// Seed for reproducible spawns. Each new game in a session uses the
    /// next seed.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

fn default_base() -> u64 {
    DEFAULT_BASE
}

impl GameSettings {
    /// Creates settings for the classic 4×4 game with base 2.
    #[instrument]
    pub fn new() -> Self {
        Self {
            size: default_size(),
            base: default_base(),
            seed: None,
        }
    }

    /// Loads settings from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        settings.engine_config()?;
        info!(size = settings.size, base = settings.base, "Settings loaded");
        Ok(settings)
    }

    /// Replaces any field given on the command line.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        size: Option<usize>,
        base: Option<u64>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(size) = size {
            self.size = size;
        }
        if let Some(base) = base {
            self.base = base;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Validates the settings as an engine configuration.
    #[instrument(skip(self))]
    pub fn engine_config(&self) -> Result<EngineConfig, SettingsError> {
        EngineConfig::new(self.size, self.base).map_err(|e| SettingsError::new(e.to_string()))
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
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
        let settings = GameSettings::new();
        assert_eq!(*settings.size(), 4);
        assert_eq!(*settings.base(), 2);
        assert_eq!(*settings.seed(), None);
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let settings = GameSettings::new().with_overrides(Some(6), None, Some(9));
        assert_eq!(*settings.size(), 6);
        assert_eq!(*settings.base(), 2);
        assert_eq!(*settings.seed(), Some(9));
    }

    #[test]
    fn test_engine_config_rejects_bad_size() {
        let settings = GameSettings::new().with_overrides(Some(1), None, None);
        let err = settings.engine_config().unwrap_err();
        assert!(err.message.contains("Invalid configuration"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: GameSettings = toml::from_str("base = 3").unwrap();
        assert_eq!(*settings.size(), 4);
        assert_eq!(*settings.base(), 3);
    }
}
