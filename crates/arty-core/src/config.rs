//! Grid configuration.
//!
//! Defaults match the game map: 126 m tiles, keypad refinement starting
//! at 42 m, and nine wind sample magnitudes. A TOML file may override any
//! subset of the fields:
//!
//! ```toml
//! tile_size = 126
//! small_tile_size = 42
//! wind_offsets = [10, 20, 30, 40, 50, 100, 150, 200, 250]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Meters per coarse (lettered/numbered) tile.
pub const TILE_SIZE: i64 = 126;
/// Meters per first keypad step; divided by 3 at each further level.
pub const SMALL_TILE_SIZE: i64 = 42;
/// Wind displacement magnitudes [m] sampled for the wind table.
pub const DEFAULT_WIND_OFFSETS: [i64; 9] = [10, 20, 30, 40, 50, 100, 150, 200, 250];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub tile_size: i64,
    pub small_tile_size: i64,
    pub wind_offsets: Vec<i64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            small_tile_size: SMALL_TILE_SIZE,
            wind_offsets: DEFAULT_WIND_OFFSETS.to_vec(),
        }
    }
}

impl GridConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: GridConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading grid config");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size <= 0 {
            return Err(ConfigError::Invalid(format!(
                "tile_size must be positive, got {}",
                self.tile_size
            )));
        }
        if self.small_tile_size < 0 {
            return Err(ConfigError::Invalid(format!(
                "small_tile_size must not be negative, got {}",
                self.small_tile_size
            )));
        }
        if self.wind_offsets.is_empty() {
            return Err(ConfigError::Invalid("wind_offsets must not be empty".into()));
        }
        if let Some(m) = self.wind_offsets.iter().find(|m| **m < 0) {
            return Err(ConfigError::Invalid(format!(
                "wind_offsets must not be negative, got {m}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_game_grid() {
        let cfg = GridConfig::default();
        assert_eq!(cfg.tile_size, 126);
        assert_eq!(cfg.small_tile_size, 42);
        assert_eq!(cfg.wind_offsets, vec![10, 20, 30, 40, 50, 100, 150, 200, 250]);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = GridConfig::from_toml_str("wind_offsets = [25, 50]").unwrap();
        assert_eq!(cfg.tile_size, TILE_SIZE);
        assert_eq!(cfg.small_tile_size, SMALL_TILE_SIZE);
        assert_eq!(cfg.wind_offsets, vec![25, 50]);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            GridConfig::from_toml_str("tile_size = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GridConfig::from_toml_str("wind_offsets = []"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GridConfig::from_toml_str("wind_offsets = [10, -5]"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GridConfig::from_toml_str("tile_size = \"big\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = GridConfig::load("/nonexistent/arty.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
