// ABOUTME: Reconciler configuration handling.
// ABOUTME: Loads and saves width defaults and display hints from TOML files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::DisplayOptions;

/// Floor fraction applied to every column by the keyed API
pub const DEFAULT_MIN_WIDTH: f64 = 0.06;

/// Floor fraction applied to every column by the legacy API
pub const DEFAULT_LEGACY_MIN_WIDTH: f64 = 0.10;

/// Size handed to the layout primitive in place of a collapsed (<= 0) column
pub const DEFAULT_COLLAPSE_EPSILON: f64 = 0.001;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnsConfig {
    /// Minimum width fraction per column when none is given
    pub min_width: f64,

    /// Minimum width fraction per column for the legacy entry point
    pub legacy_min_width: f64,

    /// Positive stand-in for sizes the layout primitive would reject
    pub collapse_epsilon: f64,

    /// Default gap, alignment and border
    pub display: DisplayOptions,

    /// Prefix for instance keys generated from render position
    pub auto_key_prefix: String,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            legacy_min_width: DEFAULT_LEGACY_MIN_WIDTH,
            collapse_epsilon: DEFAULT_COLLAPSE_EPSILON,
            display: DisplayOptions::default(),
            auto_key_prefix: "colsplit".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

impl ColumnsConfig {
    /// Get the default config file path (~/.config/colsplit/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("colsplit").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| match Self::load(&path) {
                Ok(config) => Some(config),
                Err(ConfigError::ReadError(_)) => None,
                Err(e) => {
                    tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save config to default path
    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or(ConfigError::NoConfigDir)?;
        self.save(&path)?;
        Ok(path)
    }

    /// Check fractions are in [0, 1) and the epsilon is a usable positive size
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("min_width", self.min_width),
            ("legacy_min_width", self.legacy_min_width),
        ] {
            if !(0.0..1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be in [0, 1), got {value}"
                )));
            }
        }
        if !(self.collapse_epsilon.is_finite() && self.collapse_epsilon > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "collapse_epsilon must be positive, got {}",
                self.collapse_epsilon
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Gap, VerticalAlignment};

    #[test]
    fn default_fractions() {
        let config = ColumnsConfig::default();
        assert!((config.min_width - 0.06).abs() < 1e-9);
        assert!((config.legacy_min_width - 0.10).abs() < 1e-9);
        assert!((config.collapse_epsilon - 0.001).abs() < 1e-9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: ColumnsConfig = toml::from_str(
            r#"
            min_width = 0.2

            [display]
            gap = "large"
            border = true
            "#,
        )
        .unwrap();

        assert!((config.min_width - 0.2).abs() < 1e-9);
        assert!((config.legacy_min_width - 0.10).abs() < 1e-9);
        assert_eq!(config.display.gap, Gap::Large);
        assert_eq!(config.display.vertical_alignment, VerticalAlignment::Top);
        assert!(config.display.border);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = ColumnsConfig::default();
        config.display.gap = Gap::Medium;
        config.auto_key_prefix = "dash".to_string();

        let temp_path = std::env::temp_dir().join("colsplit_test_config.toml");
        config.save(&temp_path).unwrap();

        let loaded = ColumnsConfig::load(&temp_path).unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn rejects_out_of_range_fraction() {
        let temp_path = std::env::temp_dir().join("colsplit_test_bad_config.toml");
        std::fs::write(&temp_path, "min_width = 1.5\n").unwrap();

        let err = ColumnsConfig::load(&temp_path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_default_path() {
        if let Some(p) = ColumnsConfig::default_path() {
            assert!(p.ends_with("colsplit/config.toml"));
        }
    }
}
