//! Configuration for the arithmetic service

use crate::error::{ArithError, Result};
use derive_builder::Builder;
use serde::Deserialize;
use std::path::Path;

/// Largest number of decimals accepted for displaying operands in records.
pub const MAX_DISPLAY_PRECISION: usize = 12;

/// Configuration for a [`crate::Calculator`]
#[derive(Debug, Clone, PartialEq, Eq, Builder, Deserialize)]
#[builder(setter(into))]
#[serde(default, deny_unknown_fields)]
pub struct ArithConfig {
    /// Whether successful operations append a record to the operation log
    #[builder(default = "true")]
    pub history_enabled: bool,
    /// Number of decimals used when formatting operands and results in records
    #[builder(default = "2")]
    pub display_precision: usize,
}

impl ArithConfig {
    /// Create a new configuration using the builder
    pub fn builder() -> ArithConfigBuilder {
        ArithConfigBuilder::default()
    }

    /// Parse a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = match toml::from_str(text) {
            Ok(config) => config,
            Err(e) => return Err(ArithError::invalid_config(e.to_string())),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Enable or disable the operation log (builder style)
    pub fn with_history(self, history_enabled: bool) -> Self {
        Self {
            history_enabled,
            ..self
        }
    }

    /// Set the display precision used in records (builder style)
    pub fn with_precision(self, display_precision: usize) -> Self {
        Self {
            display_precision,
            ..self
        }
    }

    /// Validate that all settings are within their accepted ranges
    pub fn validate(&self) -> Result<()> {
        if self.display_precision > MAX_DISPLAY_PRECISION {
            return Err(ArithError::invalid_config(format!(
                "display_precision must be at most {MAX_DISPLAY_PRECISION}, got {}",
                self.display_precision
            )));
        }
        Ok(())
    }
}

impl Default for ArithConfig {
    fn default() -> Self {
        Self {
            history_enabled: true,
            display_precision: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ArithConfig::default();
        assert!(config.history_enabled);
        assert_eq!(config.display_precision, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_defaults_match_default() {
        let config = ArithConfig::builder().build().unwrap();
        assert_eq!(config, ArithConfig::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ArithConfig::builder()
            .history_enabled(false)
            .display_precision(4usize)
            .build()
            .unwrap();
        assert!(!config.history_enabled);
        assert_eq!(config.display_precision, 4);
    }

    #[test]
    fn test_builder_style_methods() {
        let config = ArithConfig::default().with_history(false).with_precision(0);
        assert!(!config.history_enabled);
        assert_eq!(config.display_precision, 0);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = ArithConfig::from_toml_str("display_precision = 3").unwrap();
        assert!(config.history_enabled);
        assert_eq!(config.display_precision, 3);

        let config = ArithConfig::from_toml_str("").unwrap();
        assert_eq!(config, ArithConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_bad_values() {
        let err = ArithConfig::from_toml_str("display_precision = 40").unwrap_err();
        assert!(matches!(err, ArithError::InvalidConfig { .. }));

        let err = ArithConfig::from_toml_str("history = true").unwrap_err();
        assert!(matches!(err, ArithError::InvalidConfig { .. }));

        let err = ArithConfig::from_toml_str("history_enabled = \"yes\"").unwrap_err();
        assert!(matches!(err, ArithError::InvalidConfig { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "history_enabled = false").unwrap();
        writeln!(file, "display_precision = 1").unwrap();

        let config = ArithConfig::from_file(file.path()).unwrap();
        assert!(!config.history_enabled);
        assert_eq!(config.display_precision, 1);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ArithConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ArithError::Io { .. }));
    }
}
