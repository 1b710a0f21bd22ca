// ⚙️ Configuration - TOML file with per-section defaults
//
// Lookup order for the file:
// 1. explicit path (--config)
// 2. $CUTLERY_CONFIG
// 3. built-in defaults (no file needed)

use crate::entities::IntensityScale;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "CUTLERY_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub menu: MenuConfig,
    pub intensity: IntensityScale,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Shown on the welcome screen and in headers
    pub restaurant_name: String,

    /// Prefix for prices, e.g. "R150.00"
    pub currency: String,

    /// Start the session with the house dishes
    pub seed_defaults: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            restaurant_name: "Christoffel Cutlery".to_string(),
            currency: "R".to_string(),
            seed_defaults: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// tracing-subscriber filter directive; RUST_LOG wins when set
    pub filter: String,

    /// Write logs here instead of stderr
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: "info".to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Load from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            bail!("Configuration file does not exist: {:?}", path);
        }

        if !path.is_file() {
            bail!("Path is not a valid file: {:?}", path);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;

        Self::from_toml(&content).with_context(|| format!("Invalid config file {:?}", path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Resolve the config for this run (see module docs for lookup order)
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::from_file(PathBuf::from(path)),
            _ => Ok(Self::default()),
        }
    }

    /// Collect every problem instead of stopping at the first
    pub fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.menu.restaurant_name.trim().is_empty() {
            errors.push("menu.restaurant_name must not be empty".to_string());
        }

        if self.menu.currency.trim().is_empty() {
            errors.push("menu.currency must not be empty".to_string());
        }

        let scale = &self.intensity;
        for (key, value) in [
            ("intensity.balanced_from", scale.balanced_from),
            ("intensity.strong_from", scale.strong_from),
        ] {
            if !value.is_finite() || value <= 0.0 {
                errors.push(format!("{} must be a positive number, got {}", key, value));
            }
        }

        if scale.balanced_from >= scale.strong_from {
            errors.push(format!(
                "intensity.balanced_from ({}) must be below intensity.strong_from ({})",
                scale.balanced_from, scale.strong_from
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.menu.restaurant_name, "Christoffel Cutlery");
        assert_eq!(config.menu.currency, "R");
        assert!(config.menu.seed_defaults);
        assert_eq!(config.intensity, IntensityScale::default());
        assert_eq!(config.log.filter, "info");
        assert!(config.log.file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [intensity]
            strong_from = 65.0

            [menu]
            seed_defaults = false
            "#,
        )
        .unwrap();

        assert_eq!(config.intensity, IntensityScale::legacy());
        assert!(!config.menu.seed_defaults);
        assert_eq!(config.menu.currency, "R");
    }

    #[test]
    fn test_example_config_matches_defaults() {
        let config = AppConfig::from_toml(include_str!("../cutlery.example.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(AppConfig::from_toml("[menu\ncurrency = ").is_err());
        assert!(AppConfig::from_toml("[menu]\nseed_defaults = \"yes\"").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.log.file = Some(PathBuf::from("cutlery.log"));

        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_validate_rejects_inverted_thresholds() {
        let mut config = AppConfig::default();
        config.intensity.balanced_from = 70.0;

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("must be below"));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = AppConfig::default();
        config.menu.currency = " ".to_string();
        config.menu.restaurant_name.clear();
        config.intensity.balanced_from = -1.0;

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[menu]\ncurrency = \"$\"").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.menu.currency, "$");
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = AppConfig::from_file(&missing).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_from_file_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();

        let err = AppConfig::from_file(dir.path()).unwrap_err();
        assert!(err.to_string().contains("not a valid file"));
    }

    #[test]
    fn test_load_explicit_path_wins() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[log]\nfilter = \"debug\"").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.log.filter, "debug");
    }
}
