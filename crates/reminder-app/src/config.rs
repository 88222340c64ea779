//! Configuration management for service-reminder
//!
//! Config stored at: ~/.config/service-reminder/config.json

use reminder_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "service-reminder";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the record store file
    #[serde(default)]
    pub store_dir: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join(APP_DIR_NAME);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the store directory path
    pub fn store_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.store_dir {
            return Ok(dir.clone());
        }

        let store_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join(APP_DIR_NAME);
        Ok(store_dir)
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Service Reminder Configuration")?;
        writeln!(f, "==============================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Store dir:      {}",
            self.store_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reminder_types::Error;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            store_dir: Some(dir.path().join("data")),
            output_format: OutputFormat::Json,
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
        assert_eq!(config.store_dir().unwrap(), dir.path().join("data"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"output_format": "json"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.store_dir.is_none());
    }

    #[test]
    fn test_bad_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "output_format = json").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }
}
