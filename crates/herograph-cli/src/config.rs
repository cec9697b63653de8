//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use herograph_api::ApiConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default character catalog file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Remote API settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiConfig>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".herograph").join("config.toml"))
    }

    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing file at the default location yields the default
    /// configuration; a missing file at an explicit path is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Self::from_file(path)
            }
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        if let Some(api) = &config.api {
            api.validate()?;
        }
        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Catalog file to use: the override if given, else the configured one.
    pub fn resolve_catalog_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.catalog_path.clone())
            .ok_or_else(|| {
                CliError::Config(
                    "No catalog file configured. Pass --catalog or set catalog_path in the config file"
                        .to_string(),
                )
            })
    }

    /// API settings to use: the JSON file if given, else the `[api]` table.
    pub fn resolve_api_config(&self, override_path: Option<&Path>) -> Result<ApiConfig> {
        if let Some(path) = override_path {
            return Ok(ApiConfig::from_file(path)?);
        }
        self.api.clone().ok_or_else(|| {
            CliError::Config(
                "No API settings configured. Pass --api-config or add an [api] table to the config file"
                    .to_string(),
            )
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.catalog_path.is_none());
        assert!(config.api.is_none());
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            catalog_path = "data/characters.json"

            [api]
            url = "https://gateway.marvel.com/v1/public"
            apiKey = "public-key"
            hash = "abc123"
            ts = "1"
            dataMax = 50

            [settings]
            color = false
            format = "csv"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("data/characters.json")));
        assert_eq!(config.api.as_ref().unwrap().data_max, 50);
        assert!(!config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Csv);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.catalog_path = Some(PathBuf::from("heroes.json"));
        config.settings.format = OutputFormat::Json;
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.catalog_path, Some(PathBuf::from("heroes.json")));
        assert_eq!(loaded.settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_catalog_path_resolution() {
        let mut config = Config::default();
        assert!(config.resolve_catalog_path(None).is_err());

        config.catalog_path = Some(PathBuf::from("configured.json"));
        assert_eq!(
            config.resolve_catalog_path(None).unwrap(),
            PathBuf::from("configured.json")
        );
        assert_eq!(
            config.resolve_catalog_path(Some(Path::new("override.json"))).unwrap(),
            PathBuf::from("override.json")
        );
    }

    #[test]
    fn test_missing_api_settings() {
        let config = Config::default();
        assert!(matches!(config.resolve_api_config(None), Err(CliError::Config(_))));
    }
}
