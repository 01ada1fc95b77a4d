//! Catalog configuration
//!
//! Decides where the movie data source is read from. Resolution order:
//!
//! 1. Explicit override (CLI `--data`)
//! 2. `MARQUEE_DATA_SOURCE` environment variable
//! 3. `data_source` in the config file (`<config dir>/marquee/config.yaml`)
//! 4. The embedded seed document

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::catalog::DataSource;

/// Environment variable naming a data source file
pub const DATA_SOURCE_ENV: &str = "MARQUEE_DATA_SOURCE";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Contents of the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogConfig {
    /// Path to a movies JSON document. Relative paths resolve against the
    /// directory holding the config file.
    #[serde(default)]
    pub data_source: Option<PathBuf>,
}

impl CatalogConfig {
    /// Load from the default location; a missing file yields defaults
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("No config directory available; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from a specific file; a missing file yields defaults
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!(
                "Config file not found at {}; using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
        let mut config: CatalogConfig = serde_yaml_ng::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", config_path.display()))?;

        if let Some(data_source) = config.data_source.take() {
            let resolved = if data_source.is_relative() {
                config_path
                    .parent()
                    .map(|dir| dir.join(&data_source))
                    .unwrap_or(data_source)
            } else {
                data_source
            };
            config.data_source = Some(resolved);
        }

        debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Default config file path, if the platform has a config directory
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "marquee")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(|| dirs::config_dir().map(|d| d.join("marquee")))
            .map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// Pick the data source, honouring the override and environment first
    pub fn resolve_data_source(&self, cli_override: Option<PathBuf>) -> DataSource {
        if let Some(path) = cli_override {
            debug!("Using --data override: {}", path.display());
            return DataSource::File(path);
        }

        if let Some(path) = std::env::var_os(DATA_SOURCE_ENV).filter(|v| !v.is_empty()) {
            let path = PathBuf::from(path);
            debug!("Using {} = {}", DATA_SOURCE_ENV, path.display());
            return DataSource::File(path);
        }

        match &self.data_source {
            Some(path) => DataSource::File(path.clone()),
            None => DataSource::Embedded,
        }
    }
}
