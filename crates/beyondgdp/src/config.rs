//! Configuration for dataset loading and chart shaping.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BeyondGdpError, Result};

/// File looked up in the working directory by [`Config::load`].
pub const CONFIG_FILE_NAME: &str = "beyondgdp.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub chart: ChartConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| BeyondGdpError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `beyondgdp.toml` from the working directory, or fall back to defaults.
    pub fn load() -> Result<Self> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        if path.exists() {
            tracing::info!("Loading config from: {}", path.display());
            Self::from_file(&path)
        } else {
            tracing::debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<()> {
        let columns = &self.dataset.columns;
        for (role, name) in [
            ("country", &columns.country),
            ("indicator", &columns.indicator),
            ("year", &columns.year),
            ("value", &columns.value),
        ] {
            if name.trim().is_empty() {
                return Err(BeyondGdpError::Config(format!(
                    "column name for '{}' must not be empty",
                    role
                )));
            }
        }

        if let Some(d) = self.dataset.delimiter {
            if !d.is_ascii() {
                return Err(BeyondGdpError::Config(format!(
                    "delimiter must be a single ASCII character, got '{}'",
                    d
                )));
            }
        }

        if !self.chart.size_max.is_finite() || self.chart.size_max <= 0.0 {
            return Err(BeyondGdpError::Config(format!(
                "chart.size_max must be a positive number, got {}",
                self.chart.size_max
            )));
        }

        Ok(())
    }
}

/// Where the indicator file lives and how its columns are named.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to the long-format indicator file.
    pub path: PathBuf,
    /// Header names of the four columns the loader needs.
    pub columns: ColumnMapping,
    /// Field delimiter (None = auto-detect).
    pub delimiter: Option<char>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data_dashboard_BeyondGDP.csv"),
            columns: ColumnMapping::default(),
            delimiter: None,
        }
    }
}

/// Header names for the observation fields, matched after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub country: String,
    pub indicator: String,
    pub year: String,
    pub value: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            country: "Country Name".to_string(),
            indicator: "Indicator Name".to_string(),
            year: "Year".to_string(),
            value: "Value".to_string(),
        }
    }
}

/// Comparison chart settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Marker size given to the largest value in a comparison.
    pub size_max: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self { size_max: 40.0 }
    }
}
