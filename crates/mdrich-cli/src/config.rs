use std::path::{Path, PathBuf};

use mdrich_core::ConvertOptions;
use mdrich_data::SalesQuery;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "mdrich.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found at {config_path}")]
    ConfigNotFound { config_path: PathBuf },

    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub convert: ConvertSection,
    pub analysis: AnalysisSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertSection {
    pub diagram_languages: Vec<String>,
}

impl Default for ConvertSection {
    fn default() -> Self {
        Self {
            diagram_languages: ConvertOptions::default().diagram_languages,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSection {
    pub keywords: Vec<String>,
    pub category_column: String,
    pub years: Vec<String>,
    pub ytd_year: Option<String>,
    /// How many package matches to print.
    pub top_matches: usize,
}

impl Default for AnalysisSection {
    fn default() -> Self {
        let query = SalesQuery::default();
        Self {
            keywords: query.keywords,
            category_column: query.category_column,
            years: query.years,
            ytd_year: query.ytd_year,
            top_matches: 5,
        }
    }
}

impl Config {
    /// Load a config file, `None` if it does not exist.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    /// Load the explicit config, or `mdrich.toml` if present, or defaults.
    ///
    /// An explicitly named file must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from_path(path)?.ok_or_else(|| ConfigError::ConfigNotFound {
                config_path: path.to_path_buf(),
            }),
            None => Ok(Self::load_from_path(DEFAULT_CONFIG_FILE)?.unwrap_or_default()),
        }
    }

    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            diagram_languages: self.convert.diagram_languages.clone(),
        }
    }

    pub fn sales_query(&self) -> SalesQuery {
        SalesQuery {
            keywords: self.analysis.keywords.clone(),
            category_column: self.analysis.category_column.clone(),
            years: self.analysis.years.clone(),
            ytd_year: self.analysis.ytd_year.clone(),
        }
    }
}
