//! Configuration loading for cellbench.
//! Reads cellbench.toml from the current directory or the path in the
//! CELLBENCH_CONFIG env var. Every field has a default, so a missing file is
//! not an error.

pub mod error;
pub mod preferences;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use error::ConfigError;
pub use preferences::{FontSize, Theme, UiPreferences};

pub const CONFIG_ENV_VAR: &str = "CELLBENCH_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "cellbench.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory holding models.json, datasets.json, metrics.json and
    /// benchmarks.json. The embedded catalog is used when unset.
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_soft_cap")]
    pub unbounded_soft_cap: f64,
    #[serde(default = "default_heatmap_metrics")]
    pub heatmap_metrics: Vec<String>,
    #[serde(default = "default_heatmap_model_limit")]
    pub heatmap_model_limit: usize,
}

fn default_soft_cap()            -> f64   { 100.0 }
fn default_heatmap_model_limit() -> usize { 5 }
fn default_heatmap_metrics() -> Vec<String> {
    vec!["nmi".to_string(), "ari".to_string(), "asw".to_string()]
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            unbounded_soft_cap: default_soft_cap(),
            heatmap_metrics: default_heatmap_metrics(),
            heatmap_model_limit: default_heatmap_model_limit(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String { "info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Stored UI preferences. Values are kept as written and resolved by
/// [`UiPreferences::resolve`], so an unknown value falls back instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_font_size")]
    pub font_size: String,
    #[serde(default)]
    pub system_prefers_dark: bool,
}

fn default_theme()     -> String { "system".to_string() }
fn default_font_size() -> String { "medium".to_string() }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            font_size: default_font_size(),
            system_prefers_dark: false,
        }
    }
}

impl DisplayConfig {
    pub fn preferences(&self) -> UiPreferences {
        UiPreferences::resolve(
            Some(self.theme.as_str()),
            Some(self.font_size.as_str()),
            self.system_prefers_dark,
        )
    }
}

#[cfg(test)]
mod tests;

impl Config {
    /// Load configuration from cellbench.toml.
    /// Checks CELLBENCH_CONFIG env var first, then the current directory.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(Path::new(&path))
    }

    /// Load from an explicit path. A missing file yields the defaults.
    /// Files ending in `.yaml` or `.yml` are parsed as YAML, anything else as TOML.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content)?,
            _ => Self::from_toml(&content)?,
        };
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let cap = self.scoring.unbounded_soft_cap;
        if !cap.is_finite() || cap <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "scoring.unbounded_soft_cap must be a positive number, got {cap}"
            )));
        }
        Ok(())
    }
}
