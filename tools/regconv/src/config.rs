//! Layered configuration for the regconv tool
//!
//! Priority (highest to lowest):
//! 1. Environment variables (`REGCONV_` prefix, e.g. `REGCONV_LOG_LEVEL`)
//! 2. File passed with `--config`
//! 3. `regconv.toml` / `regconv.yaml` / `regconv.json` in the working directory
//! 4. Default values

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "REGCONV_";

/// File stem looked up in the working directory
const DEFAULT_FILE_STEM: &str = "regconv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Config file must have an extension: {}", .0.display())]
    MissingExtension(PathBuf),

    #[error("Unsupported config file format: {0}")]
    UnsupportedFormat(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Figment(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Output rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Tool configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log filter directive when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Output format for results
    pub format: OutputFormat,
    /// Scaling factor for points and commands that do not set one
    pub default_scale: f64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_json: false,
            format: OutputFormat::Text,
            default_scale: 1.0,
        }
    }
}

/// Merge a file into `figment`, choosing the format by extension
fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ConfigError::MissingExtension(path.to_path_buf()))?;

    let figment = match extension {
        "toml" => figment.merge(Toml::file(path)),
        "yaml" | "yml" => figment.merge(Yaml::file(path)),
        "json" => figment.merge(Json::file(path)),
        other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
    };
    Ok(figment)
}

/// Load the tool configuration
///
/// `dir` is searched for `regconv.{toml,yaml,json}`; `explicit` must exist
/// when given.
pub fn load_config(dir: &Path, explicit: Option<&Path>) -> Result<CliConfig> {
    let mut figment = Figment::from(Serialized::defaults(CliConfig::default()))
        .merge(Toml::file(dir.join(format!("{}.toml", DEFAULT_FILE_STEM))))
        .merge(Yaml::file(dir.join(format!("{}.yaml", DEFAULT_FILE_STEM))))
        .merge(Json::file(dir.join(format!("{}.json", DEFAULT_FILE_STEM))));

    if let Some(path) = explicit {
        figment = merge_file(figment, path)?;
    }

    let config = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
    Ok(config)
}

/// Load any deserializable document (point tables) from a single file
pub fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let value = merge_file(Figment::new(), path)?.extract()?;
    Ok(value)
}
