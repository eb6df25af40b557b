//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/inorder/inorder.toml`
//! 3. Environment variables: `INORDER_*` prefix
//! 4. Command line flags (applied by the CLI layer)

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ApplicationError;

/// How traversal results are printed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Space separated values
    #[default]
    Plain,
    /// JSON array
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(ApplicationError::Config {
                message: format!("unknown output format: {other}"),
            }),
        }
    }
}

/// Unified configuration for inorder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Fixed traversal capacity; unbounded when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,
    /// Cross-check every traversal against a reference traversal
    pub verify: bool,
    /// Output format for traversal results
    pub format: OutputFormat,
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub capacity: Option<usize>,
    pub verify: Option<bool>,
    pub format: Option<OutputFormat>,
}

/// Get the XDG config directory for inorder.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "inorder").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("inorder.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// `Ok(None)` when the key is not set; any other lookup failure is an error.
fn present<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins wherever it specifies a value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            capacity: overlay.capacity.or(self.capacity),
            verify: overlay.verify.unwrap_or(self.verify),
            format: overlay.format.unwrap_or(self.format),
        }
    }

    /// Load settings from defaults, the global config file and `INORDER_*` env vars.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with an explicit global config path.
    ///
    /// A missing file is not an error; a malformed one is.
    #[instrument(level = "debug")]
    pub fn load_from(global_path: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = global_path {
            if path.exists() {
                debug!("loading global config: {}", path.display());
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        debug!(?current, "effective settings");
        Ok(current)
    }

    /// Apply INORDER_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("INORDER"))
            .build()
            .map_err(config_err)?;

        if let Some(val) = present(config.get_string("capacity"))? {
            let capacity = val.trim().parse::<usize>().map_err(|e| ApplicationError::Config {
                message: format!("INORDER_CAPACITY={val}: {e}"),
            })?;
            settings.capacity = Some(capacity);
        }
        if let Some(val) = present(config.get_string("verify"))? {
            settings.verify = parse_bool(&val).ok_or_else(|| ApplicationError::Config {
                message: format!("INORDER_VERIFY={val}: expected true or false"),
            })?;
        }
        if let Some(val) = present(config.get_string("format"))? {
            settings.format = val.parse()?;
        }

        Ok(settings)
    }

    /// Render settings as TOML (for `inorder config`).
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {e}"),
        })
    }
}
