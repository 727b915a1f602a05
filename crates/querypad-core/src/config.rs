//! Configuration types.
//!
//! Configuration lives in a TOML file under the platform config directory.
//! A missing file yields the defaults; a malformed file is an error the
//! caller surfaces at startup.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Workbench configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Execution settings
    #[serde(default)]
    pub execution: ExecutionConfig,

    /// Editor settings
    #[serde(default)]
    pub editor: EditorConfig,
}

/// Execution configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Database preselected in new tabs, if it exists in the catalog.
    pub default_database: Option<String>,
}

/// Editor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Title prefix for unsaved tabs, e.g. "Query" -> "Query 1".
    pub untitled_prefix: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            untitled_prefix: "Query".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location.
    ///
    /// A missing file is not an error; defaults are used.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Err(ConfigError::NoConfigDir),
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("querypad"))
}

/// Get the path to config.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Ensure the config directory exists.
pub fn ensure_config_dir() -> std::io::Result<()> {
    if let Some(dir) = config_dir() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}
