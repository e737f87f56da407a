use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::commands::DEFAULT_MULTI_COMMAND_ALIASES;

/// Help settings, read from `<config dir>/cmdhelp.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpConfig {
    /// Program name shown in usage lines
    #[serde(default = "default_program")]
    pub program: String,
    /// Tokens that name a command family, e.g. `generate`
    #[serde(default = "default_multi_command_aliases")]
    pub multi_command_aliases: Vec<String>,
    #[serde(default)]
    pub verbose: bool,
}

fn default_program() -> String {
    "cmdhelp".to_string()
}

fn default_multi_command_aliases() -> Vec<String> {
    DEFAULT_MULTI_COMMAND_ALIASES
        .iter()
        .map(|alias| alias.to_string())
        .collect()
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            multi_command_aliases: default_multi_command_aliases(),
            verbose: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid JSON in {}: {message}", .path.display())]
    InvalidJson { path: PathBuf, message: String },
    #[error("IO error reading config: {0}")]
    IoError(#[from] std::io::Error),
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("cmdhelp.json"))
}

/// Load the user config, falling back to defaults when there is none.
pub fn load_config() -> Result<HelpConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(HelpConfig::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<HelpConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(HelpConfig::default());
    }

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| ConfigError::InvalidJson {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
