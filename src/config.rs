//! Configuration loading.
//!
//! A single TOML file configures the session and logging. Precedence for
//! locating it: explicit path, `SHELLFS_CONFIG` environment variable,
//! platform config directory. A missing file means defaults; a malformed
//! file is an error.

use crate::error::ShellError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Prompt written before each command is read.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Whether to build the sample namespace on start (default: true).
    #[serde(default = "default_true")]
    pub seed_sample: bool,

    /// State file used by `save`/`load` when no argument is given.
    #[serde(default)]
    pub state_file: Option<PathBuf>,
}

fn default_prompt() -> String {
    "Enter a command: ".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            prompt: default_prompt(),
            seed_sample: default_true(),
            state_file: None,
        }
    }
}

impl ShellConfig {
    /// Load with precedence: `explicit`, `SHELLFS_CONFIG`, platform config
    /// directory, defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ShellError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Ok(env_path) = std::env::var("SHELLFS_CONFIG") {
            if !env_path.is_empty() {
                return Self::from_file(Path::new(&env_path));
            }
        }
        if let Some(path) = default_config_path() {
            if path.exists() {
                return Self::from_file(&path);
            }
        }
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self, ShellError> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| {
            ShellError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }
}

fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "shellfs", "shellfs")
        .map(|dirs| dirs.config_dir().join("shellfs.toml"))
}
