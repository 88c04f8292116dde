// config.rs — Service configuration.
//
// ServiceConfig names the two places the file-backed service keeps its
// state: the goals directory (one JSON file per goal) and the users file
// (the JSON directory of user records). `for_root()` lays both out under
// a given data root; `load()` reads a TOML file for deployments that
// place them elsewhere.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised while loading a service configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Where the file-backed goal service keeps its state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Directory holding one JSON file per goal.
    #[serde(default = "default_goals_dir")]
    pub goals_dir: PathBuf,

    /// JSON file holding the user records.
    #[serde(default = "default_users_file")]
    pub users_file: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            goals_dir: default_goals_dir(),
            users_file: default_users_file(),
        }
    }
}

// Serde default functions
fn default_goals_dir() -> PathBuf {
    PathBuf::from("goals")
}

fn default_users_file() -> PathBuf {
    PathBuf::from("users.json")
}

impl ServiceConfig {
    /// Create a config with the standard layout under a data root.
    pub fn for_root(data_root: impl AsRef<Path>) -> Self {
        let root = data_root.as_ref();
        Self {
            goals_dir: root.join("goals"),
            users_file: root.join("users.json"),
        }
    }

    /// Load a config from a TOML file. Missing keys fall back to the
    /// defaults relative to the current directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}
