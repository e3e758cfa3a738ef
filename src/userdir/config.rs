//! # Configuration
//!
//! Client configuration is stored as `config.json` in the userdir config directory.
//!
//! ## Resolution
//!
//! 1. **Command line**: `--endpoint <url>` overrides the endpoint for one invocation.
//! 2. **Environment**: `USERDIR_ENDPOINT` overrides the endpoint; `USERDIR_HOME`
//!    replaces the config directory.
//! 3. **Config file**: `config.json` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `endpoint` | `https://jsonplaceholder.typicode.com/users` | User collection URL |
//! | `mutations` | `simulated` | `simulated`: update/delete only log and refetch. `remote`: send PATCH/DELETE |
//! | `validate-updates` | `false` | Apply the add-form validation to updates too |

use crate::error::{Result, UserdirError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
pub const HOME_ENV: &str = "USERDIR_HOME";
pub const ENDPOINT_ENV: &str = "USERDIR_ENDPOINT";

/// What update and delete actually do against the remote collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationMode {
    /// Log the intended mutation and refetch, without sending it.
    #[default]
    Simulated,
    /// Send PATCH / DELETE to the member URL, then refetch.
    Remote,
}

impl fmt::Display for MutationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationMode::Simulated => f.write_str("simulated"),
            MutationMode::Remote => f.write_str("remote"),
        }
    }
}

impl FromStr for MutationMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simulated" => Ok(MutationMode::Simulated),
            "remote" => Ok(MutationMode::Remote),
            other => Err(format!(
                "Invalid mutations mode: {} (expected simulated or remote)",
                other
            )),
        }
    }
}

/// Configuration for userdir, stored in `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub mutations: MutationMode,

    #[serde(default)]
    pub validate_updates: bool,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            mutations: MutationMode::default(),
            validate_updates: false,
        }
    }
}

impl ClientConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ClientConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match normalize_key(key).as_str() {
            "endpoint" => Some(self.endpoint.clone()),
            "mutations" => Some(self.mutations.to_string()),
            "validate-updates" => Some(self.validate_updates.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match normalize_key(key).as_str() {
            "endpoint" => {
                url::Url::parse(value).map_err(|e| format!("Invalid endpoint {}: {}", value, e))?;
                self.endpoint = value.to_string();
            }
            "mutations" => self.mutations = value.parse()?,
            "validate-updates" => {
                self.validate_updates = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("Invalid boolean: {} (expected true or false)", value))?;
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        vec![
            ("endpoint", self.endpoint.clone()),
            ("mutations", self.mutations.to_string()),
            ("validate-updates", self.validate_updates.to_string()),
        ]
    }

    /// Apply the per-invocation endpoint override, then `USERDIR_ENDPOINT`.
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.or_else(|| std::env::var(ENDPOINT_ENV).ok()) {
            self.endpoint = endpoint;
        }
        self
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase().replace('_', "-")
}

/// The directory holding `config.json`: `USERDIR_HOME` if set, else the OS config dir.
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("", "", "userdir")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| UserdirError::Config("Could not determine a config directory".to_string()))
}
