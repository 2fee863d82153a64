//! Application configuration.
//!
//! Configuration is stored in `.ticketapp/config.yaml` and includes:
//! - Simulated fetch latency
//! - Notification display time
//! - Whether ticket screens require a signed-in session

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::paths;

/// Keys accepted by `config get` and `config set`
pub const CONFIG_KEYS: &[&str] = &["latency_ms", "notification_ms", "require_login"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Delay applied before every fetch, in milliseconds (default: 200, 0 disables)
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// How long notifications stay visible, in milliseconds (default: 4000)
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,

    /// Whether ticket commands and screens require a session (default: true)
    #[serde(default = "default_require_login")]
    pub require_login: bool,
}

fn default_latency_ms() -> u64 {
    200
}

fn default_notification_ms() -> u64 {
    4000
}

fn default_require_login() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            notification_ms: default_notification_ms(),
            require_login: default_require_login(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        paths::config_path()
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_yaml_ng::to_string(self)?;
        crate::fs::write_file_atomic(path, &content)
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    /// Read a single key as display text
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "latency_ms" => Ok(self.latency_ms.to_string()),
            "notification_ms" => Ok(self.notification_ms.to_string()),
            "require_login" => Ok(self.require_login.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a single key, parsing `value` for the key's type
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "latency_ms" => self.latency_ms = parse_millis(key, value)?,
            "notification_ms" => self.notification_ms = parse_millis(key, value)?,
            "require_login" => self.require_login = parse_bool(key, value)?,
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> AppError {
    AppError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}

fn parse_millis(key: &str, value: &str) -> Result<u64> {
    value.trim().parse::<u64>().map_err(|_| {
        AppError::Config(format!(
            "'{value}' is not a valid value for {key}: expected milliseconds"
        ))
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(AppError::Config(format!(
            "'{value}' is not a valid value for {key}: expected true or false"
        ))),
    }
}
