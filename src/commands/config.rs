//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print one value
//! - `config set`: Set one value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::{CONFIG_KEYS, Config};
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;

    let json_output = json!({
        "latency_ms": config.latency_ms,
        "notification_ms": config.notification_ms,
        "require_login": config.require_login,
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text_output = format!("{}\n\n", "Configuration:".cyan().bold());
    for key in CONFIG_KEYS {
        text_output.push_str(&format!("{}: {}\n", key.cyan(), config.get(key)?));
    }
    text_output.push_str(&format!(
        "\n{}",
        format!("Config file: {}", Config::config_path().display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output_json)
}

/// Print a single configuration value
pub fn cmd_config_get(key: &str, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let value = config.get(key)?;

    CommandOutput::new(json!({
        "key": key,
        "value": value,
    }))
    .with_text(value)
    .print(output_json)
}

/// Set a configuration value and persist it
pub fn cmd_config_set(key: &str, value: &str, output_json: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    let stored = config.get(key)?;
    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": stored,
    }))
    .with_text(format!("Set {} = {}", key.cyan(), stored))
    .print(output_json)
}
