//! CLI command implementations

mod auth;
mod config;
mod dashboard;
mod tickets;
mod view;

pub use auth::{cmd_login, cmd_logout, cmd_signup, cmd_whoami};
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use dashboard::cmd_dashboard;
pub use tickets::{UpdateOptions, cmd_create, cmd_delete, cmd_ls, cmd_show, cmd_update};
pub use view::cmd_view;

use std::path::PathBuf;
use std::sync::Arc;

use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::Value;

use crate::auth::{Session, SessionStore};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::paths::app_root;
use crate::service::TicketService;
use crate::storage::JsonFileStore;

/// JSON payload plus an optional human-readable rendering
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print as JSON when requested, otherwise as text (falling back to JSON).
    pub fn print(self, output_json: bool) -> Result<()> {
        match (output_json, self.text) {
            (false, Some(text)) => println!("{text}"),
            _ => print_json(&self.json)?,
        }
        Ok(())
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Everything a command needs, resolved from the app root
pub struct CommandContext {
    pub root: PathBuf,
    pub config: Config,
    pub sessions: SessionStore,
}

impl CommandContext {
    pub fn load() -> Result<Self> {
        let root = app_root();
        let config = Config::load()?;
        let sessions = SessionStore::open(&root);
        Ok(Self {
            root,
            config,
            sessions,
        })
    }

    /// Open the ticket store (running migrations) and wrap it in a service.
    pub fn service(&self) -> TicketService {
        let store = Arc::new(JsonFileStore::open(&self.root));
        TicketService::from_config(store, &self.config)
    }

    /// Fail with the login notice unless a session exists or login is optional.
    pub fn require_session(&self) -> Result<Option<Session>> {
        self.sessions.require(&self.config).map_err(|e| match e {
            AppError::AuthRequired(notice) => AppError::AuthRequired(format!(
                "{notice}\n{}",
                "Run `ticketapp login` or `ticketapp signup` first.".dimmed()
            )),
            other => other,
        })
    }
}
