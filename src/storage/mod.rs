//! Ticket collection storage
//!
//! A store holds one serialized collection at a fixed key. Backends only
//! implement the raw slot primitives; decoding, tolerance of malformed data
//! and serialization live in the provided methods so every backend behaves
//! the same way.

pub mod file;
pub mod memory;
pub mod migration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::types::Ticket;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use migration::{MigrationReport, migrate_legacy_fields};

pub trait TicketStore: Send + Sync {
    /// Raw serialized collection, or `None` when nothing has been stored yet
    fn read_slot(&self) -> Result<Option<String>>;

    /// Replace the raw serialized collection
    fn write_slot(&self, content: &str) -> Result<()>;

    /// Load every stored ticket.
    ///
    /// Missing or malformed data yields an empty collection. Errors are
    /// logged, never surfaced.
    fn load_all(&self) -> Vec<Ticket> {
        let raw = match self.read_slot() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read ticket storage: {}", e);
                return Vec::new();
            }
        };

        match parse_tickets(&raw) {
            Ok(tickets) => tickets,
            Err(e) => {
                warn!("{}", e);
                Vec::new()
            }
        }
    }

    /// Overwrite the entire stored collection.
    fn save_all(&self, tickets: &[Ticket]) -> Result<()> {
        let content = serde_json::to_string_pretty(tickets)?;
        self.write_slot(&content)?;
        debug!("Saved {} tickets", tickets.len());
        Ok(())
    }
}

/// Decode a serialized collection.
///
/// A JSON array is decoded entry by entry, skipping entries that are not
/// valid tickets. A lone JSON object is treated as a one-element collection.
pub fn parse_tickets(raw: &str) -> Result<Vec<Ticket>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value =
        serde_json::from_str(raw).map_err(|e| AppError::StorageParse(e.to_string()))?;

    match value {
        Value::Array(entries) => Ok(entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(ticket) => Some(ticket),
                Err(e) => {
                    warn!("Skipping stored ticket at index {}: {}", index, e);
                    None
                }
            })
            .collect()),
        Value::Object(_) => serde_json::from_value(value)
            .map(|ticket| vec![ticket])
            .map_err(|e| AppError::StorageParse(e.to_string())),
        other => Err(AppError::StorageParse(format!(
            "expected a list of tickets, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
