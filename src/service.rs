//! Ticket CRUD over a [`TicketStore`]

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::storage::TicketStore;
use crate::types::{NewTicket, Ticket, TicketId, TicketPatch};
use crate::utils::generate_ticket_id;

/// Latency applied to `fetch_all` unless configured otherwise
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(200);

#[derive(Clone)]
pub struct TicketService {
    store: Arc<dyn TicketStore>,
    latency: Duration,
}

impl TicketService {
    pub fn new(store: Arc<dyn TicketStore>) -> Self {
        Self {
            store,
            latency: DEFAULT_LATENCY,
        }
    }

    pub fn from_config(store: Arc<dyn TicketStore>, config: &Config) -> Self {
        Self::new(store).with_latency(config.latency())
    }

    /// Set the simulated fetch latency. Zero disables it.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Current persisted collection, newest first.
    pub async fn fetch_all(&self) -> Vec<Ticket> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.store.load_all()
    }

    /// Assign an id, prepend the ticket and persist the collection.
    pub async fn create(&self, new: NewTicket) -> Result<Ticket> {
        let mut tickets = self.store.load_all();
        let id = generate_ticket_id(&tickets);
        let ticket = new.into_ticket(id);

        tickets.insert(0, ticket.clone());
        self.store.save_all(&tickets)?;

        info!("Created ticket {}", ticket.id);
        Ok(ticket)
    }

    /// Merge `patch` over the stored ticket with the same id.
    pub async fn update(&self, patch: TicketPatch) -> Result<Ticket> {
        let mut tickets = self.store.load_all();
        let Some(existing) = tickets.iter_mut().find(|t| t.id == patch.id) else {
            debug!("Update target {} not found", patch.id);
            return Err(AppError::TicketNotFound(patch.id.to_string()));
        };

        patch.apply_to(existing);
        let updated = existing.clone();
        self.store.save_all(&tickets)?;

        info!("Updated ticket {}", updated.id);
        Ok(updated)
    }

    /// Remove the ticket with `id`. Deleting an unknown id does nothing.
    pub async fn delete(&self, id: &TicketId) -> Result<()> {
        let mut tickets = self.store.load_all();
        let before = tickets.len();
        tickets.retain(|t| &t.id != id);

        if tickets.len() == before {
            debug!("Delete target {} not found, nothing to do", id);
            return Ok(());
        }

        self.store.save_all(&tickets)?;
        info!("Deleted ticket {}", id);
        Ok(())
    }

    /// Look up a ticket by exact id or unique id prefix.
    pub fn find(&self, partial_id: &str) -> Result<Ticket> {
        resolve_ticket(&self.store.load_all(), partial_id)
    }
}

/// Resolve an exact id or a unique prefix against `tickets`.
pub fn resolve_ticket(tickets: &[Ticket], partial_id: &str) -> Result<Ticket> {
    let partial_id = partial_id.trim();
    if partial_id.is_empty() {
        return Err(AppError::TicketNotFound(partial_id.to_string()));
    }

    if let Some(exact) = tickets.iter().find(|t| t.id.as_str() == partial_id) {
        return Ok(exact.clone());
    }

    let mut matches = tickets
        .iter()
        .filter(|t| t.id.as_str().starts_with(partial_id));

    match (matches.next(), matches.next()) {
        (Some(only), None) => Ok(only.clone()),
        (Some(_), Some(_)) => Err(AppError::AmbiguousId(partial_id.to_string())),
        (None, _) => Err(AppError::TicketNotFound(partial_id.to_string())),
    }
}
