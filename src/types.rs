use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Maximum description length, in characters
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Closed,
}

impl TicketStatus {
    /// Human label used on status badges ("in progress")
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in progress",
            TicketStatus::Closed => "closed",
        }
    }

    pub fn all() -> &'static [TicketStatus] {
        &[
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Closed,
        ]
    }

    /// Next status in declaration order (wrapping)
    pub fn next(self) -> Self {
        match self {
            TicketStatus::Open => TicketStatus::InProgress,
            TicketStatus::InProgress => TicketStatus::Closed,
            TicketStatus::Closed => TicketStatus::Open,
        }
    }

    /// Previous status in declaration order (wrapping)
    pub fn prev(self) -> Self {
        match self {
            TicketStatus::Open => TicketStatus::Closed,
            TicketStatus::InProgress => TicketStatus::Open,
            TicketStatus::Closed => TicketStatus::InProgress,
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Open => write!(f, "open"),
            TicketStatus::InProgress => write!(f, "in_progress"),
            TicketStatus::Closed => write!(f, "closed"),
        }
    }
}

impl FromStr for TicketStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(TicketStatus::Open),
            "in_progress" => Ok(TicketStatus::InProgress),
            "closed" => Ok(TicketStatus::Closed),
            _ => Err(AppError::InvalidStatus(s.to_string())),
        }
    }
}

pub const VALID_STATUSES: &[&str] = &["open", "in_progress", "closed"];

/// Opaque ticket identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TicketId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A persisted ticket record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TicketStatus,
}

/// Fields for a ticket that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewTicket {
    pub title: String,
    pub description: Option<String>,
    pub status: TicketStatus,
}

impl NewTicket {
    pub fn new(title: impl Into<String>, status: TicketStatus) -> Self {
        Self {
            title: title.into(),
            description: None,
            status,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn into_ticket(self, id: TicketId) -> Ticket {
        Ticket {
            id,
            title: self.title,
            description: self.description,
            status: self.status,
        }
    }
}

/// Partial update addressed by id; `None` fields keep the stored value.
///
/// `description: Some(None)` clears the description.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TicketPatch {
    pub id: TicketId,
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<TicketStatus>,
}

impl TicketPatch {
    pub fn new(id: TicketId) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Merge this patch over an existing record. The id never changes.
    pub fn apply_to(&self, ticket: &mut Ticket) {
        if let Some(title) = &self.title {
            ticket.title = title.clone();
        }
        if let Some(description) = &self.description {
            ticket.description = description.clone();
        }
        if let Some(status) = self.status {
            ticket.status = status;
        }
    }
}

impl From<Ticket> for TicketPatch {
    fn from(ticket: Ticket) -> Self {
        Self {
            id: ticket.id,
            title: Some(ticket.title),
            description: Some(ticket.description),
            status: Some(ticket.status),
        }
    }
}

/// Ticket counts per status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub open: usize,
    pub in_progress: usize,
    pub closed: usize,
}

impl StatusCounts {
    pub fn from_tickets(tickets: &[Ticket]) -> Self {
        tickets.iter().fold(Self::default(), |mut counts, t| {
            match t.status {
                TicketStatus::Open => counts.open += 1,
                TicketStatus::InProgress => counts.in_progress += 1,
                TicketStatus::Closed => counts.closed += 1,
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.open + self.in_progress + self.closed
    }
}
