//! Delete confirmation gate

use crate::types::Ticket;

pub const CONFIRM_HEADING: &str = "Confirm delete";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfirmState {
    #[default]
    Closed,
    Open {
        target: Ticket,
    },
}

impl ConfirmState {
    pub fn open(&mut self, ticket: Ticket) {
        *self = ConfirmState::Open { target: ticket };
    }

    /// Close the gate, handing back the ticket it was holding.
    pub fn close(&mut self) -> Option<Ticket> {
        match std::mem::take(self) {
            ConfirmState::Open { target } => Some(target),
            ConfirmState::Closed => None,
        }
    }

    pub fn target(&self) -> Option<&Ticket> {
        match self {
            ConfirmState::Open { target } => Some(target),
            ConfirmState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ConfirmState::Open { .. })
    }
}

pub fn confirm_message(title: &str) -> String {
    format!("Are you sure you want to delete {title}?")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TicketId, TicketStatus};

    #[test]
    fn test_open_then_close_returns_target() {
        let ticket = Ticket {
            id: TicketId::new("a"),
            title: "Broken login".to_string(),
            description: None,
            status: TicketStatus::Open,
        };
        let mut gate = ConfirmState::default();
        assert!(!gate.is_open());

        gate.open(ticket.clone());
        assert_eq!(gate.target(), Some(&ticket));

        assert_eq!(gate.close(), Some(ticket));
        assert_eq!(gate, ConfirmState::Closed);
        assert_eq!(gate.close(), None);
    }

    #[test]
    fn test_confirm_message() {
        assert_eq!(
            confirm_message("Broken login"),
            "Are you sure you want to delete Broken login?"
        );
    }
}
