//! Service calls requested by the reducer

use tracing::warn;

use super::{Action, SubmitKind};
use crate::form::Submission;
use crate::service::TicketService;
use crate::types::TicketId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch,
    Submit(Submission),
    Delete(TicketId),
}

/// Run one effect against the service and describe the outcome as actions.
///
/// Service errors never escape: they become failure actions, which the
/// reducer turns into error notifications.
pub async fn run(service: &TicketService, effect: Effect) -> Vec<Action> {
    match effect {
        Effect::Fetch => vec![Action::TicketsLoaded(service.fetch_all().await)],
        Effect::Submit(Submission::Create(new)) => match service.create(new).await {
            Ok(_) => vec![Action::SubmitSucceeded(SubmitKind::Create)],
            Err(e) => {
                warn!("Failed to create ticket: {}", e);
                vec![Action::SubmitFailed(SubmitKind::Create)]
            }
        },
        Effect::Submit(Submission::Update(patch)) => match service.update(patch).await {
            Ok(_) => vec![Action::SubmitSucceeded(SubmitKind::Update)],
            Err(e) => {
                warn!("Failed to update ticket: {}", e);
                vec![Action::SubmitFailed(SubmitKind::Update)]
            }
        },
        Effect::Delete(id) => match service.delete(&id).await {
            Ok(()) => vec![Action::DeleteSucceeded],
            Err(e) => {
                warn!("Failed to delete ticket {}: {}", id, e);
                vec![Action::DeleteFailed]
            }
        },
    }
}
