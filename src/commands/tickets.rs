//! Ticket CRUD commands

use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandContext, CommandOutput, print_json};
use crate::app::confirm::{CONFIRM_HEADING, confirm_message};
use crate::app::{CREATE_FAILED, DELETE_FAILED, TICKET_CREATED, TICKET_DELETED, TICKET_UPDATED, UPDATE_FAILED};
use crate::display::{format_ticket_card, format_ticket_line};
use crate::error::{AppError, Result};
use crate::form::{FormField, FormState, Submission};
use crate::types::{Ticket, TicketStatus};

/// Create a ticket through the form validation path
pub async fn cmd_create(
    title: &str,
    description: Option<&str>,
    status: Option<&str>,
    output_json: bool,
) -> Result<()> {
    let ctx = CommandContext::load()?;
    ctx.require_session()?;

    let mut form = FormState::new();
    form.set_field(FormField::Title, title);
    if let Some(description) = description {
        form.set_field(FormField::Description, description);
    }
    if let Some(status) = status {
        form.set_field(FormField::Status, status);
    }

    let Submission::Create(new) = submit(&mut form)? else {
        return Err(AppError::Other(CREATE_FAILED.to_string()));
    };

    let ticket = ctx.service().create(new).await.map_err(|e| {
        tracing::warn!("create failed: {}", e);
        AppError::Other(format!("{CREATE_FAILED}: {e}"))
    })?;

    CommandOutput::new(json!({
        "action": "created",
        "message": TICKET_CREATED,
        "ticket": ticket,
    }))
    .with_text(format!(
        "{}\n\n{}",
        TICKET_CREATED.green(),
        format_ticket_card(&ticket)
    ))
    .print(output_json)
}

/// List tickets, newest first
pub async fn cmd_ls(status: Option<TicketStatus>, output_json: bool) -> Result<()> {
    let ctx = CommandContext::load()?;
    ctx.require_session()?;

    let tickets: Vec<Ticket> = ctx
        .service()
        .fetch_all()
        .await
        .into_iter()
        .filter(|t| status.is_none_or(|s| t.status == s))
        .collect();

    if output_json {
        return print_json(&tickets);
    }

    if tickets.is_empty() {
        println!("{}", "No tickets".dimmed());
        return Ok(());
    }
    for ticket in &tickets {
        println!("{}", format_ticket_line(ticket));
    }
    Ok(())
}

/// Show one ticket by id or unique id prefix
pub async fn cmd_show(id: &str, output_json: bool) -> Result<()> {
    let ctx = CommandContext::load()?;
    ctx.require_session()?;

    let ticket = ctx.service().find(id)?;
    CommandOutput::new(json!(ticket))
        .with_text(format_ticket_card(&ticket))
        .print(output_json)
}

/// Fields `update` may change; `None` keeps the stored value
#[derive(Debug, Default)]
pub struct UpdateOptions {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// Update a ticket through the edit-mode form
pub async fn cmd_update(id: &str, options: UpdateOptions, output_json: bool) -> Result<()> {
    let ctx = CommandContext::load()?;
    ctx.require_session()?;

    let service = ctx.service();
    let existing = service.find(id)?;

    let mut form = FormState::for_edit(&existing);
    if let Some(title) = options.title {
        form.set_field(FormField::Title, title);
    }
    if let Some(description) = options.description {
        form.set_field(FormField::Description, description);
    }
    if let Some(status) = options.status {
        form.set_field(FormField::Status, status);
    }

    let Submission::Update(patch) = submit(&mut form)? else {
        return Err(AppError::Other(UPDATE_FAILED.to_string()));
    };

    let ticket = service.update(patch).await.map_err(|e| {
        tracing::warn!("update failed: {}", e);
        AppError::Other(format!("{UPDATE_FAILED}: {e}"))
    })?;

    CommandOutput::new(json!({
        "action": "updated",
        "message": TICKET_UPDATED,
        "ticket": ticket,
    }))
    .with_text(format!(
        "{}\n\n{}",
        TICKET_UPDATED.green(),
        format_ticket_card(&ticket)
    ))
    .print(output_json)
}

/// Delete a ticket, asking for confirmation unless `yes` is set
pub async fn cmd_delete(id: &str, yes: bool, output_json: bool) -> Result<()> {
    let ctx = CommandContext::load()?;
    ctx.require_session()?;

    let service = ctx.service();
    let ticket = service.find(id)?;

    if !yes {
        let stdin = io::stdin();
        if !confirm_delete(&ticket, &mut stdin.lock(), &mut io::stderr())? {
            return CommandOutput::new(json!({
                "action": "cancelled",
                "id": ticket.id,
            }))
            .with_text("Cancelled".dimmed().to_string())
            .print(output_json);
        }
    }

    service.delete(&ticket.id).await.map_err(|e| {
        tracing::warn!("delete failed: {}", e);
        AppError::Other(format!("{DELETE_FAILED}: {e}"))
    })?;

    CommandOutput::new(json!({
        "action": "deleted",
        "message": TICKET_DELETED,
        "id": ticket.id,
    }))
    .with_text(TICKET_DELETED.green().to_string())
    .print(output_json)
}

fn submit(form: &mut FormState) -> Result<Submission> {
    form.submit().map_err(AppError::Validation)
}

/// Ask on `input` whether to delete; only `y` or `yes` confirms.
fn confirm_delete<R: BufRead, W: Write>(ticket: &Ticket, input: &mut R, prompt: &mut W) -> Result<bool> {
    write!(
        prompt,
        "{}\n{} [y/N] ",
        CONFIRM_HEADING.bold(),
        confirm_message(&ticket.title)
    )?;
    prompt.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TicketId;

    fn ticket() -> Ticket {
        Ticket {
            id: TicketId::new("a"),
            title: "Broken login".to_string(),
            description: None,
            status: TicketStatus::Open,
        }
    }

    #[test]
    fn test_confirm_delete_answers() {
        for (answer, expected) in [
            ("y\n", true),
            ("YES\n", true),
            ("n\n", false),
            ("\n", false),
            ("", false),
            ("yep\n", false),
        ] {
            let mut input = answer.as_bytes();
            let mut prompt = Vec::new();
            assert_eq!(
                confirm_delete(&ticket(), &mut input, &mut prompt).unwrap(),
                expected,
                "answer {answer:?}"
            );
            let prompt = String::from_utf8(prompt).unwrap();
            assert!(prompt.contains("Are you sure you want to delete Broken login?"));
        }
    }
}
