//! Coloured terminal formatting for CLI output

use owo_colors::OwoColorize;

use crate::app::view_model::{CardView, StatusBadge};
use crate::error::AppError;
use crate::form::FieldErrors;
use crate::types::{Ticket, TicketStatus};
use crate::utils::truncate_chars;

pub fn format_status_colored(status: TicketStatus) -> String {
    format_status_colored_with_format(status, |s| format!("[{s}]"))
}

pub fn format_status_colored_with_format<F>(status: TicketStatus, format_fn: F) -> String
where
    F: Fn(&str) -> String,
{
    let badge = format_fn(&StatusBadge::new(status).label);
    match status {
        TicketStatus::Open => badge.yellow().to_string(),
        TicketStatus::InProgress => badge.cyan().to_string(),
        TicketStatus::Closed => badge.green().to_string(),
    }
}

/// One-line summary used by `ls`
pub fn format_ticket_line(ticket: &Ticket) -> String {
    let id_padded = format!("{:10}", ticket.id.as_str());
    format!(
        "{} {} {}",
        id_padded.cyan(),
        format_status_colored(ticket.status),
        truncate_chars(&ticket.title, 72)
    )
}

/// Multi-line card used by `show`, `create` and `update`
pub fn format_ticket_card(ticket: &Ticket) -> String {
    let card = CardView::from_ticket(ticket, false);
    let description = if card.has_description {
        card.description.clone()
    } else {
        card.description.dimmed().to_string()
    };
    format!(
        "{} {}\n{} {}\n\n{}",
        card.title.bold(),
        format_status_colored(card.badge.status),
        "id:".dimmed(),
        card.id.as_str().cyan(),
        description
    )
}

/// One `<field>: <message>` line per validation error
pub fn format_field_errors<F>(errors: &FieldErrors<F>) -> String
where
    F: Ord + Copy + std::fmt::Display,
{
    errors
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message.red()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a command error for stderr. Field errors get one line per field.
pub fn format_error(err: &AppError) -> String {
    match err {
        AppError::Validation(errors) => format_field_errors(errors),
        AppError::AuthValidation(errors) => format_field_errors(errors),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormField;
    use crate::types::TicketId;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_ticket_line_contents() {
        let ticket = Ticket {
            id: TicketId::new("lx1"),
            title: "Broken login".to_string(),
            description: None,
            status: TicketStatus::InProgress,
        };
        let line = strip_ansi(&format_ticket_line(&ticket));
        assert_eq!(line, "lx1        [in progress] Broken login");
    }

    #[test]
    fn test_card_uses_fallback_description() {
        let ticket = Ticket {
            id: TicketId::new("lx1"),
            title: "Broken login".to_string(),
            description: None,
            status: TicketStatus::Open,
        };
        let card = strip_ansi(&format_ticket_card(&ticket));
        insta::assert_snapshot!(card, @r"
        Broken login [open]
        id: lx1

        No description
        ");
    }

    #[test]
    fn test_field_errors_lines() {
        let mut errors = FieldErrors::new();
        errors.insert(FormField::Description, "too long");
        errors.insert(FormField::Title, "Title is required");
        let text = strip_ansi(&format_field_errors(&errors));
        assert_eq!(text, "title: Title is required\ndescription: too long");
    }

    #[test]
    fn test_error_shows_field_errors_once() {
        let mut errors = FieldErrors::new();
        errors.insert(FormField::Title, "Title is required");
        let text = strip_ansi(&format_error(&AppError::Validation(errors)));
        assert_eq!(text, "title: Title is required");

        let text = format_error(&AppError::TicketNotFound("abc".to_string()));
        assert_eq!(text, "ticket 'abc' not found");
    }
}
