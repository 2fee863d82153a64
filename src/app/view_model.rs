//! Pure projections from [`AppState`] to renderable view models
//!
//! Both the terminal UI and the CLI formatters render from these types, so
//! the fallback texts and labels are decided in exactly one place.

use super::confirm::{CONFIRM_HEADING, confirm_message};
use super::notify::Severity;
use super::{Action, AppState, Focus};
use crate::form::{FormField, FormState};
use crate::types::{StatusCounts, Ticket, TicketId, TicketStatus};

pub const NO_DESCRIPTION: &str = "No description";
pub const CREATE_HEADING: &str = "Create ticket";
pub const EDIT_HEADING: &str = "Edit ticket";
pub const CREATE_LABEL: &str = "Create";
pub const UPDATE_LABEL: &str = "Update";
pub const RESET_LABEL: &str = "Reset";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub status: TicketStatus,
    pub label: String,
}

impl StatusBadge {
    pub fn new(status: TicketStatus) -> Self {
        Self {
            status,
            label: status.to_string().replace('_', " "),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: TicketId,
    pub title: String,
    pub description: String,
    pub has_description: bool,
    pub badge: StatusBadge,
    pub is_selected: bool,
}

impl CardView {
    pub fn from_ticket(ticket: &Ticket, is_selected: bool) -> Self {
        let description = ticket
            .description
            .as_deref()
            .filter(|d| !d.is_empty());
        Self {
            id: ticket.id.clone(),
            title: ticket.title.clone(),
            description: description.unwrap_or(NO_DESCRIPTION).to_string(),
            has_description: description.is_some(),
            badge: StatusBadge::new(ticket.status),
            is_selected,
        }
    }

    /// Action behind the card's Edit button
    pub fn edit_action(&self) -> Action {
        Action::EditTicket(self.id.clone())
    }

    /// Action behind the card's Delete button
    pub fn delete_action(&self) -> Action {
        Action::RequestDelete(self.id.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListView {
    #[default]
    Loading,
    Empty,
    Cards(Vec<CardView>),
}

pub fn project_list(tickets: &[Ticket], is_loading: bool, selected_index: usize) -> ListView {
    if is_loading {
        ListView::Loading
    } else if tickets.is_empty() {
        ListView::Empty
    } else {
        ListView::Cards(
            tickets
                .iter()
                .enumerate()
                .map(|(i, t)| CardView::from_ticket(t, i == selected_index))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: FormField,
    pub label: &'static str,
    pub value: String,
    pub error: Option<String>,
    pub is_focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub reset_label: &'static str,
    pub is_edit: bool,
    pub fields: Vec<FieldView>,
    pub focused: FormField,
}

impl FormView {
    pub fn field(&self, field: FormField) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.field == field)
    }
}

pub fn project_form(form: &FormState) -> FormView {
    let is_edit = form.is_edit();
    FormView {
        heading: if is_edit { EDIT_HEADING } else { CREATE_HEADING },
        submit_label: if is_edit { UPDATE_LABEL } else { CREATE_LABEL },
        reset_label: RESET_LABEL,
        is_edit,
        fields: FormField::ALL
            .iter()
            .map(|&field| FieldView {
                field,
                label: field.label(),
                value: form.fields.get(field).to_string(),
                error: form.errors.get(field).map(str::to_string),
                is_focused: form.focused == field,
            })
            .collect(),
        focused: form.focused,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmView {
    pub heading: &'static str,
    pub message: String,
    pub target: TicketId,
}

pub fn project_confirm(ticket: &Ticket) -> ConfirmView {
    ConfirmView {
        heading: CONFIRM_HEADING,
        message: confirm_message(&ticket.title),
        target: ticket.id.clone(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Everything one frame of the tickets screen needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    pub counts: StatusCounts,
    pub list: ListView,
    pub form: FormView,
    pub confirm: Option<ConfirmView>,
    pub notifications: Vec<NotificationView>,
    pub focus: Focus,
}

pub fn compute_view(state: &AppState) -> ScreenView {
    ScreenView {
        counts: StatusCounts::from_tickets(&state.tickets),
        list: project_list(&state.tickets, state.is_loading, state.selected_index),
        form: project_form(&state.form),
        confirm: state.confirm.target().map(project_confirm),
        notifications: state
            .notifications
            .iter()
            .map(|n| NotificationView {
                id: n.id,
                message: n.message.clone(),
                severity: n.severity,
            })
            .collect(),
        focus: state.focus,
    }
}
