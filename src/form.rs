//! Ticket form state and validation
//!
//! The form is a small state machine with two modes. It starts in create
//! mode, switches to edit mode when a ticket is loaded into it, and returns
//! to create mode after a successful submit or an explicit reset.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::{MAX_DESCRIPTION_CHARS, NewTicket, Ticket, TicketId, TicketPatch, TicketStatus};

pub const TITLE_REQUIRED: &str = "Title is required";
pub const STATUS_REQUIRED: &str = "Status is required";
pub const STATUS_INVALID: &str = "Invalid status";
pub const DESCRIPTION_TOO_LONG: &str = "Description is too long (max 1000 chars)";

/// Form fields in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FormField {
    #[default]
    Title,
    Status,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Title, FormField::Status, FormField::Description];

    /// Get the next field (wrapping)
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Status,
            FormField::Status => FormField::Description,
            FormField::Description => FormField::Title,
        }
    }

    /// Get the previous field (wrapping)
    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Status => FormField::Title,
            FormField::Description => FormField::Status,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Status => "status",
            FormField::Description => "description",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Status => "Status",
            FormField::Description => "Description",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Field-level validation messages, ordered by field declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: Ord = FormField>(BTreeMap<F, String>);

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: F) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// First invalid field in declaration order
    pub fn first(&self) -> Option<F> {
        self.0.keys().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl<F: Ord + Copy + fmt::Display> fmt::Display for FieldErrors<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{field}: {msg}"))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Raw field values as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub title: String,
    pub description: String,
    pub status: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: TicketStatus::Open.to_string(),
        }
    }
}

impl FormFields {
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            title: ticket.title.clone(),
            description: ticket.description.clone().unwrap_or_default(),
            status: ticket.status.to_string(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Status => &self.status,
            FormField::Description => &self.description,
        }
    }

    fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Status => &mut self.status,
            FormField::Description => &mut self.description,
        }
    }
}

/// Validate every field, collecting all errors.
pub fn validate(fields: &FormFields) -> Result<NewTicket, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = fields.title.trim();
    if title.is_empty() {
        errors.insert(FormField::Title, TITLE_REQUIRED);
    }

    let status = fields.status.trim();
    let parsed_status = if status.is_empty() {
        errors.insert(FormField::Status, STATUS_REQUIRED);
        None
    } else {
        match status.parse::<TicketStatus>() {
            Ok(s) => Some(s),
            Err(_) => {
                errors.insert(FormField::Status, STATUS_INVALID);
                None
            }
        }
    };

    if fields.description.chars().count() > MAX_DESCRIPTION_CHARS {
        errors.insert(FormField::Description, DESCRIPTION_TOO_LONG);
    }

    match parsed_status {
        Some(status) if errors.is_empty() => Ok(NewTicket {
            title: title.to_string(),
            description: normalize_description(&fields.description),
            status,
        }),
        _ => Err(errors),
    }
}

fn normalize_description(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(TicketId),
}

/// A validated form, ready for the ticket service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(NewTicket),
    Update(TicketPatch),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub mode: FormMode,
    pub fields: FormFields,
    pub errors: FieldErrors,
    pub focused: FormField,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a ticket into the form and switch to edit mode.
    pub fn for_edit(ticket: &Ticket) -> Self {
        Self {
            mode: FormMode::Edit(ticket.id.clone()),
            fields: FormFields::from_ticket(ticket),
            errors: FieldErrors::new(),
            focused: FormField::Title,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn editing_id(&self) -> Option<&TicketId> {
        match &self.mode {
            FormMode::Edit(id) => Some(id),
            FormMode::Create => None,
        }
    }

    /// Back to an empty create-mode form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replace a field's value. Editing a field clears its error.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
        self.errors.remove(field);
    }

    pub fn insert_char(&mut self, c: char) {
        let field = self.focused;
        self.fields.get_mut(field).push(c);
        self.errors.remove(field);
    }

    pub fn backspace(&mut self) {
        let field = self.focused;
        self.fields.get_mut(field).pop();
        self.errors.remove(field);
    }

    /// Step the status field through the valid values.
    ///
    /// Text that is not a valid status restarts the cycle at `open`.
    pub fn cycle_status(&mut self, forward: bool) {
        let next = match self.fields.status.trim().parse::<TicketStatus>() {
            Ok(current) if forward => current.next(),
            Ok(current) => current.prev(),
            Err(_) => TicketStatus::Open,
        };
        self.set_field(FormField::Status, next.to_string());
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Validate the form.
    ///
    /// On failure the errors are recorded, focus moves to the first invalid
    /// field and no submission is produced.
    pub fn submit(&mut self) -> Result<Submission, FieldErrors> {
        match validate(&self.fields) {
            Ok(new) => {
                self.errors.clear();
                Ok(match &self.mode {
                    FormMode::Create => Submission::Create(new),
                    FormMode::Edit(id) => Submission::Update(TicketPatch {
                        id: id.clone(),
                        title: Some(new.title),
                        description: Some(new.description),
                        status: Some(new.status),
                    }),
                })
            }
            Err(errors) => {
                if let Some(first) = errors.first() {
                    self.focused = first;
                }
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, status: &str, description: &str) -> FormFields {
        FormFields {
            title: title.to_string(),
            description: description.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(FormField::Title.next(), FormField::Status);
        assert_eq!(FormField::Description.next(), FormField::Title);
        assert_eq!(FormField::Title.prev(), FormField::Description);
    }

    #[test]
    fn test_empty_title_only_error() {
        let errors = validate(&fields("", "open", "")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::Title), Some(TITLE_REQUIRED));
    }

    #[test]
    fn test_whitespace_title_rejected() {
        let errors = validate(&fields("   ", "open", "")).unwrap_err();
        assert_eq!(errors.get(FormField::Title), Some(TITLE_REQUIRED));
    }

    #[test]
    fn test_long_description_only_error() {
        let long = "x".repeat(1001);
        let errors = validate(&fields("Fix bug", "open", &long)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::Description), Some(DESCRIPTION_TOO_LONG));
    }

    #[test]
    fn test_description_limit_counts_chars() {
        let exact = "é".repeat(1000);
        assert!(validate(&fields("T", "open", &exact)).is_ok());
    }

    #[test]
    fn test_status_errors() {
        let errors = validate(&fields("T", "", "")).unwrap_err();
        assert_eq!(errors.get(FormField::Status), Some(STATUS_REQUIRED));

        let errors = validate(&fields("T", "done", "")).unwrap_err();
        assert_eq!(errors.get(FormField::Status), Some(STATUS_INVALID));
    }

    #[test]
    fn test_all_errors_collected() {
        let long = "x".repeat(1001);
        let errors = validate(&fields("", "nope", &long)).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.first(), Some(FormField::Title));
        assert_eq!(
            errors.to_string(),
            "title: Title is required; status: Invalid status; description: Description is too long (max 1000 chars)"
        );
    }

    #[test]
    fn test_valid_form_normalizes() {
        let new = validate(&fields("  Fix bug ", "in_progress", "")).unwrap();
        assert_eq!(new.title, "Fix bug");
        assert_eq!(new.status, TicketStatus::InProgress);
        assert!(new.description.is_none());
    }

    #[test]
    fn test_submit_failure_focuses_first_invalid() {
        let mut form = FormState::new();
        form.focused = FormField::Description;
        form.set_field(FormField::Title, "ok");
        form.set_field(FormField::Status, "bogus");

        let result = form.submit();
        assert!(result.is_err());
        assert_eq!(form.focused, FormField::Status);
        assert_eq!(form.errors.get(FormField::Status), Some(STATUS_INVALID));
    }

    #[test]
    fn test_editing_field_clears_its_error() {
        let mut form = FormState::new();
        form.set_field(FormField::Status, "");
        let _ = form.submit();
        assert_eq!(form.errors.len(), 2);

        form.focused = FormField::Title;
        form.insert_char('A');
        assert!(form.errors.get(FormField::Title).is_none());
        assert_eq!(form.errors.get(FormField::Status), Some(STATUS_REQUIRED));
    }

    #[test]
    fn test_edit_mode_submits_patch() {
        let ticket = Ticket {
            id: TicketId::new("abc"),
            title: "Old".to_string(),
            description: Some("body".to_string()),
            status: TicketStatus::Open,
        };
        let mut form = FormState::for_edit(&ticket);
        assert!(form.is_edit());
        assert_eq!(form.fields.description, "body");

        form.set_field(FormField::Title, "New");
        form.set_field(FormField::Description, "");
        let submission = form.submit().unwrap();

        assert_eq!(
            submission,
            Submission::Update(TicketPatch {
                id: TicketId::new("abc"),
                title: Some("New".to_string()),
                description: Some(None),
                status: Some(TicketStatus::Open),
            })
        );
    }

    #[test]
    fn test_reset_returns_to_create_mode() {
        let ticket = Ticket {
            id: TicketId::new("abc"),
            title: "Old".to_string(),
            description: None,
            status: TicketStatus::Closed,
        };
        let mut form = FormState::for_edit(&ticket);
        form.reset();
        assert_eq!(form, FormState::new());
        assert_eq!(form.fields.status, "open");
    }

    #[test]
    fn test_cycle_status() {
        let mut form = FormState::new();
        form.cycle_status(true);
        assert_eq!(form.fields.status, "in_progress");
        form.cycle_status(false);
        form.cycle_status(false);
        assert_eq!(form.fields.status, "closed");

        form.set_field(FormField::Status, "garbage");
        form.cycle_status(true);
        assert_eq!(form.fields.status, "open");
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut form = FormState::new();
        form.focused = FormField::Description;
        form.insert_char('h');
        form.insert_char('i');
        form.backspace();
        assert_eq!(form.fields.description, "h");
        assert_eq!(form.fields.title, "");
    }
}
