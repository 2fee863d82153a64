//! Application state and reducer
//!
//! All screen state lives in [`AppState`]. Input is turned into [`Action`]s,
//! [`reduce`] applies them and returns the [`Effect`]s that need the ticket
//! service. Effect results come back as more actions, so every state change
//! goes through the reducer and can be tested without a terminal.

pub mod confirm;
pub mod effects;
pub mod notify;
pub mod view_model;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::form::{FormField, FormState};
use crate::service::TicketService;
use crate::types::{Ticket, TicketId};

pub use confirm::ConfirmState;
pub use effects::Effect;
pub use notify::{Notification, Notifications, Severity};
pub use view_model::{ScreenView, compute_view};

pub const TICKET_CREATED: &str = "Ticket created";
pub const TICKET_UPDATED: &str = "Ticket updated";
pub const TICKET_DELETED: &str = "Ticket deleted";
pub const CREATE_FAILED: &str = "Failed to create ticket";
pub const UPDATE_FAILED: &str = "Failed to update ticket";
pub const DELETE_FAILED: &str = "Failed to delete ticket";

/// Which pane receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Form,
}

/// Whether a submit created or updated a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
    Create,
    Update,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub tickets: Vec<Ticket>,
    pub is_loading: bool,
    pub selected_index: usize,
    pub focus: Focus,
    pub form: FormState,
    pub confirm: ConfirmState,
    pub notifications: Notifications,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(notify::DEFAULT_NOTIFICATION_DURATION)
    }
}

impl AppState {
    pub fn new(notification_duration: Duration) -> Self {
        Self {
            tickets: Vec::new(),
            is_loading: false,
            selected_index: 0,
            focus: Focus::List,
            form: FormState::new(),
            confirm: ConfirmState::Closed,
            notifications: Notifications::new(notification_duration),
        }
    }

    pub fn selected_ticket(&self) -> Option<&Ticket> {
        self.tickets.get(self.selected_index)
    }

    fn find(&self, id: &TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| &t.id == id)
    }
}

/// All possible state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // List
    /// Start a fetch of the ticket collection
    Reload,
    /// A fetch finished
    TicketsLoaded(Vec<Ticket>),
    MoveDown,
    MoveUp,
    ToggleFocus,
    /// Load a ticket into the form
    EditTicket(TicketId),
    /// Empty create-mode form, focused
    NewTicket,
    RequestDelete(TicketId),

    // Confirmation
    ConfirmDelete,
    CancelDelete,

    // Form
    FocusNextField,
    FocusPrevField,
    FocusField(FormField),
    InputChar(char),
    Backspace,
    SetField(FormField, String),
    CycleStatus { forward: bool },
    ResetForm,
    Submit,
    SubmitSucceeded(SubmitKind),
    SubmitFailed(SubmitKind),
    DeleteSucceeded,
    DeleteFailed,

    // Notifications
    Notify {
        message: String,
        severity: Severity,
        duration: Option<Duration>,
    },
    Dismiss(u64),
    Tick(Instant),

    /// Leave the screen; handled by the caller
    Quit,
    /// End the session; handled by the caller
    Logout,
}

/// Apply an action to the state, returning the effects it requests.
pub fn reduce(state: &mut AppState, action: Action) -> Vec<Effect> {
    match action {
        Action::Reload => {
            state.is_loading = true;
            return vec![Effect::Fetch];
        }
        Action::TicketsLoaded(tickets) => {
            state.tickets = tickets;
            state.is_loading = false;
            state.selected_index = state
                .selected_index
                .min(state.tickets.len().saturating_sub(1));
        }
        Action::MoveDown => {
            if !state.tickets.is_empty() {
                state.selected_index = (state.selected_index + 1).min(state.tickets.len() - 1);
            }
        }
        Action::MoveUp => {
            state.selected_index = state.selected_index.saturating_sub(1);
        }
        Action::ToggleFocus => {
            state.focus = match state.focus {
                Focus::List => Focus::Form,
                Focus::Form => Focus::List,
            };
        }
        Action::EditTicket(id) => {
            if let Some(form) = state.find(&id).map(FormState::for_edit) {
                state.form = form;
                state.focus = Focus::Form;
            }
        }
        Action::NewTicket => {
            state.form.reset();
            state.focus = Focus::Form;
        }
        Action::RequestDelete(id) => {
            if let Some(ticket) = state.find(&id).cloned() {
                state.confirm.open(ticket);
            }
        }
        Action::ConfirmDelete => {
            if let Some(target) = state.confirm.close() {
                return vec![Effect::Delete(target.id)];
            }
        }
        Action::CancelDelete => {
            state.confirm.close();
        }
        Action::FocusNextField => state.form.focus_next(),
        Action::FocusPrevField => state.form.focus_prev(),
        Action::FocusField(field) => state.form.focused = field,
        Action::InputChar(c) => state.form.insert_char(c),
        Action::Backspace => state.form.backspace(),
        Action::SetField(field, value) => state.form.set_field(field, value),
        Action::CycleStatus { forward } => state.form.cycle_status(forward),
        Action::ResetForm => state.form.reset(),
        Action::Submit => {
            if let Ok(submission) = state.form.submit() {
                return vec![Effect::Submit(submission)];
            }
        }
        Action::SubmitSucceeded(kind) => {
            let message = match kind {
                SubmitKind::Create => TICKET_CREATED,
                SubmitKind::Update => TICKET_UPDATED,
            };
            state.notifications.success(message);
            state.form.reset();
            state.focus = Focus::List;
            state.is_loading = true;
            return vec![Effect::Fetch];
        }
        Action::SubmitFailed(kind) => {
            let message = match kind {
                SubmitKind::Create => CREATE_FAILED,
                SubmitKind::Update => UPDATE_FAILED,
            };
            state.notifications.error(message);
        }
        Action::DeleteSucceeded => {
            state.notifications.success(TICKET_DELETED);
            state.is_loading = true;
            return vec![Effect::Fetch];
        }
        Action::DeleteFailed => {
            state.notifications.error(DELETE_FAILED);
        }
        Action::Notify {
            message,
            severity,
            duration,
        } => {
            match duration {
                Some(duration) => state.notifications.push_for(message, severity, duration),
                None => state.notifications.push(message, severity),
            };
        }
        Action::Dismiss(id) => {
            state.notifications.dismiss(id);
        }
        Action::Tick(now) => {
            state.notifications.prune(now);
        }
        Action::Quit | Action::Logout => {}
    }
    Vec::new()
}

/// Headless driver: owns the state and runs effects to completion.
///
/// Each dispatched action is reduced, its effects are awaited, and their
/// resulting actions are reduced in turn before `dispatch` returns.
pub struct App {
    pub state: AppState,
    service: TicketService,
}

impl App {
    pub fn new(service: TicketService, notification_duration: Duration) -> Self {
        Self {
            state: AppState::new(notification_duration),
            service,
        }
    }

    pub async fn dispatch(&mut self, action: Action) {
        let mut queue = VecDeque::from([action]);
        while let Some(action) = queue.pop_front() {
            for effect in reduce(&mut self.state, action) {
                queue.extend(effects::run(&self.service, effect).await);
            }
        }
    }

    pub fn view(&self) -> ScreenView {
        compute_view(&self.state)
    }
}
