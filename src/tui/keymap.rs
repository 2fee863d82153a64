//! Key bindings
//!
//! Translating keys into actions here keeps the components free of input
//! logic and lets the bindings be tested without a terminal.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::app::view_model::CardView;
use crate::app::{Action, AppState, Focus};
use crate::form::FormField;

/// Map a key press on the tickets screen to an action.
///
/// The confirmation dialog captures all input while open.
pub fn ticket_action(state: &AppState, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if state.confirm.is_open() {
        return match code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::ConfirmDelete),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CancelDelete),
            _ => None,
        };
    }

    match state.focus {
        Focus::List => list_action(state, code),
        Focus::Form => form_action(state, code, modifiers),
    }
}

/// Edit and delete go through the selected card's buttons.
fn list_action(state: &AppState, code: KeyCode) -> Option<Action> {
    let selected_card = || {
        state
            .selected_ticket()
            .map(|ticket| CardView::from_ticket(ticket, true))
    };

    let action = match code {
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('e') | KeyCode::Enter => return selected_card().map(|c| c.edit_action()),
        KeyCode::Char('d') => return selected_card().map(|c| c.delete_action()),
        KeyCode::Char('n') => Action::NewTicket,
        KeyCode::Char('r') => Action::Reload,
        KeyCode::Char('x') => return state.notifications.newest().map(|n| Action::Dismiss(n.id)),
        KeyCode::Char('L') => Action::Logout,
        KeyCode::Tab => Action::ToggleFocus,
        KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}

fn form_action(state: &AppState, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('s') => Some(Action::Submit),
            KeyCode::Char('l') => Some(Action::ToggleFocus),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    let on_status = state.form.focused == FormField::Status;
    let action = match code {
        KeyCode::Tab | KeyCode::Down => Action::FocusNextField,
        KeyCode::BackTab | KeyCode::Up => Action::FocusPrevField,
        KeyCode::Enter => Action::FocusNextField,
        KeyCode::Right if on_status => Action::CycleStatus { forward: true },
        KeyCode::Left if on_status => Action::CycleStatus { forward: false },
        KeyCode::Esc => Action::ResetForm,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Char(c) => Action::InputChar(c),
        _ => return None,
    };
    Some(action)
}

/// Input on the login screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginInput {
    NextField,
    PrevField,
    Submit,
    ToggleMode,
    Backspace,
    Char(char),
    Quit,
}

pub fn login_input(code: KeyCode, modifiers: KeyModifiers) -> Option<LoginInput> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('n') => Some(LoginInput::ToggleMode),
            KeyCode::Char('q') => Some(LoginInput::Quit),
            _ => None,
        };
    }

    let input = match code {
        KeyCode::Tab | KeyCode::Down => LoginInput::NextField,
        KeyCode::BackTab | KeyCode::Up => LoginInput::PrevField,
        KeyCode::Enter => LoginInput::Submit,
        KeyCode::Esc => LoginInput::Quit,
        KeyCode::Backspace => LoginInput::Backspace,
        KeyCode::Char(c) => LoginInput::Char(c),
        _ => return None,
    };
    Some(input)
}
