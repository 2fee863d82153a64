//! Login/signup screen shown when a session is required

use iocraft::prelude::*;

use super::components::{FieldRow, Footer, Header, login_shortcuts};
use super::keymap::{LoginInput, login_input};
use super::theme::theme;
use super::Screen;
use crate::app::{Action, AppState, Severity, reduce};
use crate::auth::{
    ACCOUNT_CREATED, AUTH_TOAST_DURATION, AuthErrors, AuthField, LoginForm, SIGNED_IN, SIGNED_OUT,
    Session, SessionStore, SignupForm,
};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

/// Everything typed into the login screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginModel {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub focused: AuthField,
    pub errors: AuthErrors,
}

impl LoginModel {
    pub fn fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::Login => &[AuthField::Email, AuthField::Password],
            AuthMode::Signup => &[AuthField::Name, AuthField::Email, AuthField::Password],
        }
    }

    pub fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::Name => &self.name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
        }
    }

    fn value_mut(&mut self, field: AuthField) -> &mut String {
        match field {
            AuthField::Name => &mut self.name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }

    fn focus_offset(&mut self, offset: isize) {
        let fields = self.fields();
        let current = fields.iter().position(|f| *f == self.focused).unwrap_or(0) as isize;
        let len = fields.len() as isize;
        self.focused = fields[(current + offset).rem_euclid(len) as usize];
    }

    pub fn focus_next(&mut self) {
        self.focus_offset(1);
    }

    pub fn focus_prev(&mut self) {
        self.focus_offset(-1);
    }

    /// Switch between login and signup, keeping what was typed.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
        self.errors.clear();
        self.focused = self.fields()[0];
    }

    pub fn insert_char(&mut self, c: char) {
        let field = self.focused;
        self.value_mut(field).push(c);
        self.errors.remove(field);
    }

    pub fn backspace(&mut self) {
        let field = self.focused;
        self.value_mut(field).pop();
        self.errors.remove(field);
    }

    /// Validate and persist a session. Field errors stay on the model.
    pub fn submit(&mut self, sessions: &SessionStore) -> Result<Session, AppError> {
        let result = match self.mode {
            AuthMode::Login => sessions.login(&LoginForm::new(&self.email, &self.password)),
            AuthMode::Signup => {
                sessions.signup(&SignupForm::new(&self.name, &self.email, &self.password))
            }
        };
        match result {
            Ok(session) => {
                self.errors.clear();
                Ok(session)
            }
            Err(AppError::AuthValidation(errors)) => {
                if let Some(first) = errors.first() {
                    self.focused = first;
                }
                self.errors = errors.clone();
                Err(AppError::AuthValidation(errors))
            }
            Err(e) => Err(e),
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => SIGNED_IN,
            AuthMode::Signup => ACCOUNT_CREATED,
        }
    }
}

/// Remove the session and describe the outcome as a notification.
pub fn sign_out(sessions: &SessionStore) -> Action {
    match sessions.logout() {
        Ok(_) => Action::Notify {
            message: SIGNED_OUT.to_string(),
            severity: Severity::Info,
            duration: Some(AUTH_TOAST_DURATION),
        },
        Err(e) => {
            tracing::warn!("Failed to sign out: {}", e);
            Action::Notify {
                message: e.to_string(),
                severity: Severity::Error,
                duration: None,
            }
        }
    }
}

#[derive(Default, Props)]
pub struct LoginScreenProps {
    pub sessions: Option<SessionStore>,
    pub app_state: Option<State<AppState>>,
    pub screen: Option<State<Screen>>,
}

#[component]
pub fn LoginScreen(props: &LoginScreenProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (Some(sessions), Some(mut app_state), Some(mut screen)) =
        (props.sessions.clone(), props.app_state, props.screen)
    else {
        return element!(View).into_any();
    };

    let mut model = hooks.use_state(LoginModel::default);

    hooks.use_terminal_events(move |event| match event {
        TerminalEvent::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) if kind != KeyEventKind::Release => {
            let Some(input) = login_input(code, modifiers) else {
                return;
            };
            match input {
                LoginInput::NextField => model.write().focus_next(),
                LoginInput::PrevField => model.write().focus_prev(),
                LoginInput::ToggleMode => model.write().toggle_mode(),
                LoginInput::Backspace => model.write().backspace(),
                LoginInput::Char(c) => model.write().insert_char(c),
                LoginInput::Quit => screen.set(Screen::Exit),
                LoginInput::Submit => {
                    let mut current = model.read().clone();
                    let outcome = current.submit(&sessions);
                    let message = current.success_message();
                    model.set(current);
                    match outcome {
                        Ok(_) => {
                            reduce(
                                &mut app_state.write(),
                                Action::Notify {
                                    message: message.to_string(),
                                    severity: Severity::Success,
                                    duration: Some(AUTH_TOAST_DURATION),
                                },
                            );
                            screen.set(Screen::Tickets);
                        }
                        Err(AppError::AuthValidation(_)) => {}
                        Err(e) => {
                            tracing::warn!("Failed to save session: {}", e);
                            reduce(
                                &mut app_state.write(),
                                Action::Notify {
                                    message: e.to_string(),
                                    severity: Severity::Error,
                                    duration: None,
                                },
                            );
                        }
                    }
                }
            }
        }
        _ => {}
    });

    let theme = theme();
    let current = model.read().clone();
    let heading = match current.mode {
        AuthMode::Login => "Log in",
        AuthMode::Signup => "Create account",
    };
    let rows: Vec<(AuthField, String, Option<String>)> = current
        .fields()
        .iter()
        .map(|&field| {
            (
                field,
                current.value(field).to_string(),
                current.errors.get(field).map(str::to_string),
            )
        })
        .collect();

    element! {
        View(width: 100pct, flex_grow: 1.0, flex_direction: FlexDirection::Column) {
            Header(subtitle: Some(heading.to_string()))
            View(
                flex_grow: 1.0,
                width: 100pct,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                View(
                    width: 50,
                    flex_direction: FlexDirection::Column,
                    border_style: BorderStyle::Round,
                    border_color: theme.border_focused,
                    padding_left: 1,
                    padding_right: 1,
                    gap: 1,
                ) {
                    Text(content: heading, color: theme.text, weight: Weight::Bold)
                    #(rows.into_iter().map(|(field, value, error)| element! {
                        FieldRow(
                            label: field.label().to_string(),
                            value: value,
                            error: error,
                            is_focused: field == current.focused,
                            masked: field == AuthField::Password,
                        )
                    }))
                }
            }
            Footer(shortcuts: login_shortcuts())
        }
    }
    .into_any()
}
