//! Mock local session
//!
//! Signing in only records a session slot next to the ticket data. There is
//! no account store and no password check beyond form validation.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::form::FieldErrors;
use crate::fs::{delete_if_exists, read_optional, write_file_atomic};
use crate::paths::{SESSION_KEY, slot_path};
use crate::utils::{generate_uuid, iso_date};

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const NAME_REQUIRED: &str = "Name is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Shown when a protected screen is opened without a session
pub const LOGIN_NOTICE: &str = "Please log in to access this page.";
pub const LOGIN_NOTICE_DURATION: Duration = Duration::from_millis(1800);

pub const SIGNED_IN: &str = "Signed in";
pub const ACCOUNT_CREATED: &str = "Account created";
pub const SIGNED_OUT: &str = "Signed out";
pub const AUTH_TOAST_DURATION: Duration = Duration::from_millis(2000);

const TOKEN_PREFIX: &str = "mock-token:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum AuthField {
    Name,
    #[default]
    Email,
    Password,
}

impl AuthField {
    pub fn label(self) -> &'static str {
        match self {
            AuthField::Name => "Name",
            AuthField::Email => "Email",
            AuthField::Password => "Password",
        }
    }
}

impl fmt::Display for AuthField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthField::Name => write!(f, "name"),
            AuthField::Email => write!(f, "email"),
            AuthField::Password => write!(f, "password"),
        }
    }
}

pub type AuthErrors = FieldErrors<AuthField>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
    pub created_at: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("user", &self.user)
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl Session {
    pub fn new(user: User) -> Self {
        Self {
            token: format!("{TOKEN_PREFIX}{}", generate_uuid()),
            user,
            created_at: iso_date(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.token.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// The signed-in user is named after the part of the email before '@'.
    pub fn validate(&self) -> std::result::Result<User, AuthErrors> {
        let mut errors = AuthErrors::new();
        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(AuthField::Email, EMAIL_REQUIRED);
        }
        if self.password.is_empty() {
            errors.insert(AuthField::Password, PASSWORD_REQUIRED);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let name = match email.split('@').next() {
            Some(local) if !local.is_empty() => local,
            _ => email,
        };
        Ok(User {
            id: email.to_string(),
            name: name.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> std::result::Result<User, AuthErrors> {
        let mut errors = AuthErrors::new();
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() {
            errors.insert(AuthField::Name, NAME_REQUIRED);
        }
        if email.is_empty() {
            errors.insert(AuthField::Email, EMAIL_REQUIRED);
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            errors.insert(AuthField::Password, PASSWORD_TOO_SHORT);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(User {
            id: email.to_string(),
            name: name.to_string(),
        })
    }
}

/// The session slot inside the app root
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn open(root: &Path) -> Self {
        Self {
            path: slot_path(root, SESSION_KEY),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current session, if the slot holds a usable one.
    pub fn current(&self) -> Option<Session> {
        let raw = match read_optional(&self.path) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read session: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) if session.is_valid() => Some(session),
            Ok(_) => None,
            Err(e) => {
                debug!("Ignoring unreadable session slot: {}", e);
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    fn save(&self, session: &Session) -> Result<()> {
        let content = serde_json::to_string_pretty(session)?;
        write_file_atomic(&self.path, &content)
    }

    pub fn login(&self, form: &LoginForm) -> Result<Session> {
        let user = form.validate().map_err(AppError::AuthValidation)?;
        let session = Session::new(user);
        self.save(&session)?;
        info!("Signed in as {}", session.user.id);
        Ok(session)
    }

    pub fn signup(&self, form: &SignupForm) -> Result<Session> {
        let user = form.validate().map_err(AppError::AuthValidation)?;
        let session = Session::new(user);
        self.save(&session)?;
        info!("Created account for {}", session.user.id);
        Ok(session)
    }

    /// Remove the session. Returns whether one was present.
    pub fn logout(&self) -> Result<bool> {
        let removed = delete_if_exists(&self.path)?;
        if removed {
            info!("Signed out");
        }
        Ok(removed)
    }

    /// Gate for protected surfaces.
    ///
    /// Returns the current session, or `None` when login is not required and
    /// nobody is signed in.
    pub fn require(&self, config: &Config) -> Result<Option<Session>> {
        match self.current() {
            Some(session) => Ok(Some(session)),
            None if !config.require_login => Ok(None),
            None => Err(AppError::AuthRequired(LOGIN_NOTICE.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_login_validation_messages() {
        let errors = LoginForm::new("  ", "").validate().unwrap_err();
        assert_eq!(errors.get(AuthField::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(AuthField::Password), Some(PASSWORD_REQUIRED));
    }

    #[test]
    fn test_login_derives_user_name() {
        let user = LoginForm::new(" ada@example.com ", "pw").validate().unwrap();
        assert_eq!(user.id, "ada@example.com");
        assert_eq!(user.name, "ada");

        let user = LoginForm::new("@host", "pw").validate().unwrap();
        assert_eq!(user.name, "@host");
    }

    #[test]
    fn test_signup_validation_messages() {
        let errors = SignupForm::new("", "", "12345").validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(AuthField::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(AuthField::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(AuthField::Password), Some(PASSWORD_TOO_SHORT));
        assert_eq!(errors.first(), Some(AuthField::Name));
    }

    #[test]
    fn test_signup_uses_given_name() {
        let user = SignupForm::new("Ada L", "ada@example.com", "123456")
            .validate()
            .unwrap();
        assert_eq!(user.name, "Ada L");
        assert_eq!(user.id, "ada@example.com");
    }

    #[test]
    fn test_session_debug_redacts_token() {
        let session = Session::new(User {
            id: "a@b.c".to_string(),
            name: "a".to_string(),
        });
        assert!(session.token.starts_with("mock-token:"));
        let debug = format!("{session:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains(&session.token));
    }

    #[test]
    fn test_login_logout_cycle() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path());
        assert!(!store.is_authenticated());

        let session = store.login(&LoginForm::new("ada@example.com", "pw")).unwrap();
        assert_eq!(store.current(), Some(session));
        assert!(dir.path().join("ticketapp_session.json").exists());

        assert!(store.logout().unwrap());
        assert!(!store.is_authenticated());
        assert!(!store.logout().unwrap());
    }

    #[test]
    fn test_invalid_login_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path());
        let result = store.login(&LoginForm::new("", ""));
        assert!(matches!(result, Err(AppError::AuthValidation(_))));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_garbage_or_empty_token_is_not_a_session() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path());

        std::fs::write(store.path(), "not json").unwrap();
        assert!(store.current().is_none());

        std::fs::write(
            store.path(),
            r#"{"token":"","user":{"id":"x","name":"x"},"created_at":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(store.current().is_none());
    }

    #[test]
    fn test_require_session() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path());

        let err = store.require(&Config::default()).unwrap_err();
        assert_eq!(err.to_string(), LOGIN_NOTICE);

        let relaxed = Config {
            require_login: false,
            ..Config::default()
        };
        assert!(store.require(&relaxed).unwrap().is_none());

        store.login(&LoginForm::new("a@b.c", "pw")).unwrap();
        assert!(store.require(&Config::default()).unwrap().is_some());
    }
}
