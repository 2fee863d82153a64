//! Session commands: `login`, `signup`, `logout`, `whoami`

use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandContext, CommandOutput};
use crate::auth::{ACCOUNT_CREATED, LoginForm, SIGNED_IN, SIGNED_OUT, Session, SignupForm};
use crate::error::Result;

fn session_json(action: &str, session: &Session) -> serde_json::Value {
    json!({
        "action": action,
        "user": session.user,
        "created_at": session.created_at,
    })
}

pub fn cmd_login(email: &str, password: &str, output_json: bool) -> Result<()> {
    let ctx = CommandContext::load()?;
    let session = ctx
        .sessions
        .login(&LoginForm::new(email, password))?;

    CommandOutput::new(session_json("login", &session))
        .with_text(format!(
            "{} as {}",
            SIGNED_IN.green(),
            session.user.name.cyan()
        ))
        .print(output_json)
}

pub fn cmd_signup(name: &str, email: &str, password: &str, output_json: bool) -> Result<()> {
    let ctx = CommandContext::load()?;
    let session = ctx
        .sessions
        .signup(&SignupForm::new(name, email, password))?;

    CommandOutput::new(session_json("signup", &session))
        .with_text(format!(
            "{} for {}",
            ACCOUNT_CREATED.green(),
            session.user.name.cyan()
        ))
        .print(output_json)
}

pub fn cmd_logout(output_json: bool) -> Result<()> {
    let ctx = CommandContext::load()?;
    let removed = ctx.sessions.logout()?;

    let text = if removed {
        SIGNED_OUT.to_string()
    } else {
        "Not signed in".dimmed().to_string()
    };
    CommandOutput::new(json!({
        "action": "logout",
        "signed_out": removed,
    }))
    .with_text(text)
    .print(output_json)
}

pub fn cmd_whoami(output_json: bool) -> Result<()> {
    let ctx = CommandContext::load()?;
    match ctx.sessions.current() {
        Some(session) => CommandOutput::new(json!({
            "authenticated": true,
            "user": session.user,
            "created_at": session.created_at,
        }))
        .with_text(format!(
            "{} <{}>\n{}",
            session.user.name.cyan(),
            session.user.id,
            format!("signed in {}", session.created_at).dimmed()
        ))
        .print(output_json),
        None => CommandOutput::new(json!({ "authenticated": false }))
            .with_text("Not signed in".dimmed().to_string())
            .print(output_json),
    }
}
