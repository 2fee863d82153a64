//! Interactive board (`ticketapp view`)

use iocraft::prelude::*;

use super::CommandContext;
use crate::error::{AppError, Result};
use crate::tui::{TicketApp, TuiContext};

/// Launch the TUI. The login gate is handled on screen, not here.
pub async fn cmd_view() -> Result<()> {
    let ctx = CommandContext::load()?;
    let context = TuiContext {
        service: ctx.service(),
        sessions: ctx.sessions.clone(),
        config: ctx.config.clone(),
    };

    element!(TicketApp(context: Some(context)))
        .fullscreen()
        .await
        .map_err(|e| AppError::Other(format!("TUI error: {}", e)))
}
