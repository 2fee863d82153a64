//! Terminal UI (`ticketapp view`)
//!
//! The root component owns the [`AppState`] and hands it to whichever screen
//! is active, so notifications survive the switch from login to tickets.

pub mod components;
pub mod keymap;
pub mod login;
pub mod theme;
pub mod tickets;

use std::time::{Duration, Instant};

use iocraft::prelude::*;

use crate::app::{Action, AppState, Severity, compute_view, reduce};
use crate::auth::{LOGIN_NOTICE_DURATION, SessionStore};
use crate::config::Config;
use crate::error::AppError;
use crate::service::TicketService;

use components::ToastStack;
use login::LoginScreen;
use theme::theme;
use tickets::TicketsScreen;

/// How often expired notifications are pruned
const TICK_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Tickets,
    Exit,
}

/// Services the TUI runs against
#[derive(Clone)]
pub struct TuiContext {
    pub service: TicketService,
    pub sessions: SessionStore,
    pub config: Config,
}

#[derive(Default, Props)]
pub struct TicketAppProps {
    pub context: Option<TuiContext>,
}

#[component]
pub fn TicketApp(props: &TicketAppProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let Some(context) = props.context.clone() else {
        return element!(View).into_any();
    };

    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let notification_duration = context.config.notification_duration();
    let mut app_state = hooks.use_state(|| AppState::new(notification_duration));
    let mut screen = hooks.use_state(Screen::default);

    // Gate on first render: open on the tickets screen only with a session
    let mut gate_checked = hooks.use_state(|| false);
    if !gate_checked.get() {
        gate_checked.set(true);
        match context.sessions.require(&context.config) {
            Ok(_) => screen.set(Screen::Tickets),
            Err(AppError::AuthRequired(notice)) => {
                reduce(
                    &mut app_state.write(),
                    Action::Notify {
                        message: notice,
                        severity: Severity::Error,
                        duration: Some(LOGIN_NOTICE_DURATION),
                    },
                );
            }
            Err(e) => tracing::warn!("Session check failed: {}", e),
        }
    }

    hooks.use_future(async move {
        loop {
            tokio::time::sleep(TICK_INTERVAL).await;
            let now = Instant::now();
            let expired = app_state
                .read()
                .notifications
                .iter()
                .any(|n| n.is_expired(now));
            if expired {
                reduce(&mut app_state.write(), Action::Tick(now));
            }
        }
    });

    if screen.get() == Screen::Exit {
        system.exit();
    }

    let notifications = compute_view(&app_state.read()).notifications;
    let theme = theme();

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            #(Some(match screen.get() {
                Screen::Tickets => element! {
                    TicketsScreen(
                        service: Some(context.service.clone()),
                        sessions: Some(context.sessions.clone()),
                        app_state: Some(app_state),
                        screen: Some(screen),
                    )
                }
                .into_any(),
                _ => element! {
                    LoginScreen(
                        sessions: Some(context.sessions.clone()),
                        app_state: Some(app_state),
                        screen: Some(screen),
                    )
                }
                .into_any(),
            }))
            ToastStack(notifications: notifications)
        }
    }
    .into_any()
}
