//! Tickets screen: form pane, card list, confirm dialog
//!
//! Layout:
//! ```text
//! +------------------------------------------+
//! | Header (counts)                          |
//! +-----------------+------------------------+
//! | TicketForm      | TicketList             |
//! |                 |                        |
//! +-----------------+------------------------+
//! | Footer                                   |
//! +------------------------------------------+
//! ```

use std::collections::VecDeque;

use iocraft::prelude::*;

use super::Screen;
use super::components::{
    ConfirmModal, Footer, Header, TicketForm, TicketList, confirm_shortcuts, form_shortcuts,
    list_shortcuts,
};
use super::keymap::ticket_action;
use super::login::sign_out;
use crate::app::{Action, AppState, Effect, Focus, compute_view, effects, reduce};
use crate::auth::SessionStore;
use crate::service::TicketService;

#[derive(Default, Props)]
pub struct TicketsScreenProps {
    pub service: Option<TicketService>,
    pub sessions: Option<SessionStore>,
    pub app_state: Option<State<AppState>>,
    pub screen: Option<State<Screen>>,
}

#[component]
pub fn TicketsScreen(props: &TicketsScreenProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (Some(service), Some(sessions), Some(mut app_state), Some(mut screen)) = (
        props.service.clone(),
        props.sessions.clone(),
        props.app_state,
        props.screen,
    ) else {
        return element!(View).into_any();
    };

    let (_, height) = hooks.use_terminal_size();
    let mut pending: State<Vec<Effect>> = hooks.use_state(Vec::new);

    // Effects run off the input path; their follow-up actions are reduced
    // here and any further effects are drained in the same task.
    let effect_runner: Handler<Vec<Effect>> = hooks.use_async_handler({
        move |batch: Vec<Effect>| {
            let service = service.clone();
            let mut app_state = app_state;
            Box::pin(async move {
                let mut queue = VecDeque::from(batch);
                while let Some(effect) = queue.pop_front() {
                    for action in effects::run(&service, effect).await {
                        let follow_up = reduce(&mut app_state.write(), action);
                        queue.extend(follow_up);
                    }
                }
            })
        }
    });

    // Initial fetch on mount
    let mut load_started = hooks.use_state(|| false);
    if !load_started.get() {
        load_started.set(true);
        let effects = reduce(&mut app_state.write(), Action::Reload);
        pending.write().extend(effects);
    }

    hooks.use_terminal_events(move |event| match event {
        TerminalEvent::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) if kind != KeyEventKind::Release => {
            let action = ticket_action(&app_state.read(), code, modifiers);
            match action {
                Some(Action::Quit) => screen.set(Screen::Exit),
                Some(Action::Logout) => {
                    reduce(&mut app_state.write(), sign_out(&sessions));
                    screen.set(Screen::Login);
                }
                Some(action) => {
                    let effects = reduce(&mut app_state.write(), action);
                    if !effects.is_empty() {
                        pending.write().extend(effects);
                    }
                }
                None => {}
            }
        }
        _ => {}
    });

    if !pending.read().is_empty() {
        let batch = std::mem::take(&mut *pending.write());
        effect_runner.clone()(batch);
    }

    let state = app_state.read().clone();
    let view = compute_view(&state);

    // Header (1) + footer (1) + pane borders (2)
    let list_height = height.saturating_sub(4) as usize;

    let shortcuts = if view.confirm.is_some() {
        confirm_shortcuts()
    } else {
        match view.focus {
            Focus::List => list_shortcuts(),
            Focus::Form => form_shortcuts(),
        }
    };

    element! {
        View(width: 100pct, flex_grow: 1.0, flex_direction: FlexDirection::Column) {
            Header(subtitle: Some("Board".to_string()), counts: Some(view.counts))
            View(flex_grow: 1.0, width: 100pct, flex_direction: FlexDirection::Row) {
                View(width: 40pct, height: 100pct) {
                    TicketForm(
                        form: Some(view.form.clone()),
                        has_focus: view.focus == Focus::Form && view.confirm.is_none(),
                    )
                }
                View(flex_grow: 1.0, height: 100pct) {
                    TicketList(
                        list: view.list.clone(),
                        selected_index: state.selected_index,
                        has_focus: view.focus == Focus::List && view.confirm.is_none(),
                        visible_height: list_height,
                    )
                }
            }
            Footer(shortcuts: shortcuts)
            ConfirmModal(view: view.confirm.clone())
        }
    }
    .into_any()
}
