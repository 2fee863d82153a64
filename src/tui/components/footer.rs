//! Keyboard shortcuts bar

use iocraft::prelude::*;

use super::shortcuts::ShortcutsBuilder;
use crate::tui::theme::theme;

#[derive(Debug, Clone)]
pub struct Shortcut {
    /// Key or key combination ("q", "C-s", "Tab")
    pub key: String,
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
}

#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| element! {
                View(flex_direction: FlexDirection::Row) {
                    Text(
                        content: format!("[{}]", shortcut.key),
                        color: theme.highlight,
                        weight: Weight::Bold,
                    )
                    Text(
                        content: format!(" {}", shortcut.action),
                        color: theme.text,
                    )
                }
            }))
        }
    }
}

/// Ticket list pane
pub fn list_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_navigation()
        .add("e", "Edit")
        .add("d", "Delete")
        .add("n", "New")
        .add("r", "Reload")
        .add("x", "Dismiss")
        .add("Tab", "Form")
        .add("L", "Logout")
        .with_quit("q")
        .build()
}

/// Create/edit form pane
pub fn form_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_field_cycling()
        .add("</>", "Status")
        .add("C-s", "Submit")
        .add("Esc", "Reset")
        .add("C-l", "List")
        .build()
}

pub fn confirm_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("y", "Delete")
        .add("n", "Cancel")
        .build()
}

pub fn login_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_field_cycling()
        .add("Enter", "Submit")
        .add("C-n", "Login/Signup")
        .with_quit("Esc")
        .build()
}
