//! Labelled single-line input with an inline error

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct FieldRowProps {
    pub label: String,
    pub value: String,
    pub error: Option<String>,
    pub is_focused: bool,
    /// Render the value as bullets
    pub masked: bool,
    /// Wrap the value in `< >` to hint that Left/Right cycles it
    pub is_selector: bool,
}

/// Text actually shown in the input box.
pub fn display_value(value: &str, is_focused: bool, masked: bool, is_selector: bool) -> String {
    let shown = if masked {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    match (is_selector, is_focused) {
        (true, _) => format!("< {shown} >"),
        (false, true) => format!("{shown}_"),
        (false, false) => shown,
    }
}

#[component]
pub fn FieldRow(props: &FieldRowProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let content = display_value(&props.value, props.is_focused, props.masked, props.is_selector);
    let border_color = if props.error.is_some() {
        theme.error
    } else {
        theme.pane_border(props.is_focused)
    };

    element! {
        View(width: 100pct, flex_direction: FlexDirection::Column, flex_shrink: 0.0) {
            Text(
                content: props.label.clone(),
                color: if props.is_focused { theme.border_focused } else { theme.text_dimmed },
                weight: Weight::Bold,
            )
            View(
                width: 100pct,
                border_style: BorderStyle::Round,
                border_color: border_color,
                padding_left: 1,
                padding_right: 1,
            ) {
                Text(content: content, color: theme.text)
            }
            #(props.error.clone().map(|error| element! {
                Text(content: error, color: theme.error)
            }))
        }
    }
}
