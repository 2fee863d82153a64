//! Create/edit form pane

use iocraft::prelude::*;

use super::FieldRow;
use crate::app::view_model::FormView;
use crate::form::FormField;
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct TicketFormProps {
    pub form: Option<FormView>,
    pub has_focus: bool,
}

#[component]
pub fn TicketForm(props: &TicketFormProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(form) = props.form.clone() else {
        return element!(View).into_any();
    };
    let has_focus = props.has_focus;

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.pane_border(has_focus),
            padding_left: 1,
            padding_right: 1,
            gap: 1,
        ) {
            Text(content: form.heading, color: theme.text, weight: Weight::Bold)
            #(form.fields.into_iter().map(|field| element! {
                FieldRow(
                    label: field.label.to_string(),
                    value: field.value,
                    error: field.error,
                    is_focused: has_focus && field.is_focused,
                    is_selector: field.field == FormField::Status,
                )
            }))
            View(flex_direction: FlexDirection::Row, gap: 2) {
                Text(
                    content: format!("[C-s] {}", form.submit_label),
                    color: theme.highlight,
                    weight: Weight::Bold,
                )
                Text(
                    content: format!("[Esc] {}", form.reset_label),
                    color: theme.text_dimmed,
                )
            }
        }
    }
    .into_any()
}
