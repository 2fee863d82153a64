use iocraft::prelude::*;

use super::Modal;
use crate::app::view_model::ConfirmView;
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct ConfirmModalProps {
    pub view: Option<ConfirmView>,
}

/// Delete confirmation dialog
#[component]
pub fn ConfirmModal(props: &ConfirmModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(view) = props.view.clone() else {
        return element!(View).into_any();
    };

    element! {
        Modal(
            title: Some(view.heading.to_string()),
            border_color: Some(theme.error),
            footer_text: Some("y/Enter: delete   n/Esc: cancel".to_string()),
            width: Some(50),
        ) {
            Text(content: view.message, color: theme.text)
        }
    }
    .into_any()
}
