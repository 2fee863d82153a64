//! Stack of transient notifications above the footer, newest last

use iocraft::prelude::*;

use crate::app::view_model::NotificationView;
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct ToastStackProps {
    pub notifications: Vec<NotificationView>,
}

#[component]
pub fn ToastStack(props: &ToastStackProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(width: 100pct, flex_direction: FlexDirection::Column, flex_shrink: 0.0) {
            #(props.notifications.iter().map(|n| {
                let color = theme.severity_color(n.severity);
                element! {
                    View(
                        width: 100pct,
                        height: 1,
                        padding_left: 1,
                        justify_content: JustifyContent::Center,
                        background_color: Color::Black,
                    ) {
                        Text(content: n.message.clone(), color: color, weight: Weight::Bold)
                    }
                }
            }))
        }
    }
}
