//! App header bar with per-status ticket counts

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::{StatusCounts, TicketStatus};

#[derive(Default, Props)]
pub struct HeaderProps {
    /// Screen name shown after the app title
    pub subtitle: Option<String>,
    /// Hidden when `None` (login screen)
    pub counts: Option<StatusCounts>,
}

#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let title = match &props.subtitle {
        Some(sub) => format!("Tickets - {}", sub),
        None => "Tickets".to_string(),
    };

    let counts: Vec<(String, Color)> = props
        .counts
        .map(|counts| {
            vec![
                (format!("{} open", counts.open), theme.status_color(TicketStatus::Open)),
                (
                    format!("{} in progress", counts.in_progress),
                    theme.status_color(TicketStatus::InProgress),
                ),
                (format!("{} closed", counts.closed), theme.status_color(TicketStatus::Closed)),
                (format!("{} total", counts.total()), theme.text),
            ]
        })
        .unwrap_or_default();

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(
                content: title,
                color: theme.text,
                weight: Weight::Bold,
            )
            View(flex_direction: FlexDirection::Row, gap: 2) {
                #(counts.into_iter().map(|(label, color)| element! {
                    Text(content: label, color: color)
                }))
            }
        }
    }
}
