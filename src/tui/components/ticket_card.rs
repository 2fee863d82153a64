//! Ticket card for the list pane
//!
//! Layout:
//! ```text
//! +------------------------------------+
//! |> Fix the login bug    [in progress] |
//! |  lx8k2m1a                           |
//! |  Users get a 500 on submit          |
//! +------------------------------------+
//! ```

use iocraft::prelude::*;

use crate::app::view_model::CardView;
use crate::tui::theme::theme;
use crate::utils::truncate_chars;

/// Description preview length on a card
const PREVIEW_CHARS: usize = 80;

/// Rows one card occupies, borders included
pub const CARD_HEIGHT: usize = 5;

#[derive(Default, Props)]
pub struct TicketCardProps {
    pub card: Option<CardView>,
}

#[component]
pub fn TicketCard(props: &TicketCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(card) = props.card.clone() else {
        return element!(View).into_any();
    };

    let border_color = theme.pane_border(card.is_selected);
    let indicator = if card.is_selected { ">" } else { " " };
    let description_color = if card.has_description {
        theme.text
    } else {
        theme.text_dimmed
    };

    element! {
        View(
            width: 100pct,
            height: CARD_HEIGHT as u32,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                View(flex_direction: FlexDirection::Row) {
                    Text(content: indicator, color: theme.highlight, weight: Weight::Bold)
                    Text(content: card.title, color: theme.text, weight: Weight::Bold)
                }
                Text(
                    content: format!("[{}]", card.badge.label),
                    color: theme.status_color(card.badge.status),
                )
            }
            View(padding_left: 1) {
                Text(content: card.id.to_string(), color: theme.id_color)
            }
            View(padding_left: 1) {
                Text(
                    content: truncate_chars(&card.description, PREVIEW_CHARS),
                    color: description_color,
                )
            }
        }
    }
    .into_any()
}
