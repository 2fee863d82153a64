//! Card list pane

use iocraft::prelude::*;

use super::ticket_card::CARD_HEIGHT;
use super::{EmptyState, EmptyStateKind, TicketCard};
use crate::app::view_model::ListView;
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct TicketListProps {
    pub list: ListView,
    pub selected_index: usize,
    pub has_focus: bool,
    /// Rows available for cards inside the pane border
    pub visible_height: usize,
}

/// First card to draw so the selected one stays on screen.
pub fn scroll_start(selected_index: usize, visible_cards: usize) -> usize {
    selected_index.saturating_sub(visible_cards.max(1) - 1)
}

#[component]
pub fn TicketList(props: &TicketListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let visible_cards = (props.visible_height / CARD_HEIGHT).max(1);

    let body = match &props.list {
        ListView::Loading => element! {
            EmptyState(kind: EmptyStateKind::Loading)
        }
        .into_any(),
        ListView::Empty => element! {
            EmptyState(kind: EmptyStateKind::NoTickets)
        }
        .into_any(),
        ListView::Cards(cards) => {
            let start = scroll_start(props.selected_index, visible_cards);
            element! {
                View(width: 100pct, flex_direction: FlexDirection::Column) {
                    #(cards.iter().skip(start).take(visible_cards).map(|card| element! {
                        TicketCard(card: Some(card.clone()))
                    }))
                }
            }
            .into_any()
        }
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.pane_border(props.has_focus),
            overflow: Overflow::Hidden,
        ) {
            #(Some(body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_start_keeps_selection_visible() {
        assert_eq!(scroll_start(0, 4), 0);
        assert_eq!(scroll_start(3, 4), 0);
        assert_eq!(scroll_start(4, 4), 1);
        assert_eq!(scroll_start(9, 4), 6);
        assert_eq!(scroll_start(2, 0), 2);
    }
}
