//! Placeholder shown in the list pane when there are no cards

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    #[default]
    NoTickets,
    Loading,
}

impl EmptyStateKind {
    fn text(self) -> (&'static str, &'static str, &'static str) {
        match self {
            EmptyStateKind::NoTickets => (
                "i",
                "No tickets",
                "Press 'n' to create one, or run 'ticketapp create <title>'.",
            ),
            EmptyStateKind::Loading => ("~", "Loading", "Loading tickets..."),
        }
    }
}

#[derive(Default, Props)]
pub struct EmptyStateProps {
    pub kind: EmptyStateKind,
}

#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let (icon, title, message) = props.kind.text();

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                margin_bottom: 1,
            ) {
                Text(content: icon, color: theme.text_dimmed, weight: Weight::Bold)
            }
            Text(content: title, color: theme.text, weight: Weight::Bold)
            View(margin_top: 1, max_width: 60) {
                Text(content: message, color: theme.text_dimmed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_text() {
        assert_eq!(EmptyStateKind::Loading.text().2, "Loading tickets...");
        assert_eq!(EmptyStateKind::default(), EmptyStateKind::NoTickets);
    }
}
