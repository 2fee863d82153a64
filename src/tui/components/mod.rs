//! Reusable TUI components

pub mod confirm_modal;
pub mod empty_state;
pub mod field_row;
pub mod footer;
pub mod header;
pub mod modal;
pub mod shortcuts;
pub mod ticket_card;
pub mod ticket_form;
pub mod ticket_list;
pub mod toast;

pub use confirm_modal::ConfirmModal;
pub use empty_state::{EmptyState, EmptyStateKind};
pub use field_row::FieldRow;
pub use footer::{
    Footer, Shortcut, confirm_shortcuts, form_shortcuts, list_shortcuts, login_shortcuts,
};
pub use header::Header;
pub use modal::Modal;
pub use ticket_card::TicketCard;
pub use ticket_form::TicketForm;
pub use ticket_list::TicketList;
pub use toast::ToastStack;
