pub mod app;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod fs;
pub mod paths;
pub mod service;
pub mod storage;
pub mod tui;
pub mod types;
pub mod utils;

pub use app::{Action, App, AppState, Effect, reduce};
pub use auth::{Session, SessionStore, User};
pub use config::Config;
pub use error::{AppError, Result};
pub use form::{FieldErrors, FormField, FormState};
pub use service::TicketService;
pub use storage::{JsonFileStore, MemoryStore, TicketStore};
pub use types::{NewTicket, Ticket, TicketId, TicketPatch, TicketStatus};
