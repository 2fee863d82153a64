use std::path::PathBuf;

use thiserror::Error;

use crate::auth::AuthErrors;
use crate::form::FieldErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("ticket '{0}' not found")]
    TicketNotFound(String),

    #[error("ambiguous ID '{0}' matches multiple tickets")]
    AmbiguousId(String),

    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("{0}")]
    AuthValidation(AuthErrors),

    #[error("stored tickets could not be parsed: {0}")]
    StorageParse(String),

    #[error("{0}")]
    AuthRequired(String),

    #[error("failed to {operation} {item_type} at {}: {source}", path.display())]
    StorageError {
        operation: &'static str,
        item_type: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
