use std::path::PathBuf;

/// Storage key of the ticket collection.
pub const TICKETS_KEY: &str = "ticketapp_tickets";

/// Storage key of the local session.
pub const SESSION_KEY: &str = "ticketapp_session";

/// Returns the root directory holding every persisted slot.
///
/// Resolution order:
/// 1. `TICKETAPP_ROOT` environment variable (if set)
/// 2. Current working directory + `.ticketapp`
pub fn app_root() -> PathBuf {
    if let Ok(root) = std::env::var("TICKETAPP_ROOT") {
        PathBuf::from(root)
    } else {
        PathBuf::from(".ticketapp")
    }
}

/// Returns the file backing a storage key inside `root`.
pub fn slot_path(root: &std::path::Path, key: &str) -> PathBuf {
    root.join(format!("{key}.json"))
}

/// Returns the path to the configuration file.
pub fn config_path() -> PathBuf {
    app_root().join("config.yaml")
}
