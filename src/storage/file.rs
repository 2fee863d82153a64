use std::path::{Path, PathBuf};

use tracing::debug;

use super::TicketStore;
use super::migration::migrate_or_warn;
use crate::error::Result;
use crate::fs::{read_optional, write_file_atomic};
use crate::paths::{TICKETS_KEY, slot_path};

/// Ticket collection stored as a JSON file inside the app root.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open the store rooted at `root`, running the legacy-field migration.
    pub fn open(root: &Path) -> Self {
        let store = Self::at_path(slot_path(root, TICKETS_KEY));
        migrate_or_warn(&store);
        store
    }

    /// Use an explicit file, without running the migration.
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TicketStore for JsonFileStore {
    fn read_slot(&self) -> Result<Option<String>> {
        read_optional(&self.path)
    }

    fn write_slot(&self, content: &str) -> Result<()> {
        debug!("Writing ticket storage to {}", self.path.display());
        write_file_atomic(&self.path, content)
    }
}
