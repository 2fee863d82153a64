//! One-time cleanup of legacy ticket fields

use serde_json::Value;
use tracing::{info, warn};

use super::TicketStore;
use crate::error::Result;

/// Fields older versions wrote that tickets no longer carry
pub const LEGACY_FIELDS: &[&str] = &["priority"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub records_changed: usize,
}

impl MigrationReport {
    pub fn changed(&self) -> bool {
        self.records_changed > 0
    }
}

/// Strip legacy fields from a stored collection.
///
/// Storage is rewritten only when at least one record changed. Content that
/// is missing, unparseable or not a list is left untouched.
pub fn migrate_legacy_fields(store: &dyn TicketStore) -> Result<MigrationReport> {
    let Some(raw) = store.read_slot()? else {
        return Ok(MigrationReport::default());
    };

    let Some((migrated, report)) = strip_legacy_fields(&raw) else {
        return Ok(MigrationReport::default());
    };

    if report.changed() {
        store.write_slot(&serde_json::to_string_pretty(&migrated)?)?;
        info!(
            "Removed legacy fields from {} stored tickets",
            report.records_changed
        );
    }

    Ok(report)
}

/// Run the migration, logging instead of failing.
pub fn migrate_or_warn(store: &dyn TicketStore) {
    if let Err(e) = migrate_legacy_fields(store) {
        warn!("Ticket storage migration failed: {}", e);
    }
}

fn strip_legacy_fields(raw: &str) -> Option<(Value, MigrationReport)> {
    let mut value: Value = serde_json::from_str(raw).ok()?;
    let entries = value.as_array_mut()?;

    let mut report = MigrationReport::default();
    for entry in entries.iter_mut() {
        if let Some(record) = entry.as_object_mut() {
            let mut changed = false;
            for field in LEGACY_FIELDS {
                changed |= record.remove(*field).is_some();
            }
            if changed {
                report.records_changed += 1;
            }
        }
    }

    Some((value, report))
}
