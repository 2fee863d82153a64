use parking_lot::Mutex;

use super::TicketStore;
use crate::error::Result;

/// In-process store, used by tests and scripted flows.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
    writes: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw slot content, as if written by an earlier session.
    pub fn with_raw(content: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(content.into())),
            writes: Mutex::new(0),
        }
    }

    /// Current raw slot content
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().clone()
    }

    /// Number of times the slot has been written
    pub fn write_count(&self) -> usize {
        *self.writes.lock()
    }
}

impl TicketStore for MemoryStore {
    fn read_slot(&self) -> Result<Option<String>> {
        Ok(self.slot.lock().clone())
    }

    fn write_slot(&self, content: &str) -> Result<()> {
        *self.slot.lock() = Some(content.to_string());
        *self.writes.lock() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_reads_none() {
        let store = MemoryStore::new();
        assert!(store.read_slot().unwrap().is_none());
        assert!(store.load_all().is_empty());
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_write_counts() {
        let store = MemoryStore::new();
        store.write_slot("[]").unwrap();
        store.write_slot("[]").unwrap();
        assert_eq!(store.write_count(), 2);
        assert_eq!(store.raw().as_deref(), Some("[]"));
    }
}
