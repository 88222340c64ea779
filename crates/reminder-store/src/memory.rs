//! In-memory record store

use std::cell::RefCell;

use reminder_domain::repository::RecordStore;
use reminder_types::{RecordCollection, Result};

/// Record store that keeps the collection in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<RecordCollection>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Result<RecordCollection> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &RecordCollection) -> Result<()> {
        *self.records.borrow_mut() = records.clone();
        Ok(())
    }
}
