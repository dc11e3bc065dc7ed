// File: crates/tally-store/src/memory.rs
// Summary: Vec-backed store for tests and throwaway runs.

use std::sync::RwLock;

use tally_core::{Entry, Uuid};

use crate::error::{Result, StoreError};
use crate::EntryStore;

#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<Vec<Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self { entries: RwLock::new(entries) }
    }
}

impl EntryStore for MemoryStore {
    fn list_all(&self) -> Result<Vec<Entry>> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.clone())
    }

    fn insert(&self, entry: &Entry) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        if entries.iter().any(|e| e.id == entry.id) {
            return Err(StoreError::DuplicateId(entry.id));
        }
        entries.push(entry.clone());
        Ok(())
    }

    fn delete_by_id(&self, id: Uuid) -> Result<bool> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        Ok(entries.len() != before)
    }

    fn count(&self) -> Result<usize> {
        Ok(self.entries.read().map_err(|_| StoreError::Poisoned)?.len())
    }
}
