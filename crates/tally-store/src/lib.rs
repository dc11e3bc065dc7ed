// File: crates/tally-store/src/lib.rs
// Summary: Entry persistence. All filtering and grouping happens in the caller;
// the store only lists, inserts and deletes whole entries.

pub mod error;
pub mod memory;
pub mod sqlite;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use tally_core::{Entry, Uuid};

/// Persistent collection of entries for one domain.
///
/// Implementations serialize concurrent access themselves, so a store can be
/// shared between request handlers behind an `Arc`.
pub trait EntryStore: Send + Sync {
    /// Every entry, in insertion order.
    fn list_all(&self) -> Result<Vec<Entry>>;

    /// Add `entry`. Reusing an existing id is an error.
    fn insert(&self, entry: &Entry) -> Result<()>;

    /// Remove the entry with `id`; returns whether one was removed.
    fn delete_by_id(&self, id: Uuid) -> Result<bool>;

    fn count(&self) -> Result<usize> {
        Ok(self.list_all()?.len())
    }
}
