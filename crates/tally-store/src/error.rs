// File: crates/tally-store/src/error.rs
// Summary: Store error type.

use tally_core::Uuid;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sql(#[from] rusqlite::Error),

    /// A row came back that cannot be turned into an entry.
    #[error("corrupt {column} column: {reason}")]
    Corrupt { column: &'static str, reason: String },

    #[error("entry {0} already exists")]
    DuplicateId(Uuid),

    #[error("store lock poisoned")]
    Poisoned,
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
