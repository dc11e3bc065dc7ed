// File: crates/tally-web/src/lib.rs
// Summary: Web gateway library: routes, page rendering, configuration and shared state.

pub mod config;
pub mod error;
pub mod page;
pub mod routes;
pub mod state;

pub use config::{Config, ConfigError, StoreLocation};
pub use routes::router;
pub use state::AppState;

use std::sync::Arc;

use tally_store::{EntryStore, MemoryStore, SqliteStore};

/// Open the store `config` points at.
pub fn open_store(config: &Config) -> tally_store::Result<Arc<dyn EntryStore>> {
    let store: Arc<dyn EntryStore> = match &config.store {
        StoreLocation::Memory => Arc::new(MemoryStore::new()),
        StoreLocation::File(path) => Arc::new(SqliteStore::open(path, config.domain)?),
    };
    Ok(store)
}
