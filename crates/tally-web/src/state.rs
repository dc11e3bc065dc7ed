// File: crates/tally-web/src/state.rs
// Summary: Shared handler state: the store, the active domain and render options.

use std::sync::Arc;

use tally_core::{Domain, RenderOptions};
use tally_store::EntryStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntryStore>,
    pub domain: Domain,
    pub render: Arc<RenderOptions>,
}

impl AppState {
    pub fn new(store: Arc<dyn EntryStore>, domain: Domain, render: RenderOptions) -> Self {
        Self { store, domain, render: Arc::new(render) }
    }
}
