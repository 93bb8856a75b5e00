use std::sync::Arc;

use crate::pkg::internal::store::MemStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemStore>,
}

impl AppState {
    pub fn new() -> AppState {
        AppState {
            store: Arc::new(MemStore::seeded()),
        }
    }

    pub fn with_store(store: MemStore) -> AppState {
        AppState {
            store: Arc::new(store),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new()
    }
}
