//! Browser-backed storage adapter for the recent search journal.

use common::recent_searches::{PersistenceUnavailable, RecentSearchStore};
#[cfg(target_arch = "wasm32")]
use common::search_const::RECENT_SEARCHES_KEY;


/// `window.localStorage` under a single fixed key. Absence of storage
/// (disabled, or a non-web target) reads as empty and reports writes as
/// unavailable; the journal absorbs both.
#[derive(Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    #[cfg(target_arch = "wasm32")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl RecentSearchStore for LocalStorageStore {
    #[cfg(target_arch = "wasm32")]
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(RECENT_SEARCHES_KEY).ok().flatten()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn get(&self) -> Option<String> {
        None
    }

    #[cfg(target_arch = "wasm32")]
    fn set(&self, payload: &str) -> Result<(), PersistenceUnavailable> {
        let storage = Self::storage()
            .ok_or_else(|| PersistenceUnavailable("localStorage is not accessible".to_string()))?;
        storage
            .set_item(RECENT_SEARCHES_KEY, payload)
            .map_err(|_| PersistenceUnavailable("localStorage write rejected".to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn set(&self, _payload: &str) -> Result<(), PersistenceUnavailable> {
        Err(PersistenceUnavailable("no durable storage on this target".to_string()))
    }
}
