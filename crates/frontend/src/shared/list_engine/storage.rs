//! Per-entity page-size persistence, one integer under `perPage-{entity}`.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::pagination::{clamp_per_page, PER_PAGE_DEFAULT};

/// Key/value persistence behind the perPage setting. The browser
/// implementation is localStorage; tests use an in-memory fake.
pub trait StorageAdapter {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// window.localStorage backed adapter.
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl StorageAdapter for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        web_sys::window()?
            .local_storage()
            .ok()
            .flatten()?
            .get_item(key)
            .ok()
            .flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
}

/// In-memory adapter for unit tests.
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<BTreeMap<String, String>>,
}

impl StorageAdapter for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

fn per_page_key(entity: &str) -> String {
    format!("perPage-{}", entity)
}

/// Read the persisted page size, clamped to [5, 100]. Missing or garbage
/// values fall back to the default.
pub fn load_per_page(store: &dyn StorageAdapter, entity: &str) -> usize {
    store
        .get(&per_page_key(entity))
        .and_then(|v| v.parse().ok())
        .map(clamp_per_page)
        .unwrap_or(PER_PAGE_DEFAULT)
}

/// Clamp, persist and return the new page size.
pub fn save_per_page(store: &dyn StorageAdapter, entity: &str, value: usize) -> usize {
    let clamped = clamp_per_page(value);
    store.set(&per_page_key(entity), &clamped.to_string());
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_engine::pagination::{PER_PAGE_MAX, PER_PAGE_MIN};

    #[test]
    fn missing_value_falls_back_to_default() {
        let store = MemoryStorage::default();
        assert_eq!(load_per_page(&store, "blog"), PER_PAGE_DEFAULT);
    }

    #[test]
    fn save_clamps_and_round_trips() {
        let store = MemoryStorage::default();
        assert_eq!(save_per_page(&store, "blog", 500), PER_PAGE_MAX);
        assert_eq!(load_per_page(&store, "blog"), PER_PAGE_MAX);
        assert_eq!(save_per_page(&store, "blog", 1), PER_PAGE_MIN);
        assert_eq!(load_per_page(&store, "blog"), PER_PAGE_MIN);
    }

    #[test]
    fn keys_are_scoped_per_entity() {
        let store = MemoryStorage::default();
        save_per_page(&store, "blog", 50);
        assert_eq!(load_per_page(&store, "event"), PER_PAGE_DEFAULT);
        assert_eq!(load_per_page(&store, "blog"), 50);
    }

    #[test]
    fn garbage_value_is_ignored() {
        let store = MemoryStorage::default();
        store.set("perPage-blog", "not-a-number");
        assert_eq!(load_per_page(&store, "blog"), PER_PAGE_DEFAULT);
    }
}
