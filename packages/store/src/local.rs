//! # `localStorage`-backed store — browser persistence
//!
//! [`LocalStorageKv`] is the [`KvStore`] implementation used on the web
//! platform. It holds no state of its own and fetches the `Storage` handle
//! from the window on every operation; the browser deduplicates the
//! underlying store, so instances are free to construct.
//!
//! ## Error handling
//!
//! All methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). A browser with storage disabled or full degrades to
//! "nothing persisted" rather than crashing the UI; the session and
//! preference layers already treat absent keys as their logged-out/default
//! state.

use crate::kv::KvStore;

/// `window.localStorage` as a [`KvStore`].
#[derive(Clone, Debug, Default)]
pub struct LocalStorageKv;

impl LocalStorageKv {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KvStore for LocalStorageKv {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
