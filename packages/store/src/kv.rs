use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Durable string key-value storage.
///
/// The browser's `localStorage` is the real backing store; tests and
/// non-web builds use [`MemoryKv`]. Writes are last-writer-wins with no
/// multi-key transaction guarantee.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory KvStore for testing and non-browser fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryKv {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let kv = MemoryKv::new();
        assert!(kv.get("missing").is_none());

        kv.set("k", "v1");
        assert_eq!(kv.get("k").as_deref(), Some("v1"));

        kv.set("k", "v2");
        assert_eq!(kv.get("k").as_deref(), Some("v2"));

        kv.remove("k");
        assert!(kv.get("k").is_none());
    }

    #[test]
    fn clones_share_the_map() {
        let kv = MemoryKv::new();
        let other = kv.clone();
        kv.set("shared", "yes");
        assert_eq!(other.get("shared").as_deref(), Some("yes"));
    }
}
