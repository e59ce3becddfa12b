//! Persistent List
//!
//! An ordered collection mirrored to a single named storage slot.
//! Loaded once on construction, written through on every mutation.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::KeyValueStore;

/// In-memory `Vec<T>` kept identical to the JSON array in one storage slot.
///
/// Durability is best-effort: read failures yield an empty list and write
/// failures are logged, neither reaches the caller.
#[derive(Debug, Clone)]
pub struct PersistentList<T, S> {
    store: S,
    key: String,
    items: Vec<T>,
}

impl<T, S> PersistentList<T, S>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    /// Open the slot `key` and load its contents
    pub fn new(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = load(&store, &key);
        Self { store, key, items }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read the slot. Absent, unreadable or malformed slots give an empty list.
    pub fn load(&self) -> Vec<T> {
        load(&self.store, &self.key)
    }

    /// Serialize the full sequence and write it to the slot.
    pub fn save(&self, items: &[T]) {
        let json = match serde_json::to_string(items) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("[{}] serialize failed: {}", self.key, e);
                return;
            }
        };
        if let Err(e) = self.store.write(&self.key, &json) {
            log::warn!("[{}] {}", self.key, e);
        }
    }

    /// Mutate the in-memory list and write the result through.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let result = f(&mut self.items);
        self.save(&self.items);
        result
    }

    /// Discard the in-memory list and re-read the slot
    pub fn reload(&mut self) {
        self.items = self.load();
    }
}

fn load<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Vec<T> {
    let raw = match store.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("[{}] {}", key, e);
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("[{}] ignoring malformed slot: {}", key, e);
            Vec::new()
        }
    }
}
