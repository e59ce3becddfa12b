//! Storage Port
//!
//! Key-value string storage. Serialization is the caller's concern;
//! backends only move strings in and out of named slots.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageResult;

/// A durable key-value store holding one string per key.
///
/// Implementations: browser localStorage, in-memory map for tests.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if the slot is empty
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Clear the slot
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// In-memory store. Clones share the same slots, so a test can keep a
/// handle and inspect what a component wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot
    pub fn with_slot(self, key: &str, value: &str) -> Self {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }

    /// Raw slot contents
    pub fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_slots() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.write("tasks", "[]").unwrap();
        assert_eq!(handle.get("tasks").as_deref(), Some("[]"));

        handle.remove("tasks").unwrap();
        assert_eq!(store.read("tasks").unwrap(), None);
    }
}
