//! localStorage Binding
//!
//! `KeyValueStore` over `window.localStorage`.

use taskfeed_core::{KeyValueStore, StorageError, StorageResult};

use super::js_message;

/// Handle to `window.localStorage`.
///
/// Holds no JS object: the storage is looked up on each call, so the
/// handle can live inside reactive signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_message(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(js_message(&e)))
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(js_message(&e)))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write(js_message(&e)))
    }
}
