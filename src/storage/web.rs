//! Browser `localStorage` backend

use wasm_bindgen::JsValue;

use super::{DraftStore, StorageError};

/// Draft store over `window.localStorage`
///
/// Holds no handle: the storage object is looked up on every call, so the
/// store can live in a `Send` static.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

fn js_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window()
        .ok_or_else(|| StorageError::Unavailable("no window object".to_string()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(js_message(e)))?
        .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
}

impl DraftStore for LocalStorageStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: js_message(e),
        })
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: js_message(e),
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        local_storage()?.remove_item(key).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: js_message(e),
        })
    }
}
