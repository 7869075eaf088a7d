//! LocalStorage-backed store (WASM only)
//!
//! With an empty namespace keys are used as-is and `clear` wipes the whole
//! origin's storage. A non-empty namespace scopes every key (see
//! `namespace`) and limits `clear` to the keys it owns.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use super::namespace;
use super::{SelectionStore, StoreError};

fn js_err(e: JsValue) -> StoreError {
    StoreError::Js(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// `window.localStorage` wrapper
pub struct LocalStore {
    storage: Storage,
    namespace: String,
}

impl LocalStore {
    /// Open the window's LocalStorage
    pub fn open(namespace: impl Into<String>) -> Result<Self, StoreError> {
        let storage = web_sys::window()
            .ok_or(StoreError::Unavailable)?
            .local_storage()
            .map_err(js_err)?
            .ok_or(StoreError::Unavailable)?;
        Ok(Self {
            storage,
            namespace: namespace.into(),
        })
    }

    fn full_key(&self, key: &str) -> String {
        namespace::scoped_key(&self.namespace, key)
    }

    /// Keys currently under this store's namespace
    fn owned_keys(&self) -> Result<Vec<String>, StoreError> {
        let len = self.storage.length().map_err(js_err)?;
        let mut keys = Vec::new();
        for i in 0..len {
            if let Some(key) = self.storage.key(i).map_err(js_err)? {
                if namespace::owns_key(&self.namespace, &key) {
                    keys.push(key);
                }
            }
        }
        Ok(keys)
    }
}

impl SelectionStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(&self.full_key(key)).map_err(js_err)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(&self.full_key(key), value)
            .map_err(js_err)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        if self.namespace.is_empty() {
            return self.storage.clear().map_err(js_err);
        }
        // Collect first: removing while indexing shifts the key order
        for key in self.owned_keys()? {
            self.storage.remove_item(&key).map_err(js_err)?;
        }
        log::info!("Cleared storage under '{}'", self.namespace);
        Ok(())
    }
}
