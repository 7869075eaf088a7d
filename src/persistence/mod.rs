//! Persistence of the chosen ids
//!
//! Features:
//! - `SelectionStore` key-value capability (get/set/clear)
//! - JSON array codec for the id list
//! - In-memory store for native builds and tests
//! - LocalStorage-backed store on the web, optionally namespaced

pub mod memory;
pub mod namespace;
#[cfg(target_arch = "wasm32")]
pub mod local;

pub use memory::MemoryStore;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;

/// Errors surfaced by a store or the id codec
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage call failed: {0}")]
    Js(String),
    #[error("failed to encode ids: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("stored value is not a JSON array of strings: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Key-value persistence capability.
///
/// `clear` empties everything the store can see, not just one key.
pub trait SelectionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Serialize ids as a JSON array of strings
pub fn encode_ids(ids: &[String]) -> Result<String, StoreError> {
    serde_json::to_string(ids).map_err(StoreError::Encode)
}

/// Parse a JSON array of strings
pub fn decode_ids(raw: &str) -> Result<Vec<String>, StoreError> {
    serde_json::from_str(raw).map_err(StoreError::Decode)
}

/// Read the persisted id list under `key`.
///
/// Absent, blank, and malformed values all read as `None`.
pub fn load_ids(store: &dyn SelectionStore, key: &str) -> Option<Vec<String>> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("Could not read '{}': {}", key, e);
            return None;
        }
    };

    if raw.trim().is_empty() {
        return None;
    }

    match decode_ids(&raw) {
        Ok(ids) => Some(ids),
        Err(e) => {
            log::warn!("Ignoring stored '{}': {}", key, e);
            None
        }
    }
}

/// Write the id list under `key`, overwriting any prior value
pub fn save_ids(store: &mut dyn SelectionStore, key: &str, ids: &[String]) -> Result<(), StoreError> {
    let json = encode_ids(ids)?;
    store.set(key, &json)?;
    log::debug!("Saved {} selected ids to '{}'", ids.len(), key);
    Ok(())
}
