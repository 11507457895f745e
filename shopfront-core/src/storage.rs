//! Key-value storage seam
//!
//! Platform-specific backends (browser localStorage / sessionStorage)
//! implement [`KeyValueStore`]; tests and native harnesses use
//! [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    WriteFailed(String),
}

/// String key-value storage with full-overwrite writes, matching the
/// browser storage contract (no transactions, last writer wins).
pub trait KeyValueStore {
    /// Read the value for a key, `None` when absent or unreadable.
    fn read(&self, key: &str) -> Option<String>;

    /// Overwrite the value for a key.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write (quota, privacy
    /// mode). Callers treat this as recoverable and log it.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key; absent keys are a no-op.
    fn remove(&self, key: &str);
}

/// In-memory store backed by a shared map. Clones share contents, the way
/// two handles to the same browser storage area would.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_shares_between_clones() {
        let store = MemoryStore::new();
        assert_eq!(store.read("k"), None);
        store.write("k", "v").unwrap();
        let alias = store.clone();
        assert_eq!(alias.read("k"), Some("v".to_string()));
        alias.remove("k");
        assert_eq!(store.read("k"), None);
        store.remove("k"); // absent key is a no-op
    }
}
