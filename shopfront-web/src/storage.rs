//! Browser storage backends for the core storage seam
use shopfront_core::{KeyValueStore, StorageError, StorefrontEngine};

/// Which browser storage area a [`BrowserStore`] targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Area {
    Durable,
    Session,
}

/// `KeyValueStore` over `localStorage` / `sessionStorage`.
///
/// Every failure mode (privacy mode, quota, detached window) degrades to
/// "absent" on read and a logged [`StorageError`] on write; nothing here
/// ever reaches the user as an error.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStore {
    area: Area,
}

impl BrowserStore {
    /// Durable storage, backing the cart.
    #[must_use]
    pub const fn durable() -> Self {
        Self {
            area: Area::Durable,
        }
    }

    /// Session-scoped storage, backing the recently-viewed list.
    #[must_use]
    pub const fn session() -> Self {
        Self {
            area: Area::Session,
        }
    }

    fn handle(&self) -> Option<web_sys::Storage> {
        if !cfg!(target_arch = "wasm32") {
            return None;
        }
        let result = match self.area {
            Area::Durable => crate::dom::local_storage(),
            Area::Session => crate::dom::session_storage(),
        };
        match result {
            Ok(storage) => Some(storage),
            Err(err) => {
                crate::dom::console_error(&format!(
                    "browser storage unavailable: {}",
                    crate::dom::js_error_message(&err)
                ));
                None
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        self.handle()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.handle().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::WriteFailed(crate::dom::js_error_message(&err)))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.handle() {
            let _ = storage.remove_item(key);
        }
    }
}

/// The storefront engine wired to the browser storage areas.
#[must_use]
pub const fn web_engine() -> StorefrontEngine<BrowserStore, BrowserStore> {
    StorefrontEngine::new(BrowserStore::durable(), BrowserStore::session())
}
