//! Key/value storage behind the session. The browser implementation wraps
//! `window.localStorage`; the in-memory one backs tests and non-browser builds.

use crate::app_lib::AppError;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Storage key holding the session token.
pub const TOKEN_KEY: &str = "token";

pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    /// Removes every key, not only the session token.
    fn clear(&self) -> Result<(), AppError>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        (**self).set(key, value)
    }

    fn clear(&self) -> Result<(), AppError> {
        (**self).clear()
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::SessionStore;
    use crate::app_lib::AppError;
    use web_sys::Storage;

    /// `window.localStorage`, looked up on every call.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserStorage;

    impl BrowserStorage {
        fn storage() -> Result<Storage, AppError> {
            web_sys::window()
                .and_then(|window| window.local_storage().ok())
                .flatten()
                .ok_or_else(|| AppError::Storage("localStorage is unavailable.".to_string()))
        }
    }

    impl SessionStore for BrowserStorage {
        fn get(&self, key: &str) -> Result<Option<String>, AppError> {
            Self::storage()?
                .get_item(key)
                .map_err(|_| AppError::Storage(format!("Unable to read `{key}`.")))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
            Self::storage()?
                .set_item(key, value)
                .map_err(|_| AppError::Storage(format!("Unable to write `{key}`.")))
        }

        fn clear(&self) -> Result<(), AppError> {
            Self::storage()?
                .clear()
                .map_err(|_| AppError::Storage("Unable to clear storage.".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryStorage, SessionStore, TOKEN_KEY};

    #[test]
    fn memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);

        storage.set(TOKEN_KEY, "abc").unwrap();
        assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
    }

    #[test]
    fn clear_removes_every_key() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "abc").unwrap();
        storage.set("theme", "dark").unwrap();

        storage.clear().unwrap();

        assert!(storage.is_empty());
    }
}
