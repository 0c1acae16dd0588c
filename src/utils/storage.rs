use std::cell::RefCell;
use std::collections::HashMap;

use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};
use web_sys::window;

use crate::error::StorageError;

/// Key-value side store that survives reloads
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str);
}

/// `window.localStorage`, through gloo-storage
#[derive(Debug, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// `None` outside a browser or when storage is disabled
    pub fn available() -> Option<Self> {
        window()?.local_storage().ok()??;
        Some(Self)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw().set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn remove_item(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// In-memory store for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

pub fn save_to_storage<T: Serialize>(
    storage: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(|e| StorageError::Serialize {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    storage.set_item(key, &json)
}

/// Undecodable entries read as missing
pub fn load_from_storage<T: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Option<T> {
    let json = storage.get_item(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ Ignoring unreadable `{}` in storage: {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, UserProfile};

    #[test]
    fn round_trips_json_values() {
        let storage = MemoryStorage::new();
        let user = UserProfile {
            id: "u1".into(),
            name: "Lakshmi".into(),
            email: None,
            phone: None,
            role: Role::Volunteer,
        };
        save_to_storage(&storage, "user", &user).unwrap();
        assert_eq!(load_from_storage::<UserProfile>(&storage, "user"), Some(user));
    }

    #[test]
    fn corrupt_entry_reads_as_missing() {
        let storage = MemoryStorage::new();
        storage.set_item("user", "{not json").unwrap();
        assert_eq!(load_from_storage::<UserProfile>(&storage, "user"), None);
        storage.remove_item("user");
        assert!(storage.is_empty());
    }
}
