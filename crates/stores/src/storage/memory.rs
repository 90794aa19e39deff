//! In-memory storage backend.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StorageError;

use super::StorageBackend;

/// A storage backend that lives only as long as the process.
///
/// Used in tests and for browser-session-like contexts where nothing should
/// outlive the scope. Interior mutability keeps the [`StorageBackend`]
/// methods `&self`, matching the single-threaded model of the stores.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-seeded with key-value pairs.
    #[must_use]
    pub fn seeded<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: RefCell::new(
                pairs
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
