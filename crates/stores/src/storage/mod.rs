//! Durable key-value storage boundary.
//!
//! Stores persist through this trait and nothing else. A backend maps string
//! keys to string values and survives reloads of the owning process; it is
//! not guaranteed to survive indefinitely (quota eviction, cleared data
//! directories), which is why every store treats an absent or unreadable
//! value as an empty collection.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StorageError;

/// Storage keys used by the stores.
pub mod keys {
    /// Key for the persisted cart entries.
    pub const CART: &str = "cart";

    /// Key for the persisted favorites list.
    pub const FAVORITES: &str = "favorites";
}

/// A durable string key-value store.
///
/// `get` returns `None` for absent keys; `set` reports failure so callers
/// can decide whether to surface it (the stores log and swallow it).
pub trait StorageBackend {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot complete the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
