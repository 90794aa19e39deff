//! LocalsZA client-side state stores.
//!
//! Each store loads its collection from durable key-value storage when the
//! owning UI scope mounts, mutates it through a fixed set of operations, and
//! writes the whole collection back after every mutation. Loading never
//! fails: malformed or legacy persisted data is normalized or discarded, and
//! a write failure leaves the in-memory state authoritative for the session.
//!
//! # Modules
//!
//! - [`storage`] - The durable key-value boundary and its backends
//! - [`normalize`] - Migration-on-read for legacy cart shapes
//! - [`cart`] - [`CartStore`]: deduplicated (product, quantity) lines
//! - [`favorites`] - [`FavoritesStore`]: a set of product references
//! - [`route_list`] - [`RouteListStore`]: session-scoped delivery stops
//! - [`scope`] - [`StoreScope`] ownership and fail-fast [`ScopeHandle`]s
//! - [`config`] - Environment-driven configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod favorites;
pub mod normalize;
pub mod route_list;
pub mod scope;
pub mod storage;

pub use cart::{CartStore, CartSummary};
pub use config::{ConfigError, StoresConfig};
pub use error::{StoreError, StorageError};
pub use favorites::FavoritesStore;
pub use route_list::RouteListStore;
pub use scope::{ScopeHandle, StoreScope};
pub use storage::{FileStorage, MemoryStorage, StorageBackend, keys};
