//! Error types for the state-store layer.
//!
//! The error surface here is deliberately small. Malformed persisted data
//! and persistence write failures are both recovered locally (empty load,
//! swallowed write) and never reach a caller; the only error a consumer can
//! see is a scope-access violation, which signals an integration mistake
//! and is meant to fail fast.

use thiserror::Error;

/// Errors visible to store consumers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A handle was used after its owning [`StoreScope`] was dropped.
    ///
    /// [`StoreScope`]: crate::scope::StoreScope
    #[error("Missing store provider: {0} (the owning scope has been dropped)")]
    ProviderMissing(&'static str),
}

/// Errors raised by a [`StorageBackend`](crate::storage::StorageBackend).
///
/// Stores swallow these on write (logging at `warn`); backends surface them
/// so construction failures are still visible.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying filesystem operation failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}
