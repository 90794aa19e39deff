//! Shared helpers for LocalsZA integration tests.
//!
//! Tests exercise the stores through [`FileStorage`] in a temporary data
//! directory, so each test gets a fresh "device" whose durable storage
//! survives store teardown but not the test itself.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::rc::Rc;
use std::sync::Once;

use tempfile::TempDir;

use localsza_stores::FileStorage;

static TRACING: Once = Once::new();

/// Initialize test logging once per process.
///
/// Respects `RUST_LOG`; silent by default so store warnings only show up
/// when asked for.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A temporary on-disk storage backend.
///
/// Keeps the [`TempDir`] alive alongside the backend; dropping this removes
/// the directory.
pub struct TempStorage {
    dir: TempDir,
}

impl TempStorage {
    /// Create a fresh temporary data directory.
    #[must_use]
    pub fn new() -> Self {
        init_tracing();
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp data dir"),
        }
    }

    /// Open a storage backend over the directory.
    ///
    /// Each call returns an independent backend, which is how a remounted
    /// scope sees the same durable data.
    #[must_use]
    pub fn open(&self) -> Rc<FileStorage> {
        Rc::new(FileStorage::open(self.dir.path()).expect("Failed to open file storage"))
    }

    /// Seed a raw value under `key`, bypassing the stores.
    pub fn seed(&self, key: &str, value: &str) {
        std::fs::write(self.dir.path().join(format!("{key}.json")), value)
            .expect("Failed to seed storage file");
    }
}

impl Default for TempStorage {
    fn default() -> Self {
        Self::new()
    }
}
