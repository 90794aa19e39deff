//! Store-layer configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `LOCALSZA_DATA_DIR` - Directory for the file-backed storage (default: ./data)

use std::path::PathBuf;

use thiserror::Error;

use crate::error::StorageError;
use crate::storage::FileStorage;

/// Default data directory when `LOCALSZA_DATA_DIR` is unset.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Configuration for the persisted stores.
#[derive(Debug, Clone)]
pub struct StoresConfig {
    /// Directory holding the per-key storage files.
    pub data_dir: PathBuf,
}

impl StoresConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw = std::env::var("LOCALSZA_DATA_DIR")
            .unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let data_dir = parse_data_dir("LOCALSZA_DATA_DIR", &raw)?;
        Ok(Self { data_dir })
    }

    /// Open the file-backed storage this configuration points at.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the data directory cannot be created.
    pub fn open_storage(&self) -> Result<FileStorage, StorageError> {
        FileStorage::open(&self.data_dir)
    }
}

/// Validate a data-directory value.
fn parse_data_dir(var_name: &str, value: &str) -> Result<PathBuf, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must not be empty".to_string(),
        ));
    }
    Ok(PathBuf::from(value))
}
