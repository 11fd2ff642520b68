// ABOUTME: Key/value slot persistence for labtrack
// ABOUTME: Storage trait, configuration and the JSON file, SQLite and in-memory backends

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub mod factory;
pub mod json_file;
pub mod memory;
pub mod sqlite;

pub use factory::StorageFactory;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub provider: StorageProvider,
    pub enable_wal: bool,
    pub max_connections: u32,
    pub busy_timeout_seconds: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: StorageProvider::JsonFile {
                dir: labtrack_core::labtrack_dir(),
            },
            enable_wal: true,
            max_connections: 5,
            busy_timeout_seconds: 30,
        }
    }
}

impl StorageConfig {
    pub fn with_provider(provider: StorageProvider) -> Self {
        Self {
            provider,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StorageProvider {
    /// One `<key>.json` file per slot inside `dir`
    JsonFile { dir: PathBuf },
    /// A `kv_store` table in a SQLite database
    Sqlite { path: PathBuf },
    /// Process-local map, lost on exit
    Memory,
}

/// A named-slot text store.
///
/// Every write replaces the whole value of a slot. There is no versioning and
/// no cross-writer coordination: the last write wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Raw text stored at `key`, or `None` when the slot is empty
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the slot at `key`
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    async fn contains(&self, key: &str) -> StorageResult<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Short backend name for diagnostics
    fn provider_name(&self) -> &'static str;
}

/// Keys double as file names, so keep them to `[A-Za-z0-9_-]`
pub fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
