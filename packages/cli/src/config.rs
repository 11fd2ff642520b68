use labtrack_config::{
    LABTRACK_CORRUPT_STORE_POLICY, LABTRACK_ID_STRATEGY, LABTRACK_STORAGE_BACKEND,
};
use labtrack_core::labtrack_dir;
use labtrack_requests::{CorruptStorePolicy, IdStrategy, RepositoryOptions};
use labtrack_storage::{StorageConfig, StorageProvider};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid storage backend: {0} (expected json, sqlite or memory)")]
    InvalidBackend(String),
    #[error("Invalid corrupt store policy: {0} (expected fail or reset)")]
    InvalidCorruptStorePolicy(String),
    #[error("Invalid id strategy: {0} (expected last or max)")]
    InvalidIdStrategy(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageBackend {
    #[default]
    Json,
    Sqlite,
    Memory, // Lost when the process exits
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(StorageBackend::Json),
            "sqlite" => Ok(StorageBackend::Sqlite),
            "memory" => Ok(StorageBackend::Memory),
            _ => Err(ConfigError::InvalidBackend(s.to_string())),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Json => write!(f, "json"),
            StorageBackend::Sqlite => write!(f, "sqlite"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub backend: StorageBackend,
    pub corrupt_store_policy: CorruptStorePolicy,
    pub id_strategy: IdStrategy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = labtrack_dir();

        let backend = match env::var(LABTRACK_STORAGE_BACKEND) {
            Ok(value) => value.parse::<StorageBackend>()?,
            Err(_) => StorageBackend::default(),
        };

        let corrupt_store_policy = match env::var(LABTRACK_CORRUPT_STORE_POLICY) {
            Ok(value) => value
                .parse::<CorruptStorePolicy>()
                .map_err(|_| ConfigError::InvalidCorruptStorePolicy(value))?,
            Err(_) => CorruptStorePolicy::default(),
        };

        let id_strategy = match env::var(LABTRACK_ID_STRATEGY) {
            Ok(value) => value
                .parse::<IdStrategy>()
                .map_err(|_| ConfigError::InvalidIdStrategy(value))?,
            Err(_) => IdStrategy::default(),
        };

        Ok(Config {
            data_dir,
            backend,
            corrupt_store_policy,
            id_strategy,
        })
    }

    /// Apply command-line flags on top of the environment
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, backend: Option<StorageBackend>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(backend) = backend {
            self.backend = backend;
        }
        self
    }

    pub fn storage_config(&self) -> StorageConfig {
        let provider = match self.backend {
            StorageBackend::Json => StorageProvider::JsonFile {
                dir: self.data_dir.clone(),
            },
            StorageBackend::Sqlite => StorageProvider::Sqlite {
                path: self.data_dir.join("labtrack.db"),
            },
            StorageBackend::Memory => StorageProvider::Memory,
        };
        StorageConfig::with_provider(provider)
    }

    pub fn repository_options(&self) -> RepositoryOptions {
        RepositoryOptions {
            id_strategy: self.id_strategy,
            corrupt_store_policy: self.corrupt_store_policy,
            ..RepositoryOptions::default()
        }
    }
}
