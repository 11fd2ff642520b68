use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    JsonFileStore, KeyValueStore, MemoryStore, SqliteStore, StorageConfig, StorageProvider,
    StorageResult,
};

/// Factory for creating slot store instances
pub struct StorageFactory;

impl StorageFactory {
    /// Create a new store from configuration
    pub async fn create_store(config: &StorageConfig) -> StorageResult<Arc<dyn KeyValueStore>> {
        debug!("Creating store with provider: {:?}", config.provider);

        match &config.provider {
            StorageProvider::JsonFile { dir } => {
                info!("Using JSON file storage at: {:?}", dir);
                Ok(Arc::new(JsonFileStore::new(dir.clone())))
            }
            StorageProvider::Sqlite { path } => {
                info!("Initializing SQLite storage at: {:?}", path);
                Ok(Arc::new(SqliteStore::new(config).await?))
            }
            StorageProvider::Memory => {
                info!("Using in-memory storage; data will not survive exit");
                Ok(Arc::new(MemoryStore::new()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_creates_each_backend() {
        let temp = tempfile::tempdir().unwrap();

        let json = StorageFactory::create_store(&StorageConfig::with_provider(
            StorageProvider::JsonFile {
                dir: temp.path().to_path_buf(),
            },
        ))
        .await
        .unwrap();
        assert_eq!(json.provider_name(), "json-file");

        let sqlite = StorageFactory::create_store(&StorageConfig {
            provider: StorageProvider::Sqlite {
                path: temp.path().join("labtrack.db"),
            },
            enable_wal: false,
            max_connections: 1,
            busy_timeout_seconds: 5,
        })
        .await
        .unwrap();
        assert_eq!(sqlite.provider_name(), "sqlite");

        let memory = StorageFactory::create_store(&StorageConfig::with_provider(
            StorageProvider::Memory,
        ))
        .await
        .unwrap();
        assert_eq!(memory.provider_name(), "memory");
    }
}
