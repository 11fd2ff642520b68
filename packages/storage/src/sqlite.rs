use async_trait::async_trait;
use chrono::Utc;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use crate::{validate_key, KeyValueStore, StorageConfig, StorageError, StorageProvider, StorageResult};

/// Slot store backed by a `kv_store` table in SQLite
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if needed) the database named by a `Sqlite` provider
    pub async fn new(config: &StorageConfig) -> StorageResult<Self> {
        let database_path = match &config.provider {
            StorageProvider::Sqlite { path } => path,
            other => {
                return Err(StorageError::InvalidConfig(format!(
                    "SqliteStore requires a Sqlite provider, got {:?}",
                    other
                )))
            }
        };

        let in_memory = is_in_memory(database_path);

        // Ensure parent directory exists
        if !in_memory {
            if let Some(parent) = database_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let database_url = format!("sqlite:{}", database_path.display());

        if !sqlx::Sqlite::database_exists(&database_url).await? {
            debug!("Creating database at: {}", database_url);
            sqlx::Sqlite::create_database(&database_url).await?;
        }

        let mut options = SqlitePoolOptions::new()
            .acquire_timeout(Duration::from_secs(config.busy_timeout_seconds));

        // Every in-memory connection is its own database, so pin exactly one
        options = if in_memory {
            options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            options.max_connections(config.max_connections)
        };

        let pool = options.connect(&database_url).await?;

        if config.enable_wal && !in_memory {
            sqlx::query("PRAGMA journal_mode = WAL")
                .execute(&pool)
                .await?;
        }

        sqlx::query("PRAGMA synchronous = NORMAL")
            .execute(&pool)
            .await?;

        let store = Self { pool };
        store.initialize().await?;
        Ok(store)
    }

    async fn initialize(&self) -> StorageResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("SQLite slot store initialized");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn is_in_memory(path: &Path) -> bool {
    path.as_os_str() == ":memory:"
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        debug!("Reading slot {} from SQLite", key);

        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(row.try_get("value")?)),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        debug!("Writing slot {} to SQLite ({} bytes)", key, value.len());

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "sqlite"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_for(path: PathBuf) -> StorageConfig {
        StorageConfig {
            provider: StorageProvider::Sqlite { path },
            enable_wal: false,
            max_connections: 1,
            busy_timeout_seconds: 5,
        }
    }

    #[tokio::test]
    async fn test_sqlite_set_get_overwrite() {
        let temp = tempfile::tempdir().unwrap();
        let store = SqliteStore::new(&config_for(temp.path().join("labtrack.db")))
            .await
            .unwrap();

        assert_eq!(store.get("test_requests").await.unwrap(), None);

        store.set("test_requests", "[]").await.unwrap();
        store.set("test_requests", "[{}]").await.unwrap();
        assert_eq!(
            store.get("test_requests").await.unwrap().as_deref(),
            Some("[{}]")
        );
        assert!(store.contains("test_requests").await.unwrap());
    }

    #[tokio::test]
    async fn test_sqlite_persists_across_reopen() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("data").join("labtrack.db");

        {
            let store = SqliteStore::new(&config_for(path.clone())).await.unwrap();
            store.set("test_requests", "[1]").await.unwrap();
            store.pool().close().await;
        }

        let reopened = SqliteStore::new(&config_for(path)).await.unwrap();
        assert_eq!(
            reopened.get("test_requests").await.unwrap().as_deref(),
            Some("[1]")
        );
    }

    #[tokio::test]
    async fn test_sqlite_in_memory() {
        let store = SqliteStore::new(&config_for(PathBuf::from(":memory:")))
            .await
            .unwrap();
        store.set("slot", "value").await.unwrap();
        assert_eq!(store.get("slot").await.unwrap().as_deref(), Some("value"));
    }

    #[tokio::test]
    async fn test_rejects_non_sqlite_provider() {
        let config = StorageConfig::with_provider(StorageProvider::Memory);
        let result = SqliteStore::new(&config).await;
        assert!(matches!(result, Err(StorageError::InvalidConfig(_))));
    }
}
