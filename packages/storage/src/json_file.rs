use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::{validate_key, KeyValueStore, StorageResult};

/// Slot store backed by one JSON document per key in a directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file that backs `key`
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Ensures the data directory exists
    async fn ensure_dir(&self) -> StorageResult<()> {
        if !self.dir.exists() {
            debug!("Creating data directory: {:?}", self.dir);
            fs::create_dir_all(&self.dir).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        let path = self.slot_path(key);
        debug!("Reading slot {} from: {:?}", key, path);

        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.ensure_dir().await?;

        let path = self.slot_path(key);
        debug!("Writing slot {} to: {:?} ({} bytes)", key, path, value.len());
        fs::write(&path, value).await?;
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "json-file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StorageError;

    #[tokio::test]
    async fn test_missing_slot_reads_as_none() {
        let temp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(temp.path().join("data"));

        assert_eq!(store.get("test_requests").await.unwrap(), None);
        assert!(!store.contains("test_requests").await.unwrap());
    }

    #[tokio::test]
    async fn test_set_creates_directory_and_overwrites() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("nested").join("data");
        let store = JsonFileStore::new(&dir);

        store.set("test_requests", "[]").await.unwrap();
        assert!(dir.exists());
        assert!(store.slot_path("test_requests").exists());

        store.set("test_requests", "[1,2]").await.unwrap();
        assert_eq!(
            store.get("test_requests").await.unwrap().as_deref(),
            Some("[1,2]")
        );
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let temp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(temp.path());

        let result = store.set("../escape", "x").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }
}
