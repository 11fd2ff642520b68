// ABOUTME: Wires configuration to a store and a request repository
// ABOUTME: One place that decides which backend a CLI invocation talks to

use labtrack_requests::RequestRepository;
use labtrack_storage::{StorageFactory, StorageResult};
use tracing::debug;

use crate::config::Config;

/// Open the configured store and wrap it in a repository.
///
/// Does not seed; callers decide when to run `initialize`.
pub async fn open_repository(config: &Config) -> StorageResult<RequestRepository> {
    debug!(
        "Opening {} store in {}",
        config.backend,
        config.data_dir.display()
    );
    let store = StorageFactory::create_store(&config.storage_config()).await?;
    Ok(RequestRepository::new(store).with_options(config.repository_options()))
}
