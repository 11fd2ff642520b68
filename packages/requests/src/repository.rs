use labtrack_core::{Clock, SystemClock, ValidationErrors, STORAGE_KEY};
use labtrack_storage::{KeyValueStore, StorageError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::ids::IdStrategy;
use crate::process::ProcessStep;
use crate::seed::seed_requests;
use crate::types::{NewTestRequest, RequestStatus, TestRequest};
use crate::validation::{validate_new_request, validate_request};

/// Repository errors
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Stored request list under '{key}' is corrupt: {source}")]
    CorruptStore {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Cannot derive next id from request id: {0}")]
    MalformedId(String),
    #[error("Validation errors: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Test request not found: {0}")]
    NotFound(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// What to do when the stored text does not parse as a request list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptStorePolicy {
    /// Surface [`RepositoryError::CorruptStore`]
    #[default]
    Fail,
    /// Log and read as an empty list; the next write replaces the bad data
    Reset,
}

impl fmt::Display for CorruptStorePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorruptStorePolicy::Fail => write!(f, "fail"),
            CorruptStorePolicy::Reset => write!(f, "reset"),
        }
    }
}

impl FromStr for CorruptStorePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail" => Ok(CorruptStorePolicy::Fail),
            "reset" => Ok(CorruptStorePolicy::Reset),
            _ => Err(format!("Invalid corrupt store policy: {}", s)),
        }
    }
}

/// Repository tuning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOptions {
    /// Slot holding the request list
    pub key: String,
    pub id_strategy: IdStrategy,
    pub corrupt_store_policy: CorruptStorePolicy,
}

impl Default for RepositoryOptions {
    fn default() -> Self {
        Self {
            key: STORAGE_KEY.to_string(),
            id_strategy: IdStrategy::default(),
            corrupt_store_policy: CorruptStorePolicy::default(),
        }
    }
}

/// Result of [`RequestRepository::update`]
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The record was replaced and persisted; carries the stored version
    Updated(TestRequest),
    /// No record with that id; carries the caller's input untouched
    NotFound(TestRequest),
}

impl UpdateOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, UpdateOutcome::Updated(_))
    }

    /// The returned record regardless of outcome
    pub fn into_inner(self) -> TestRequest {
        match self {
            UpdateOutcome::Updated(request) | UpdateOutcome::NotFound(request) => request,
        }
    }

    /// Treat a missing id as an error
    pub fn into_result(self) -> RepositoryResult<TestRequest> {
        match self {
            UpdateOutcome::Updated(request) => Ok(request),
            UpdateOutcome::NotFound(request) => Err(RepositoryError::NotFound(request.id)),
        }
    }
}

/// Create/read/update access to the persisted list of test requests.
///
/// Every mutation reads the whole list, changes it, and writes the whole list
/// back to one slot. Nothing coordinates concurrent writers; the last write
/// wins.
pub struct RequestRepository {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    options: RepositoryOptions,
}

impl RequestRepository {
    /// Repository over `store` using the system clock and default options
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
            options: RepositoryOptions::default(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_options(mut self, options: RepositoryOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &RepositoryOptions {
        &self.options
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Write the seed list if the slot is empty. Returns `true` when seeded.
    pub async fn initialize(&self) -> RepositoryResult<bool> {
        if self.store.contains(&self.options.key).await? {
            debug!(
                "Request store '{}' already populated, skipping seed",
                self.options.key
            );
            return Ok(false);
        }

        let seeds = seed_requests();
        self.write_all(&seeds).await?;
        info!("Seeded request store with {} sample requests", seeds.len());
        Ok(true)
    }

    /// All requests in store order
    pub async fn list_all(&self) -> RepositoryResult<Vec<TestRequest>> {
        let requests = self.read_all().await?;
        debug!("Retrieved {} requests", requests.len());
        Ok(requests)
    }

    /// Linear scan by id
    pub async fn get_by_id(&self, id: &str) -> RepositoryResult<Option<TestRequest>> {
        let requests = self.read_all().await?;
        Ok(requests.into_iter().find(|request| request.id == id))
    }

    /// The id the next `insert` would assign
    pub async fn generate_id(&self) -> RepositoryResult<String> {
        let requests = self.read_all().await?;
        self.next_id(&requests)
    }

    /// Append a new request in the `pending` / `request_received` state
    pub async fn insert(&self, data: NewTestRequest) -> RepositoryResult<TestRequest> {
        validate_new_request(&data)?;

        let mut requests = self.read_all().await?;
        let id = self.next_id(&requests)?;
        let now = self.clock.now();

        let request = TestRequest {
            id,
            customer_id: data.customer_id,
            customer_name: data.customer_name,
            item_name: data.item_name,
            item_description: data.item_description,
            quantity: data.quantity,
            priority: data.priority,
            status: RequestStatus::Pending,
            created_at: now,
            updated_at: now,
            current_step: ProcessStep::RequestReceived,
        };

        requests.push(request.clone());
        self.write_all(&requests).await?;

        info!(
            "Created test request '{}' for {} ({})",
            request.item_name, request.customer_name, request.id
        );
        Ok(request)
    }

    /// Replace the stored record with the same id, refreshing `updated_at`.
    ///
    /// An unknown id leaves the store untouched and hands the input back as
    /// [`UpdateOutcome::NotFound`].
    pub async fn update(&self, mut request: TestRequest) -> RepositoryResult<UpdateOutcome> {
        let mut requests = self.read_all().await?;

        let Some(index) = requests.iter().position(|r| r.id == request.id) else {
            warn!("Update skipped, no test request with id {}", request.id);
            return Ok(UpdateOutcome::NotFound(request));
        };

        validate_request(&request)?;

        // updated_at never precedes created_at
        request.updated_at = self.clock.now().max(request.created_at);
        requests[index] = request.clone();
        self.write_all(&requests).await?;

        info!(
            "Updated test request {} (status: {}, step: {})",
            request.id, request.status, request.current_step
        );
        Ok(UpdateOutcome::Updated(request))
    }

    /// Move a request to the next process step and its derived status.
    /// A request at the final step is returned unchanged and not rewritten.
    pub async fn advance(&self, id: &str) -> RepositoryResult<Option<TestRequest>> {
        let Some(mut request) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let Some(next) = request.current_step.next() else {
            debug!("Test request {} is already at the final step", id);
            return Ok(Some(request));
        };

        request.current_step = next;
        request.status = next.derived_status();
        Ok(Some(self.update(request).await?.into_inner()))
    }

    fn next_id(&self, requests: &[TestRequest]) -> RepositoryResult<String> {
        self.options
            .id_strategy
            .next_id(requests)
            .map_err(RepositoryError::MalformedId)
    }

    async fn read_all(&self) -> RepositoryResult<Vec<TestRequest>> {
        let key = &self.options.key;
        let Some(raw) = self.store.get(key).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<TestRequest>>(&raw) {
            Ok(requests) => Ok(requests),
            Err(e) => match self.options.corrupt_store_policy {
                CorruptStorePolicy::Fail => {
                    error!("Failed to parse request store '{}': {}", key, e);
                    Err(RepositoryError::CorruptStore {
                        key: key.clone(),
                        source: e,
                    })
                }
                CorruptStorePolicy::Reset => {
                    warn!(
                        "Request store '{}' is corrupt ({}), reading it as empty",
                        key, e
                    );
                    Ok(Vec::new())
                }
            },
        }
    }

    async fn write_all(&self, requests: &[TestRequest]) -> RepositoryResult<()> {
        let json = serde_json::to_string(requests)?;
        self.store.set(&self.options.key, &json).await?;
        debug!(
            "Persisted {} requests to '{}' via {}",
            requests.len(),
            self.options.key,
            self.store.provider_name()
        );
        Ok(())
    }
}
