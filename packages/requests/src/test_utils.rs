//! Test helpers shared by unit tests and dependent crates

use chrono::{TimeZone, Utc};
use labtrack_core::FixedClock;
use labtrack_storage::MemoryStore;
use std::sync::Arc;

use crate::repository::RequestRepository;
use crate::types::{NewTestRequest, Priority};

/// A clock pinned to 2024-03-01T09:00:00Z
pub fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
            .single()
            .unwrap_or_default(),
    ))
}

/// Repository over an empty in-memory store, plus a handle on its clock
pub fn memory_repository() -> (RequestRepository, Arc<FixedClock>) {
    let clock = fixed_clock();
    let repo = RequestRepository::new(Arc::new(MemoryStore::new())).with_clock(clock.clone());
    (repo, clock)
}

/// A valid submission for `item_name` from customer `c1`
pub fn new_request(item_name: &str) -> NewTestRequest {
    NewTestRequest {
        customer_id: "c1".to_string(),
        customer_name: "Acme".to_string(),
        item_name: item_name.to_string(),
        item_description: "d".to_string(),
        quantity: 1,
        priority: Priority::Low,
    }
}
