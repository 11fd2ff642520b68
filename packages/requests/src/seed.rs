use chrono::{DateTime, TimeZone, Utc};

use crate::process::ProcessStep;
use crate::types::{Priority, RequestStatus, TestRequest};

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    customer_id: &str,
    customer_name: &str,
    item_name: &str,
    item_description: &str,
    quantity: u32,
    priority: Priority,
    status: RequestStatus,
    created: DateTime<Utc>,
    step: ProcessStep,
) -> TestRequest {
    TestRequest {
        id: id.to_string(),
        customer_id: customer_id.to_string(),
        customer_name: customer_name.to_string(),
        item_name: item_name.to_string(),
        item_description: item_description.to_string(),
        quantity,
        priority,
        status,
        created_at: created,
        updated_at: created,
        current_step: step,
    }
}

/// The four sample requests written by `initialize` into an empty store
pub fn seed_requests() -> Vec<TestRequest> {
    vec![
        seed(
            "REQ001",
            "cust-001",
            "PowerTech Industries",
            "Battery Cell - UL1642",
            "Lithium battery cell safety testing",
            2,
            Priority::High,
            RequestStatus::Registered,
            day(2023, 6, 15),
            ProcessStep::ItemRegistered,
        ),
        seed(
            "REQ002",
            "cust-002",
            "MobilePower Corp",
            "Power Bank - UL2056",
            "Power bank safety evaluation",
            1,
            Priority::Medium,
            RequestStatus::Testing,
            day(2023, 6, 18),
            ProcessStep::TestingAssigned,
        ),
        seed(
            "REQ003",
            "cust-003",
            "InnoSys Electronics",
            "Battery Pack - UN38.3",
            "Transport safety testing for lithium batteries",
            3,
            Priority::Low,
            RequestStatus::Completed,
            day(2023, 6, 20),
            ProcessStep::TestingCompleted,
        ),
        seed(
            "REQ004",
            "cust-004",
            "EnergyCell Ltd",
            "Battery Charger - IEC62368",
            "Battery charger safety evaluation",
            1,
            Priority::High,
            RequestStatus::Reviewed,
            day(2023, 6, 22),
            ProcessStep::CustomerReview,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let seeds = seed_requests();
        let ids: Vec<&str> = seeds.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["REQ001", "REQ002", "REQ003", "REQ004"]);

        for request in &seeds {
            assert_eq!(request.created_at, request.updated_at);
            assert!(request.quantity > 0);
            assert_eq!(request.current_step.derived_status(), request.status);
        }
    }
}
