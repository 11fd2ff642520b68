// ABOUTME: Read-only role views over test requests
// ABOUTME: Dashboard rows, role visibility and tester assignment rows

use chrono::{DateTime, Duration, NaiveDate, Utc};
use labtrack_core::format_date;
use serde::Serialize;

use crate::ids::parse_request_number;
use crate::process::ProcessStep;
use crate::types::{Priority, RequestStatus, Role, TestRequest};

/// Days between projection time and an assignment's due date
pub const ASSIGNMENT_WINDOW_DAYS: i64 = 7;

/// A request as shown in a dashboard table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRow {
    pub id: String,
    pub customer: String,
    pub item: String,
    pub priority: Priority,
    pub status: RequestStatus,
    /// `YYYY-MM-DD` of `created_at`
    pub date: String,
    pub current_step: ProcessStep,
}

pub fn to_dashboard_row(request: &TestRequest) -> DashboardRow {
    DashboardRow {
        id: request.id.clone(),
        customer: request.customer_name.clone(),
        item: request.item_name.clone(),
        priority: request.priority,
        status: request.status,
        date: format_date(&request.created_at),
        current_step: request.current_step,
    }
}

/// Testers only see requests under test; every other role sees everything
pub fn visible_to(role: Role, request: &TestRequest) -> bool {
    match role {
        Role::Tester => request.status == RequestStatus::Testing,
        Role::Sales | Role::Reception | Role::Manager | Role::Customer => true,
    }
}

/// Dashboard rows `role` may see, in store order
pub fn dashboard_rows(role: Role, requests: &[TestRequest]) -> Vec<DashboardRow> {
    requests
        .iter()
        .filter(|request| visible_to(role, request))
        .map(to_dashboard_row)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Pending,
    InProgress,
}

/// A tester's work item derived from a registered or in-test request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub request_id: String,
    pub barcode: String,
    pub name: String,
    pub description: String,
    pub assigned_tester_id: String,
    pub priority: Priority,
    pub status: AssignmentStatus,
    pub customer_name: String,
    pub due_date: NaiveDate,
}

/// Derive an assignment row, or `None` for requests outside
/// `registered`/`testing`.
///
/// The due date is `now + 7 days` and is not stored, so two calls with
/// different `now` disagree.
pub fn to_assignment(request: &TestRequest, now: DateTime<Utc>) -> Option<Assignment> {
    let status = match request.status {
        RequestStatus::Registered => AssignmentStatus::Pending,
        RequestStatus::Testing => AssignmentStatus::InProgress,
        _ => return None,
    };

    let (id, barcode) = match parse_request_number(&request.id) {
        Some(n) => (format!("ITEM{:03}", n), format!("BC{:05}", n)),
        None => (format!("ITEM-{}", request.id), format!("BC-{}", request.id)),
    };

    Some(Assignment {
        id,
        request_id: request.id.clone(),
        barcode,
        name: request.item_name.clone(),
        description: request.item_description.clone(),
        assigned_tester_id: Role::Tester.user_id().to_string(),
        priority: request.priority,
        status,
        customer_name: request.customer_name.clone(),
        due_date: (now + Duration::days(ASSIGNMENT_WINDOW_DAYS)).date_naive(),
    })
}

/// Assignment rows for every registered or in-test request
pub fn assignments(requests: &[TestRequest], now: DateTime<Utc>) -> Vec<Assignment> {
    requests
        .iter()
        .filter_map(|request| to_assignment(request, now))
        .collect()
}
