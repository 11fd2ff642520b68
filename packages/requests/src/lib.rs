// ABOUTME: Test request lifecycle for the laboratory portal
// ABOUTME: Request repository over a slot store, process-step state machine and role projections

pub mod ids;
pub mod process;
pub mod projection;
pub mod repository;
pub mod seed;
pub mod types;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use ids::{
    format_request_id, next_request_id_last, next_request_id_max, parse_request_number,
    IdStrategy, REQUEST_ID_PREFIX,
};
pub use process::{classify_step, render_flow, ProcessStep, StepState, StepView};
pub use projection::{
    assignments, dashboard_rows, to_assignment, to_dashboard_row, visible_to, Assignment,
    AssignmentStatus, DashboardRow, ASSIGNMENT_WINDOW_DAYS,
};
pub use repository::{
    CorruptStorePolicy, RepositoryError, RepositoryOptions, RepositoryResult, RequestRepository,
    UpdateOutcome,
};
pub use seed::seed_requests;
pub use types::{NewTestRequest, Priority, RequestStatus, Role, TestRequest};
pub use validation::{validate_new_request, validate_request};
