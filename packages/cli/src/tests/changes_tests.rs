use crate::changes::RequestChanges;
use labtrack_requests::{seed_requests, Priority, ProcessStep, RequestStatus};
use pretty_assertions::assert_eq;

#[test]
fn test_step_only_derives_status() {
    let mut request = seed_requests().remove(0);
    let changes = RequestChanges {
        step: Some(ProcessStep::CustomerReview),
        ..Default::default()
    };

    assert!(!changes.is_empty());
    changes.apply(&mut request);

    assert_eq!(request.current_step, ProcessStep::CustomerReview);
    assert_eq!(request.status, RequestStatus::Reviewed);
}

#[test]
fn test_explicit_status_wins_over_step() {
    let mut request = seed_requests().remove(0);
    let changes = RequestChanges {
        step: Some(ProcessStep::TestingAssigned),
        status: Some(RequestStatus::Pending),
        priority: Some(Priority::High),
        ..Default::default()
    };

    changes.apply(&mut request);

    assert_eq!(request.current_step, ProcessStep::TestingAssigned);
    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.priority, Priority::High);
}

#[test]
fn test_no_changes_leaves_request_untouched() {
    let original = seed_requests().remove(0);
    let mut request = original.clone();
    let changes = RequestChanges::default();

    assert!(changes.is_empty());
    changes.apply(&mut request);

    assert_eq!(request, original);
}
