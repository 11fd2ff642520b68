// ABOUTME: The fixed eight-stage request lifecycle
// ABOUTME: Step ordering, labels, derived status and completed/current/pending rendering

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::RequestStatus;

/// One stage of the request lifecycle.
///
/// The order of [`ProcessStep::ALL`] is the rendering order. Stored records
/// may hold any step regardless of what came before; nothing here rejects a
/// backwards or skipping move.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStep {
    RequestReceived,
    ItemRegistered,
    TestingAssigned,
    TestingCompleted,
    ResultsCompiled,
    CustomerReview,
    ManagerApproval,
    ReportFinalized,
}

impl ProcessStep {
    pub const ALL: [ProcessStep; 8] = [
        ProcessStep::RequestReceived,
        ProcessStep::ItemRegistered,
        ProcessStep::TestingAssigned,
        ProcessStep::TestingCompleted,
        ProcessStep::ResultsCompiled,
        ProcessStep::CustomerReview,
        ProcessStep::ManagerApproval,
        ProcessStep::ReportFinalized,
    ];

    /// Position in [`ProcessStep::ALL`]
    pub fn index(self) -> usize {
        match self {
            ProcessStep::RequestReceived => 0,
            ProcessStep::ItemRegistered => 1,
            ProcessStep::TestingAssigned => 2,
            ProcessStep::TestingCompleted => 3,
            ProcessStep::ResultsCompiled => 4,
            ProcessStep::CustomerReview => 5,
            ProcessStep::ManagerApproval => 6,
            ProcessStep::ReportFinalized => 7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProcessStep::RequestReceived => "request_received",
            ProcessStep::ItemRegistered => "item_registered",
            ProcessStep::TestingAssigned => "testing_assigned",
            ProcessStep::TestingCompleted => "testing_completed",
            ProcessStep::ResultsCompiled => "results_compiled",
            ProcessStep::CustomerReview => "customer_review",
            ProcessStep::ManagerApproval => "manager_approval",
            ProcessStep::ReportFinalized => "report_finalized",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            ProcessStep::RequestReceived => "Request Received",
            ProcessStep::ItemRegistered => "Item Registered",
            ProcessStep::TestingAssigned => "Testing Assigned",
            ProcessStep::TestingCompleted => "Testing Completed",
            ProcessStep::ResultsCompiled => "Results Compiled",
            ProcessStep::CustomerReview => "Customer Review",
            ProcessStep::ManagerApproval => "Manager Approval",
            ProcessStep::ReportFinalized => "Report Finalized",
        }
    }

    pub fn next(self) -> Option<ProcessStep> {
        ProcessStep::ALL.get(self.index() + 1).copied()
    }

    /// Display status a request at this step carries
    pub fn derived_status(self) -> RequestStatus {
        match self {
            ProcessStep::RequestReceived => RequestStatus::Pending,
            ProcessStep::ItemRegistered => RequestStatus::Registered,
            ProcessStep::TestingAssigned => RequestStatus::Testing,
            ProcessStep::TestingCompleted | ProcessStep::ResultsCompiled => {
                RequestStatus::Completed
            }
            ProcessStep::CustomerReview => RequestStatus::Reviewed,
            ProcessStep::ManagerApproval => RequestStatus::Approved,
            ProcessStep::ReportFinalized => RequestStatus::Finalized,
        }
    }
}

impl Default for ProcessStep {
    fn default() -> Self {
        ProcessStep::RequestReceived
    }
}

impl fmt::Display for ProcessStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        ProcessStep::ALL
            .iter()
            .copied()
            .find(|step| step.as_str() == normalized)
            .ok_or_else(|| format!("Invalid process step: {}", s))
    }
}

/// How a step renders relative to a request's current step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Completed,
    Current,
    Pending,
}

/// One rendered stage of the process flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepView {
    pub step: ProcessStep,
    pub label: &'static str,
    pub state: StepState,
    /// State of the connector to the following step; `None` on the last step
    pub connector_completed: Option<bool>,
}

pub fn classify_step(step: ProcessStep, current: ProcessStep) -> StepState {
    use std::cmp::Ordering;

    match step.index().cmp(&current.index()) {
        Ordering::Less => StepState::Completed,
        Ordering::Equal => StepState::Current,
        Ordering::Greater => StepState::Pending,
    }
}

/// Render every step of the lifecycle against `current`
pub fn render_flow(current: ProcessStep) -> Vec<StepView> {
    let current_index = current.index();
    let last = ProcessStep::ALL.len() - 1;

    ProcessStep::ALL
        .iter()
        .enumerate()
        .map(|(index, &step)| StepView {
            step,
            label: step.label(),
            state: classify_step(step, current),
            connector_completed: (index < last).then_some(index < current_index),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_index_matches_table_order() {
        for (i, step) in ProcessStep::ALL.iter().enumerate() {
            assert_eq!(step.index(), i);
        }
    }

    #[test]
    fn test_next() {
        assert_eq!(
            ProcessStep::RequestReceived.next(),
            Some(ProcessStep::ItemRegistered)
        );
        assert_eq!(ProcessStep::ReportFinalized.next(), None);
    }

    #[test]
    fn test_parse_step() {
        assert_eq!(
            "customer_review".parse::<ProcessStep>().unwrap(),
            ProcessStep::CustomerReview
        );
        assert_eq!(
            "Testing-Assigned".parse::<ProcessStep>().unwrap(),
            ProcessStep::TestingAssigned
        );
        assert!("shipped".parse::<ProcessStep>().is_err());
    }

    #[rstest]
    #[case(ProcessStep::RequestReceived)]
    #[case(ProcessStep::ItemRegistered)]
    #[case(ProcessStep::TestingAssigned)]
    #[case(ProcessStep::TestingCompleted)]
    #[case(ProcessStep::ResultsCompiled)]
    #[case(ProcessStep::CustomerReview)]
    #[case(ProcessStep::ManagerApproval)]
    #[case(ProcessStep::ReportFinalized)]
    fn test_exactly_one_current_step(#[case] current: ProcessStep) {
        let flow = render_flow(current);
        assert_eq!(flow.len(), 8);

        let current_count = flow
            .iter()
            .filter(|view| view.state == StepState::Current)
            .count();
        assert_eq!(current_count, 1);

        for view in &flow {
            let expected = if view.step.index() < current.index() {
                StepState::Completed
            } else if view.step == current {
                StepState::Current
            } else {
                StepState::Pending
            };
            assert_eq!(view.state, expected, "step {}", view.step);
        }
    }

    #[test]
    fn test_connectors() {
        let flow = render_flow(ProcessStep::TestingCompleted);

        // Connectors after steps 0..=2 are completed, the rest are not
        let connectors: Vec<Option<bool>> = flow.iter().map(|v| v.connector_completed).collect();
        assert_eq!(
            connectors,
            vec![
                Some(true),
                Some(true),
                Some(true),
                Some(false),
                Some(false),
                Some(false),
                Some(false),
                None,
            ]
        );
    }

    #[test]
    fn test_final_step_renders_all_completed_before() {
        let flow = render_flow(ProcessStep::ReportFinalized);
        assert!(flow[..7].iter().all(|v| v.state == StepState::Completed));
        assert_eq!(flow[7].state, StepState::Current);
    }

    #[test]
    fn test_derived_status_matches_seed_pairs() {
        assert_eq!(
            ProcessStep::ItemRegistered.derived_status(),
            RequestStatus::Registered
        );
        assert_eq!(
            ProcessStep::TestingAssigned.derived_status(),
            RequestStatus::Testing
        );
        assert_eq!(
            ProcessStep::TestingCompleted.derived_status(),
            RequestStatus::Completed
        );
        assert_eq!(
            ProcessStep::CustomerReview.derived_status(),
            RequestStatus::Reviewed
        );
    }
}
