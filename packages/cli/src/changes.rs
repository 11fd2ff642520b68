// ABOUTME: Field edits collected from `requests update` flags
// ABOUTME: Setting a step also moves the status to the step's derived status unless one is given

use labtrack_requests::{Priority, ProcessStep, RequestStatus, TestRequest};

#[derive(Debug, Clone, Default)]
pub struct RequestChanges {
    pub status: Option<RequestStatus>,
    pub priority: Option<Priority>,
    pub quantity: Option<u32>,
    pub step: Option<ProcessStep>,
    pub item: Option<String>,
    pub description: Option<String>,
}

impl RequestChanges {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.priority.is_none()
            && self.quantity.is_none()
            && self.step.is_none()
            && self.item.is_none()
            && self.description.is_none()
    }

    /// Apply the edits in place. An explicit status wins over the one derived from the step.
    pub fn apply(self, request: &mut TestRequest) {
        if let Some(step) = self.step {
            request.current_step = step;
            request.status = step.derived_status();
        }
        if let Some(status) = self.status {
            request.status = status;
        }
        if let Some(priority) = self.priority {
            request.priority = priority;
        }
        if let Some(quantity) = self.quantity {
            request.quantity = quantity;
        }
        if let Some(item) = self.item {
            request.item_name = item;
        }
        if let Some(description) = self.description {
            request.item_description = description;
        }
    }
}
