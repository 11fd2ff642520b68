// ABOUTME: Test request type definitions
// ABOUTME: The request record, its priority and status enums, and portal roles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::process::ProcessStep;

/// Priority levels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Invalid priority: {}", s)),
        }
    }
}

/// Display status of a request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Registered,
    Testing,
    Completed,
    Reviewed,
    Approved,
    Finalized,
}

impl Default for RequestStatus {
    fn default() -> Self {
        RequestStatus::Pending
    }
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Registered => "registered",
            RequestStatus::Testing => "testing",
            RequestStatus::Completed => "completed",
            RequestStatus::Reviewed => "reviewed",
            RequestStatus::Approved => "approved",
            RequestStatus::Finalized => "finalized",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(RequestStatus::Pending),
            "registered" => Ok(RequestStatus::Registered),
            "testing" => Ok(RequestStatus::Testing),
            "completed" => Ok(RequestStatus::Completed),
            "reviewed" => Ok(RequestStatus::Reviewed),
            "approved" => Ok(RequestStatus::Approved),
            "finalized" => Ok(RequestStatus::Finalized),
            _ => Err(format!("Invalid status: {}", s)),
        }
    }
}

/// A customer's request to have an item tested
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRequest {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub item_name: String,
    pub item_description: String,
    pub quantity: u32,
    pub priority: Priority,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub current_step: ProcessStep,
}

/// Input for submitting a new request. Id, status, step and timestamps are
/// assigned by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestRequest {
    pub customer_id: String,
    pub customer_name: String,
    pub item_name: String,
    pub item_description: String,
    pub quantity: u32,
    #[serde(default)]
    pub priority: Priority,
}

/// Portal roles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Sales,
    Reception,
    Tester,
    Manager,
    Customer,
}

impl Role {
    /// Placeholder user id for each role
    pub fn user_id(&self) -> &'static str {
        match self {
            Role::Sales => "sales-1",
            Role::Reception => "reception-1",
            Role::Tester => "tester-1",
            Role::Manager => "manager-1",
            Role::Customer => "customer-1",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Sales => write!(f, "sales"),
            Role::Reception => write!(f, "reception"),
            Role::Tester => write!(f, "tester"),
            Role::Manager => write!(f, "manager"),
            Role::Customer => write!(f, "customer"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sales" => Ok(Role::Sales),
            "reception" => Ok(Role::Reception),
            "tester" => Ok(Role::Tester),
            "manager" => Ok(Role::Manager),
            "customer" => Ok(Role::Customer),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}
