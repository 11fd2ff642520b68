// ABOUTME: Core types, traits, and utilities for labtrack
// ABOUTME: Foundational package providing shared functionality across all labtrack packages

pub mod clock;
pub mod constants;
pub mod utils;
pub mod validation;

// Re-export clock types
pub use clock::{Clock, FixedClock, SystemClock};

// Re-export constants
pub use constants::{labtrack_dir, STORAGE_KEY};

// Re-export utilities
pub use utils::{format_date, truncate};

// Re-export validation
pub use validation::{require_non_empty, require_positive, ValidationError, ValidationErrors};
