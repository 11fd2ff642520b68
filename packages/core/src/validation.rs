// ABOUTME: Field validation primitives
// ABOUTME: Collects per-field errors instead of failing on the first one

use serde::Serialize;
use std::fmt;

/// A single field validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All validation failures for one input
#[derive(Debug, Clone, PartialEq, Eq, Default, thiserror::Error)]
#[error("{}", join_errors(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_str()).collect()
    }

    /// `Ok(())` when nothing was collected
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Record an error if `value` is blank
pub fn require_non_empty(errors: &mut ValidationErrors, field: &str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(field, format!("{} is required", label)));
    }
}

/// Record an error if `value` is zero
pub fn require_positive(errors: &mut ValidationErrors, field: &str, value: u32, label: &str) {
    if value == 0 {
        errors.push(ValidationError::new(
            field,
            format!("{} must be greater than zero", label),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_all_errors() {
        let mut errors = ValidationErrors::default();
        require_non_empty(&mut errors, "itemName", "  ", "Item name");
        require_positive(&mut errors, "quantity", 0, "Quantity");
        require_non_empty(&mut errors, "customerId", "c1", "Customer ID");

        assert_eq!(errors.fields(), vec!["itemName", "quantity"]);
        assert_eq!(
            errors.to_string(),
            "itemName: Item name is required; quantity: Quantity must be greater than zero"
        );
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_empty_is_ok() {
        assert!(ValidationErrors::default().into_result().is_ok());
    }
}
