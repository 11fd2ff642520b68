use labtrack_core::{require_non_empty, require_positive, ValidationErrors};

use crate::types::{NewTestRequest, TestRequest};

/// Validates a submission before it gets an id
pub fn validate_new_request(data: &NewTestRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    require_non_empty(&mut errors, "customerId", &data.customer_id, "Customer ID");
    require_non_empty(&mut errors, "customerName", &data.customer_name, "Customer name");
    require_non_empty(&mut errors, "itemName", &data.item_name, "Item name");
    require_positive(&mut errors, "quantity", data.quantity, "Quantity");

    errors.into_result()
}

/// Validates a full record handed to `update`
pub fn validate_request(request: &TestRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    require_non_empty(&mut errors, "customerId", &request.customer_id, "Customer ID");
    require_non_empty(&mut errors, "customerName", &request.customer_name, "Customer name");
    require_non_empty(&mut errors, "itemName", &request.item_name, "Item name");
    require_positive(&mut errors, "quantity", request.quantity, "Quantity");

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Priority;

    fn input() -> NewTestRequest {
        NewTestRequest {
            customer_id: "c1".to_string(),
            customer_name: "Acme".to_string(),
            item_name: "Widget".to_string(),
            item_description: String::new(),
            quantity: 1,
            priority: Priority::Low,
        }
    }

    #[test]
    fn test_valid_submission() {
        assert!(validate_new_request(&input()).is_ok());
    }

    #[test]
    fn test_item_name_required() {
        let data = NewTestRequest {
            item_name: "   ".to_string(),
            ..input()
        };
        let errors = validate_new_request(&data).unwrap_err();
        assert_eq!(errors.fields(), vec!["itemName"]);
    }

    #[test]
    fn test_zero_quantity_and_missing_customer() {
        let data = NewTestRequest {
            customer_id: String::new(),
            quantity: 0,
            ..input()
        };
        let errors = validate_new_request(&data).unwrap_err();
        assert_eq!(errors.fields(), vec!["customerId", "quantity"]);
    }
}
