// ABOUTME: Request id generation
// ABOUTME: REQ### parsing/formatting and the last-record and max-suffix counter strategies

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::TestRequest;

pub const REQUEST_ID_PREFIX: &str = "REQ";

/// Numeric counter encoded in a `REQ###` id
pub fn parse_request_number(id: &str) -> Option<u32> {
    let digits = id.strip_prefix(REQUEST_ID_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// `REQ` followed by the number zero-padded to at least three digits
pub fn format_request_id(number: u32) -> String {
    format!("{}{:03}", REQUEST_ID_PREFIX, number)
}

/// Next id derived from the *last* record in store order.
///
/// Known defect: when the last record does not carry the highest counter the
/// result can collide with an existing id. Returns `Err` with the offending id
/// when the last record's id is not `REQ<digits>` or its counter is exhausted.
pub fn next_request_id_last(requests: &[TestRequest]) -> Result<String, String> {
    let Some(request) = requests.last() else {
        return Ok(format_request_id(1));
    };
    parse_request_number(&request.id)
        .and_then(|last| last.checked_add(1))
        .map(format_request_id)
        .ok_or_else(|| request.id.clone())
}

/// Next id derived from the highest counter across all records.
/// Ids that do not parse are ignored; `Err` carries the id whose counter
/// cannot be incremented.
pub fn next_request_id_max(requests: &[TestRequest]) -> Result<String, String> {
    let Some((id, max)) = requests
        .iter()
        .filter_map(|request| parse_request_number(&request.id).map(|n| (&request.id, n)))
        .max_by_key(|(_, n)| *n)
    else {
        return Ok(format_request_id(1));
    };
    max.checked_add(1)
        .map(format_request_id)
        .ok_or_else(|| id.clone())
}

/// Which counter rule the repository uses for new ids
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Increment the last record's counter (compatible behavior)
    #[default]
    Last,
    /// Increment the highest counter present
    Max,
}

impl IdStrategy {
    pub fn next_id(self, requests: &[TestRequest]) -> Result<String, String> {
        match self {
            IdStrategy::Last => next_request_id_last(requests),
            IdStrategy::Max => next_request_id_max(requests),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::Last => write!(f, "last"),
            IdStrategy::Max => write!(f, "max"),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "last" => Ok(IdStrategy::Last),
            "max" => Ok(IdStrategy::Max),
            _ => Err(format!("Invalid id strategy: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_requests;

    fn with_ids(ids: &[&str]) -> Vec<TestRequest> {
        let template = seed_requests().remove(0);
        ids.iter()
            .map(|id| TestRequest {
                id: id.to_string(),
                ..template.clone()
            })
            .collect()
    }

    #[test]
    fn test_parse_and_format() {
        assert_eq!(parse_request_number("REQ001"), Some(1));
        assert_eq!(parse_request_number("REQ1234"), Some(1234));
        assert_eq!(parse_request_number("REQ"), None);
        assert_eq!(parse_request_number("REQ-7"), None);
        assert_eq!(parse_request_number("QT-2023-001"), None);

        assert_eq!(format_request_id(5), "REQ005");
        assert_eq!(format_request_id(42), "REQ042");
        assert_eq!(format_request_id(1000), "REQ1000");
    }

    #[test]
    fn test_empty_store_starts_at_one() {
        assert_eq!(next_request_id_last(&[]).unwrap(), "REQ001");
        assert_eq!(next_request_id_max(&[]).unwrap(), "REQ001");
    }

    #[test]
    fn test_last_strategy_uses_last_record() {
        let requests = with_ids(&["REQ001", "REQ002", "REQ003"]);
        assert_eq!(next_request_id_last(&requests).unwrap(), "REQ004");
    }

    #[test]
    fn test_last_strategy_collides_when_out_of_order() {
        let requests = with_ids(&["REQ001", "REQ003", "REQ002"]);
        let next = next_request_id_last(&requests).unwrap();

        // Known defect, reproduced on purpose
        assert_eq!(next, "REQ003");
        assert!(requests.iter().any(|r| r.id == next));
    }

    #[test]
    fn test_max_strategy_avoids_collision() {
        let requests = with_ids(&["REQ001", "REQ003", "REQ002"]);
        assert_eq!(next_request_id_max(&requests).unwrap(), "REQ004");
        assert_eq!(IdStrategy::Max.next_id(&requests).unwrap(), "REQ004");
    }

    #[test]
    fn test_malformed_last_id() {
        let requests = with_ids(&["REQ001", "custom-id"]);
        assert_eq!(
            next_request_id_last(&requests),
            Err("custom-id".to_string())
        );
        assert_eq!(next_request_id_max(&requests).unwrap(), "REQ002");
    }

    #[test]
    fn test_exhausted_counter_is_an_error() {
        let requests = with_ids(&["REQ001", "REQ4294967295"]);
        assert_eq!(
            next_request_id_last(&requests),
            Err("REQ4294967295".to_string())
        );
        assert_eq!(
            next_request_id_max(&requests),
            Err("REQ4294967295".to_string())
        );

        let below_limit = with_ids(&["REQ4294967294"]);
        assert_eq!(
            IdStrategy::Max.next_id(&below_limit).unwrap(),
            "REQ4294967295"
        );
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("last".parse::<IdStrategy>().unwrap(), IdStrategy::Last);
        assert_eq!("MAX".parse::<IdStrategy>().unwrap(), IdStrategy::Max);
        assert!("random".parse::<IdStrategy>().is_err());
        assert_eq!(IdStrategy::default(), IdStrategy::Last);
    }
}
