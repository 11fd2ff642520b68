// ABOUTME: Shared utility functions for labtrack
// ABOUTME: Date formatting and string truncation

use chrono::{DateTime, Utc};

/// Format a timestamp as a `YYYY-MM-DD` date string
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

/// Truncate a string to `max_len` characters, appending an ellipsis when cut
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let ts = Utc.with_ymd_and_hms(2023, 6, 15, 23, 59, 59).unwrap();
        assert_eq!(format_date(&ts), "2023-06-15");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Battery Charger - IEC62368", 10), "Battery...");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
    }
}
