use chrono::DateTime;

/// Render an ISO-8601 timestamp as a calendar date. Text that does not parse
/// is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(dt) => dt.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}
