//! Client-supplied calendar dates.

use chrono::{DateTime, NaiveDate, Utc};

/// Parse a date sent by the client.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (read as midnight UTC).
pub fn parse_client_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
