// ABOUTME: Timestamp parsing and display formatting for task dates
// ABOUTME: Accepts RFC 3339, naive ISO timestamps and bare calendar dates

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

const DISPLAY_FORMAT: &str = "%b %d, %Y";
const INPUT_FORMAT: &str = "%Y-%m-%d";

pub const INVALID_DATE: &str = "Invalid date";
pub const NO_DUE_DATE: &str = "-";

/// Parses a wire timestamp. Naive values are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(raw, INPUT_FORMAT)
        .ok()
        .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::default())))
}

/// `MMM dd, yyyy`, or "Invalid date" when the value does not parse.
pub fn format_created_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Like [`format_created_date`] but renders "-" for a missing due date.
pub fn format_due_date(raw: Option<&str>) -> String {
    match raw {
        Some(value) if !value.trim().is_empty() => format_created_date(value),
        _ => NO_DUE_DATE.to_string(),
    }
}

/// `YYYY-MM-DD` for pre-filling a date input; empty when absent or unparseable.
pub fn to_input_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|dt| dt.format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// Parses a `YYYY-MM-DD` input into midnight UTC.
pub fn parse_input_date(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(raw.trim(), INPUT_FORMAT)
        .ok()
        .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::default())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_accepts_backend_timestamp_shapes() {
        assert_eq!(format_created_date("2024-03-05T10:00:00Z"), "Mar 05, 2024");
        assert_eq!(format_created_date("2024-03-05T10:00:00.123456"), "Mar 05, 2024");
        assert_eq!(format_created_date("2024-12-31 23:59:59"), "Dec 31, 2024");
        assert_eq!(format_created_date("2024-01-05"), "Jan 05, 2024");
    }

    #[test]
    fn test_malformed_dates_render_invalid() {
        assert_eq!(format_created_date("yesterday"), "Invalid date");
        assert_eq!(format_due_date(Some("2024-13-45")), "Invalid date");
    }

    #[test]
    fn test_missing_due_date_renders_dash() {
        assert_eq!(format_due_date(None), "-");
        assert_eq!(format_due_date(Some("")), "-");
    }

    #[test]
    fn test_input_date_round_trip_through_midnight_utc() {
        let parsed = parse_input_date("2024-01-05").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-01-05T00:00:00+00:00");
        assert_eq!(to_input_date(Some("2024-01-05T00:00:00.000Z")), "2024-01-05");
        assert_eq!(to_input_date(Some("garbage")), "");
        assert_eq!(to_input_date(None), "");
        assert!(parse_input_date("2024-02-30").is_none());
    }
}
