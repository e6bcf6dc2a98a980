/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Utc};

/// Format a UTC timestamp as DD.MM.YYYY HH:MM
pub fn format_datetime(ts: &DateTime<Utc>) -> String {
    ts.format("%d.%m.%Y %H:%M").to_string()
}

/// Format a UTC timestamp as DD.MM.YYYY
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%d.%m.%Y").to_string()
}

/// Parse the value of an <input type="datetime-local"> into a UTC timestamp.
/// Returns None for empty or malformed input.
pub fn parse_datetime_local(value: &str) -> Option<DateTime<Utc>> {
    if value.trim().is_empty() {
        return None;
    }
    // The control yields "YYYY-MM-DDTHH:MM" (seconds optional).
    let candidate = if value.len() == 16 {
        format!("{}:00", value)
    } else {
        value.to_string()
    };
    chrono::NaiveDateTime::parse_from_str(&candidate, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

/// Format a UTC timestamp for an <input type="datetime-local"> value.
pub fn to_datetime_local(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%dT%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&ts), "15.03.2024 14:02");
        assert_eq!(format_date(&ts), "15.03.2024");
    }

    #[test]
    fn test_datetime_local_round_trip() {
        let ts = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 0).unwrap();
        let value = to_datetime_local(&ts);
        assert_eq!(value, "2024-12-31T23:59");
        assert_eq!(parse_datetime_local(&value), Some(ts));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_datetime_local(""), None);
        assert_eq!(parse_datetime_local("not a date"), None);
    }
}
