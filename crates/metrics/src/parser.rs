use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Parses a timestamp cell. Accepts RFC3339, space- or T-separated
/// date-times, and bare dates (midnight). Anything else is a missing value.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(parsed);
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(parsed);
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(parsed.and_time(NaiveTime::MIN));
    }
    None
}

/// A platform flag counts as set when the cell is a nonzero number or a
/// literal true. Blank, zero, and unparseable cells are unset.
pub fn parse_flag(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.is_empty() {
        return false;
    }
    if raw.eq_ignore_ascii_case("true") {
        return true;
    }
    match raw.parse::<f64>() {
        Ok(value) => value != 0.0,
        Err(_) => false,
    }
}

/// Change counts: missing or non-numeric cells count as zero. Fractional
/// values truncate toward zero.
pub fn parse_count(raw: &str) -> i64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }
    if let Ok(value) = raw.parse::<i64>() {
        return value;
    }
    match raw.parse::<f64>() {
        Ok(value) => value.trunc() as i64,
        Err(_) => 0,
    }
}

/// Durations pass through as-is; a missing or unparseable cell stays
/// missing rather than becoming zero.
pub fn parse_duration(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok()
}
