//! Time utilities: parsing instants, formatting durations and clock times.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Parse an instant given on the command line.
///
/// Accepts RFC 3339 (`2025-10-01T09:00:00Z`, any offset) or a naive
/// `YYYY-MM-DD HH:MM[:SS]`, which is read as UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Resolve `--at`: parsed instant, or the current time when absent.
pub fn parse_optional_timestamp(input: Option<&String>) -> AppResult<DateTime<Utc>> {
    match input {
        Some(s) => parse_timestamp(s).ok_or_else(|| AppError::InvalidTime(s.to_string())),
        None => Ok(Utc::now()),
    }
}

/// Storage/export form of an instant: RFC 3339 with milliseconds, `Z` suffix.
pub fn to_iso(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Clock time shown in session listings.
pub fn clock_str(ts: &DateTime<Utc>) -> String {
    ts.format("%H:%M:%S").to_string()
}

/// Render seconds as `HH:MM:SS`. Hours are not wrapped at 24.
pub fn format_duration(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let s = seconds.unsigned_abs();
    format!("{}{:02}:{:02}:{:02}", sign, s / 3600, (s % 3600) / 60, s % 60)
}
