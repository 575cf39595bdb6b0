//! Timestamp formatting for task records.
//!
//! Task timestamps are kept as `chrono::NaiveDateTime` in memory and written
//! to the task file as local wall-clock text in the `dd-mm-yyyy HH:MM` form.
//! The same text is used in the table view, so what the user sees in the
//! terminal is exactly what is stored on disk.
//!
//! ## Format Specifications
//!
//! - Day and month are zero-padded to 2 digits
//! - Year is 4 digits
//! - Hours use the 24-hour clock, zero-padded
//! - Seconds are not stored; values are truncated to the minute
//!
//! ## Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use task_tracker::libs::formatter::format_timestamp;
//!
//! let at = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap().and_hms_opt(9, 5, 0).unwrap();
//! assert_eq!(format_timestamp(&at), "07-03-2024 09:05");
//! ```

use chrono::{NaiveDateTime, Timelike};

/// Format string for every timestamp written to the task file.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Renders a timestamp in the on-disk `dd-mm-yyyy HH:MM` form.
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a timestamp previously produced by [`format_timestamp`].
///
/// Only the canonical zero-padded text is accepted. `chrono` alone would
/// also take `1-1-2024 0:00`, which would then be rewritten padded on the
/// next save.
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, String> {
    let at = NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).map_err(|e| e.to_string())?;
    if format_timestamp(&at) != text {
        return Err(format!("expected dd-mm-yyyy HH:MM, got '{}'", text));
    }
    Ok(at)
}

/// Drops seconds and sub-second precision.
///
/// The stored format has minute resolution, so anything finer would be lost
/// on the next load. Truncating at capture time keeps the in-memory value
/// identical to what a later load returns.
pub fn truncate_to_minute(at: NaiveDateTime) -> NaiveDateTime {
    at.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(at)
}

/// Serde adapter for `NaiveDateTime` fields stored as `dd-mm-yyyy HH:MM`.
///
/// Used as `#[serde(with = "crate::libs::formatter::timestamp")]`.
pub mod timestamp {
    use super::{format_timestamp, parse_timestamp};
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(at: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_timestamp(at))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_timestamp(&text).map_err(|e| de::Error::custom(format!("invalid timestamp '{}': {}", text, e)))
    }
}
