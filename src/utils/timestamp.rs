// src/utils/timestamp.rs

//! 14-digit archival timestamp helpers.
//!
//! Captures are timestamped `YYYYMMDDhhmmss`. Partial timestamps from
//! callers are right-padded with digits from a sentinel date; backend
//! timestamps are reduced to exactly 14 digits on ingestion.

use chrono::Utc;

/// Earliest date any capture in the index can carry.
pub const EARLIEST_DATE: &str = "19960101000000";

/// Latest representable capture date.
pub const LATEST_DATE: &str = "29991231235959";

/// Length of a full archival timestamp.
pub const TIMESTAMP_LEN: usize = 14;

/// Right-pad a partial timestamp with digits from `sentinel` to reach
/// 14 digits; longer input is truncated. Idempotent on 14-digit input.
pub fn pad_timestamp(partial: &str, sentinel: &str) -> String {
    let mut padded: String = partial.chars().take(TIMESTAMP_LEN).collect();
    if padded.len() < TIMESTAMP_LEN {
        padded.push_str(&sentinel[padded.len()..TIMESTAMP_LEN]);
    }
    padded
}

/// Reduce a raw backend timestamp to exactly 14 digits.
///
/// Keeps digits only, then truncates/pads against the earliest-date
/// sentinel, so downstream ranking never sees a non-numeric timestamp.
pub fn normalize_timestamp(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    pad_timestamp(&digits, EARLIEST_DATE)
}

/// Current wall-clock time as a 14-digit timestamp.
pub fn timestamp_now() -> String {
    Utc::now().format("%Y%m%d%H%M%S").to_string()
}

/// Numeric value of a timestamp for distance arithmetic.
pub fn timestamp_value(timestamp: &str) -> u64 {
    timestamp.parse().unwrap_or(0)
}
