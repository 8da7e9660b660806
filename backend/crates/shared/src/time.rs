//! Timestamps
//!
//! Stored timestamps are ISO-8601 UTC strings with a fixed width
//! (`2025-06-01T12:00:00.000000Z`), so sorting them as strings sorts them
//! chronologically.

use chrono::{DateTime, SecondsFormat, Utc};

/// Current time as a stored timestamp
pub fn now_iso() -> String {
    to_iso(Utc::now())
}

pub fn to_iso(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}
