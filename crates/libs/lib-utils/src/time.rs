//! # Time Utilities
//!
//! Utilities for time formatting using chrono. The ledger stores timestamps
//! as epoch seconds; display surfaces want a localized string.

use chrono::{Local, TimeZone, Utc};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format epoch seconds as a display string in the local timezone.
///
/// Out-of-range timestamps (beyond what chrono can represent) fall back to
/// the raw number rather than panicking.
pub fn format_epoch_local(secs: u64) -> String {
    match Local.timestamp_opt(secs as i64, 0).single() {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => secs.to_string(),
    }
}

/// Format epoch seconds as a display string in UTC.
///
/// Same rendering as [`format_epoch_local`] with a fixed timezone, used where
/// deterministic output is needed.
pub fn format_epoch_utc(secs: u64) -> String {
    match Utc.timestamp_opt(secs as i64, 0).single() {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => secs.to_string(),
    }
}
