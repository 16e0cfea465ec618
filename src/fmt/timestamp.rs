//! RFC 3339 timestamps with nanosecond precision, always in UTC.
//!
//! The fractional part follows the "nano" convention: up to nine digits, trailing
//! zeros removed, and no fraction at all on a whole second. chrono's
//! `SecondsFormat::AutoSi` pads to 3/6/9 digits instead, so the fraction is built here.

use super::color::{TIMESTAMP_COLOR, colorize};
use chrono::{DateTime, Timelike, Utc};
use std::fmt::Write;

/// Renders `ts` as e.g. `2023-01-02T15:04:05.123456789Z`.
#[must_use]
pub fn rfc3339_nano(ts: &DateTime<Utc>) -> String {
    let mut out = ts.format("%Y-%m-%dT%H:%M:%S").to_string();

    // Leap seconds are encoded by chrono as nanos >= 1e9.
    let nanos = ts.nanosecond() % 1_000_000_000;
    if nanos != 0 {
        let mut fraction = format!("{nanos:09}");
        while fraction.ends_with('0') {
            fraction.pop();
        }
        let _ = write!(out, ".{fraction}");
    }

    out.push('Z');
    out
}

/// The timestamp as it appears at the start of every line.
#[must_use]
pub fn colorized(ts: &DateTime<Utc>) -> String {
    colorize(&rfc3339_nano(ts), TIMESTAMP_COLOR)
}
