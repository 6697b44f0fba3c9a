//! Minute-of-day arithmetic and weekday keys.
//!
//! Times of day arrive as strings: `"HH:MM"` from forms, `"HH:MM:SS"`
//! from persistence. Internally everything is minutes since midnight.
//! Output is always `"HH:MM"`.
//!
//! # Leniency
//! Parsing never fails. A missing or malformed component counts as 0,
//! because these values originate in loosely validated external records
//! and the engine is a best-effort derivation layer. `"7"` parses as
//! 07:00, `"junk"` as 00:00.

use chrono::{Datelike, NaiveDate};

/// Minutes in a calendar day.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Lowercase three-letter weekday keys, indexed 0 = Sunday .. 6 = Saturday.
pub const WEEKDAY_KEYS: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

/// Parses `"HH:MM"` or `"HH:MM:SS"` into minutes since midnight.
///
/// Seconds are ignored. Malformed components degrade to 0 instead of
/// failing; no range clamping is performed.
pub fn time_to_minutes(t: &str) -> i64 {
    let mut parts = t.split(':');
    let hours = parts
        .next()
        .and_then(|p| p.trim().parse::<i64>().ok())
        .unwrap_or(0);
    let minutes = parts
        .next()
        .and_then(|p| p.trim().parse::<i64>().ok())
        .unwrap_or(0);
    hours * 60 + minutes
}

/// Formats minutes since midnight as `"HH:MM"`, wrapping modulo 24h.
///
/// Negative inputs wrap backwards: -30 formats as `"23:30"`.
pub fn minutes_to_time(minutes: i64) -> String {
    let m = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// Adds a minute delta to a time-of-day string, wrapping modulo 24h.
pub fn add_minutes_to_time(t: &str, delta: i64) -> String {
    minutes_to_time(time_to_minutes(t) + delta)
}

/// `end - start` in minutes.
///
/// Does NOT wrap past midnight: a show running 22:00 to 01:00 yields
/// -1260 here. Callers that need overnight duration add a day
/// themselves; the operating-hours containment logic wraps correctly on
/// its own.
pub fn duration_minutes(start: &str, end: &str) -> i64 {
    time_to_minutes(end) - time_to_minutes(start)
}

/// Widens `"HH:MM"` to the persisted `"HH:MM:SS"` form by appending
/// `":00"`. Strings that already carry seconds pass through unchanged.
pub fn with_seconds(t: &str) -> String {
    if t.matches(':').count() >= 2 {
        t.to_string()
    } else {
        format!("{t}:00")
    }
}

/// Maps an ISO `YYYY-MM-DD` date to its weekday key (`sun`..`sat`).
///
/// Works on the calendar date alone; no timezone is consulted, so a
/// date can never shift across a day boundary. Returns `None` for a
/// string that is not a valid ISO date.
pub fn weekday_key(date: &str) -> Option<&'static str> {
    weekday_index(date).map(|i| WEEKDAY_KEYS[i as usize])
}

/// Maps an ISO `YYYY-MM-DD` date to a weekday index, 0 = Sunday .. 6 = Saturday.
pub fn weekday_index(date: &str) -> Option<u32> {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    Some(d.weekday().num_days_from_sunday())
}
