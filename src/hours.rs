//! Operating-hours validation.
//!
//! State-free predicates deciding whether show times fall inside a
//! stage's weekly operating pattern. Windows may span midnight (an
//! 18:00..02:00 Friday window covers Friday 23:30 and the small hours
//! that follow).
//!
//! # Containment Scope
//! `is_outside_operating_hours` checks the doors and curfew endpoints
//! independently. It does not verify that the whole doors-to-curfew
//! span stays inside the window, so a narrow window can pass both
//! endpoint checks while interior times fall outside. That matches the
//! shipped behavior and is kept until product says otherwise.

use crate::models::WeeklyHours;

/// Whether a time of day falls inside the window for a weekday.
///
/// Returns `false` when the day has no window (closed).
pub fn is_time_within_operating_hours(day_key: &str, t: &str, hours: &WeeklyHours) -> bool {
    match hours.window(day_key) {
        Some(window) => window.contains(t),
        None => false,
    }
}

/// Whether a show's doors/curfew pair conflicts with the stage hours.
///
/// Returns `true` (out of hours) unless the weekday has a window AND
/// doors AND curfew are each individually contained in it.
pub fn is_outside_operating_hours(
    day_key: &str,
    doors: &str,
    curfew: &str,
    hours: &WeeklyHours,
) -> bool {
    match hours.window(day_key) {
        Some(window) => !(window.contains(doors) && window.contains(curfew)),
        None => true,
    }
}
