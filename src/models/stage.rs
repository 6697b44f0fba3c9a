//! Stage (bookable room) model.
//!
//! A stage is one bookable room within a venue, with a weekly
//! operating-hours pattern. Capacity and technical fields ride along as
//! opaque attributes; the engine only consults identity and hours.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::time::time_to_minutes;

/// An operating-hours window for one weekday, as time-of-day strings.
///
/// A window may span midnight: `18:00`..`02:00` means open from evening
/// into the small hours of the next day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursWindow {
    /// Opening time.
    pub start: String,
    /// Closing time.
    pub end: String,
}

impl HoursWindow {
    /// Creates a window from start/end time-of-day strings.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Whether a time of day falls inside this window, inclusive at
    /// both ends.
    ///
    /// Same-day window (`start <= end`): `start <= t <= end`.
    /// Overnight window (`start > end`): `t >= start || t <= end`.
    pub fn contains(&self, t: &str) -> bool {
        let t = time_to_minutes(t);
        let start = time_to_minutes(&self.start);
        let end = time_to_minutes(&self.end);
        if start <= end {
            start <= t && t <= end
        } else {
            t >= start || t <= end
        }
    }
}

/// Weekly operating-hours pattern.
///
/// Keys are the lowercase three-letter weekday abbreviations
/// (`sun`..`sat`). A missing or null entry means closed that day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyHours(pub HashMap<String, Option<HoursWindow>>);

impl WeeklyHours {
    /// Creates an empty pattern (closed every day).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window for one weekday.
    pub fn with_day(
        mut self,
        day_key: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.0
            .insert(day_key.into(), Some(HoursWindow::new(start, end)));
        self
    }

    /// Marks one weekday explicitly closed.
    pub fn with_closed(mut self, day_key: impl Into<String>) -> Self {
        self.0.insert(day_key.into(), None);
        self
    }

    /// The window for a weekday, or `None` when closed.
    pub fn window(&self, day_key: &str) -> Option<&HoursWindow> {
        self.0.get(day_key).and_then(|w| w.as_ref())
    }

    /// Whether the stage is open at all on a weekday.
    pub fn is_open(&self, day_key: &str) -> bool {
        self.window(day_key).is_some()
    }
}

/// A bookable room within a venue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stage {
    /// Unique stage identifier.
    pub id: String,
    /// Owning venue.
    pub venue_id: String,
    /// Human-readable name.
    pub name: String,
    /// Legal capacity, when known.
    pub capacity: Option<u32>,
    /// Weekly operating-hours pattern.
    pub default_operating_hours: WeeklyHours,
    /// Technical and house fields the engine does not interpret.
    pub attributes: HashMap<String, String>,
}

impl Stage {
    /// Creates a stage within a venue.
    pub fn new(id: impl Into<String>, venue_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            venue_id: venue_id.into(),
            ..Self::default()
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Sets the weekly operating hours.
    pub fn with_operating_hours(mut self, hours: WeeklyHours) -> Self {
        self.default_operating_hours = hours;
        self
    }

    /// Adds an opaque attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_day_window() {
        let w = HoursWindow::new("10:00", "23:00");
        assert!(w.contains("10:00")); // inclusive start
        assert!(w.contains("17:30"));
        assert!(w.contains("23:00")); // inclusive end
        assert!(!w.contains("09:59"));
        assert!(!w.contains("23:01"));
    }

    #[test]
    fn test_overnight_window() {
        let w = HoursWindow::new("22:00", "02:00");
        assert!(w.contains("23:30"));
        assert!(w.contains("01:15"));
        assert!(w.contains("22:00"));
        assert!(w.contains("02:00"));
        assert!(!w.contains("10:00"));
        assert!(!w.contains("21:59"));
    }

    #[test]
    fn test_weekly_hours_closed_days() {
        let hours = WeeklyHours::new()
            .with_day("fri", "18:00", "02:00")
            .with_closed("mon");

        assert!(hours.is_open("fri"));
        assert!(!hours.is_open("mon")); // explicit null
        assert!(!hours.is_open("tue")); // absent entry
    }

    #[test]
    fn test_weekly_hours_null_entry_deserializes_closed() {
        let hours: WeeklyHours = serde_json::from_str(
            r#"{"fri": {"start": "18:00", "end": "02:00"}, "mon": null}"#,
        )
        .unwrap();
        assert!(hours.is_open("fri"));
        assert!(!hours.is_open("mon"));
    }

    #[test]
    fn test_stage_builder() {
        let stage = Stage::new("main", "v1")
            .with_name("Main Room")
            .with_capacity(450)
            .with_operating_hours(WeeklyHours::new().with_day("sat", "12:00", "23:59"))
            .with_attribute("pa", "L-Acoustics");

        assert_eq!(stage.id, "main");
        assert_eq!(stage.venue_id, "v1");
        assert_eq!(stage.capacity, Some(450));
        assert!(stage.default_operating_hours.is_open("sat"));
        assert_eq!(stage.attributes.get("pa").map(String::as_str), Some("L-Acoustics"));
    }
}
