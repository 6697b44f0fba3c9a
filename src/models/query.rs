//! Availability query value objects.
//!
//! [`AvailsQuery`] is the filter a caller hands to the availability
//! engine; [`StageAvails`] is the computed answer for one date range.
//! Neither is persisted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Filter for computing busy and available dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvailsQuery {
    /// Stages in scope. Empty means venue-wide: any stage blocks.
    pub stage_ids: Vec<String>,
    /// Whether unranked holds count as busy.
    pub include_holds: bool,
    /// Whether confirmed / on-sale / completed shows count as busy.
    pub include_confirms: bool,
    /// Weekday filter for available dates, 0 = Sunday .. 6 = Saturday.
    /// Empty means every weekday.
    pub only_days: Vec<u32>,
}

impl Default for AvailsQuery {
    fn default() -> Self {
        Self {
            stage_ids: Vec::new(),
            include_holds: true,
            include_confirms: true,
            only_days: Vec::new(),
        }
    }
}

impl AvailsQuery {
    /// Creates a venue-wide query counting holds and confirms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scopes the query to specific stages.
    pub fn with_stages<I, S>(mut self, stage_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stage_ids = stage_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Sets whether holds count as busy.
    pub fn include_holds(mut self, include: bool) -> Self {
        self.include_holds = include;
        self
    }

    /// Sets whether confirm-like shows count as busy.
    pub fn include_confirms(mut self, include: bool) -> Self {
        self.include_confirms = include;
        self
    }

    /// Restricts available dates to the given weekdays (0 = Sunday).
    pub fn with_only_days<I: IntoIterator<Item = u32>>(mut self, days: I) -> Self {
        self.only_days = days.into_iter().collect();
        self
    }
}

/// Busy dates and their complement over one inclusive range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageAvails {
    /// Dates blocked by at least one qualifying show.
    pub busy: BTreeSet<String>,
    /// Open dates in ascending order, after the weekday filter.
    pub available: Vec<String>,
}
