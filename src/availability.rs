//! Busy/available date derivation.
//!
//! Given a snapshot of shows and an [`AvailsQuery`], computes the set
//! of busy dates and its complement over an inclusive range, with
//! optional weekday filtering. Pure functions over plain records: no
//! I/O, no clock, no mutation. Callers hand the same snapshot to the
//! conflict resolver, which reuses [`show_blocks_stages`] so the two
//! subsystems can never disagree about stage occupancy.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

use crate::models::{AvailsQuery, Show, ShowStatus, StageAvails};

/// Whether a show occupies any of the queried stages.
///
/// An empty `stage_ids` list is a venue-wide query: every show blocks.
/// Otherwise the show blocks when its own `stage_id` is queried or any
/// of its `linked_stage_ids` intersects the query.
pub fn show_blocks_stages(show: &Show, stage_ids: &[String]) -> bool {
    if stage_ids.is_empty() {
        return true;
    }
    if let Some(id) = &show.stage_id {
        if stage_ids.iter().any(|q| q == id) {
            return true;
        }
    }
    show.linked_stage_ids
        .iter()
        .any(|id| stage_ids.iter().any(|q| q == id))
}

/// Whether a show makes its date busy under the query's filters.
///
/// Only unranked holds (`hold`, when `include_holds`) and confirm-like
/// shows (`confirmed`/`on_sale`/`completed`, when `include_confirms`)
/// count. Draft, open, challenged, cancelled, pending-approval, and the
/// ranked holds `hold_1`/`hold_2` do not block a date under the current
/// policy.
pub fn show_counts_as_busy(show: &Show, query: &AvailsQuery) -> bool {
    if !show_blocks_stages(show, &query.stage_ids) {
        return false;
    }
    if show.status == ShowStatus::Hold {
        return query.include_holds;
    }
    if show.status.is_confirm_like() {
        return query.include_confirms;
    }
    false
}

/// Collects the busy dates for a snapshot of shows.
///
/// Multiple shows on one date collapse to a single entry.
pub fn busy_dates(shows: &[Show], query: &AvailsQuery) -> BTreeSet<String> {
    shows
        .iter()
        .filter(|s| show_counts_as_busy(s, query))
        .map(|s| s.date.clone())
        .collect()
}

/// Enumerates the open dates in `[from, to]` inclusive.
///
/// Excludes `busy` dates and, when `only_days` is non-empty, keeps only
/// days whose weekday index (0 = Sunday .. 6 = Saturday) is listed.
/// Returns ascending ISO strings. An unparseable endpoint or an
/// inverted range yields an empty list.
pub fn available_dates(
    from: &str,
    to: &str,
    busy: &BTreeSet<String>,
    only_days: &[u32],
) -> Vec<String> {
    let (Ok(from), Ok(to)) = (
        NaiveDate::parse_from_str(from, "%Y-%m-%d"),
        NaiveDate::parse_from_str(to, "%Y-%m-%d"),
    ) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    let mut day = from;
    while day <= to {
        let keep =
            only_days.is_empty() || only_days.contains(&day.weekday().num_days_from_sunday());
        if keep {
            let iso = day.format("%Y-%m-%d").to_string();
            if !busy.contains(&iso) {
                out.push(iso);
            }
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    out
}

/// Computes busy dates and their complement in one call.
///
/// # Example
///
/// ```
/// use stagebook::availability::compute_avails;
/// use stagebook::models::{AvailsQuery, Show, ShowStatus};
///
/// let shows = vec![Show::new("s1", "2025-06-06")
///     .with_stage("main")
///     .with_status(ShowStatus::Confirmed)];
/// let query = AvailsQuery::new().with_stages(["main"]);
///
/// let avails = compute_avails(&shows, "2025-06-05", "2025-06-07", &query);
/// assert!(avails.busy.contains("2025-06-06"));
/// assert_eq!(avails.available, vec!["2025-06-05", "2025-06-07"]);
/// ```
pub fn compute_avails(shows: &[Show], from: &str, to: &str, query: &AvailsQuery) -> StageAvails {
    let busy = busy_dates(shows, query);
    let available = available_dates(from, to, &busy, &query.only_days);
    StageAvails { busy, available }
}

/// Rendering style for [`format_avails_for_clipboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailsFormat {
    /// `"Jun 5, Jun 7"` comma list.
    Short,
    /// `"Thursday, June 5, 2025"` per line.
    Long,
    /// One ISO date per line.
    Csv,
}

/// Text shown when there is nothing to copy.
pub const NO_AVAILABLE_DATES: &str = "No available dates";

/// Renders a list of ISO dates for the share/copy action.
///
/// Pure formatting; the core never touches a clipboard. A date that
/// fails to parse is emitted verbatim rather than dropped.
pub fn format_avails_for_clipboard(dates: &[String], style: AvailsFormat) -> String {
    if dates.is_empty() {
        return NO_AVAILABLE_DATES.to_string();
    }
    match style {
        AvailsFormat::Short => dates
            .iter()
            .map(|d| reformat(d, "%b %-d"))
            .collect::<Vec<_>>()
            .join(", "),
        AvailsFormat::Long => dates
            .iter()
            .map(|d| reformat(d, "%A, %B %-d, %Y"))
            .collect::<Vec<_>>()
            .join("\n"),
        AvailsFormat::Csv => dates.join("\n"),
    }
}

fn reformat(iso: &str, pattern: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(d) => d.format(pattern).to_string(),
        Err(_) => iso.to_string(),
    }
}
