//! Show (event) model.
//!
//! A show is one scheduled or proposed event on a venue calendar. The
//! engine treats shows as plain records supplied by the persistence
//! layer: it reads placement, lifecycle, and financial fields to derive
//! availability, conflicts, and settlements, and never mutates them.
//!
//! # Field Conventions
//! Dates are ISO `YYYY-MM-DD` strings compared lexicographically, so
//! exact zero-padding matters. Times of day are `"HH:MM"` or
//! `"HH:MM:SS"` strings. Wire names are camelCase to match the
//! upstream records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Lifecycle status of a show.
///
/// Transitions happen in external workflows; the engine only reads the
/// status to classify busy-ness. `Confirmed`, `Cancelled`, and
/// `Completed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowStatus {
    /// Created by the promoter wizard, not yet submitted.
    #[default]
    Draft,
    /// Open date, no commitment.
    Open,
    /// Unranked hold on a date.
    Hold,
    /// First-ranked hold.
    #[serde(rename = "hold_1")]
    Hold1,
    /// Second-ranked hold.
    #[serde(rename = "hold_2")]
    Hold2,
    /// A competing promoter has challenged the hold.
    Challenged,
    /// Booked and confirmed.
    Confirmed,
    /// Awaiting venue approval.
    #[serde(rename = "pending-approval")]
    PendingApproval,
    /// Tickets are on sale.
    OnSale,
    /// Cancelled (terminal).
    Cancelled,
    /// Played and closed out (terminal).
    Completed,
}

impl ShowStatus {
    /// Whether this status is one of the confirm-like states that block
    /// a date when `include_confirms` is set: confirmed, on_sale, completed.
    pub fn is_confirm_like(self) -> bool {
        matches!(
            self,
            ShowStatus::Confirmed | ShowStatus::OnSale | ShowStatus::Completed
        )
    }

    /// Whether this status is terminal (no further transitions).
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ShowStatus::Confirmed | ShowStatus::Cancelled | ShowStatus::Completed
        )
    }
}

/// One expense line on a show settlement.
///
/// Upstream records are loosely typed: an entry may be a bare number, an
/// object with an optional `amount`, or anything else. Unrecognized
/// shapes deserialize into [`ExpenseEntry::Other`] and contribute 0,
/// matching the engine's coerce-don't-fail contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpenseEntry {
    /// A bare amount with no label.
    Amount(f64),
    /// An itemized expense line.
    Itemized {
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        amount: Option<f64>,
    },
    /// Any other shape. Contributes nothing to totals.
    Other(serde_json::Value),
}

impl ExpenseEntry {
    /// Creates a bare-number entry.
    pub fn bare(amount: f64) -> Self {
        ExpenseEntry::Amount(amount)
    }

    /// Creates an itemized entry.
    pub fn itemized(description: impl Into<String>, amount: f64) -> Self {
        ExpenseEntry::Itemized {
            description: Some(description.into()),
            amount: Some(amount),
        }
    }

    /// The amount this entry contributes to total expenses.
    ///
    /// Missing or non-numeric amounts contribute 0.
    pub fn amount(&self) -> f64 {
        match self {
            ExpenseEntry::Amount(v) => *v,
            ExpenseEntry::Itemized { amount, .. } => amount.unwrap_or(0.0),
            ExpenseEntry::Other(_) => 0.0,
        }
    }

    /// The human-readable label, when present.
    pub fn description(&self) -> Option<&str> {
        match self {
            ExpenseEntry::Itemized { description, .. } => description.as_deref(),
            _ => None,
        }
    }
}

/// A scheduled or proposed event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Show {
    /// Unique show identifier.
    pub id: String,
    /// Stage this show occupies. `None` means venue-level, no specific stage.
    pub stage_id: Option<String>,
    /// Festival mode: the show occupies every stage in `linked_stage_ids`
    /// and `stage_id` is ignored for conflict purposes.
    pub is_multi_stage: bool,
    /// Stages blocked when `is_multi_stage` is set.
    pub linked_stage_ids: BTreeSet<String>,
    /// Calendar day, ISO `YYYY-MM-DD`. No timezone conversion anywhere.
    pub date: String,
    /// Load-in time of day.
    pub load_in: Option<String>,
    /// Soundcheck time of day.
    pub soundcheck: Option<String>,
    /// Doors time of day.
    pub doors: Option<String>,
    /// Curfew time of day.
    pub curfew: Option<String>,
    /// Load-out time of day.
    pub load_out: Option<String>,
    /// Lifecycle status. The engine reads, never writes.
    pub status: ShowStatus,
    /// Hold priority on this date/stage. Lower sorts first; `None` sorts last.
    pub hold_rank: Option<i64>,
    /// Whether releasing this hold should shift lower-ranked holds up.
    pub hold_auto_promote: bool,
    /// Guaranteed artist fee.
    pub guarantee: Option<f64>,
    /// Artist share of the door, 0..=100.
    pub door_split_pct: Option<f64>,
    /// Gross ticket revenue.
    pub ticket_revenue: Option<f64>,
    /// Itemized settlement expenses.
    pub expenses: Vec<ExpenseEntry>,
    /// Free-form settlement notes.
    pub settlement_notes: Option<String>,
    /// Timestamp the settlement was finalized, if it was.
    pub settlement_finalized_at: Option<String>,
}

impl Default for Show {
    fn default() -> Self {
        Self {
            id: String::new(),
            stage_id: None,
            is_multi_stage: false,
            linked_stage_ids: BTreeSet::new(),
            date: String::new(),
            load_in: None,
            soundcheck: None,
            doors: None,
            curfew: None,
            load_out: None,
            status: ShowStatus::Draft,
            hold_rank: None,
            hold_auto_promote: false,
            guarantee: None,
            door_split_pct: None,
            ticket_revenue: None,
            expenses: Vec::new(),
            settlement_notes: None,
            settlement_finalized_at: None,
        }
    }
}

impl Show {
    /// Creates a draft show on the given date.
    pub fn new(id: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            ..Self::default()
        }
    }

    /// Places the show on a single stage.
    pub fn with_stage(mut self, stage_id: impl Into<String>) -> Self {
        self.stage_id = Some(stage_id.into());
        self
    }

    /// Marks the show multi-stage, blocking every listed stage.
    pub fn with_linked_stages<I, S>(mut self, stage_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.is_multi_stage = true;
        self.linked_stage_ids = stage_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the lifecycle status.
    pub fn with_status(mut self, status: ShowStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the hold rank.
    pub fn with_hold_rank(mut self, rank: i64) -> Self {
        self.hold_rank = Some(rank);
        self
    }

    /// Sets the auto-promote flag.
    pub fn with_auto_promote(mut self, auto_promote: bool) -> Self {
        self.hold_auto_promote = auto_promote;
        self
    }

    /// Sets doors and curfew times.
    pub fn with_doors_curfew(
        mut self,
        doors: impl Into<String>,
        curfew: impl Into<String>,
    ) -> Self {
        self.doors = Some(doors.into());
        self.curfew = Some(curfew.into());
        self
    }

    /// Sets the guaranteed artist fee.
    pub fn with_guarantee(mut self, guarantee: f64) -> Self {
        self.guarantee = Some(guarantee);
        self
    }

    /// Sets the door split percentage.
    pub fn with_door_split_pct(mut self, pct: f64) -> Self {
        self.door_split_pct = Some(pct);
        self
    }

    /// Sets gross ticket revenue.
    pub fn with_ticket_revenue(mut self, revenue: f64) -> Self {
        self.ticket_revenue = Some(revenue);
        self
    }

    /// Adds a settlement expense.
    pub fn with_expense(mut self, expense: ExpenseEntry) -> Self {
        self.expenses.push(expense);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_builder() {
        let show = Show::new("s1", "2025-06-01")
            .with_stage("main")
            .with_status(ShowStatus::Hold)
            .with_hold_rank(2)
            .with_doors_curfew("19:00", "23:00")
            .with_guarantee(5000.0);

        assert_eq!(show.id, "s1");
        assert_eq!(show.date, "2025-06-01");
        assert_eq!(show.stage_id.as_deref(), Some("main"));
        assert_eq!(show.status, ShowStatus::Hold);
        assert_eq!(show.hold_rank, Some(2));
        assert_eq!(show.doors.as_deref(), Some("19:00"));
        assert!(!show.is_multi_stage);
    }

    #[test]
    fn test_multi_stage_builder() {
        let show = Show::new("fest", "2025-08-09").with_linked_stages(["A", "B"]);
        assert!(show.is_multi_stage);
        assert!(show.linked_stage_ids.contains("A"));
        assert!(show.linked_stage_ids.contains("B"));
        assert_eq!(show.stage_id, None);
    }

    #[test]
    fn test_status_wire_names() {
        let cases = [
            (ShowStatus::Draft, "\"draft\""),
            (ShowStatus::Hold, "\"hold\""),
            (ShowStatus::Hold1, "\"hold_1\""),
            (ShowStatus::Hold2, "\"hold_2\""),
            (ShowStatus::PendingApproval, "\"pending-approval\""),
            (ShowStatus::OnSale, "\"on_sale\""),
            (ShowStatus::Completed, "\"completed\""),
        ];
        for (status, wire) in cases {
            assert_eq!(serde_json::to_string(&status).unwrap(), wire);
            let back: ShowStatus = serde_json::from_str(wire).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn test_status_classification() {
        assert!(ShowStatus::Confirmed.is_confirm_like());
        assert!(ShowStatus::OnSale.is_confirm_like());
        assert!(ShowStatus::Completed.is_confirm_like());
        assert!(!ShowStatus::Hold.is_confirm_like());
        assert!(!ShowStatus::Hold1.is_confirm_like());

        assert!(ShowStatus::Cancelled.is_terminal());
        assert!(!ShowStatus::Hold.is_terminal());
    }

    #[test]
    fn test_expense_amount_coercion() {
        let entries: Vec<ExpenseEntry> = serde_json::from_str(
            r#"[250, {"description": "Backline", "amount": 400.5}, {"description": "TBD"}, "oops", null]"#,
        )
        .unwrap();

        let amounts: Vec<f64> = entries.iter().map(ExpenseEntry::amount).collect();
        assert_eq!(amounts, vec![250.0, 400.5, 0.0, 0.0, 0.0]);
        assert_eq!(entries[1].description(), Some("Backline"));
        assert_eq!(entries[0].description(), None);
    }

    #[test]
    fn test_show_deserializes_partial_record() {
        let show: Show = serde_json::from_str(
            r#"{"id": "s1", "date": "2025-06-01", "status": "on_sale", "stageId": "main"}"#,
        )
        .unwrap();
        assert_eq!(show.status, ShowStatus::OnSale);
        assert_eq!(show.stage_id.as_deref(), Some("main"));
        assert_eq!(show.hold_rank, None);
        assert!(show.expenses.is_empty());
    }
}
