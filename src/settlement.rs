//! Show settlement math.
//!
//! Computes what the venue owes the artist from the deal terms on a
//! show: a flat guarantee, a percentage of the door, or both. The house
//! policy is "guarantee versus door": the artist receives the GREATER
//! of the guarantee and the door split, never the sum. That rule is
//! fixed business policy, not a configurable option.
//!
//! All functions are pure; callers decide what to persist.

use serde::{Deserialize, Serialize};

use crate::models::{ExpenseEntry, Show};

/// Deal terms and receipts for one show settlement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettlementInputs {
    /// Guaranteed artist fee.
    pub guarantee: Option<f64>,
    /// Artist share of the door, 0..=100.
    pub door_split_pct: Option<f64>,
    /// Gross ticket revenue.
    pub ticket_revenue: Option<f64>,
    /// Itemized expenses.
    pub expenses: Vec<ExpenseEntry>,
}

impl SettlementInputs {
    /// Creates empty inputs (settles to zero everywhere).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the guarantee.
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

    /// Adds an expense line.
    pub fn with_expense(mut self, expense: ExpenseEntry) -> Self {
        self.expenses.push(expense);
        self
    }
}

impl From<&Show> for SettlementInputs {
    fn from(show: &Show) -> Self {
        Self {
            guarantee: show.guarantee,
            door_split_pct: show.door_split_pct,
            ticket_revenue: show.ticket_revenue,
            expenses: show.expenses.clone(),
        }
    }
}

/// Computed settlement figures for one show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementSummary {
    /// The guarantee, defaulted to 0.
    pub guarantee_amount: f64,
    /// The artist's door share, 0 when there is no split or no revenue.
    pub door_split_amount: f64,
    /// Sum of all expense lines (lenient coercion, never an error).
    pub total_expenses: f64,
    /// Greater of guarantee and door split.
    pub amount_owed_to_artist: f64,
    /// Display lines in presentation order.
    pub breakdown: Vec<String>,
}

/// Computes a settlement from deal terms.
///
/// # Example
///
/// ```
/// use stagebook::settlement::{compute_settlement, SettlementInputs};
///
/// let inputs = SettlementInputs::new()
///     .with_guarantee(2000.0)
///     .with_door_split_pct(80.0)
///     .with_ticket_revenue(10000.0);
/// let summary = compute_settlement(&inputs);
///
/// // 80% of the door beats the guarantee.
/// assert_eq!(summary.door_split_amount, 8000.0);
/// assert_eq!(summary.amount_owed_to_artist, 8000.0);
/// ```
pub fn compute_settlement(inputs: &SettlementInputs) -> SettlementSummary {
    let guarantee_amount = inputs.guarantee.unwrap_or(0.0);
    let pct = inputs.door_split_pct.unwrap_or(0.0);
    let revenue = inputs.ticket_revenue.unwrap_or(0.0);

    let door_split_amount = if pct != 0.0 && revenue > 0.0 {
        revenue * pct / 100.0
    } else {
        0.0
    };

    let total_expenses: f64 = inputs.expenses.iter().map(ExpenseEntry::amount).sum();

    // House policy: greater of the two, never the sum.
    let amount_owed_to_artist = guarantee_amount.max(door_split_amount);

    let mut breakdown = Vec::new();
    if guarantee_amount > 0.0 {
        breakdown.push(format!("Guarantee: {}", money(guarantee_amount)));
    }
    if door_split_amount > 0.0 {
        breakdown.push(format!(
            "Door split ({}% of {}): {}",
            pct_label(pct),
            money(revenue),
            money(door_split_amount)
        ));
    }
    if guarantee_amount > 0.0 && door_split_amount > 0.0 {
        if door_split_amount > guarantee_amount {
            breakdown.push(format!(
                "Door split beats guarantee; artist is owed {}",
                money(door_split_amount)
            ));
        } else {
            breakdown.push(format!(
                "Guarantee beats door split; artist is owed {}",
                money(guarantee_amount)
            ));
        }
    }
    if total_expenses > 0.0 {
        breakdown.push(format!("Expenses: {}", money(total_expenses)));
    }

    SettlementSummary {
        guarantee_amount,
        door_split_amount,
        total_expenses,
        amount_owed_to_artist,
        breakdown,
    }
}

/// Show-level profit and loss: revenue minus artist payout minus expenses.
pub fn compute_show_pnl(ticket_revenue: f64, amount_owed_to_artist: f64, total_expenses: f64) -> f64 {
    ticket_revenue - amount_owed_to_artist - total_expenses
}

fn money(v: f64) -> String {
    format!("${v:.2}")
}

fn pct_label(pct: f64) -> String {
    if pct.fract() == 0.0 {
        format!("{}", pct as i64)
    } else {
        format!("{pct}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShowStatus;

    #[test]
    fn test_guarantee_wins() {
        let inputs = SettlementInputs::new()
            .with_guarantee(5000.0)
            .with_door_split_pct(50.0)
            .with_ticket_revenue(8000.0);
        let summary = compute_settlement(&inputs);

        assert_eq!(summary.door_split_amount, 4000.0);
        assert_eq!(summary.amount_owed_to_artist, 5000.0);
    }

    #[test]
    fn test_door_wins() {
        let inputs = SettlementInputs::new()
            .with_guarantee(2000.0)
            .with_door_split_pct(80.0)
            .with_ticket_revenue(10000.0);
        let summary = compute_settlement(&inputs);

        assert_eq!(summary.door_split_amount, 8000.0);
        assert_eq!(summary.amount_owed_to_artist, 8000.0);
    }

    #[test]
    fn test_no_revenue_means_no_door_share() {
        let inputs = SettlementInputs::new()
            .with_guarantee(1500.0)
            .with_door_split_pct(70.0);
        let summary = compute_settlement(&inputs);

        assert_eq!(summary.door_split_amount, 0.0);
        assert_eq!(summary.amount_owed_to_artist, 1500.0);
    }

    #[test]
    fn test_empty_inputs_settle_to_zero() {
        let summary = compute_settlement(&SettlementInputs::new());
        assert_eq!(summary.amount_owed_to_artist, 0.0);
        assert_eq!(summary.total_expenses, 0.0);
        assert!(summary.breakdown.is_empty());
    }

    #[test]
    fn test_expense_coercion() {
        let inputs: SettlementInputs = serde_json::from_str(
            r#"{"guarantee": 1000, "expenses": [250, {"amount": 100.5}, {"description": "TBD"}, "oops"]}"#,
        )
        .unwrap();
        let summary = compute_settlement(&inputs);
        assert_eq!(summary.total_expenses, 350.5);
    }

    #[test]
    fn test_breakdown_order_and_conditions() {
        let inputs = SettlementInputs::new()
            .with_guarantee(5000.0)
            .with_door_split_pct(50.0)
            .with_ticket_revenue(8000.0)
            .with_expense(crate::models::ExpenseEntry::itemized("Backline", 1500.0));
        let summary = compute_settlement(&inputs);

        assert_eq!(
            summary.breakdown,
            vec![
                "Guarantee: $5000.00",
                "Door split (50% of $8000.00): $4000.00",
                "Guarantee beats door split; artist is owed $5000.00",
                "Expenses: $1500.00",
            ]
        );
    }

    #[test]
    fn test_breakdown_skips_absent_lines() {
        let summary = compute_settlement(&SettlementInputs::new().with_guarantee(1200.0));
        assert_eq!(summary.breakdown, vec!["Guarantee: $1200.00"]);
    }

    #[test]
    fn test_pnl() {
        assert_eq!(compute_show_pnl(10000.0, 8000.0, 1500.0), 500.0);
        assert_eq!(compute_show_pnl(0.0, 2000.0, 300.0), -2300.0);
    }

    #[test]
    fn test_inputs_from_show() {
        let show = crate::models::Show::new("s1", "2025-06-06")
            .with_status(ShowStatus::Completed)
            .with_guarantee(2000.0)
            .with_door_split_pct(80.0)
            .with_ticket_revenue(10000.0);

        let summary = compute_settlement(&SettlementInputs::from(&show));
        assert_eq!(summary.amount_owed_to_artist, 8000.0);
        assert_eq!(
            compute_show_pnl(10000.0, summary.amount_owed_to_artist, summary.total_expenses),
            2000.0
        );
    }
}
