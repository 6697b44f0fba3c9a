//! Booking domain models.
//!
//! Plain records exchanged with the persistence and UI layers. The
//! engine derives facts from these (busy dates, hold order, settlement
//! figures) and never mutates them.

mod query;
mod show;
mod stage;

pub use query::{AvailsQuery, StageAvails};
pub use show::{ExpenseEntry, Show, ShowStatus};
pub use stage::{HoursWindow, Stage, WeeklyHours};
