//! Venue scheduling and settlement engine.
//!
//! Decides whether a stage is free on a given date, ranks and promotes
//! competing holds, checks show times against weekly operating hours
//! (including windows that span midnight), computes artist settlements,
//! and normalizes external calendar imports.
//!
//! # Modules
//!
//! - **`models`**: Domain records — `Show`, `Stage`, `AvailsQuery`,
//!   `WeeklyHours`, `ExpenseEntry`
//! - **`time`**: Minute-of-day arithmetic and weekday keys
//! - **`hours`**: Operating-hours containment predicates
//! - **`availability`**: Busy/available date derivation and clipboard
//!   formatting
//! - **`conflict`**: Hold ranking, promotion, multi-stage blocking
//! - **`settlement`**: Guarantee-versus-door payout math and P&L
//! - **`import`**: Delimited calendar import normalization and conflict
//!   flagging
//! - **`validation`**: Structural integrity checks on booking snapshots
//!
//! # Architecture
//!
//! The engine is a pure derivation layer: callers hand it plain
//! `Show`/`Stage` records from persistence and get back derived facts
//! (busy dates, hold order, settlement figures). Every function is a
//! deterministic, side-effect-free transform with no I/O, clock access,
//! or shared mutable state, so the same functions may be called from
//! any number of request handlers without coordination. Concurrency
//! control belongs at the persistence boundary.
//!
//! Malformed external data degrades instead of failing: unparsable time
//! components count as zero, unrecognized expense shapes contribute
//! nothing, and import rows that cannot normalize are dropped and
//! reported, never raised.

pub mod availability;
pub mod conflict;
pub mod hours;
pub mod import;
pub mod models;
pub mod settlement;
pub mod time;
pub mod validation;
