//! Input validation for booking snapshots.
//!
//! Checks structural integrity of shows and stages before the engine
//! derives availability or conflicts. Detects:
//! - Duplicate IDs
//! - Stage references that point nowhere
//! - Multi-stage flags that disagree with the linked-stage set
//! - Out-of-range door splits
//! - Bad operating-hours weekday keys
//! - Duplicate hold ranks competing for the same date and stage
//!
//! Validation is advisory. The engine functions stay lenient and never
//! require a validated snapshot; callers run this to surface data
//! problems in the UI instead of silently deriving odd results.

use std::collections::{HashMap, HashSet};

use crate::conflict::occupied_stage_ids;
use crate::models::{Show, ShowStatus, Stage};
use crate::time::WEEKDAY_KEYS;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A show references a stage that doesn't exist.
    UnknownStageReference,
    /// A multi-stage show with an empty linked-stage set.
    EmptyLinkedStages,
    /// A single-stage show carrying linked stage ids.
    LinkedStagesOnSingleStage,
    /// Door split percentage outside 0..=100.
    InvalidDoorSplit,
    /// An operating-hours key that is not one of `sun`..`sat`.
    InvalidWeekdayKey,
    /// Two holds with the same rank on the same date and stage.
    DuplicateHoldRank,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a snapshot of shows and stages.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_booking_input(shows: &[Show], stages: &[Stage]) -> ValidationResult {
    let mut errors = Vec::new();

    // Collect stage IDs
    let mut stage_ids = HashSet::new();
    for stage in stages {
        if !stage_ids.insert(stage.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate stage ID: {}", stage.id),
            ));
        }

        for key in stage.default_operating_hours.0.keys() {
            if !WEEKDAY_KEYS.contains(&key.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidWeekdayKey,
                    format!("Stage '{}' has unknown weekday key '{}'", stage.id, key),
                ));
            }
        }
    }

    // Show-level checks
    let mut show_ids = HashSet::new();
    for show in shows {
        if !show_ids.insert(show.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate show ID: {}", show.id),
            ));
        }

        if let Some(stage_id) = &show.stage_id {
            if !stage_ids.contains(stage_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownStageReference,
                    format!("Show '{}' references unknown stage '{}'", show.id, stage_id),
                ));
            }
        }
        for linked in &show.linked_stage_ids {
            if !stage_ids.contains(linked.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownStageReference,
                    format!(
                        "Show '{}' links to unknown stage '{}'",
                        show.id, linked
                    ),
                ));
            }
        }

        if show.is_multi_stage && show.linked_stage_ids.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyLinkedStages,
                format!("Multi-stage show '{}' blocks no stages", show.id),
            ));
        }
        if !show.is_multi_stage && !show.linked_stage_ids.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::LinkedStagesOnSingleStage,
                format!(
                    "Show '{}' carries linked stages but is not multi-stage",
                    show.id
                ),
            ));
        }

        if let Some(pct) = show.door_split_pct {
            if !(0.0..=100.0).contains(&pct) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidDoorSplit,
                    format!("Show '{}' has door split {}%", show.id, pct),
                ));
            }
        }
    }

    // Hold ranks must be unique per date and stage
    let mut seen_ranks: HashMap<(String, Option<String>), HashSet<i64>> = HashMap::new();
    for show in shows {
        if show.status != ShowStatus::Hold {
            continue;
        }
        let Some(rank) = show.hold_rank else { continue };

        let occupied = occupied_stage_ids(show);
        let keys: Vec<(String, Option<String>)> = if occupied.is_empty() {
            vec![(show.date.clone(), None)]
        } else {
            occupied
                .into_iter()
                .map(|s| (show.date.clone(), Some(s)))
                .collect()
        };

        for key in keys {
            if !seen_ranks.entry(key.clone()).or_default().insert(rank) {
                let scope = key.1.as_deref().unwrap_or("venue");
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateHoldRank,
                    format!(
                        "Two holds share rank {} on {} ({})",
                        rank, key.0, scope
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
