//! Calendar import normalization and conflict flagging.
//!
//! Parses a header-driven, comma-delimited table pasted or uploaded
//! from an external calendar, normalizes its dates to ISO, and flags
//! rows that collide with existing bookings. There is no quote or
//! escape handling; a cell containing a comma splits.
//!
//! # Leniency
//! Rows that cannot yield a date and a name are dropped, never raised
//! as errors. Each drop is reported as a [`SkippedRow`] alongside the
//! parsed rows, so callers can surface warnings instead of diffing row
//! counts against the input.

use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

/// Required column: the calendar date. Matched case-insensitively.
const DATE_COLUMNS: [&str; 1] = ["date"];
/// Required column: who is playing. Any one of these satisfies it.
const NAME_COLUMNS: [&str; 3] = ["name", "artist", "event"];
/// Optional column: where.
const STAGE_COLUMNS: [&str; 3] = ["stage", "venue", "room"];

/// One normalized import row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRow {
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    /// Artist or event name.
    pub name: String,
    /// Stage name as written in the source, when present.
    pub stage: Option<String>,
}

/// Why a row was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// No date column in the header, or an empty date cell.
    #[error("row has no date value")]
    MissingDate,
    /// A date cell that is neither ISO nor `MM/DD/YYYY`.
    #[error("unrecognized date format: {0:?}")]
    UnparseableDate(String),
    /// No name/artist/event column, or an empty name cell.
    #[error("row has no name value")]
    MissingName,
}

/// A dropped row with its source line number (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// Line number in the pasted text, counting the header.
    pub line: usize,
    /// Why the row was dropped.
    pub reason: SkipReason,
}

/// Parsed rows plus everything that was dropped.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// Rows that normalized cleanly, in source order.
    pub rows: Vec<ImportRow>,
    /// Dropped rows with reasons, in source order.
    pub skipped: Vec<SkippedRow>,
}

/// Parses a delimited import table.
///
/// The first non-blank line is the header. Column matching is
/// case-insensitive; blank lines are ignored.
pub fn parse(text: &str) -> ImportReport {
    let mut report = ImportReport::default();
    let mut lines = text.lines().enumerate();

    // First non-blank line is the header.
    let header = loop {
        match lines.next() {
            Some((_, line)) if line.trim().is_empty() => continue,
            Some((_, line)) => break Header::from_line(line),
            None => return report,
        }
    };

    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let cells: Vec<&str> = line.split(',').map(str::trim).collect();
        match header.resolve(&cells) {
            Ok(row) => report.rows.push(row),
            Err(reason) => report.skipped.push(SkippedRow {
                line: idx + 1,
                reason,
            }),
        }
    }

    report
}

struct Header {
    date_idx: Option<usize>,
    name_idx: Option<usize>,
    stage_idx: Option<usize>,
}

impl Header {
    fn from_line(line: &str) -> Self {
        let cells: Vec<String> = line
            .split(',')
            .map(|c| c.trim().to_lowercase())
            .collect();
        let find = |names: &[&str]| {
            cells
                .iter()
                .position(|c| names.iter().any(|n| n == c))
        };
        Self {
            date_idx: find(&DATE_COLUMNS),
            name_idx: find(&NAME_COLUMNS),
            stage_idx: find(&STAGE_COLUMNS),
        }
    }

    fn resolve(&self, cells: &[&str]) -> Result<ImportRow, SkipReason> {
        let raw_date = self
            .date_idx
            .and_then(|i| cells.get(i).copied())
            .unwrap_or("");
        if raw_date.is_empty() {
            return Err(SkipReason::MissingDate);
        }
        let date = normalize_date(raw_date)
            .ok_or_else(|| SkipReason::UnparseableDate(raw_date.to_string()))?;

        let name = self
            .name_idx
            .and_then(|i| cells.get(i).copied())
            .unwrap_or("");
        if name.is_empty() {
            return Err(SkipReason::MissingName);
        }

        let stage = self
            .stage_idx
            .and_then(|i| cells.get(i).copied())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(ImportRow {
            date,
            name: name.to_string(),
            stage,
        })
    }
}

/// Normalizes an external date to ISO `YYYY-MM-DD`.
///
/// ISO input passes through (exact zero-padding required, since every
/// downstream comparison is lexicographic). US `MM/DD/YYYY` (month and
/// day may be single-digit) is reordered and zero-padded. Anything
/// else is rejected.
pub fn normalize_date(raw: &str) -> Option<String> {
    let raw = raw.trim();

    if is_iso_date(raw) {
        return Some(raw.to_string());
    }

    let parts: Vec<&str> = raw.split('/').collect();
    if let [month, day, year] = parts.as_slice() {
        let month: u32 = month.parse().ok()?;
        let day: u32 = day.parse().ok()?;
        if year.len() == 4 && (1..=12).contains(&month) && (1..=31).contains(&day) {
            let year: u32 = year.parse().ok()?;
            return Some(format!("{year:04}-{month:02}-{day:02}"));
        }
    }

    None
}

fn is_iso_date(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| matches!(i, 4 | 7) || c.is_ascii_digit())
}

/// Flags rows whose date collides with an existing booking.
///
/// Returns the indices of conflicting rows. Without a stage map, any
/// date in `existing_dates` conflicts. With one, a collision counts
/// when the row's stage is in that date's stage set, when the row has
/// no stage, or when the date has no stage-set entry: stage-less
/// comparisons default to "conflict".
pub fn find_conflicts(
    rows: &[ImportRow],
    existing_dates: &BTreeSet<String>,
    existing_by_date_stage: Option<&HashMap<String, BTreeSet<String>>>,
) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| {
            if !existing_dates.contains(&row.date) {
                return false;
            }
            let Some(by_stage) = existing_by_date_stage else {
                return true;
            };
            match (by_stage.get(&row.date), &row.stage) {
                (Some(stages), Some(stage)) => stages.contains(stage),
                _ => true,
            }
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_us_dates() {
        let report = parse("date,artist,stage\n03/14/2025,Jane Doe,Main Room\n");
        assert!(report.skipped.is_empty());
        assert_eq!(
            report.rows,
            vec![ImportRow {
                date: "2025-03-14".into(),
                name: "Jane Doe".into(),
                stage: Some("Main Room".into()),
            }]
        );
    }

    #[test]
    fn test_header_matching_is_case_insensitive() {
        let report = parse("DATE,Event,Room\n2025-06-01,Block Party,Patio\n");
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].name, "Block Party");
        assert_eq!(report.rows[0].stage.as_deref(), Some("Patio"));
    }

    #[test]
    fn test_iso_dates_pass_through() {
        assert_eq!(normalize_date("2025-06-01"), Some("2025-06-01".into()));
        assert_eq!(normalize_date("7/4/2025"), Some("2025-07-04".into()));
        assert_eq!(normalize_date("2025-6-1"), None); // not zero-padded
        assert_eq!(normalize_date("June 1, 2025"), None);
        assert_eq!(normalize_date("14/03/2025"), None); // month out of range
    }

    #[test]
    fn test_bad_rows_drop_with_reasons() {
        let text = "date,name\n\
                    2025-06-01,Good Row\n\
                    sometime,No Date\n\
                    2025-06-02,\n\
                    ,Missing Date Cell\n";
        let report = parse(text);

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].name, "Good Row");
        assert_eq!(
            report.skipped,
            vec![
                SkippedRow {
                    line: 3,
                    reason: SkipReason::UnparseableDate("sometime".into()),
                },
                SkippedRow {
                    line: 4,
                    reason: SkipReason::MissingName,
                },
                SkippedRow {
                    line: 5,
                    reason: SkipReason::MissingDate,
                },
            ]
        );
    }

    #[test]
    fn test_missing_columns_drop_every_row() {
        let report = parse("when,who\n2025-06-01,Jane\n");
        assert!(report.rows.is_empty());
        assert_eq!(report.skipped[0].reason, SkipReason::MissingDate);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let report = parse("\n\ndate,name\n\n2025-06-01,Jane\n\n");
        assert_eq!(report.rows.len(), 1);
        assert!(report.skipped.is_empty());
    }

    fn rows() -> Vec<ImportRow> {
        vec![
            ImportRow {
                date: "2025-06-01".into(),
                name: "A".into(),
                stage: None,
            },
            ImportRow {
                date: "2025-06-01".into(),
                name: "B".into(),
                stage: Some("Main Room".into()),
            },
            ImportRow {
                date: "2025-06-02".into(),
                name: "C".into(),
                stage: Some("Patio".into()),
            },
        ]
    }

    #[test]
    fn test_conflicts_without_stage_map() {
        let existing = BTreeSet::from(["2025-06-01".to_string()]);
        assert_eq!(find_conflicts(&rows(), &existing, None), vec![0, 1]);
    }

    #[test]
    fn test_stageless_row_always_conflicts() {
        let existing = BTreeSet::from(["2025-06-01".to_string()]);
        let by_stage = HashMap::from([(
            "2025-06-01".to_string(),
            BTreeSet::from(["Loft".to_string()]),
        )]);
        // Row 0 has no stage: conflict regardless of the map contents.
        // Row 1 names Main Room, which is not booked that day: clear.
        assert_eq!(
            find_conflicts(&rows(), &existing, Some(&by_stage)),
            vec![0]
        );
    }

    #[test]
    fn test_stage_match_conflicts() {
        let existing = BTreeSet::from(["2025-06-01".to_string(), "2025-06-02".to_string()]);
        let by_stage = HashMap::from([
            (
                "2025-06-01".to_string(),
                BTreeSet::from(["Main Room".to_string()]),
            ),
            // 2025-06-02 has no stage-set entry: defaults to conflict.
        ]);
        assert_eq!(
            find_conflicts(&rows(), &existing, Some(&by_stage)),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_no_conflict_when_date_unbooked() {
        let existing = BTreeSet::new();
        assert!(find_conflicts(&rows(), &existing, None).is_empty());
    }
}
