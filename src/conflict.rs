//! Hold ranking and stage-occupancy conflict resolution.
//!
//! Ranks competing holds on a date into the canonical "who is next in
//! line" queue and classifies which stages a show occupies. Promotion
//! after a hold is released is exposed as a pure transform over ranks;
//! the external booking workflow decides when to apply it (it fires
//! only when the departing show carried `hold_auto_promote`) and owns
//! persisting the result.
//!
//! Stage-occupancy classification reuses
//! [`availability::show_blocks_stages`](crate::availability::show_blocks_stages)
//! so availability and conflict logic can never drift apart.

use crate::availability::show_blocks_stages;
use crate::models::{Show, ShowStatus};

/// Sort rank assigned to a hold with no explicit rank: last in line.
pub const UNRANKED_HOLD_RANK: i64 = 999;

/// The effective sort rank of a show. Missing ranks sort last.
pub fn hold_rank_or_default(show: &Show) -> i64 {
    show.hold_rank.unwrap_or(UNRANKED_HOLD_RANK)
}

/// Sorts shows ascending by hold rank, missing rank last.
///
/// The sort is stable: shows with equal ranks keep their input order.
pub fn sort_by_hold_rank<'a>(shows: impl IntoIterator<Item = &'a Show>) -> Vec<&'a Show> {
    let mut out: Vec<&Show> = shows.into_iter().collect();
    out.sort_by_key(|s| hold_rank_or_default(s));
    out
}

/// The ranked hold queue for one date and stage scope.
///
/// Filters to `status == hold` shows on `date` that block the queried
/// stages (empty scope = venue-wide), then sorts by rank.
pub fn holds_for_date<'a>(shows: &'a [Show], date: &str, stage_ids: &[String]) -> Vec<&'a Show> {
    sort_by_hold_rank(
        shows
            .iter()
            .filter(|s| s.status == ShowStatus::Hold)
            .filter(|s| s.date == date)
            .filter(|s| show_blocks_stages(s, stage_ids)),
    )
}

/// Renumbers a rank list after the hold at `removed_rank` leaves.
///
/// Every entry equal to `removed_rank` is dropped and every rank above
/// it shifts down by one, so the next-ranked hold inherits the vacated
/// position. When no hold sits at `removed_rank` the list comes back
/// unchanged.
///
/// # Example
///
/// ```
/// use stagebook::conflict::promote_ranks;
///
/// assert_eq!(promote_ranks(&[1, 2, 3], 1), vec![1, 2]);
/// assert_eq!(promote_ranks(&[1, 3, 4], 3), vec![1, 3]);
/// assert_eq!(promote_ranks(&[1, 2], 5), vec![1, 2]); // no-op
/// ```
pub fn promote_ranks(ranks: &[i64], removed_rank: i64) -> Vec<i64> {
    if !ranks.contains(&removed_rank) {
        return ranks.to_vec();
    }
    ranks
        .iter()
        .filter(|&&r| r != removed_rank)
        .map(|&r| if r > removed_rank { r - 1 } else { r })
        .collect()
}

/// [`promote_ranks`] lifted to show records.
///
/// Returns a new list: shows holding `removed_rank` are dropped, ranked
/// shows above it are cloned with their rank decremented, everything
/// else (including unranked holds) is cloned untouched. Input order is
/// preserved; nothing is mutated in place.
pub fn promote_holds(holds: &[Show], removed_rank: i64) -> Vec<Show> {
    if !holds.iter().any(|s| s.hold_rank == Some(removed_rank)) {
        return holds.to_vec();
    }
    holds
        .iter()
        .filter(|s| s.hold_rank != Some(removed_rank))
        .map(|s| {
            let mut next = s.clone();
            if let Some(rank) = next.hold_rank {
                if rank > removed_rank {
                    next.hold_rank = Some(rank - 1);
                }
            }
            next
        })
        .collect()
}

/// The stage ids a show occupies for conflict purposes.
///
/// Multi-stage shows occupy every linked stage and `stage_id` is
/// ignored; single-stage shows occupy at most their own stage.
pub fn occupied_stage_ids(show: &Show) -> Vec<String> {
    if show.is_multi_stage {
        show.linked_stage_ids.iter().cloned().collect()
    } else {
        show.stage_id.iter().cloned().collect()
    }
}

/// Whether a multi-stage show conflicts with a stage query.
///
/// True iff the show is multi-stage and its linked set intersects
/// `stage_ids`, regardless of its `stage_id`.
pub fn multi_stage_conflict(show: &Show, stage_ids: &[String]) -> bool {
    show.is_multi_stage
        && show
            .linked_stage_ids
            .iter()
            .any(|id| stage_ids.iter().any(|q| q == id))
}
