//! Cross-file aggregation and ranked standings
//!
//! Folding is plain addition, so processing order never changes the final
//! totals; only the first-seen order of clubs (used to break ranking ties
//! deterministically) depends on it.

use tracing::debug;

use crate::app::models::{ClubScores, StandingsEntry};

/// Fold per-file score mappings into cumulative club totals.
///
/// Unseen clubs start at zero; addition is associative and commutative,
/// so any permutation of the input yields identical totals.
pub fn aggregate<I>(per_file: I) -> ClubScores
where
    I: IntoIterator<Item = ClubScores>,
{
    let mut totals = ClubScores::new();
    for file_scores in per_file {
        totals.merge(&file_scores);
    }
    debug!("Aggregated totals for {} clubs", totals.len());
    totals
}

/// Rank clubs by total points, descending.
///
/// The sort is stable: clubs tied on points keep their first-seen order
/// rather than being re-broken alphabetically. Ranks are positional,
/// 1-based, with no shared ranks for ties.
pub fn standings(totals: &ClubScores) -> Vec<StandingsEntry> {
    let mut entries: Vec<(String, f64)> = totals
        .iter()
        .map(|(club, points)| (club.to_string(), points))
        .collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));

    entries
        .into_iter()
        .enumerate()
        .map(|(index, (club, points))| StandingsEntry {
            rank: index + 1,
            club,
            points,
        })
        .collect()
}
