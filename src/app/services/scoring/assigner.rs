//! Per-race point assignment
//!
//! Turns the raw lines of a race block into club point deltas, handling
//! ties, combined crews and disqualifications. No side effects beyond the
//! mappings passed in; aggregation across files happens in [`aggregator`].
//!
//! [`aggregator`]: super::aggregator

use tracing::debug;

use super::points;
use crate::app::models::{ClubScores, Placement, RaceBlock, ResultRow};
use crate::app::services::lif_parser::stats::ParseStats;
use crate::app::services::lif_parser::{record_parser, segmenter};
use crate::constants::FINAL_MARKER;

/// Scoring result for one race record file
#[derive(Debug, Clone)]
pub struct FileScore {
    /// Point deltas earned by each club in this file
    pub scores: ClubScores,

    /// Parsing statistics for reporting
    pub stats: ParseStats,
}

/// Score one tokenized race record file.
///
/// Files with no "Final" marker anywhere are heat sheets and contribute
/// an empty mapping; that is an expected outcome, not an error.
pub fn score_file(lines: &[String]) -> FileScore {
    let mut stats = ParseStats::new();
    let mut scores = ClubScores::new();

    if !segmenter::is_eligible(lines) {
        debug!("No '{}' marker found; file not scored", FINAL_MARKER);
        return FileScore { scores, stats };
    }
    stats.eligible = true;

    for block in segmenter::segment_races(lines) {
        stats.races += 1;
        score_block(&block, &mut scores, &mut stats);
    }

    debug!(
        "Scored {} of {} rows across {} races",
        stats.rows_scored, stats.total_rows, stats.races
    );

    FileScore { scores, stats }
}

/// Score one race block into the given mapping.
///
/// Malformed rows are skipped and counted; they never abort the block.
/// Rows that parse are attributed to their clubs: non-finishing rows at
/// zero points, finishers through the tie-aware point scale.
pub fn score_block(block: &RaceBlock, scores: &mut ClubScores, stats: &mut ParseStats) {
    let mut finishers: Vec<(u32, ResultRow)> = Vec::new();

    for line in &block.lines {
        stats.total_rows += 1;
        match record_parser::parse_result_row(line) {
            Ok(row) => match row.placement {
                Placement::Finished(position) => finishers.push((position, row)),
                // DQ, DNS and unranked rows stay visible at zero points
                _ => attribute(&row, 0.0, scores, stats),
            },
            Err(e) => {
                stats.rows_skipped += 1;
                stats.errors.push(format!("row {}: {}", stats.total_rows, e));
                debug!("Skipped row {}: {}", stats.total_rows, e);
            }
        }
    }

    // Tie-aware walk: after the stable sort, every row in a run of equal
    // placements receives the value computed for that placement.
    finishers.sort_by_key(|(position, _)| *position);

    let mut index = 0;
    while index < finishers.len() {
        let position = finishers[index].0;
        let row_points = points::points_for_position(position);

        let mut group_end = index;
        while group_end < finishers.len() && finishers[group_end].0 == position {
            attribute(&finishers[group_end].1, row_points, scores, stats);
            group_end += 1;
        }
        index = group_end;
    }
}

/// Attribute one row's points to its club(s), splitting evenly across a
/// combined crew so the total awarded equals the undivided value.
fn attribute(row: &ResultRow, row_points: f64, scores: &mut ClubScores, stats: &mut ParseStats) {
    let clubs = row.clubs();
    if clubs.is_empty() {
        stats.rows_skipped += 1;
        stats
            .errors
            .push(format!("club field '{}' names no club", row.club_field));
        return;
    }

    let share = row_points / clubs.len() as f64;
    for club in &clubs {
        scores.add(club, share);
    }
    stats.rows_scored += 1;
}
