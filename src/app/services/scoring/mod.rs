//! Point assignment and standings aggregation
//!
//! Converts parsed race blocks into club point deltas and folds deltas
//! across files into a ranked standings table.
//!
//! ## Scoring rules
//!
//! The nationals scale is fixed: placements 1 through 8 score 9 − p
//! (8 down to 1) and any deeper finish earns a single participation
//! point. Tied placements all receive the tied position's value.
//! Combined crews ("Mareikura & Horouta") split their row's points
//! evenly, so the total awarded per row always equals the undivided
//! placement value. Disqualified (DQ), non-starting (DNS) and unranked
//! rows are attributed to their clubs with zero points.
//!
//! ## Architecture
//!
//! - [`points`] - The fixed placement point scale
//! - [`assigner`] - Per-block and per-file point assignment
//! - [`aggregator`] - Cross-file totals and ranked standings

pub mod aggregator;
pub mod assigner;
pub mod points;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use assigner::{FileScore, score_file};
pub use aggregator::{aggregate, standings};
