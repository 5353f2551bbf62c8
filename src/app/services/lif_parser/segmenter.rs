//! Race block segmentation on the "Final" marker
//!
//! A record file covers one event but may hold several races. Lines whose
//! content contains the literal substring "Final" (case-sensitive) are race
//! headers; everything up to the next header belongs to that race.

use crate::app::models::RaceBlock;
use crate::constants::FINAL_MARKER;

/// Whether a tokenized file qualifies for scoring at all.
///
/// Heat sheets carry no "Final" line anywhere; they contribute an empty
/// score mapping rather than an error.
pub fn is_eligible(lines: &[String]) -> bool {
    lines.iter().any(|line| line.contains(FINAL_MARKER))
}

/// Partition tokenized lines into per-race blocks.
///
/// Each marker line opens a block and serves as its header; it is not a
/// result row. Lines before the first marker belong to no race and are
/// dropped. The trailing block is emitted.
pub fn segment_races(lines: &[String]) -> Vec<RaceBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<RaceBlock> = None;

    for line in lines {
        if line.contains(FINAL_MARKER) {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            current = Some(RaceBlock {
                header: line.clone(),
                lines: Vec::new(),
            });
        } else if let Some(block) = current.as_mut() {
            block.lines.push(line.clone());
        }
    }

    if let Some(block) = current {
        blocks.push(block);
    }

    blocks
}
