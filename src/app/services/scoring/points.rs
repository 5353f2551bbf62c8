//! The fixed placement point scale

use crate::app::models::Placement;
use crate::constants::{MAX_SCORED_PLACEMENT, PARTICIPATION_POINTS};

/// Point value for a finishing position.
///
/// Positions 1 through 8 score 9 − p; any deeper finish earns the flat
/// participation point.
pub fn points_for_position(position: u32) -> f64 {
    if (1..=MAX_SCORED_PLACEMENT).contains(&position) {
        f64::from(MAX_SCORED_PLACEMENT + 1 - position)
    } else {
        PARTICIPATION_POINTS
    }
}

/// Point value for a parsed placement.
///
/// DQ, DNS and unranked rows earn nothing; their clubs are still
/// attributed so disqualified entries stay visible in the standings.
pub fn points_for(placement: Placement) -> f64 {
    match placement {
        Placement::Finished(position) => points_for_position(position),
        Placement::Dq | Placement::Dns | Placement::Unranked => 0.0,
    }
}
