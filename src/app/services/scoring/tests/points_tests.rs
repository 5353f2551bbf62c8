//! Tests for the fixed placement point scale

use crate::app::models::Placement;
use crate::app::services::scoring::points::{points_for, points_for_position};

#[test]
fn test_scale_is_nine_minus_position() {
    for position in 1..=8 {
        assert_eq!(points_for_position(position), (9 - position) as f64);
    }
    assert_eq!(points_for_position(1), 8.0);
    assert_eq!(points_for_position(8), 1.0);
}

#[test]
fn test_participation_floor_beyond_scale() {
    assert_eq!(points_for_position(9), 1.0);
    assert_eq!(points_for_position(12), 1.0);
    assert_eq!(points_for_position(100), 1.0);
}

#[test]
fn test_non_finishing_placements_earn_nothing() {
    assert_eq!(points_for(Placement::Dq), 0.0);
    assert_eq!(points_for(Placement::Dns), 0.0);
    assert_eq!(points_for(Placement::Unranked), 0.0);
    assert_eq!(points_for(Placement::Finished(3)), 6.0);
}
