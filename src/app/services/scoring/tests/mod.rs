//! Test utilities for scoring tests

mod assigner_tests;
mod points_tests;

use crate::app::models::ClubScores;

/// Build a result row in timing-system field order
pub fn result_line(place: &str, club: &str) -> String {
    format!("{},2,4,209,Senior Crew,{},01:56.23,,", place, club)
}

/// Assemble a final race: marker header plus the given result rows
pub fn final_race(rows: &[String]) -> Vec<String> {
    let mut lines = vec!["4629,Race 46 W6 J19 W500 Final,,,,,,,".to_string()];
    lines.extend_from_slice(rows);
    lines
}

/// Build a score mapping from (club, points) pairs, in order
pub fn scores_of(pairs: &[(&str, f64)]) -> ClubScores {
    let mut scores = ClubScores::new();
    for (club, points) in pairs {
        scores.add(club, *points);
    }
    scores
}
