//! Tests for per-race and per-file point assignment

use super::{final_race, result_line};
use crate::app::services::scoring::assigner::score_file;

#[test]
fn test_basic_final_scores_descending_scale() {
    let lines = final_race(&[
        result_line("1", "Horouta"),
        result_line("2", "Mareikura"),
        result_line("3", "Ruamata"),
        result_line("9", "Parihaka"),
    ]);

    let result = score_file(&lines);
    assert!(result.stats.eligible);
    assert_eq!(result.stats.races, 1);
    assert_eq!(result.scores.get("Horouta"), Some(8.0));
    assert_eq!(result.scores.get("Mareikura"), Some(7.0));
    assert_eq!(result.scores.get("Ruamata"), Some(6.0));
    assert_eq!(result.scores.get("Parihaka"), Some(1.0));
}

#[test]
fn test_heat_sheet_contributes_empty_mapping() {
    let lines = vec![
        "4612,Race 12 W6 J19 W500 Heat 2,,,,,,,".to_string(),
        result_line("1", "Horouta"),
    ];

    let result = score_file(&lines);
    assert!(!result.stats.eligible);
    assert!(result.scores.is_empty());
    assert_eq!(result.stats.total_rows, 0);
}

#[test]
fn test_tied_placements_receive_identical_points() {
    let lines = final_race(&[
        result_line("1", "Horouta"),
        result_line("3", "Mareikura"),
        result_line("3", "Ruamata"),
        result_line("5", "Parihaka"),
    ]);

    let result = score_file(&lines);
    assert_eq!(result.scores.get("Mareikura"), Some(6.0));
    assert_eq!(result.scores.get("Ruamata"), Some(6.0));
    assert_eq!(result.scores.get("Parihaka"), Some(4.0));
}

#[test]
fn test_combined_crew_splits_points_evenly() {
    let lines = final_race(&[result_line("1", "Horouta/Mareikura")]);

    let result = score_file(&lines);
    assert_eq!(result.scores.get("Horouta"), Some(4.0));
    assert_eq!(result.scores.get("Mareikura"), Some(4.0));
}

#[test]
fn test_combined_crew_total_equals_undivided_value() {
    let lines = final_race(&[result_line("2", "Ruamata & Hei Matau & Parihaka")]);

    let result = score_file(&lines);
    let total: f64 = ["Ruamata", "Hei Matau", "Parihaka"]
        .iter()
        .map(|club| result.scores.get(club).unwrap())
        .sum();
    assert_eq!(total, 7.0);
}

#[test]
fn test_both_crew_delimiters_are_supported() {
    let lines = final_race(&[
        result_line("1", "Horouta & Mareikura"),
        result_line("2", "Ruamata/Parihaka"),
    ]);

    let result = score_file(&lines);
    assert_eq!(result.scores.get("Horouta"), Some(4.0));
    assert_eq!(result.scores.get("Ruamata"), Some(3.5));
    assert_eq!(result.scores.get("Parihaka"), Some(3.5));
}

#[test]
fn test_disqualified_rows_attributed_at_zero() {
    let lines = final_race(&[
        result_line("1", "Horouta"),
        result_line("DQ", "Mareikura"),
        result_line("DNS", "Ruamata"),
        result_line("", "Parihaka"),
    ]);

    let result = score_file(&lines);
    assert_eq!(result.scores.get("Mareikura"), Some(0.0));
    assert_eq!(result.scores.get("Ruamata"), Some(0.0));
    assert_eq!(result.scores.get("Parihaka"), Some(0.0));
    assert_eq!(result.stats.rows_scored, 4);
}

#[test]
fn test_malformed_rows_skipped_without_affecting_block() {
    let lines = final_race(&[
        result_line("1", "Horouta"),
        "only,three,fields".to_string(),
        result_line("2", "Mareikura"),
    ]);

    let result = score_file(&lines);
    assert_eq!(result.stats.total_rows, 3);
    assert_eq!(result.stats.rows_scored, 2);
    assert_eq!(result.stats.rows_skipped, 1);
    assert_eq!(result.stats.errors.len(), 1);
    assert_eq!(result.scores.get("Horouta"), Some(8.0));
    assert_eq!(result.scores.get("Mareikura"), Some(7.0));
}

#[test]
fn test_unparseable_placement_skips_row() {
    let lines = final_race(&[
        result_line("abc", "Horouta"),
        result_line("1", "Mareikura"),
    ]);

    let result = score_file(&lines);
    assert_eq!(result.scores.get("Horouta"), None);
    assert_eq!(result.scores.get("Mareikura"), Some(8.0));
    assert_eq!(result.stats.rows_skipped, 1);
}

#[test]
fn test_multiple_races_accumulate_within_file() {
    let mut lines = final_race(&[result_line("1", "Horouta")]);
    lines.extend(final_race(&[result_line("2", "Horouta")]));

    let result = score_file(&lines);
    assert_eq!(result.stats.races, 2);
    assert_eq!(result.scores.get("Horouta"), Some(15.0));
}

#[test]
fn test_rows_out_of_order_still_score_by_placement() {
    let lines = final_race(&[
        result_line("3", "Ruamata"),
        result_line("1", "Horouta"),
        result_line("2", "Mareikura"),
    ]);

    let result = score_file(&lines);
    assert_eq!(result.scores.get("Horouta"), Some(8.0));
    assert_eq!(result.scores.get("Mareikura"), Some(7.0));
    assert_eq!(result.scores.get("Ruamata"), Some(6.0));
}
