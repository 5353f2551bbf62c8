//! Tests for individual result row parsing

use super::result_line;
use crate::app::models::Placement;
use crate::app::services::lif_parser::record_parser::parse_result_row;

#[test]
fn test_parse_well_formed_row() {
    let row = parse_result_row(&result_line("1", "Horouta")).unwrap();
    assert_eq!(row.placement, Placement::Finished(1));
    assert_eq!(row.club_field, "Horouta");
}

#[test]
fn test_parse_trims_club_field() {
    let row = parse_result_row("2,1,3,210,Crew, Mareikura ,01:58.10").unwrap();
    assert_eq!(row.club_field, "Mareikura");
}

#[test]
fn test_parse_disqualification_codes() {
    let dq = parse_result_row(&result_line("DQ", "Horouta")).unwrap();
    assert_eq!(dq.placement, Placement::Dq);

    let dns = parse_result_row(&result_line("dns", "Horouta")).unwrap();
    assert_eq!(dns.placement, Placement::Dns);

    let unranked = parse_result_row(&result_line("", "Horouta")).unwrap();
    assert_eq!(unranked.placement, Placement::Unranked);
}

#[test]
fn test_parse_rejects_short_rows() {
    assert!(parse_result_row("1,2,3").is_err());
    assert!(parse_result_row("").is_err());
    assert!(parse_result_row("1,2,4,209,Crew").is_err());
}

#[test]
fn test_parse_rejects_empty_club() {
    assert!(parse_result_row("1,2,4,209,Crew,,01:56.23").is_err());
    assert!(parse_result_row("1,2,4,209,Crew,   ,01:56.23").is_err());
}

#[test]
fn test_parse_rejects_unparseable_placement() {
    assert!(parse_result_row(&result_line("first", "Horouta")).is_err());
    assert!(parse_result_row(&result_line("1.5", "Horouta")).is_err());
}

#[test]
fn test_parse_keeps_combined_crew_field_raw() {
    let row = parse_result_row(&result_line("1", "Mareikura & Horouta")).unwrap();
    assert_eq!(row.club_field, "Mareikura & Horouta");
    assert_eq!(row.clubs(), vec!["Mareikura", "Horouta"]);
}
