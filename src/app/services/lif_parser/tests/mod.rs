//! Test utilities for race record parser testing
//!
//! Provides helpers that build realistic `.lif` content in the shape the
//! timing system exports: an event header line followed by result rows.

// Test modules
mod record_parser_tests;

/// Build a result row in timing-system field order:
/// place, start position, lane, crew id, crew name, club, time
pub fn result_line(place: &str, club: &str) -> String {
    format!("{},2,4,209,Senior Crew,{},01:56.23,,", place, club)
}

/// A single-race final with three well-formed result rows
pub fn final_race_content() -> String {
    [
        "4629,Race 46 W6 J19 W500 Final,,,,,,,".to_string(),
        result_line("1", "Horouta"),
        result_line("2", "Mareikura"),
        result_line("3", "Ruamata"),
    ]
    .join("\n")
}

/// A heat sheet: same row shape, but no "Final" marker anywhere
pub fn heat_content() -> String {
    [
        "4612,Race 12 W6 J19 W500 Heat 2,,,,,,,".to_string(),
        result_line("1", "Horouta"),
        result_line("2", "Mareikura"),
    ]
    .join("\n")
}
