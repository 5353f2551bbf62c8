//! Standings export and read-back
//!
//! Writes the ranked standings as a delimited file with a `Rank,Club
//! Name,Points` header row (the club column header is a presentation
//! choice and stays configurable). Reading an export back reproduces the
//! same entries, which the tests rely on.

use csv::{Reader, Writer};
use std::io;
use std::path::Path;
use tracing::info;

use crate::app::models::StandingsEntry;
use crate::constants::{POINTS_HEADER, RANK_HEADER};
use crate::{Error, Result};

/// Write standings to a CSV file.
///
/// An unwritable destination surfaces as an error; the in-memory
/// standings passed in are untouched either way.
pub fn write_standings_csv(
    entries: &[StandingsEntry],
    path: &Path,
    club_header: &str,
) -> Result<()> {
    let mut writer = Writer::from_path(path).map_err(|e| {
        Error::export(
            path.display().to_string(),
            "could not create standings file",
            Some(e),
        )
    })?;

    write_records(&mut writer, entries, club_header).map_err(|e| {
        Error::export(
            path.display().to_string(),
            "could not write standings rows",
            Some(e),
        )
    })?;

    info!(
        "Exported {} standings rows to {}",
        entries.len(),
        path.display()
    );
    Ok(())
}

/// Write standings as CSV to any writer (used for stdout output).
pub fn write_standings_to<W: io::Write>(
    entries: &[StandingsEntry],
    out: W,
    club_header: &str,
) -> Result<()> {
    let mut writer = Writer::from_writer(out);
    write_records(&mut writer, entries, club_header)
        .map_err(|e| Error::export("<stdout>", "could not write standings rows", Some(e)))
}

fn write_records<W: io::Write>(
    writer: &mut Writer<W>,
    entries: &[StandingsEntry],
    club_header: &str,
) -> csv::Result<()> {
    writer.write_record([RANK_HEADER, club_header, POINTS_HEADER])?;
    for entry in entries {
        writer.write_record([
            entry.rank.to_string(),
            entry.club.clone(),
            format_points(entry.points),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a previously exported standings file back into entries.
///
/// The header row is skipped; its club column naming is not checked.
pub fn read_standings_csv(path: &Path) -> Result<Vec<StandingsEntry>> {
    let mut reader = Reader::from_path(path).map_err(|e| {
        Error::export(
            path.display().to_string(),
            "could not open standings file",
            Some(e),
        )
    })?;

    let mut entries = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let row = index + 2; // 1-based, after the header row
        let record = record.map_err(|e| {
            Error::export(
                path.display().to_string(),
                format!("could not read row {}", row),
                Some(e),
            )
        })?;

        let rank = field(&record, 0)
            .parse::<usize>()
            .map_err(|_| bad_row(path, row, "rank"))?;
        let club = field(&record, 1).to_string();
        let points = field(&record, 2)
            .parse::<f64>()
            .map_err(|_| bad_row(path, row, "points"))?;

        entries.push(StandingsEntry { rank, club, points });
    }

    Ok(entries)
}

/// Format a point total without trailing noise: whole totals print as
/// integers, split totals keep their fractional part.
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{}", points as i64)
    } else {
        format!("{}", points)
    }
}

fn field<'a>(record: &'a csv::StringRecord, index: usize) -> &'a str {
    record.get(index).unwrap_or_default().trim()
}

fn bad_row(path: &Path, row: usize, column: &str) -> Error {
    Error::export(
        path.display().to_string(),
        format!("row {} has an invalid {} value", row, column),
        None,
    )
}
