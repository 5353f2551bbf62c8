//! Individual result row parsing
//!
//! Rows are comma-delimited with the placement token in the first field and
//! the club name in the sixth. Anything that does not match is malformed
//! and reported as an error for the caller to skip and count.

use crate::app::models::ResultRow;
use crate::constants::{CLUB_FIELD, MIN_RESULT_FIELDS, PLACEMENT_FIELD};
use crate::{Error, Result};

/// Parse one data row from a race block.
///
/// Fails on rows with fewer than six comma-separated fields, an empty club
/// field, or a placement token that is neither a position nor a recognized
/// disqualification code. A failed row never aborts its block.
pub fn parse_result_row(line: &str) -> Result<ResultRow> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < MIN_RESULT_FIELDS {
        return Err(Error::invalid_record(format!(
            "expected at least {} fields, found {}",
            MIN_RESULT_FIELDS,
            fields.len()
        )));
    }

    let placement = fields[PLACEMENT_FIELD].trim().parse()?;

    let club_field = fields[CLUB_FIELD].trim();
    if club_field.is_empty() {
        return Err(Error::invalid_record("club field is empty"));
    }

    Ok(ResultRow {
        placement,
        club_field: club_field.to_string(),
    })
}
