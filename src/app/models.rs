//! Data models for race records and club standings
//!
//! This module contains the core data structures for representing parsed
//! race record rows, per-race blocks, and accumulated club point totals.

use crate::constants::{CREW_DELIMITERS, DNS_TOKEN, DQ_TOKEN};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

// =============================================================================
// Placement
// =============================================================================

/// Parsed placement token from a result row
///
/// The timing system writes either a 1-based finishing position, a
/// disqualification code, or nothing at all. Non-finishing placements are
/// kept so the row can still be attributed to its club with zero points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Numeric finishing position (1-based)
    Finished(u32),
    /// Disqualified
    Dq,
    /// Did not start
    Dns,
    /// Placement column left empty
    Unranked,
}

impl Placement {
    /// Whether this placement earns scale points
    pub fn is_scoring(&self) -> bool {
        matches!(self, Placement::Finished(_))
    }
}

impl FromStr for Placement {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Ok(Placement::Unranked);
        }
        if token.eq_ignore_ascii_case(DQ_TOKEN) {
            return Ok(Placement::Dq);
        }
        if token.eq_ignore_ascii_case(DNS_TOKEN) {
            return Ok(Placement::Dns);
        }
        match token.parse::<u32>() {
            Ok(position) if position >= 1 => Ok(Placement::Finished(position)),
            _ => Err(Error::invalid_record(format!(
                "placement '{}' is not a position or disqualification code",
                token
            ))),
        }
    }
}

// =============================================================================
// Result Rows and Race Blocks
// =============================================================================

/// One comma-delimited result row from a race block, immutable once parsed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Parsed placement token (field 0)
    pub placement: Placement,

    /// Raw club field (field 5), possibly a combined crew ("Mareikura & Horouta")
    pub club_field: String,
}

impl ResultRow {
    /// Club names on this row, splitting combined crews on either delimiter
    ///
    /// Empty segments produced by stray delimiters are dropped.
    pub fn clubs(&self) -> Vec<&str> {
        self.club_field
            .split(CREW_DELIMITERS)
            .map(str::trim)
            .filter(|club| !club.is_empty())
            .collect()
    }
}

/// One race's slice of a record file, bounded by "Final" marker lines
///
/// Exists only transiently while a single file is scored.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceBlock {
    /// The marker line that opened this block (a header, not a result row)
    pub header: String,

    /// Raw data lines between this header and the next marker
    pub lines: Vec<String>,
}

// =============================================================================
// Club Scores
// =============================================================================

/// Accumulated club → point totals, remembering first-insertion order
///
/// Iteration yields clubs in the order they first earned an entry, which
/// keeps the descending stable sort in standings deterministic when clubs
/// are tied on points. Totals may be fractional when a combined crew
/// splits a placement's points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClubScores {
    totals: HashMap<String, f64>,
    order: Vec<String>,
}

impl ClubScores {
    /// Create an empty score mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points to a club, registering it on first mention
    pub fn add(&mut self, club: &str, points: f64) {
        if !self.totals.contains_key(club) {
            self.order.push(club.to_string());
        }
        *self.totals.entry(club.to_string()).or_insert(0.0) += points;
    }

    /// Fold another score mapping into this one
    pub fn merge(&mut self, other: &ClubScores) {
        for (club, points) in other.iter() {
            self.add(club, points);
        }
    }

    /// Total for a club, if it has appeared
    pub fn get(&self, club: &str) -> Option<f64> {
        self.totals.get(club).copied()
    }

    /// Iterate clubs and totals in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.order
            .iter()
            .map(|club| (club.as_str(), self.totals[club]))
    }

    /// Number of clubs with an entry
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no club has an entry
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// =============================================================================
// Standings
// =============================================================================

/// One ranked row of the final standings table
///
/// Derived and read-only; produced fresh each time standings are computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsEntry {
    /// 1-based position after the descending sort by points
    pub rank: usize,

    /// Club/association name, trimmed, case-sensitive
    pub club: String,

    /// Accumulated point total
    pub points: f64,
}
