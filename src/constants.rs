//! Constants for race record parsing and point assignment.
//!
//! Centralizes the `.lif` format conventions and the fixed nationals
//! point scale so the scoring rules live in one place.

// =============================================================================
// Race Record Format
// =============================================================================

/// Marker substring identifying a championship final (case-sensitive).
///
/// Any line containing this substring opens a new race block; a file with
/// no such line anywhere is a heat sheet and is not scored.
pub const FINAL_MARKER: &str = "Final";

/// File extension of race record files (matched case-insensitively)
pub const RACE_FILE_EXTENSION: &str = "lif";

/// Minimum comma-separated fields for a well-formed result row
pub const MIN_RESULT_FIELDS: usize = 6;

/// Field index of the placement token
pub const PLACEMENT_FIELD: usize = 0;

/// Field index of the club/association name
pub const CLUB_FIELD: usize = 5;

/// Delimiters joining club names in a combined-crew entry
pub const CREW_DELIMITERS: [char; 2] = ['&', '/'];

/// Placement token for a disqualified crew
pub const DQ_TOKEN: &str = "DQ";

/// Placement token for a crew that did not start
pub const DNS_TOKEN: &str = "DNS";

// =============================================================================
// Point Scale
// =============================================================================

/// Deepest placement on the descending scale; 1st through here score 9 − p
pub const MAX_SCORED_PLACEMENT: u32 = 8;

/// Flat participation points for finishers beyond the scored placements
pub const PARTICIPATION_POINTS: f64 = 1.0;

// =============================================================================
// Season Folders
// =============================================================================

/// Season folder name prefix, completed with the year ("WakaNats2019")
pub const SEASON_DIR_PREFIX: &str = "WakaNats";

/// Earliest season year the nationals archive covers
pub const MIN_SEASON_YEAR: u32 = 2017;

// =============================================================================
// Standings Export
// =============================================================================

/// Header of the rank column in exported standings
pub const RANK_HEADER: &str = "Rank";

/// Default header of the club column in exported standings
pub const CLUB_HEADER: &str = "Club Name";

/// Header of the points column in exported standings
pub const POINTS_HEADER: &str = "Points";

// =============================================================================
// Application
// =============================================================================

/// Application name used for config paths and log filter targets
pub const APP_NAME: &str = "waka-tally";

/// Crate name as it appears in tracing targets
pub const LOG_TARGET: &str = "waka_tally";
