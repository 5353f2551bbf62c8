//! Parsing statistics for race record processing
//!
//! Tracks per-file row counts and skip reasons so batch runs can report
//! how much of the input actually contributed to the standings.

/// Per-file parsing statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Whether the file carried a "Final" marker and was scored
    pub eligible: bool,

    /// Number of race blocks found
    pub races: usize,

    /// Total data rows encountered across all blocks
    pub total_rows: usize,

    /// Rows attributed to at least one club
    pub rows_scored: usize,

    /// Rows skipped as malformed
    pub rows_skipped: usize,

    /// Skip reasons, for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            eligible: false,
            races: 0,
            total_rows: 0,
            rows_scored: 0,
            rows_skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Fraction of rows that scored, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.rows_scored as f64 / self.total_rows as f64) * 100.0
        }
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
