//! Waka Tally Library
//!
//! A Rust library for tallying club ranking points from Waka Ama regatta
//! `.lif` race record files and producing ranked standings.
//!
//! This library provides tools for:
//! - Tokenizing `.lif` race records with permissive text decoding
//! - Segmenting race files into per-race blocks on the "Final" marker
//! - Assigning placement points with tie handling and combined-crew splits
//! - Aggregating per-file scores into ranked club standings
//! - Exporting standings as CSV with round-trip read-back

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod event_scanner;
        pub mod export;
        pub mod lif_parser;
        pub mod scoring;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ClubScores, Placement, RaceBlock, ResultRow, StandingsEntry};
pub use config::Config;

/// Result type alias for the tally library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for race record processing and standings export
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A single result row could not be parsed; callers skip the row
    #[error("invalid result row: {message}")]
    InvalidRecord { message: String },

    /// Standings export failed
    #[error("standings export error for '{path}': {message}")]
    Export {
        path: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Season folder for the requested year was not found
    #[error("season folder not found under {parent} for year {year}")]
    SeasonNotFound { parent: String, year: u32 },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid record error
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            message: message.into(),
        }
    }

    /// Create an export error
    pub fn export(
        path: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::Export {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a season-not-found error
    pub fn season_not_found(parent: impl Into<String>, year: u32) -> Self {
        Self::SeasonNotFound {
            parent: parent.into(),
            year,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
