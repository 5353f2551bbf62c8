//! Command implementations for the standings CLI
//!
//! This module contains the command execution logic, progress reporting,
//! and error handling for the CLI interface. Each command is implemented
//! in its own module.

pub mod scan;
pub mod score;
pub mod shared;

// Re-export the main types for easy access
pub use shared::ProcessingStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the standings tool
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `score`: full standings computation with optional CSV export
/// - `scan`: discovery report of a season folder, no scoring
pub fn run(args: Args) -> Result<ProcessingStats> {
    match args.get_command() {
        Commands::Score(score_args) => score::run_score(score_args),
        Commands::Scan(scan_args) => scan::run_scan(scan_args),
    }
}
