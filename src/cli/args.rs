//! Command-line argument definitions for the standings tool
//!
//! This module defines the complete CLI interface using the clap derive
//! API. Season selection mirrors how the nationals archive is organized:
//! a parent folder with one season folder per year.

use crate::constants::MIN_SEASON_YEAR;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the regatta standings tool
///
/// Tallies club ranking points from `.lif` race records and produces a
/// ranked standings table that can be printed or exported as CSV.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "waka-tally",
    version,
    about = "Tally club ranking points from Waka Ama regatta race records",
    long_about = "Processes the .lif race record files of a nationals season into ranked \
                  club standings. Championship finals are identified by their \"Final\" \
                  marker line; placements score on the fixed 8-down-to-1 scale with a \
                  participation point for deeper finishes."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the standings tool
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Score a season's race records and produce ranked standings
    Score(ScoreArgs),
    /// Report which race files a season folder would contribute
    Scan(ScanArgs),
}

/// Arguments for the score command (main standings computation)
#[derive(Debug, Clone, Parser)]
pub struct ScoreArgs {
    /// Parent folder holding one season folder per year
    ///
    /// Season folders are named like WakaNats2019. If not specified,
    /// defaults to the configured input path (or the current directory).
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Parent folder holding one season folder per year"
    )]
    pub input: Option<PathBuf>,

    /// Season year to score
    ///
    /// Resolved to a season folder beneath the input path. If not
    /// specified, the configured default year is used.
    #[arg(short = 'y', long = "year", value_name = "YEAR", help = "Season year to score")]
    pub year: Option<u32>,

    /// Score this folder directly, bypassing year resolution
    #[arg(
        long = "season-dir",
        value_name = "PATH",
        conflicts_with = "year",
        help = "Score this folder directly instead of resolving a year"
    )]
    pub season_dir: Option<PathBuf>,

    /// Write the standings to this CSV file
    ///
    /// The standings are always shown on stdout; this additionally writes
    /// the delimited export.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write the standings to this CSV file"
    )]
    pub output: Option<PathBuf>,

    /// Output format for the standings on stdout
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the standings"
    )]
    pub output_format: OutputFormat,

    /// Path to configuration file
    ///
    /// TOML configuration file for defaults. If not specified, looks for
    /// ~/.config/waka-tally/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and the standings themselves. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress progress and summary output",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the scan command (discovery report, no scoring)
#[derive(Debug, Clone, Parser)]
pub struct ScanArgs {
    /// Parent folder holding one season folder per year
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Parent folder holding one season folder per year"
    )]
    pub input: Option<PathBuf>,

    /// Season year to scan
    #[arg(short = 'y', long = "year", value_name = "YEAR", help = "Season year to scan")]
    pub year: Option<u32>,

    /// Scan this folder directly, bypassing year resolution
    #[arg(
        long = "season-dir",
        value_name = "PATH",
        conflicts_with = "year",
        help = "Scan this folder directly instead of resolving a year"
    )]
    pub season_dir: Option<PathBuf>,

    /// Output format for the report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ScoreArgs {
    /// Validate the score command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            if !input.exists() {
                return Err(Error::configuration(format!(
                    "input path does not exist: {}",
                    input.display()
                )));
            }
            if !input.is_dir() {
                return Err(Error::configuration(format!(
                    "input path is not a directory: {}",
                    input.display()
                )));
            }
        }

        if let Some(season_dir) = &self.season_dir {
            if !season_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "season folder does not exist: {}",
                    season_dir.display()
                )));
            }
        }

        if let Some(year) = self.year {
            if year < MIN_SEASON_YEAR {
                return Err(Error::configuration(format!(
                    "year {} is before the first recorded season ({})",
                    year, MIN_SEASON_YEAR
                )));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }
}

impl ScanArgs {
    /// Validate the scan command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            if !input.is_dir() {
                return Err(Error::configuration(format!(
                    "input path is not a directory: {}",
                    input.display()
                )));
            }
        }

        if let Some(season_dir) = &self.season_dir {
            if !season_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "season folder does not exist: {}",
                    season_dir.display()
                )));
            }
        }

        if let Some(year) = self.year {
            if year < MIN_SEASON_YEAR {
                return Err(Error::configuration(format!(
                    "year {} is before the first recorded season ({})",
                    year, MIN_SEASON_YEAR
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for ScoreArgs {
    fn default() -> Self {
        Self {
            input: None,
            year: None,
            season_dir: None,
            output: None,
            output_format: OutputFormat::Human,
            config_file: None,
            verbose: 0,
            quiet: false,
        }
    }
}
