//! Scan command implementation
//!
//! Discovery report for a season folder: which `.lif` files are present
//! and which of them are championship finals that would contribute to the
//! standings. No scoring happens here.

use colored::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

use super::shared::{ProcessingStats, load_configuration, setup_logging};
use crate::app::services::event_scanner;
use crate::app::services::lif_parser::{segmenter, tokenizer};
use crate::cli::args::{OutputFormat, ScanArgs};
use crate::{Error, Result};

/// Per-file entry in the scan report
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path to the race file
    pub path: PathBuf,
    /// Whether the file carries a "Final" marker
    pub eligible: bool,
    /// Number of race blocks the file would contribute
    pub races: usize,
    /// Number of non-empty lines in the file
    pub lines: usize,
}

/// Complete scan report for a season folder
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// The resolved season folder
    pub season_dir: PathBuf,
    /// One entry per discovered race file
    pub files: Vec<FileReport>,
}

/// Scan command runner
pub fn run_scan(args: ScanArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), false)?;
    args.validate()?;

    let config = load_configuration(None)?;
    let input_path = args
        .input
        .clone()
        .unwrap_or_else(|| config.processing.input_path.clone());

    let season_dir = match &args.season_dir {
        Some(dir) => dir.clone(),
        None => {
            let year = args.year.or(config.processing.default_year).ok_or_else(|| {
                Error::configuration(
                    "no season year given; pass --year (or set processing.default_year)",
                )
            })?;
            event_scanner::resolve_season_dir(&input_path, year)?
        }
    };
    info!("Scanning season folder {}", season_dir.display());

    let files = event_scanner::discover_race_files(&season_dir)?;

    let mut report = ScanReport {
        season_dir,
        files: Vec::with_capacity(files.len()),
    };
    for path in files {
        let lines = tokenizer::read_race_file(&path);
        let eligible = segmenter::is_eligible(&lines);
        let races = if eligible {
            segmenter::segment_races(&lines).len()
        } else {
            0
        };
        debug!("{}: eligible={}, races={}", path.display(), eligible, races);
        report.files.push(FileReport {
            path,
            eligible,
            races,
            lines: lines.len(),
        });
    }

    let stats = ProcessingStats {
        files_discovered: report.files.len(),
        files_eligible: report.files.iter().filter(|f| f.eligible).count(),
        races_scored: report.files.iter().map(|f| f.races).sum(),
        processing_time: start_time.elapsed(),
        ..Default::default()
    };

    match args.output_format {
        OutputFormat::Human => print_report(&report, &stats),
        OutputFormat::Json | OutputFormat::Csv => {
            // The report has no natural CSV shape; both machine formats emit JSON
            let json = serde_json::to_string_pretty(&report).map_err(|e| {
                Error::export("<stdout>", format!("could not serialize report: {}", e), None)
            })?;
            println!("{}", json);
        }
    }

    Ok(stats)
}

/// Print the human-readable scan report
fn print_report(report: &ScanReport, stats: &ProcessingStats) {
    println!();
    println!(
        "{} {}",
        "Season folder:".bold(),
        report.season_dir.display()
    );

    if report.files.is_empty() {
        println!("{}", "No race files found.".yellow());
        return;
    }

    for file in &report.files {
        let name = file
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.path.display().to_string());
        if file.eligible {
            let races = if file.races == 1 { "race" } else { "races" };
            println!("  {} {} ({} {})", "final".green(), name, file.races, races);
        } else {
            println!("  {}  {}", "heat".dimmed(), name);
        }
    }

    println!();
    println!(
        "{} of {} files would contribute to the standings",
        stats.files_eligible, stats.files_discovered
    );
}
