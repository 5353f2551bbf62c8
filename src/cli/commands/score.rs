//! Score command implementation
//!
//! The complete standings workflow: resolve the season folder, discover
//! race files, score each one, aggregate club totals, and render or
//! export the ranked standings.

use colored::*;
use indicatif::HumanDuration;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::shared::{ProcessingStats, create_progress_bar, load_configuration, setup_logging};
use crate::app::services::event_scanner;
use crate::app::services::export;
use crate::app::services::lif_parser::tokenizer;
use crate::app::services::scoring::{aggregate, score_file, standings};
use crate::app::models::StandingsEntry;
use crate::cli::args::{OutputFormat, ScoreArgs};
use crate::config::Config;
use crate::constants::{POINTS_HEADER, RANK_HEADER};
use crate::{Error, Result};

/// Score command runner
///
/// Orchestrates the whole workflow:
/// 1. Set up logging and configuration
/// 2. Resolve the season folder and discover race files
/// 3. Score files sequentially with progress reporting
/// 4. Aggregate totals, render standings, export if requested
pub fn run_score(args: ScoreArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting standings run");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(args.config_file.as_deref())?;

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
    info!("Scoring season folder {}", season_dir.display());

    let files = event_scanner::discover_race_files(&season_dir)?;
    if files.is_empty() {
        warn!("No race files found in {}", season_dir.display());
    }

    let mut stats = ProcessingStats {
        files_discovered: files.len(),
        ..Default::default()
    };

    let progress = args
        .show_progress()
        .then(|| create_progress_bar(files.len() as u64, "Scoring race files"));

    // Per-file scoring stays a synchronous fold; the progress bar ticks
    // between files.
    let mut per_file = Vec::with_capacity(files.len());
    for path in &files {
        let lines = tokenizer::read_race_file(path);
        let result = score_file(&lines);

        if result.stats.eligible {
            stats.files_eligible += 1;
        }
        stats.races_scored += result.stats.races;
        stats.rows_scored += result.stats.rows_scored;
        stats.rows_skipped += result.stats.rows_skipped;
        if !result.stats.errors.is_empty() {
            debug!(
                "{}: skipped {} rows ({})",
                path.display(),
                result.stats.errors.len(),
                result.stats.errors.join("; ")
            );
        }

        per_file.push(result.scores);
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let totals = aggregate(per_file);
    let entries = standings(&totals);
    stats.clubs_ranked = entries.len();
    stats.processing_time = start_time.elapsed();

    info!(
        "Scored {} of {} files into {} clubs",
        stats.files_eligible, stats.files_discovered, stats.clubs_ranked
    );

    render_standings(&entries, &args.output_format, &config)?;

    if let Some(path) = args.output.clone().or_else(|| config.export.output_path.clone()) {
        export::write_standings_csv(&entries, &path, &config.export.club_header)?;
        if !args.quiet {
            eprintln!("Standings exported to {}", path.display());
        }
    }

    if !args.quiet && args.output_format == OutputFormat::Human {
        print_summary(&stats);
    }

    Ok(stats)
}

/// Render the standings to stdout in the requested format
fn render_standings(
    entries: &[StandingsEntry],
    format: &OutputFormat,
    config: &Config,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            print_table(entries, &config.export.club_header);
            Ok(())
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(entries).map_err(|e| {
                Error::export("<stdout>", format!("could not serialize standings: {}", e), None)
            })?;
            println!("{}", json);
            Ok(())
        }
        OutputFormat::Csv => {
            export::write_standings_to(entries, std::io::stdout(), &config.export.club_header)
        }
    }
}

/// Print an aligned standings table
fn print_table(entries: &[StandingsEntry], club_header: &str) {
    if entries.is_empty() {
        println!("{}", "No clubs scored any points.".yellow());
        return;
    }

    let club_width = entries
        .iter()
        .map(|entry| entry.club.len())
        .max()
        .unwrap_or(0)
        .max(club_header.len());

    println!();
    println!("{}", "Club Standings".bold());
    let header = format!(
        "{:>4}  {:<width$}  {:>8}",
        RANK_HEADER,
        club_header,
        POINTS_HEADER,
        width = club_width
    );
    println!("{}", header.bold());
    for entry in entries {
        println!(
            "{:>4}  {:<width$}  {:>8}",
            entry.rank,
            entry.club,
            export::format_points(entry.points),
            width = club_width
        );
    }
}

/// Print the run summary
fn print_summary(stats: &ProcessingStats) {
    println!();
    println!(
        "{} {} files discovered, {} finals scored, {} rows counted ({} skipped) in {}",
        "Done:".green().bold(),
        stats.files_discovered,
        stats.files_eligible,
        stats.rows_scored,
        stats.rows_skipped,
        HumanDuration(stats.processing_time)
    );
}
