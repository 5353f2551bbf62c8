//! Shared components for CLI commands
//!
//! Common types and utilities used across the command implementations.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::debug;

use crate::config::Config;
use crate::constants::LOG_TARGET;
use crate::Result;

/// Processing statistics for reporting across commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of race files discovered
    pub files_discovered: usize,
    /// Number of files carrying a "Final" marker
    pub files_eligible: usize,
    /// Number of race blocks scored
    pub races_scored: usize,
    /// Number of result rows attributed to clubs
    pub rows_scored: usize,
    /// Number of rows skipped as malformed
    pub rows_skipped: usize,
    /// Number of clubs in the final standings
    pub clubs_ranked: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

/// Set up structured logging to stderr
///
/// stderr carries the logs so stdout stays clean for standings output.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration from the optional config file over defaults
pub fn load_configuration(config_file: Option<&Path>) -> Result<Config> {
    let config = Config::load(config_file)?;
    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
