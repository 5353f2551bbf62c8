//! Race file discovery for season folders
//!
//! The nationals archive lays seasons out as one folder per year
//! (`WakaNats2019/`) under a parent folder, each holding the `.lif`
//! exports for that year's event.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::constants::{MIN_SEASON_YEAR, RACE_FILE_EXTENSION, SEASON_DIR_PREFIX};
use crate::{Error, Result};

/// Locate the season folder for a year beneath the parent folder.
///
/// Tries the canonical `WakaNats<year>` name first, then falls back to
/// any directory whose name contains the year digits, since older
/// archives were named by hand.
pub fn resolve_season_dir(parent: &Path, year: u32) -> Result<PathBuf> {
    if year < MIN_SEASON_YEAR {
        return Err(Error::configuration(format!(
            "year {} is before the first recorded season ({})",
            year, MIN_SEASON_YEAR
        )));
    }

    let canonical = parent.join(format!("{}{}", SEASON_DIR_PREFIX, year));
    if canonical.is_dir() {
        return Ok(canonical);
    }

    let year_token = year.to_string();
    let listing = std::fs::read_dir(parent).map_err(|e| {
        Error::io(
            format!("could not read parent folder {}", parent.display()),
            e,
        )
    })?;
    for entry in listing {
        let entry = entry.map_err(|e| Error::io("could not read directory entry", e))?;
        let path = entry.path();
        let name_matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.contains(&year_token));
        if path.is_dir() && name_matches {
            debug!("Resolved season folder {} for {}", path.display(), year);
            return Ok(path);
        }
    }

    Err(Error::season_not_found(parent.display().to_string(), year))
}

/// Discover race record files in a season folder.
///
/// Matches the `.lif` extension case-insensitively and does not recurse:
/// the timing system writes all of a season's exports flat into its
/// folder. The listing is sorted for a deterministic processing order.
pub fn discover_race_files(season_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(season_dir)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        let is_race_file = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(RACE_FILE_EXTENSION));
        if path.is_file() && is_race_file {
            files.push(path.to_path_buf());
        }
    }

    files.sort();

    debug!(
        "Discovered {} race files in {}",
        files.len(),
        season_dir.display()
    );
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_canonical_season_dir() {
        let temp_dir = TempDir::new().unwrap();
        let season = temp_dir.path().join("WakaNats2019");
        fs::create_dir(&season).unwrap();

        let resolved = resolve_season_dir(temp_dir.path(), 2019).unwrap();
        assert_eq!(resolved, season);
    }

    #[test]
    fn test_resolve_falls_back_to_year_in_name() {
        let temp_dir = TempDir::new().unwrap();
        let season = temp_dir.path().join("nationals-2018-results");
        fs::create_dir(&season).unwrap();

        let resolved = resolve_season_dir(temp_dir.path(), 2018).unwrap();
        assert_eq!(resolved, season);
    }

    #[test]
    fn test_resolve_rejects_pre_archive_years() {
        let temp_dir = TempDir::new().unwrap();
        let result = resolve_season_dir(temp_dir.path(), 2016);
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_resolve_missing_season_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = resolve_season_dir(temp_dir.path(), 2019);
        assert!(matches!(result, Err(Error::SeasonNotFound { .. })));
    }

    #[test]
    fn test_discover_matches_extension_case_insensitively() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("race01.lif"), "x").unwrap();
        fs::write(temp_dir.path().join("race02.LIF"), "x").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "x").unwrap();
        fs::write(temp_dir.path().join("standings.csv"), "x").unwrap();

        let files = discover_race_files(temp_dir.path()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_discover_is_sorted_and_non_recursive() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("race10.lif"), "x").unwrap();
        fs::write(temp_dir.path().join("race02.lif"), "x").unwrap();
        let nested = temp_dir.path().join("archive");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("race99.lif"), "x").unwrap();

        let files = discover_race_files(temp_dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["race02.lif", "race10.lif"]);
    }

    #[test]
    fn test_discover_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let files = discover_race_files(temp_dir.path()).unwrap();
        assert!(files.is_empty());
    }
}
