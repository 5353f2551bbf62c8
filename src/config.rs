//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML config
//! file, then command-line overrides applied by the CLI layer. The scoring
//! rules themselves are not configurable; they are fixed by the nationals
//! point scale in [`constants`](crate::constants).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{APP_NAME, CLUB_HEADER, MIN_SEASON_YEAR};
use crate::{Error, Result};

/// Global configuration for standings processing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Input and season selection settings
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Standings export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Input and season selection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Parent folder holding one season folder per year
    pub input_path: PathBuf,

    /// Year to score when none is given on the command line
    pub default_year: Option<u32>,
}

/// Standings export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Standings file to write when none is given on the command line
    pub output_path: Option<PathBuf>,

    /// Header for the club column ("Club Name" or "Association")
    pub club_header: String,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level when not overridden by verbosity flags
    pub level: String,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("."),
            default_year: None,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: None,
            club_header: CLUB_HEADER.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Default config file location (`~/.config/waka-tally/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_NAME).join("config.toml"))
            .ok_or_else(|| Error::configuration("could not determine user config directory"))
    }

    /// Load configuration from a TOML file over the built-in defaults.
    ///
    /// With no explicit file, the default location is used if it exists;
    /// otherwise the defaults stand.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let path = match config_file {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_config_path().ok().filter(|p| p.exists()),
        };

        let Some(path) = path else {
            debug!("No config file found, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(&path).map_err(|e| {
            Error::io(format!("could not read config file {}", path.display()), e)
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::configuration(format!("invalid config file {}: {}", path.display(), e))
        })?;

        debug!("Loaded configuration from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    /// Validate settings for consistency
    pub fn validate(&self) -> Result<()> {
        if self.export.club_header.trim().is_empty() {
            return Err(Error::configuration("club column header cannot be empty"));
        }

        if let Some(year) = self.processing.default_year {
            if year < MIN_SEASON_YEAR {
                return Err(Error::configuration(format!(
                    "default year {} is before the first recorded season ({})",
                    year, MIN_SEASON_YEAR
                )));
            }
        }

        const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "unknown log level '{}' (expected one of: {})",
                self.logging.level,
                LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.export.club_header, "Club Name");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[processing]
input_path = "/data/nationals"
default_year = 2019

[export]
club_header = "Association"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.processing.input_path, PathBuf::from("/data/nationals"));
        assert_eq!(config.processing.default_year, Some(2019));
        assert_eq!(config.export.club_header, "Association");
        // Unspecified section keeps its default
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "not = [valid").unwrap();

        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.export.club_header = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.processing.default_year = Some(1999);
        assert!(config.validate().is_err());
    }
}
