//! Configuration management

use crate::domain::{DateKey, DEFAULT_MAX_LOOKBACK_DAYS};
use crate::error::{Result, StreaksError};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "STREAKS_DIR";

/// Environment variable that pins "today" to a `YYYY-MM-DD` date
pub const TODAY_ENV: &str = "STREAKS_TODAY";

/// Name of the optional config file inside the data directory
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Most past days a streak walk inspects
    #[serde(default = "default_max_lookback_days")]
    pub max_lookback_days: u32,
}

fn default_max_lookback_days() -> u32 {
    DEFAULT_MAX_LOOKBACK_DAYS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_lookback_days: default_max_lookback_days(),
        }
    }
}

impl Config {
    /// Load config.toml from the data directory, falling back to defaults
    /// when the file does not exist
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %config_path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(StreaksError::Io(e)),
        };

        let config: Config = toml::from_str(&contents)?;

        if config.max_lookback_days == 0 {
            return Err(StreaksError::Config(
                "max_lookback_days must be at least 1".to_string(),
            ));
        }

        Ok(config)
    }

    /// Date from `STREAKS_TODAY`, if set
    pub fn today_override() -> Result<Option<NaiveDate>> {
        match std::env::var(TODAY_ENV) {
            Ok(value) if !value.is_empty() => parse_today(&value).map(Some),
            _ => Ok(None),
        }
    }

    /// Resolve the data directory: `STREAKS_DIR` first, then the platform
    /// data directory (`~/.local/share/streaks`,
    /// `~/Library/Application Support/streaks`, ...)
    pub fn resolve_data_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }

        dirs::data_dir()
            .map(|dir| dir.join("streaks"))
            .ok_or_else(|| {
                StreaksError::Config(format!(
                    "Could not determine a data directory. Set {} to choose one.",
                    DATA_DIR_ENV
                ))
            })
    }
}

fn parse_today(value: &str) -> Result<NaiveDate> {
    value
        .trim()
        .parse::<DateKey>()
        .map(|key| key.date())
        .map_err(|_| StreaksError::InvalidDate(format!("{}={}", TODAY_ENV, value)))
}
