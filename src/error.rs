//! Error types for streaks

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the streaks application
#[derive(Debug, Error)]
pub enum StreaksError {
    #[error("Invalid habit number: {0}")]
    InvalidHabitNumber(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid number of days: {0}")]
    InvalidDayCount(String),

    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Habit already exists: {0}")]
    HabitExists(String),

    #[error("Habit not found: {0}")]
    HabitNotFound(String),

    #[error("Data directory unavailable: {0}")]
    DataDirUnavailable(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse config.toml: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl StreaksError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            StreaksError::InvalidHabitNumber(_) => 2,
            StreaksError::InvalidDate(_) => 3,
            StreaksError::InvalidWeekday(_) => 4,
            StreaksError::InvalidDayCount(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            StreaksError::InvalidHabitNumber(number) => {
                format!(
                    "Invalid habit number: '{}'\n\n\
                    Suggestions:\n\
                    • Run 'streaks' without arguments to see numbered habits\n\
                    • Habit numbers start at 1",
                    number
                )
            }
            StreaksError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday\n\
                    • Full dates: YYYY-MM-DD (e.g., 2025-01-17)\n\
                    • Month and day in the current year: MM-DD (e.g., 01-17)\n\n\
                    Examples:\n\
                    streaks toggle 1\n\
                    streaks toggle 1 yesterday\n\
                    streaks toggle 1 2025-01-15",
                    input
                )
            }
            StreaksError::InvalidWeekday(token) => {
                format!(
                    "Invalid weekday: '{}'\n\n\
                    Valid weekdays: su, m, tu, w, th, f, sa (case-insensitive)\n\
                    Example: streaks days 1 f,sa,su",
                    token
                )
            }
            StreaksError::InvalidDayCount(count) => {
                format!(
                    "Invalid number of days: '{}'\n\n\
                    The number of days must be at least 1 and at most\n\
                    max_lookback_days (36600 unless set in config.toml).\n\
                    Example: streaks since 1 30",
                    count
                )
            }
            StreaksError::InvalidHabitName(name) => {
                format!(
                    "Invalid habit name: '{}'\n\n\
                    Habit names must be non-empty, must not start with '.',\n\
                    must not contain '/' or '\\', and must not have surrounding spaces.\n\
                    Example: streaks add exercise",
                    name
                )
            }
            StreaksError::DataDirUnavailable(path) => {
                format!(
                    "Data directory unavailable: {}\n\n\
                    Suggestions:\n\
                    • Check that the directory is writable\n\
                    • Set STREAKS_DIR environment variable to another location",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using StreaksError
pub type Result<T> = std::result::Result<T, StreaksError>;
