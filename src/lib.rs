//! streaks - Habit streak tracker
//!
//! Each habit is a directory of per-day marker files. The list view shows the
//! last seven days of every habit and its current streak, skipping weekdays a
//! habit is not expected on.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::StreaksError;
