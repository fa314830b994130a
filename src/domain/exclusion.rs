//! Per-habit set of excluded weekdays

use crate::domain::weekday::{self, WEEK_FROM_SUNDAY};
use crate::error::Result;
use chrono::Weekday;
use std::fmt;

/// Set of weekdays that do not count toward a habit's streak
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    // Indexed by days from Sunday
    days: [bool; 7],
}

impl ExclusionSet {
    pub fn new() -> Self {
        ExclusionSet::default()
    }

    pub fn insert(&mut self, weekday: Weekday) {
        self.days[weekday.num_days_from_sunday() as usize] = true;
    }

    pub fn contains(&self, weekday: Weekday) -> bool {
        self.days[weekday.num_days_from_sunday() as usize]
    }

    pub fn is_empty(&self) -> bool {
        !self.days.iter().any(|d| *d)
    }

    pub fn is_full(&self) -> bool {
        self.days.iter().all(|d| *d)
    }

    /// Excluded weekdays in order from Sunday
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        WEEK_FROM_SUNDAY
            .into_iter()
            .filter(move |day| self.contains(*day))
    }

    /// Parse a comma-separated list such as `f,sa,su`.
    /// Empty entries are ignored; unknown tokens are an error.
    pub fn parse_list(input: &str) -> Result<Self> {
        let mut set = ExclusionSet::new();
        for part in input.split(',') {
            if part.trim().is_empty() {
                continue;
            }
            set.insert(weekday::parse(part)?);
        }
        Ok(set)
    }

    /// Read the persisted one-token-per-line form.
    /// Only canonical tokens count; other lines are skipped.
    pub fn from_lines(contents: &str) -> Self {
        let mut set = ExclusionSet::new();
        for line in contents.lines() {
            match weekday::parse_token(line) {
                Some(day) => set.insert(day),
                None if line.trim().is_empty() => {}
                None => tracing::debug!(line, "ignoring unknown weekday token"),
            }
        }
        set
    }

    /// Persisted form: one canonical token per line
    pub fn to_lines(&self) -> String {
        self.iter()
            .map(|day| format!("{}\n", weekday::token(day)))
            .collect()
    }
}

impl FromIterator<Weekday> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = ExclusionSet::new();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl fmt::Display for ExclusionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<&str> = self.iter().map(weekday::token).collect();
        write!(f, "{}", tokens.join(","))
    }
}
