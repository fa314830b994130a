//! Parsing of user-supplied dates for marking a habit

use crate::domain::DateKey;
use crate::error::{Result, StreaksError};
use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

fn full_date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{1,4})-(\d{1,2})-(\d{1,2})$").unwrap())
}

fn month_day_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{1,2})-(\d{1,2})$").unwrap())
}

/// A date as typed on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// Current day
    Today,
    /// Previous day
    Yesterday,
    /// Month and day in the current year
    MonthDay { month: u32, day: u32 },
    /// Fully specified date
    Specific(NaiveDate),
}

impl DateInput {
    /// Parse `today`, `yesterday`, `YYYY-MM-DD` or `MM-DD`
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" => return Ok(DateInput::Today),
            "yesterday" => return Ok(DateInput::Yesterday),
            _ => {}
        }

        let invalid = || StreaksError::InvalidDate(input.to_string());

        if let Some(caps) = full_date_regex().captures(&normalized) {
            let year: i32 = caps[1].parse().map_err(|_| invalid())?;
            let month: u32 = caps[2].parse().map_err(|_| invalid())?;
            let day: u32 = caps[3].parse().map_err(|_| invalid())?;
            return NaiveDate::from_ymd_opt(year, month, day)
                .map(DateInput::Specific)
                .ok_or_else(invalid);
        }

        if let Some(caps) = month_day_regex().captures(&normalized) {
            let month: u32 = caps[1].parse().map_err(|_| invalid())?;
            let day: u32 = caps[2].parse().map_err(|_| invalid())?;
            // Feb 29 is only checked against a concrete year at resolve time
            if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
                return Err(invalid());
            }
            return Ok(DateInput::MonthDay { month, day });
        }

        Err(invalid())
    }

    /// Resolve against `today`
    pub fn resolve(&self, today: NaiveDate) -> Result<DateKey> {
        let date = match self {
            DateInput::Today => today,
            DateInput::Yesterday => today - Duration::days(1),
            DateInput::MonthDay { month, day } => {
                NaiveDate::from_ymd_opt(today.year(), *month, *day).ok_or_else(|| {
                    StreaksError::InvalidDate(format!(
                        "{:02}-{:02} does not exist in {}",
                        month,
                        day,
                        today.year()
                    ))
                })?
            }
            DateInput::Specific(date) => *date,
        };
        Ok(DateKey::new(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_words() {
        assert_eq!(DateInput::parse("today").unwrap(), DateInput::Today);
        assert_eq!(DateInput::parse("Yesterday").unwrap(), DateInput::Yesterday);
    }

    #[test]
    fn test_parse_full_date() {
        assert_eq!(
            DateInput::parse("2025-01-17").unwrap(),
            DateInput::Specific(date(2025, 1, 17))
        );
    }

    #[test]
    fn test_parse_unpadded_full_date() {
        assert_eq!(
            DateInput::parse("2025-1-7").unwrap(),
            DateInput::Specific(date(2025, 1, 7))
        );
    }

    #[test]
    fn test_parse_month_day() {
        assert_eq!(
            DateInput::parse("01-17").unwrap(),
            DateInput::MonthDay { month: 1, day: 17 }
        );
        assert_eq!(
            DateInput::parse("2-29").unwrap(),
            DateInput::MonthDay { month: 2, day: 29 }
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(DateInput::parse("tomorrowish").is_err());
        assert!(DateInput::parse("2025-13-01").is_err());
        assert!(DateInput::parse("2025-02-30").is_err());
        assert!(DateInput::parse("13-01").is_err());
        assert!(DateInput::parse("17/01/2025").is_err());
        assert!(DateInput::parse("").is_err());
    }

    #[test]
    fn test_resolve_today_and_yesterday() {
        let today = date(2025, 3, 1);
        assert_eq!(
            DateInput::Today.resolve(today).unwrap().to_string(),
            "2025-03-01"
        );
        assert_eq!(
            DateInput::Yesterday.resolve(today).unwrap().to_string(),
            "2025-02-28"
        );
    }

    #[test]
    fn test_resolve_month_day_uses_current_year() {
        let today = date(2025, 6, 1);
        let input = DateInput::MonthDay { month: 1, day: 7 };
        assert_eq!(input.resolve(today).unwrap().to_string(), "2025-01-07");
    }

    #[test]
    fn test_resolve_leap_day_outside_leap_year() {
        let input = DateInput::MonthDay { month: 2, day: 29 };
        assert!(input.resolve(date(2025, 6, 1)).is_err());
        assert_eq!(
            input.resolve(date(2024, 6, 1)).unwrap().to_string(),
            "2024-02-29"
        );
    }

    #[test]
    fn test_resolve_specific_is_padded() {
        let input = DateInput::parse("2025-1-7").unwrap();
        assert_eq!(
            input.resolve(date(2030, 1, 1)).unwrap().to_string(),
            "2025-01-07"
        );
    }
}
