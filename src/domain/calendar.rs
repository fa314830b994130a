//! Calendar utility: day offsets relative to a fixed "today"

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use std::fmt;
use std::str::FromStr;

/// A calendar date in canonical `YYYY-MM-DD` form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        DateKey(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for DateKey {
    type Err = chrono::ParseError;

    /// Strict parse of the canonical form (used for marker file names)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(DateKey)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey(date)
    }
}

/// One resolved day: its key and weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub key: DateKey,
    pub weekday: Weekday,
}

/// Resolves day offsets against a "today" captured once per run.
///
/// Arithmetic is done on calendar dates, so month/year/leap-year rollover is
/// exact and no daylight-saving shift can move a day. Offsets past the
/// representable range saturate at `NaiveDate::MIN` / `NaiveDate::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    today: NaiveDate,
}

impl Calendar {
    /// Calendar anchored at the local wall-clock date
    pub fn local() -> Self {
        Calendar::anchored(Local::now().date_naive())
    }

    /// Calendar anchored at an explicit date
    pub fn anchored(today: NaiveDate) -> Self {
        Calendar { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Date for "today + offset days"
    pub fn date_at(&self, offset: i64) -> NaiveDate {
        let magnitude = Days::new(offset.unsigned_abs());
        if offset >= 0 {
            self.today
                .checked_add_days(magnitude)
                .unwrap_or(NaiveDate::MAX)
        } else {
            self.today
                .checked_sub_days(magnitude)
                .unwrap_or(NaiveDate::MIN)
        }
    }

    /// Key and weekday for "today + offset days"
    pub fn day(&self, offset: i64) -> CalendarDay {
        let date = self.date_at(offset);
        CalendarDay {
            key: DateKey(date),
            weekday: date.weekday(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calendar(y: i32, m: u32, d: u32) -> Calendar {
        Calendar::anchored(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_offset_zero_is_today() {
        let cal = calendar(2025, 1, 17);
        let day = cal.day(0);
        assert_eq!(day.key.to_string(), "2025-01-17");
        assert_eq!(day.weekday, Weekday::Fri);
    }

    #[test]
    fn test_negative_offset_crosses_year() {
        let cal = calendar(2025, 1, 2);
        assert_eq!(cal.day(-3).key.to_string(), "2024-12-30");
        assert_eq!(cal.day(-3).weekday, Weekday::Mon);
    }

    #[test]
    fn test_leap_day() {
        let cal = calendar(2024, 3, 1);
        assert_eq!(cal.day(-1).key.to_string(), "2024-02-29");
        let cal = calendar(2023, 3, 1);
        assert_eq!(cal.day(-1).key.to_string(), "2023-02-28");
    }

    #[test]
    fn test_positive_offset_crosses_month() {
        let cal = calendar(2025, 1, 30);
        assert_eq!(cal.day(3).key.to_string(), "2025-02-02");
    }

    #[test]
    fn test_large_offsets() {
        let cal = calendar(2025, 1, 17);
        // 400 Gregorian years are exactly 146097 days
        assert_eq!(cal.day(-146_097).key.to_string(), "1625-01-17");
        assert_eq!(cal.day(146_097).key.to_string(), "2425-01-17");
    }

    #[test]
    fn test_offsets_saturate_at_range_limits() {
        let cal = calendar(2025, 1, 17);
        assert_eq!(cal.date_at(i64::MIN), NaiveDate::MIN);
        assert_eq!(cal.date_at(i64::MAX), NaiveDate::MAX);
    }

    #[test]
    fn test_date_key_is_zero_padded() {
        let key = DateKey::new(NaiveDate::from_ymd_opt(987, 3, 4).unwrap());
        assert_eq!(key.to_string(), "0987-03-04");
    }

    #[test]
    fn test_date_key_parse() {
        let key: DateKey = "2025-01-17".parse().unwrap();
        assert_eq!(key.date(), NaiveDate::from_ymd_opt(2025, 1, 17).unwrap());
        assert!("days.txt".parse::<DateKey>().is_err());
        assert!("2025-02-30".parse::<DateKey>().is_err());
    }

    #[test]
    fn test_same_day_same_key() {
        let a = calendar(2025, 6, 1);
        let b = calendar(2025, 6, 1);
        assert_eq!(a.day(0).key, b.day(0).key);
    }
}
