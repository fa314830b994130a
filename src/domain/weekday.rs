//! Weekday identifiers
//!
//! Weekdays are written as short tokens, ordered from Sunday:
//! `su m tu w th f sa`. Parsing is case-insensitive and also accepts the
//! usual longer spellings.

use crate::error::{Result, StreaksError};
use chrono::Weekday;

/// All weekdays in display order, starting at Sunday
pub const WEEK_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Canonical short token for a weekday
pub fn token(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "su",
        Weekday::Mon => "m",
        Weekday::Tue => "tu",
        Weekday::Wed => "w",
        Weekday::Thu => "th",
        Weekday::Fri => "f",
        Weekday::Sat => "sa",
    }
}

/// Single-letter initial used in the list header
pub fn initial(weekday: Weekday) -> char {
    match weekday {
        Weekday::Sun | Weekday::Sat => 'S',
        Weekday::Mon => 'M',
        Weekday::Tue | Weekday::Thu => 'T',
        Weekday::Wed => 'W',
        Weekday::Fri => 'F',
    }
}

/// Match a canonical token only (case-insensitive), as stored in `days.txt`
pub fn parse_token(input: &str) -> Option<Weekday> {
    let normalized = input.trim().to_lowercase();
    WEEK_FROM_SUNDAY
        .into_iter()
        .find(|day| token(*day) == normalized)
}

/// Parse a weekday token (case-insensitive)
pub fn parse(input: &str) -> Result<Weekday> {
    let normalized = input.trim().to_lowercase();

    match normalized.as_str() {
        "su" | "sun" | "sunday" => Ok(Weekday::Sun),
        "m" | "mo" | "mon" | "monday" => Ok(Weekday::Mon),
        "tu" | "tue" | "tues" | "tuesday" => Ok(Weekday::Tue),
        "w" | "we" | "wed" | "wednesday" => Ok(Weekday::Wed),
        "th" | "thu" | "thur" | "thurs" | "thursday" => Ok(Weekday::Thu),
        "f" | "fr" | "fri" | "friday" => Ok(Weekday::Fri),
        "sa" | "sat" | "saturday" => Ok(Weekday::Sat),
        _ => Err(StreaksError::InvalidWeekday(input.trim().to_string())),
    }
}
