//! Streak calculation and week-strip rendering

use crate::domain::{Calendar, Habit, HabitStore};
use chrono::NaiveDate;
use std::fmt;

/// Upper bound on how many past days a streak walk inspects (about a century)
pub const DEFAULT_MAX_LOOKBACK_DAYS: u32 = 36_600;

/// Number of days shown in the week strip
pub const STRIP_DAYS: usize = 7;

/// Display state of one day in the week strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    /// Weekday is in the habit's exclusion set
    Excluded,
    /// Marker present
    Completed,
    /// Neither excluded nor marked
    Missed,
}

impl DayState {
    /// Glyph used in the rendered strip
    pub const fn glyph(self) -> char {
        match self {
            DayState::Excluded => '/',
            DayState::Completed => 'X',
            DayState::Missed => ' ',
        }
    }
}

/// The last seven days of a habit, oldest first, today last
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekStrip {
    days: [DayState; STRIP_DAYS],
}

impl WeekStrip {
    pub fn days(&self) -> &[DayState; STRIP_DAYS] {
        &self.days
    }

    pub fn today(&self) -> DayState {
        self.days[STRIP_DAYS - 1]
    }
}

impl fmt::Display for WeekStrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in self.days {
            write!(f, "{}", day.glyph())?;
        }
        Ok(())
    }
}

/// Computes streaks and week strips from a [`HabitStore`].
///
/// "Today" is fixed by the [`Calendar`] the engine is built with, so every
/// computation from one engine agrees on the date.
#[derive(Debug, Clone)]
pub struct StreakEngine<S> {
    store: S,
    calendar: Calendar,
    max_lookback_days: u32,
}

impl<S: HabitStore> StreakEngine<S> {
    pub fn new(store: S, calendar: Calendar) -> Self {
        StreakEngine {
            store,
            calendar,
            max_lookback_days: DEFAULT_MAX_LOOKBACK_DAYS,
        }
    }

    /// Limit the number of past days a streak walk may inspect
    pub fn with_max_lookback_days(mut self, days: u32) -> Self {
        self.max_lookback_days = days;
        self
    }

    /// Current streak length for `habit`.
    ///
    /// Past days on excluded weekdays are skipped; the first non-excluded
    /// past day without a marker ends the run. Today adds one when marked,
    /// whatever its weekday.
    pub fn compute_streak(&self, habit: &Habit) -> u32 {
        let past = self.count_past_run(habit);

        let today = self.calendar.day(0);
        if self.store.marker_exists(habit, today.key) {
            past + 1
        } else {
            past
        }
    }

    fn count_past_run(&self, habit: &Habit) -> u32 {
        let exclusions = self.store.exclusions(habit);
        if exclusions.is_full() {
            // Every past day would be skipped
            return 0;
        }

        let mut streak = 0;
        let mut offset: i64 = 0;
        loop {
            offset += 1;
            if offset > i64::from(self.max_lookback_days) {
                tracing::debug!(
                    habit = %habit,
                    limit = self.max_lookback_days,
                    "streak walk reached lookback limit"
                );
                break;
            }

            let day = self.calendar.day(-offset);
            if !exclusions.contains(day.weekday) {
                if !self.store.marker_exists(habit, day.key) {
                    break;
                }
                streak += 1;
            }

            if day.key.date() == NaiveDate::MIN {
                break;
            }
        }

        streak
    }

    /// Seven-day strip for `habit`, six days ago through today.
    ///
    /// Exclusion wins over marker presence on every day, today included.
    pub fn render_week_strip(&self, habit: &Habit) -> WeekStrip {
        let exclusions = self.store.exclusions(habit);
        let mut days = [DayState::Missed; STRIP_DAYS];

        for (slot, offset) in (-(STRIP_DAYS as i64 - 1)..=0).enumerate() {
            let day = self.calendar.day(offset);
            days[slot] = if exclusions.contains(day.weekday) {
                DayState::Excluded
            } else if self.store.marker_exists(habit, day.key) {
                DayState::Completed
            } else {
                DayState::Missed
            };
        }

        WeekStrip { days }
    }
}
