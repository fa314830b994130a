//! Marking use cases: toggle a day, backfill a run of days

use crate::application::select_habit;
use crate::domain::{Calendar, DateInput, DateKey, Habit};
use crate::error::{Result, StreaksError};
use crate::infrastructure::{FileSystemRepository, HabitRepository};

/// Result of toggling a marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub habit: Habit,
    pub date: DateKey,
    /// Whether the marker is present after the toggle
    pub marked: bool,
}

/// Service for recording completed days
pub struct MarkService {
    repository: FileSystemRepository,
    calendar: Calendar,
}

impl MarkService {
    /// Create a new mark service
    pub fn new(repository: FileSystemRepository, calendar: Calendar) -> Self {
        MarkService {
            repository,
            calendar,
        }
    }

    /// Toggle the marker of habit `number` on `date` (default: today)
    pub fn toggle(&self, number: usize, date: Option<&str>) -> Result<ToggleOutcome> {
        let habit = select_habit(&self.repository, number)?;

        let input = match date {
            Some(text) => DateInput::parse(text)?,
            None => DateInput::Today,
        };
        let date = input.resolve(self.calendar.today())?;

        let marked = self.repository.toggle_marker(&habit, date)?;
        Ok(ToggleOutcome {
            habit,
            date,
            marked,
        })
    }

    /// Mark today and the `days - 1` days before it.
    /// Returns the habit and how many markers were newly created.
    ///
    /// `days` may not exceed `max_lookback_days`; older markers would never
    /// be reached by a streak walk.
    pub fn backfill(&self, number: usize, days: usize) -> Result<(Habit, usize)> {
        let limit = self.repository.load_config()?.max_lookback_days;
        let count = i64::try_from(days)
            .ok()
            .filter(|count| (1..=i64::from(limit)).contains(count))
            .ok_or_else(|| StreaksError::InvalidDayCount(days.to_string()))?;
        let habit = select_habit(&self.repository, number)?;

        let dates = (0..count).map(|offset| self.calendar.day(-offset).key);
        let created = self.repository.create_markers(&habit, dates)?;

        Ok((habit, created))
    }
}
