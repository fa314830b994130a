//! Habit status use case

use crate::domain::{Calendar, Habit, StreakEngine, WeekStrip};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, HabitRepository};

/// One row of the habit list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitStatus {
    /// 1-based position used to address the habit on the command line
    pub number: usize,
    pub habit: Habit,
    pub strip: WeekStrip,
    pub streak: u32,
}

/// Service computing the week strip and streak of every habit
pub struct StatusService {
    repository: FileSystemRepository,
    calendar: Calendar,
}

impl StatusService {
    /// Create a new status service
    pub fn new(repository: FileSystemRepository, calendar: Calendar) -> Self {
        StatusService {
            repository,
            calendar,
        }
    }

    /// Status of all habits, in list order
    pub fn execute(&self) -> Result<Vec<HabitStatus>> {
        let config = self.repository.load_config()?;
        let engine = StreakEngine::new(&self.repository, self.calendar)
            .with_max_lookback_days(config.max_lookback_days);

        let statuses = self
            .repository
            .list_habits()?
            .into_iter()
            .enumerate()
            .map(|(index, habit)| {
                let strip = engine.render_week_strip(&habit);
                let streak = engine.compute_streak(&habit);
                tracing::debug!(habit = %habit, %strip, streak, "computed habit status");
                HabitStatus {
                    number: index + 1,
                    habit,
                    strip,
                    streak,
                }
            })
            .collect();

        Ok(statuses)
    }
}
