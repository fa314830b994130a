//! Excluded-weekday use case

use crate::application::select_habit;
use crate::domain::{ExclusionSet, Habit};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, HabitRepository};

/// Service for setting which weekdays a habit skips
pub struct ExclusionService {
    repository: FileSystemRepository,
}

impl ExclusionService {
    /// Create a new exclusion service
    pub fn new(repository: FileSystemRepository) -> Self {
        ExclusionService { repository }
    }

    /// Replace the excluded weekdays of habit `number`.
    /// `None` or an empty list clears them.
    pub fn set(&self, number: usize, values: Option<&str>) -> Result<(Habit, ExclusionSet)> {
        let habit = select_habit(&self.repository, number)?;
        let set = match values {
            Some(list) => ExclusionSet::parse_list(list)?,
            None => ExclusionSet::new(),
        };

        self.repository.write_exclusions(&habit, &set)?;
        Ok((habit, set))
    }
}
