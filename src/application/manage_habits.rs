//! Habit management use cases: add, delete, rename

use crate::application::select_habit;
use crate::domain::Habit;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, HabitRepository};

/// Service for creating and removing habits
pub struct HabitService {
    repository: FileSystemRepository,
}

impl HabitService {
    /// Create a new habit service
    pub fn new(repository: FileSystemRepository) -> Self {
        HabitService { repository }
    }

    /// Add a habit by name
    pub fn add(&self, name: &str) -> Result<Habit> {
        self.repository.add_habit(name)
    }

    /// Delete the habit at `number`
    pub fn delete(&self, number: usize) -> Result<Habit> {
        let habit = select_habit(&self.repository, number)?;
        self.repository.delete_habit(&habit)?;
        Ok(habit)
    }

    /// Rename the habit at `number`; returns (old, new)
    pub fn rename(&self, number: usize, new_name: &str) -> Result<(Habit, Habit)> {
        let habit = select_habit(&self.repository, number)?;
        let renamed = self.repository.rename_habit(&habit, new_name)?;
        Ok((habit, renamed))
    }
}
