//! Application layer - Use cases and orchestration

pub mod exclusions;
pub mod manage_habits;
pub mod mark;
pub mod status;

pub use exclusions::ExclusionService;
pub use manage_habits::HabitService;
pub use mark::{MarkService, ToggleOutcome};
pub use status::{HabitStatus, StatusService};

use crate::domain::Habit;
use crate::error::{Result, StreaksError};
use crate::infrastructure::HabitRepository;

/// Resolve a 1-based habit number against the sorted habit list
pub fn select_habit<R: HabitRepository>(repository: &R, number: usize) -> Result<Habit> {
    let habits = repository.list_habits()?;
    number
        .checked_sub(1)
        .and_then(|index| habits.into_iter().nth(index))
        .ok_or_else(|| StreaksError::InvalidHabitNumber(number.to_string()))
}
