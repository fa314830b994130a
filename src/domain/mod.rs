//! Domain layer - Streak rules and value types

pub mod calendar;
pub mod date_input;
pub mod exclusion;
pub mod habit;
pub mod store;
pub mod streak;
pub mod weekday;

pub use calendar::{Calendar, CalendarDay, DateKey};
pub use date_input::DateInput;
pub use exclusion::ExclusionSet;
pub use habit::Habit;
pub use store::{HabitStore, MemoryStore};
pub use streak::{DayState, StreakEngine, WeekStrip, DEFAULT_MAX_LOOKBACK_DAYS};
