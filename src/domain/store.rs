//! Lookups the streak engine consumes

use crate::domain::{DateKey, ExclusionSet, Habit};
use chrono::Weekday;
use std::collections::{HashMap, HashSet};

/// Read-only view of habit state used by the streak engine.
///
/// Both lookups are total: missing data answers `false`. Implementations
/// resolve their own I/O failures before answering.
pub trait HabitStore {
    /// Whether `weekday` is in the habit's exclusion set
    fn is_weekday_excluded(&self, habit: &Habit, weekday: Weekday) -> bool;

    /// Whether a completion marker exists for `date`
    fn marker_exists(&self, habit: &Habit, date: DateKey) -> bool;

    /// Whole exclusion set for a habit.
    ///
    /// The default asks `is_weekday_excluded` once per weekday.
    fn exclusions(&self, habit: &Habit) -> ExclusionSet {
        crate::domain::weekday::WEEK_FROM_SUNDAY
            .into_iter()
            .filter(|day| self.is_weekday_excluded(habit, *day))
            .collect()
    }
}

impl<S: HabitStore + ?Sized> HabitStore for &S {
    fn is_weekday_excluded(&self, habit: &Habit, weekday: Weekday) -> bool {
        (**self).is_weekday_excluded(habit, weekday)
    }

    fn marker_exists(&self, habit: &Habit, date: DateKey) -> bool {
        (**self).marker_exists(habit, date)
    }

    fn exclusions(&self, habit: &Habit) -> ExclusionSet {
        (**self).exclusions(habit)
    }
}

/// In-memory store, for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    markers: HashMap<Habit, HashSet<DateKey>>,
    exclusions: HashMap<Habit, ExclusionSet>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn mark(&mut self, habit: &Habit, date: DateKey) {
        self.markers.entry(habit.clone()).or_default().insert(date);
    }

    pub fn unmark(&mut self, habit: &Habit, date: DateKey) {
        if let Some(dates) = self.markers.get_mut(habit) {
            dates.remove(&date);
        }
    }

    pub fn set_exclusions(&mut self, habit: &Habit, set: ExclusionSet) {
        if set.is_empty() {
            self.exclusions.remove(habit);
        } else {
            self.exclusions.insert(habit.clone(), set);
        }
    }
}

impl HabitStore for MemoryStore {
    fn is_weekday_excluded(&self, habit: &Habit, weekday: Weekday) -> bool {
        self.exclusions
            .get(habit)
            .is_some_and(|set| set.contains(weekday))
    }

    fn marker_exists(&self, habit: &Habit, date: DateKey) -> bool {
        self.markers
            .get(habit)
            .is_some_and(|dates| dates.contains(&date))
    }

    fn exclusions(&self, habit: &Habit) -> ExclusionSet {
        self.exclusions.get(habit).copied().unwrap_or_default()
    }
}
