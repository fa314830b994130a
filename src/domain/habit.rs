//! Habit identity

use std::fmt;

/// A tracked habit, identified by name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Habit {
    pub name: String,
}

impl Habit {
    pub fn new(name: impl Into<String>) -> Self {
        Habit { name: name.into() }
    }
}

impl fmt::Display for Habit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
