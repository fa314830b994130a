//! CLI command definitions

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "streaks")]
#[command(about = "Track daily habits and their streaks", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List habits with the last seven days and the current streak (default)
    #[command(visible_alias = "ls")]
    List,

    /// Add a new habit
    #[command(visible_alias = "a")]
    Add {
        /// Habit name
        name: String,
    },

    /// Delete a habit and all of its history
    #[command(visible_aliases = ["rm", "del"])]
    Delete {
        /// Habit number as shown by the list
        number: usize,
    },

    /// Rename a habit
    #[command(visible_alias = "r")]
    Rename {
        /// Habit number as shown by the list
        number: usize,

        /// New habit name
        name: String,
    },

    /// Toggle completion for a day
    #[command(visible_alias = "t")]
    Toggle {
        /// Habit number as shown by the list
        number: usize,

        /// Day to toggle: today, yesterday, YYYY-MM-DD or MM-DD (default: today)
        date: Option<String>,
    },

    /// Mark today and the preceding days, for importing an existing streak
    #[command(visible_alias = "s")]
    Since {
        /// Habit number as shown by the list
        number: usize,

        /// Number of days to mark, ending today
        days: usize,
    },

    /// Set weekdays that do not count toward the streak (e.g. 'f,sa,su')
    Days {
        /// Habit number as shown by the list
        number: usize,

        /// Comma-separated weekdays: su, m, tu, w, th, f, sa. Omit to clear.
        values: Option<String>,
    },

    /// Print this help
    #[command(visible_alias = "h")]
    Help,
}
