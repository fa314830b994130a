//! Output formatting utilities

use crate::application::HabitStatus;
use crate::domain::{weekday, Calendar};

/// Weekday initials over the strip columns, today last (e.g. `   SMTWTFS`)
pub fn format_week_header(calendar: &Calendar) -> String {
    let initials: String = (-6..=0)
        .map(|offset| weekday::initial(calendar.day(offset).weekday))
        .collect();
    format!("   {}", initials)
}

/// Format the habit list: `<n>. <strip> <streak>d <name>` per line
pub fn format_status_list(statuses: &[HabitStatus]) -> String {
    if statuses.is_empty() {
        return "No habits yet. Add one with 'streaks add <name>'\n".to_string();
    }

    let mut output = String::new();
    for status in statuses {
        output.push_str(&format!(
            "{}. {} {}d {}\n",
            status.number, status.strip, status.streak, status.habit
        ));
    }
    output
}
