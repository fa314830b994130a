//! File system repository
//!
//! Layout under the data directory:
//!
//! ```text
//! <data_dir>/
//!   config.toml          optional
//!   <habit>/
//!     2025-01-17         empty marker file, one per completed day
//!     days.txt           excluded weekdays, one token per line
//! ```

use crate::domain::{DateKey, ExclusionSet, Habit, HabitStore};
use crate::error::{Result, StreaksError};
use crate::infrastructure::Config;
use chrono::Weekday;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use walkdir::WalkDir;

/// File holding a habit's excluded weekdays
pub const EXCLUSIONS_FILE: &str = "days.txt";

/// Abstract repository for habit storage operations
pub trait HabitRepository {
    /// All habits, sorted case-insensitively by name
    fn list_habits(&self) -> Result<Vec<Habit>>;

    /// Create a habit; an existing habit of the same name is left alone
    fn add_habit(&self, name: &str) -> Result<Habit>;

    /// Remove a habit and everything recorded for it
    fn delete_habit(&self, habit: &Habit) -> Result<()>;

    /// Rename a habit, keeping its markers and exclusions
    fn rename_habit(&self, habit: &Habit, new_name: &str) -> Result<Habit>;

    /// Flip the marker for `date`; returns whether it is now present
    fn toggle_marker(&self, habit: &Habit, date: DateKey) -> Result<bool>;

    /// Create markers for every date given; returns how many were new
    fn create_markers<I>(&self, habit: &Habit, dates: I) -> Result<usize>
    where
        I: IntoIterator<Item = DateKey>;

    /// Read the exclusion set (empty when none is stored)
    fn read_exclusions(&self, habit: &Habit) -> Result<ExclusionSet>;

    /// Store the exclusion set; an empty set removes the record
    fn write_exclusions(&self, habit: &Habit, set: &ExclusionSet) -> Result<()>;
}

/// File system implementation of HabitRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a repository rooted at an existing directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Open the repository at `root`, creating the directory if needed
    pub fn open(root: PathBuf) -> Result<Self> {
        if !root.is_dir() {
            fs::create_dir_all(&root).map_err(|e| {
                tracing::warn!(path = %root.display(), error = %e, "cannot create data directory");
                StreaksError::DataDirUnavailable(root.clone())
            })?;
            tracing::debug!(path = %root.display(), "created data directory");
        }
        Ok(FileSystemRepository::new(root))
    }

    /// Open the repository at the configured data directory
    pub fn discover() -> Result<Self> {
        Self::open(Config::resolve_data_dir()?)
    }

    /// Load config.toml from the data directory
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn habit_dir(&self, habit: &Habit) -> PathBuf {
        self.root.join(&habit.name)
    }

    fn marker_path(&self, habit: &Habit, date: DateKey) -> PathBuf {
        self.habit_dir(habit).join(date.to_string())
    }

    fn exclusions_path(&self, habit: &Habit) -> PathBuf {
        self.habit_dir(habit).join(EXCLUSIONS_FILE)
    }

    fn ensure_exists(&self, habit: &Habit) -> Result<PathBuf> {
        let dir = self.habit_dir(habit);
        if dir.is_dir() {
            Ok(dir)
        } else {
            Err(StreaksError::HabitNotFound(habit.name.clone()))
        }
    }

    /// Habit names must be a single visible path component
    fn validate_name(name: &str) -> Result<()> {
        let trimmed = name.trim();
        let invalid = trimmed.is_empty()
            || trimmed != name
            || name.starts_with('.')
            || name.contains(['/', '\\'])
            || name.chars().any(char::is_control);

        if invalid {
            Err(StreaksError::InvalidHabitName(name.to_string()))
        } else {
            Ok(())
        }
    }
}

impl HabitRepository for FileSystemRepository {
    fn list_habits(&self) -> Result<Vec<Habit>> {
        let mut habits = Vec::new();

        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                StreaksError::Io(
                    e.into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("directory walk failed")),
                )
            })?;
            if !entry.file_type().is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            habits.push(Habit::new(name));
        }

        habits.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });

        Ok(habits)
    }

    fn add_habit(&self, name: &str) -> Result<Habit> {
        Self::validate_name(name)?;
        let habit = Habit::new(name);
        let dir = self.habit_dir(&habit);

        match fs::create_dir(&dir) {
            Ok(()) => tracing::debug!(habit = %habit, "created habit"),
            Err(e) if e.kind() == ErrorKind::AlreadyExists && dir.is_dir() => {
                tracing::debug!(habit = %habit, "habit already exists");
            }
            Err(e) => return Err(StreaksError::Io(e)),
        }

        Ok(habit)
    }

    fn delete_habit(&self, habit: &Habit) -> Result<()> {
        let dir = self.ensure_exists(habit)?;
        fs::remove_dir_all(dir)?;
        tracing::debug!(habit = %habit, "deleted habit");
        Ok(())
    }

    fn rename_habit(&self, habit: &Habit, new_name: &str) -> Result<Habit> {
        Self::validate_name(new_name)?;
        let from = self.ensure_exists(habit)?;
        let renamed = Habit::new(new_name);
        let to = self.habit_dir(&renamed);

        if to.exists() {
            return Err(StreaksError::HabitExists(new_name.to_string()));
        }

        fs::rename(from, to)?;
        tracing::debug!(from = %habit, to = %renamed, "renamed habit");
        Ok(renamed)
    }

    fn toggle_marker(&self, habit: &Habit, date: DateKey) -> Result<bool> {
        self.ensure_exists(habit)?;
        let path = self.marker_path(habit, date);

        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!(habit = %habit, date = %date, "removed marker");
            Ok(false)
        } else {
            fs::write(&path, "")?;
            tracing::debug!(habit = %habit, date = %date, "created marker");
            Ok(true)
        }
    }

    fn create_markers<I>(&self, habit: &Habit, dates: I) -> Result<usize>
    where
        I: IntoIterator<Item = DateKey>,
    {
        self.ensure_exists(habit)?;
        let mut requested = 0;
        let mut created = 0;

        for date in dates {
            requested += 1;
            let path = self.marker_path(habit, date);
            if !path.exists() {
                fs::write(&path, "")?;
                created += 1;
            }
        }

        tracing::debug!(habit = %habit, requested, created, "created markers");
        Ok(created)
    }

    fn read_exclusions(&self, habit: &Habit) -> Result<ExclusionSet> {
        match fs::read_to_string(self.exclusions_path(habit)) {
            Ok(contents) => Ok(ExclusionSet::from_lines(&contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ExclusionSet::new()),
            Err(e) => Err(StreaksError::Io(e)),
        }
    }

    fn write_exclusions(&self, habit: &Habit, set: &ExclusionSet) -> Result<()> {
        self.ensure_exists(habit)?;
        let path = self.exclusions_path(habit);

        if set.is_empty() {
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(StreaksError::Io(e)),
            }
            tracing::debug!(habit = %habit, "cleared excluded days");
        } else {
            fs::write(&path, set.to_lines())?;
            tracing::debug!(habit = %habit, days = %set, "wrote excluded days");
        }

        Ok(())
    }
}

// Lookups for the streak engine. Read failures count as "absent".
impl HabitStore for FileSystemRepository {
    fn is_weekday_excluded(&self, habit: &Habit, weekday: Weekday) -> bool {
        self.exclusions(habit).contains(weekday)
    }

    fn marker_exists(&self, habit: &Habit, date: DateKey) -> bool {
        let path = self.marker_path(habit, date);
        match fs::metadata(&path) {
            Ok(meta) => meta.is_file(),
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read marker, treating as absent");
                false
            }
        }
    }

    fn exclusions(&self, habit: &Habit) -> ExclusionSet {
        self.read_exclusions(habit).unwrap_or_else(|e| {
            tracing::warn!(habit = %habit, error = %e, "cannot read excluded days, treating as none");
            ExclusionSet::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn key(y: i32, m: u32, d: u32) -> DateKey {
        DateKey::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn repo() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        (temp, repo)
    }

    #[test]
    fn test_open_creates_data_dir() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("nested").join("streaks");
        let repo = FileSystemRepository::open(root.clone()).unwrap();
        assert!(root.is_dir());
        assert_eq!(repo.root, root);
    }

    #[test]
    fn test_list_empty() {
        let (_temp, repo) = repo();
        assert!(repo.list_habits().unwrap().is_empty());
    }

    #[test]
    fn test_list_sorted_case_insensitive() {
        let (_temp, repo) = repo();
        repo.add_habit("walk").unwrap();
        repo.add_habit("Read").unwrap();
        repo.add_habit("floss").unwrap();

        let names: Vec<String> = repo
            .list_habits()
            .unwrap()
            .into_iter()
            .map(|h| h.name)
            .collect();
        assert_eq!(names, vec!["floss", "Read", "walk"]);
    }

    #[test]
    fn test_list_skips_files_and_hidden_dirs() {
        let (temp, repo) = repo();
        repo.add_habit("read").unwrap();
        fs::write(temp.path().join("config.toml"), "").unwrap();
        fs::create_dir(temp.path().join(".cache")).unwrap();

        let habits = repo.list_habits().unwrap();
        assert_eq!(habits, vec![Habit::new("read")]);
    }

    #[test]
    fn test_add_existing_is_noop() {
        let (temp, repo) = repo();
        let habit = repo.add_habit("read").unwrap();
        repo.toggle_marker(&habit, key(2025, 1, 17)).unwrap();

        repo.add_habit("read").unwrap();
        assert!(temp.path().join("read").join("2025-01-17").exists());
    }

    #[test]
    fn test_add_rejects_bad_names() {
        let (_temp, repo) = repo();
        for name in ["", " ", ".hidden", "a/b", "..", " padded"] {
            match repo.add_habit(name) {
                Err(StreaksError::InvalidHabitName(_)) => {}
                other => panic!("Expected InvalidHabitName for {:?}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_delete_habit() {
        let (temp, repo) = repo();
        let habit = repo.add_habit("read").unwrap();
        repo.toggle_marker(&habit, key(2025, 1, 17)).unwrap();

        repo.delete_habit(&habit).unwrap();
        assert!(!temp.path().join("read").exists());
    }

    #[test]
    fn test_delete_missing_habit() {
        let (_temp, repo) = repo();
        match repo.delete_habit(&Habit::new("ghost")) {
            Err(StreaksError::HabitNotFound(name)) => assert_eq!(name, "ghost"),
            other => panic!("Expected HabitNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_rename_keeps_markers() {
        let (_temp, repo) = repo();
        let habit = repo.add_habit("read").unwrap();
        repo.toggle_marker(&habit, key(2025, 1, 17)).unwrap();

        let renamed = repo.rename_habit(&habit, "reading").unwrap();
        assert!(repo.marker_exists(&renamed, key(2025, 1, 17)));
        assert!(!repo.marker_exists(&habit, key(2025, 1, 17)));
    }

    #[test]
    fn test_rename_refuses_overwrite() {
        let (_temp, repo) = repo();
        let habit = repo.add_habit("read").unwrap();
        repo.add_habit("write").unwrap();

        match repo.rename_habit(&habit, "write") {
            Err(StreaksError::HabitExists(name)) => assert_eq!(name, "write"),
            other => panic!("Expected HabitExists, got {:?}", other),
        }
    }

    #[test]
    fn test_toggle_marker_twice_restores_absence() {
        let (temp, repo) = repo();
        let habit = repo.add_habit("read").unwrap();
        let date = key(2025, 1, 7);

        assert!(repo.toggle_marker(&habit, date).unwrap());
        assert!(temp.path().join("read").join("2025-01-07").is_file());
        assert!(repo.marker_exists(&habit, date));

        assert!(!repo.toggle_marker(&habit, date).unwrap());
        assert!(!repo.marker_exists(&habit, date));
    }

    #[test]
    fn test_create_markers_counts_new_only() {
        let (_temp, repo) = repo();
        let habit = repo.add_habit("read").unwrap();
        repo.toggle_marker(&habit, key(2025, 1, 16)).unwrap();

        let dates = [key(2025, 1, 15), key(2025, 1, 16), key(2025, 1, 17)];
        assert_eq!(repo.create_markers(&habit, dates).unwrap(), 2);
        for date in dates {
            assert!(repo.marker_exists(&habit, date));
        }
    }

    #[test]
    fn test_exclusions_absent_means_empty() {
        let (_temp, repo) = repo();
        let habit = repo.add_habit("read").unwrap();
        assert!(repo.read_exclusions(&habit).unwrap().is_empty());
        assert!(!repo.is_weekday_excluded(&habit, Weekday::Sun));
    }

    #[test]
    fn test_write_and_clear_exclusions() {
        let (temp, repo) = repo();
        let habit = repo.add_habit("read").unwrap();
        let set = ExclusionSet::parse_list("f,sa,su").unwrap();

        repo.write_exclusions(&habit, &set).unwrap();
        let contents = fs::read_to_string(temp.path().join("read").join(EXCLUSIONS_FILE)).unwrap();
        assert_eq!(contents, "su\nf\nsa\n");
        assert!(repo.is_weekday_excluded(&habit, Weekday::Fri));
        assert!(!repo.is_weekday_excluded(&habit, Weekday::Mon));

        repo.write_exclusions(&habit, &ExclusionSet::new()).unwrap();
        assert!(!temp.path().join("read").join(EXCLUSIONS_FILE).exists());
        assert!(!repo.is_weekday_excluded(&habit, Weekday::Fri));
    }

    #[test]
    fn test_hand_written_exclusions_are_case_insensitive() {
        let (temp, repo) = repo();
        let habit = repo.add_habit("read").unwrap();
        fs::write(temp.path().join("read").join(EXCLUSIONS_FILE), "SA\nSu\n").unwrap();

        assert!(repo.is_weekday_excluded(&habit, Weekday::Sat));
        assert!(repo.is_weekday_excluded(&habit, Weekday::Sun));
    }

    #[test]
    fn test_hand_written_long_names_are_ignored() {
        let (temp, repo) = repo();
        let habit = repo.add_habit("read").unwrap();
        fs::write(temp.path().join("read").join(EXCLUSIONS_FILE), "sat\nsu\n").unwrap();

        assert!(!repo.is_weekday_excluded(&habit, Weekday::Sat));
        assert!(repo.is_weekday_excluded(&habit, Weekday::Sun));
    }

    #[test]
    fn test_lookups_on_missing_habit_are_false() {
        let (_temp, repo) = repo();
        let ghost = Habit::new("ghost");
        assert!(!repo.marker_exists(&ghost, key(2025, 1, 17)));
        assert!(repo.exclusions(&ghost).is_empty());
    }

    #[test]
    fn test_load_config_defaults() {
        let (_temp, repo) = repo();
        assert_eq!(repo.load_config().unwrap(), Config::default());
    }
}
