#![allow(dead_code)]

use assert_cmd::Command;
use chrono::NaiveDate;
use std::path::Path;

/// "Today" for every command run by the tests (a Friday)
pub const TODAY: &str = "2025-01-17";

pub fn today() -> NaiveDate {
    TODAY.parse().unwrap()
}

pub fn streaks_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("streaks").unwrap();
    cmd.env("STREAKS_DIR", data_dir);
    cmd.env("STREAKS_TODAY", TODAY);
    cmd.env_remove("RUST_LOG");
    cmd
}
