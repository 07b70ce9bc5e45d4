#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dl() -> Command {
    cargo_bin_cmd!("dutylog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dutylog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dutylog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    dl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Run one punch command (`work`, `break`, `lunch`, `out`) for `user` at `at`.
pub fn punch(db_path: &str, cmd: &str, user: &str, at: &str) {
    dl().args(["--db", db_path, cmd, "--user", user, "--at", at])
        .assert()
        .success();
}

/// Initialize DB and record a small two-day dataset for user `u1`:
/// - 2025-09-01: work 09:00-12:00, lunch 12:00-12:30, work 12:30-17:00, out
/// - 2025-09-15: work 09:00-10:00, break 10:00 (still open)
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    punch(db_path, "work", "u1", "2025-09-01T09:00:00Z");
    punch(db_path, "lunch", "u1", "2025-09-01T12:00:00Z");
    punch(db_path, "work", "u1", "2025-09-01T12:30:00Z");
    punch(db_path, "out", "u1", "2025-09-01T17:00:00Z");

    punch(db_path, "work", "u1", "2025-09-15T09:00:00Z");
    punch(db_path, "break", "u1", "2025-09-15T10:00:00Z");
}
