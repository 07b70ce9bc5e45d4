use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{dl, init_db, init_db_with_data, punch, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    dl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_work_break_out_scenario() {
    let db_path = setup_test_db("cli_scenario");
    init_db(&db_path);

    dl().args([
        "--db",
        &db_path,
        "work",
        "--user",
        "u1",
        "--at",
        "2025-10-01T09:00:00Z",
    ])
    .assert()
    .success()
    .stdout(contains("OFFLINE → WORKING"));

    dl().args([
        "--db",
        &db_path,
        "break",
        "--user",
        "u1",
        "--at",
        "2025-10-01T09:10:00Z",
    ])
    .assert()
    .success()
    .stdout(contains("Closed Work session: 10 min"))
    .stdout(contains("WORKING → ON_BREAK"));

    dl().args([
        "--db",
        &db_path,
        "out",
        "--user",
        "u1",
        "--at",
        "2025-10-01T09:15:00Z",
    ])
    .assert()
    .success()
    .stdout(contains("Closed Break session: 5 min"))
    .stdout(contains("ON_BREAK → OFFLINE"));

    dl().args([
        "--db",
        &db_path,
        "status",
        "--user",
        "u1",
        "--at",
        "2025-10-01T10:00:00Z",
    ])
    .assert()
    .success()
    .stdout(contains("Offline"))
    .stdout(contains("Work time    : 00:10:00"))
    .stdout(contains("Break time   : 00:05:00"))
    .stdout(contains("66.7%"));
}

#[test]
fn test_status_shows_running_session() {
    let db_path = setup_test_db("cli_status_running");
    init_db(&db_path);
    punch(&db_path, "work", "u1", "2025-10-01T09:00:00Z");

    dl().args([
        "--db",
        &db_path,
        "status",
        "--user",
        "u1",
        "--at",
        "2025-10-01T10:01:01Z",
    ])
    .assert()
    .success()
    .stdout(contains("Working"))
    .stdout(contains("Current      : 01:01:01"))
    .stdout(contains("Work time    : 01:01:01"))
    .stdout(contains("100.0%"));
}

#[test]
fn test_status_before_running_session_fails() {
    let db_path = setup_test_db("cli_status_before_open");
    init_db(&db_path);
    punch(&db_path, "break", "u1", "2025-10-01T09:00:00Z");
    punch(&db_path, "work", "u1", "2025-10-01T09:30:00Z");

    dl().args([
        "--db",
        &db_path,
        "status",
        "--user",
        "u1",
        "--at",
        "2025-10-01T09:20:00Z",
    ])
    .assert()
    .failure()
    .stderr(contains("earlier than the start of the running session"));
}

#[test]
fn test_punch_across_midnight_with_open_session_fails() {
    let db_path = setup_test_db("cli_midnight");
    init_db(&db_path);
    punch(&db_path, "work", "u1", "2025-10-01T23:00:00Z");

    dl().args([
        "--db",
        &db_path,
        "out",
        "--user",
        "u1",
        "--at",
        "2025-10-02T00:30:00Z",
    ])
    .assert()
    .failure()
    .stderr(contains("open session on 2025-10-01"));

    punch(&db_path, "out", "u1", "2025-10-01T23:59:00Z");
    punch(&db_path, "work", "u1", "2025-10-02T00:30:00Z");
}

#[test]
fn test_status_without_record_is_offline() {
    let db_path = setup_test_db("cli_status_empty");
    init_db(&db_path);

    dl().args([
        "--db",
        &db_path,
        "status",
        "--user",
        "nobody",
        "--at",
        "2025-10-01T10:00:00Z",
    ])
    .assert()
    .success()
    .stdout(contains("Offline"))
    .stdout(contains("Current      : 00:00:00"));
}

#[test]
fn test_clock_out_while_offline_succeeds() {
    let db_path = setup_test_db("cli_out_offline");
    init_db(&db_path);

    dl().args([
        "--db",
        &db_path,
        "out",
        "--user",
        "u1",
        "--at",
        "2025-10-01T09:00:00Z",
    ])
    .assert()
    .success()
    .stdout(contains("OFFLINE → OFFLINE"));
}

#[test]
fn test_punch_in_the_past_fails() {
    let db_path = setup_test_db("cli_backwards");
    init_db(&db_path);
    punch(&db_path, "work", "u1", "2025-10-01T09:00:00Z");

    dl().args([
        "--db",
        &db_path,
        "lunch",
        "--user",
        "u1",
        "--at",
        "2025-10-01T08:00:00Z",
    ])
    .assert()
    .failure()
    .stderr(contains("earlier than the last recorded instant"));
}

#[test]
fn test_invalid_timestamp_fails() {
    let db_path = setup_test_db("cli_bad_ts");
    init_db(&db_path);

    dl().args(["--db", &db_path, "work", "--user", "u1", "--at", "9am"])
        .assert()
        .failure()
        .stderr(contains("Invalid time: 9am"));
}

#[test]
fn test_invalid_user_fails() {
    let db_path = setup_test_db("cli_bad_user");
    init_db(&db_path);

    dl().args([
        "--db",
        &db_path,
        "work",
        "--user",
        "bad user",
        "--at",
        "2025-10-01T09:00:00Z",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid user id"));
}

#[test]
fn test_list_period_shows_history() {
    let db_path = setup_test_db("cli_list_period");
    init_db_with_data(&db_path);

    dl().args(["--db", &db_path, "list", "--user", "u1", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-15"))
        .stdout(contains("Lunch"))
        .stdout(contains("Active"))
        .stdout(contains("Ongoing"))
        .stdout(contains("07:30"));
}

#[test]
fn test_list_single_day_filters_others() {
    let db_path = setup_test_db("cli_list_day");
    init_db_with_data(&db_path);

    dl().args([
        "--db",
        &db_path,
        "list",
        "--user",
        "u1",
        "--period",
        "2025-09-01",
    ])
    .assert()
    .success()
    .stdout(contains("2025-09-01"))
    .stdout(contains("2025-09-15").not());
}

#[test]
fn test_list_unknown_user_reports_nothing() {
    let db_path = setup_test_db("cli_list_nobody");
    init_db_with_data(&db_path);

    dl().args(["--db", &db_path, "list", "--user", "ghost", "--period", "2025"])
        .assert()
        .success()
        .stdout(contains("No attendance records for ghost"));
}

#[test]
fn test_log_print_lists_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data(&db_path);

    dl().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"))
        .stdout(contains("u1@2025-09-01"))
        .stdout(contains("WORKING -> ON_LUNCH"));
}
