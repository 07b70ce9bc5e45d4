mod common;
use common::setup_test_db;

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use dutylog::core::punch::PunchLogic;
use dutylog::core::tracker::apply_transition;
use dutylog::db::initialize::init_db;
use dutylog::db::pool::DbPool;
use dutylog::db::queries::{
    load_attendance, load_attendance_dates, load_log, load_open_session_date, save_attendance,
};
use dutylog::errors::AppError;
use dutylog::models::action::Action;
use dutylog::models::status::AttendanceStatus;

fn open_pool(name: &str) -> DbPool {
    let path = setup_test_db(name);
    let pool = DbPool::new(&path).expect("open db");
    init_db(&pool.conn).expect("init db");
    pool
}

#[test]
fn saved_record_loads_back_identical() {
    let pool = open_pool("db_roundtrip");
    let t0 = Utc.with_ymd_and_hms(2025, 10, 1, 9, 0, 0).unwrap();

    let a = apply_transition(None, "u1", Action::Work, t0);
    let b = apply_transition(Some(&a), "u1", Action::Break, t0 + Duration::milliseconds(754_321));

    save_attendance(&pool.conn, &b).expect("save");
    let loaded = load_attendance(&pool.conn, "u1", &b.date)
        .expect("load")
        .expect("record present");

    assert_eq!(loaded, b);
}

#[test]
fn saving_again_replaces_the_day() {
    let pool = open_pool("db_replace");
    let t0 = Utc.with_ymd_and_hms(2025, 10, 1, 9, 0, 0).unwrap();

    let a = apply_transition(None, "u1", Action::Work, t0);
    save_attendance(&pool.conn, &a).expect("save a");

    let b = apply_transition(Some(&a), "u1", Action::ClockOut, t0 + Duration::minutes(90));
    save_attendance(&pool.conn, &b).expect("save b");

    let loaded = load_attendance(&pool.conn, "u1", &b.date).unwrap().unwrap();
    assert_eq!(loaded.sessions.len(), 1);
    assert_eq!(loaded.total_work_minutes, 90);
    assert_eq!(loaded.status, AttendanceStatus::Offline);
}

#[test]
fn missing_day_loads_as_none() {
    let pool = open_pool("db_missing");
    let d = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    assert!(load_attendance(&pool.conn, "u1", &d).unwrap().is_none());
}

#[test]
fn records_are_kept_per_user() {
    let mut pool = open_pool("db_per_user");
    let t0 = Utc.with_ymd_and_hms(2025, 10, 1, 9, 0, 0).unwrap();

    PunchLogic::apply(&mut pool, "alice", Action::Work, t0).unwrap();
    PunchLogic::apply(&mut pool, "bob", Action::Lunch, t0).unwrap();

    let alice = load_attendance(&pool.conn, "alice", &t0.date_naive())
        .unwrap()
        .unwrap();
    let bob = load_attendance(&pool.conn, "bob", &t0.date_naive())
        .unwrap()
        .unwrap();

    assert_eq!(alice.status, AttendanceStatus::Working);
    assert_eq!(bob.status, AttendanceStatus::OnLunch);
    assert_eq!(
        load_attendance_dates(&pool.conn, "alice").unwrap(),
        vec![t0.date_naive()]
    );
}

#[test]
fn punches_accumulate_and_log() {
    let mut pool = open_pool("db_punches");
    let t0 = Utc.with_ymd_and_hms(2025, 10, 1, 9, 0, 0).unwrap();

    PunchLogic::apply(&mut pool, "u1", Action::Work, t0).unwrap();
    PunchLogic::apply(&mut pool, "u1", Action::Break, t0 + Duration::minutes(10)).unwrap();
    let last =
        PunchLogic::apply(&mut pool, "u1", Action::ClockOut, t0 + Duration::minutes(15)).unwrap();

    assert_eq!(last.total_work_minutes, 10);
    assert_eq!(last.total_break_minutes, 5);
    assert_eq!(last.status, AttendanceStatus::Offline);

    let ops: Vec<String> = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|r| r.operation != "migration_applied")
        .map(|r| r.operation)
        .collect();
    assert_eq!(ops, vec!["work", "break", "clock_out"]);
}

#[test]
fn punch_before_last_instant_is_rejected() {
    let mut pool = open_pool("db_backwards");
    let t0 = Utc.with_ymd_and_hms(2025, 10, 1, 9, 0, 0).unwrap();

    PunchLogic::apply(&mut pool, "u1", Action::Work, t0).unwrap();
    let res = PunchLogic::apply(&mut pool, "u1", Action::Break, t0 - Duration::minutes(1));
    assert!(matches!(res, Err(AppError::InvalidTime(_))));

    // nothing changed
    let rec = load_attendance(&pool.conn, "u1", &t0.date_naive())
        .unwrap()
        .unwrap();
    assert_eq!(rec.sessions.len(), 1);
    assert_eq!(rec.status, AttendanceStatus::Working);
}

fn open_sessions(pool: &DbPool, user: &str, days: &[NaiveDate]) -> usize {
    days.iter()
        .filter_map(|d| load_attendance(&pool.conn, user, d).unwrap())
        .flat_map(|r| r.sessions)
        .filter(|s| s.end_time.is_none())
        .count()
}

#[test]
fn punch_after_midnight_with_open_session_is_rejected() {
    let mut pool = open_pool("db_midnight");
    let late = Utc.with_ymd_and_hms(2025, 10, 1, 23, 0, 0).unwrap();
    let after = Utc.with_ymd_and_hms(2025, 10, 2, 0, 30, 0).unwrap();
    let days = [late.date_naive(), after.date_naive()];

    PunchLogic::apply(&mut pool, "u1", Action::Work, late).unwrap();

    let out = PunchLogic::apply(&mut pool, "u1", Action::ClockOut, after);
    assert!(matches!(&out, Err(AppError::Precondition(m)) if m.contains("2025-10-01")));

    let work = PunchLogic::apply(&mut pool, "u1", Action::Work, after);
    assert!(matches!(work, Err(AppError::Precondition(_))));

    assert_eq!(open_sessions(&pool, "u1", &days), 1);
    assert!(load_attendance(&pool.conn, "u1", &days[1]).unwrap().is_none());
    assert_eq!(
        load_open_session_date(&pool.conn, "u1").unwrap(),
        Some(days[0])
    );
}

#[test]
fn closing_the_open_day_unblocks_the_next() {
    let mut pool = open_pool("db_midnight_close");
    let late = Utc.with_ymd_and_hms(2025, 10, 1, 23, 0, 0).unwrap();
    let after = Utc.with_ymd_and_hms(2025, 10, 2, 0, 30, 0).unwrap();
    let days = [late.date_naive(), after.date_naive()];

    PunchLogic::apply(&mut pool, "u1", Action::Work, late).unwrap();
    PunchLogic::apply(&mut pool, "u1", Action::ClockOut, late + Duration::minutes(59)).unwrap();
    let next = PunchLogic::apply(&mut pool, "u1", Action::Work, after).unwrap();

    assert_eq!(next.status, AttendanceStatus::Working);
    assert_eq!(open_sessions(&pool, "u1", &days), 1);
    assert_eq!(
        load_open_session_date(&pool.conn, "u1").unwrap(),
        Some(days[1])
    );

    let first = load_attendance(&pool.conn, "u1", &days[0]).unwrap().unwrap();
    assert_eq!(first.status, AttendanceStatus::Offline);
    assert_eq!(first.total_work_minutes, 59);
}

#[test]
fn open_session_of_another_user_does_not_block() {
    let mut pool = open_pool("db_midnight_other_user");
    let late = Utc.with_ymd_and_hms(2025, 10, 1, 23, 0, 0).unwrap();
    let after = Utc.with_ymd_and_hms(2025, 10, 2, 0, 30, 0).unwrap();

    PunchLogic::apply(&mut pool, "alice", Action::Work, late).unwrap();
    let bob = PunchLogic::apply(&mut pool, "bob", Action::Work, after).unwrap();
    assert_eq!(bob.status, AttendanceStatus::Working);
}

#[test]
fn migrations_run_once() {
    let pool = open_pool("db_migrations");
    init_db(&pool.conn).expect("second init");

    let applied = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|r| r.operation == "migration_applied")
        .count();
    assert_eq!(applied, 2);
}
