use crate::models::attendance::DailyAttendance;
use crate::models::status::AttendanceStatus;
use chrono::{DateTime, Utc};

/// Seconds since the open session started, floored. 0 when nothing is open.
pub fn elapsed_seconds(current: Option<&DailyAttendance>, now: DateTime<Utc>) -> i64 {
    current
        .and_then(|rec| rec.open_session())
        .map(|s| (now - s.start_time).num_milliseconds().div_euclid(1000))
        .unwrap_or(0)
}

/// Closed work time plus the running work session, in seconds.
pub fn aggregate_work_seconds(current: Option<&DailyAttendance>, now: DateTime<Utc>) -> i64 {
    let Some(rec) = current else {
        return 0;
    };

    let running = if rec.status == AttendanceStatus::Working {
        elapsed_seconds(current, now)
    } else {
        0
    };

    rec.total_work_minutes * 60 + running
}

/// Closed break/lunch time plus the running break or lunch, in seconds.
pub fn aggregate_break_seconds(current: Option<&DailyAttendance>, now: DateTime<Utc>) -> i64 {
    let Some(rec) = current else {
        return 0;
    };

    let running = if rec.status.is_on_break() {
        elapsed_seconds(current, now)
    } else {
        0
    };

    rec.total_break_minutes * 60 + running
}
