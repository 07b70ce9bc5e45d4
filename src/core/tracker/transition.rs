//! The attendance state machine: one pure function from (record, action, instant)
//! to the next record.

use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::models::attendance::DailyAttendance;
use crate::models::session::Session;
use crate::models::status::AttendanceStatus;
use chrono::{DateTime, NaiveDate, Utc};

/// Calendar day a transition at `now` belongs to.
pub fn record_date(now: DateTime<Utc>) -> NaiveDate {
    now.date_naive()
}

/// Verify that `current` can be transitioned on behalf of `user_id` on `date`.
///
/// Rejects records owned by another user or day, more than one open session,
/// an open session that is not the last one, and a cached status that does not
/// match the open session.
pub fn check_preconditions(
    current: &DailyAttendance,
    user_id: &str,
    date: NaiveDate,
) -> AppResult<()> {
    if current.user_id != user_id {
        return Err(AppError::Precondition(format!(
            "record belongs to user '{}', not '{}'",
            current.user_id, user_id
        )));
    }

    if current.date != date {
        return Err(AppError::Precondition(format!(
            "record covers {}, not {}",
            current.date, date
        )));
    }

    let open: Vec<usize> = current
        .sessions
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_open())
        .map(|(i, _)| i)
        .collect();

    match open.as_slice() {
        [] => {}
        [i] if *i + 1 == current.sessions.len() => {}
        [i] => {
            return Err(AppError::Precondition(format!(
                "open session at position {} is not the last one",
                i + 1
            )));
        }
        many => {
            return Err(AppError::Precondition(format!(
                "{} sessions are open at once",
                many.len()
            )));
        }
    }

    let expected = AttendanceStatus::for_open(current.open_session().map(|s| s.kind));
    if current.status != expected {
        return Err(AppError::Precondition(format!(
            "status {} does not match open session (expected {})",
            current.status.to_db_str(),
            expected.to_db_str()
        )));
    }

    Ok(())
}

/// Apply `action` at `now`, returning the next record or the violated precondition.
///
/// The input record is left untouched.
pub fn try_apply_transition(
    current: Option<&DailyAttendance>,
    user_id: &str,
    action: Action,
    now: DateTime<Utc>,
) -> AppResult<DailyAttendance> {
    let date = record_date(now);

    let mut next = match current {
        Some(rec) => {
            check_preconditions(rec, user_id, date)?;
            rec.clone()
        }
        None => DailyAttendance::empty(user_id, date),
    };

    // Close the open session, if any.
    if let Some(last) = next.sessions.last_mut()
        && last.is_open()
    {
        last.end_time = Some(now);
        let minutes = last.duration_minutes().unwrap_or(0);
        if last.kind.is_break_like() {
            next.total_break_minutes += minutes;
        } else {
            next.total_work_minutes += minutes;
        }
    }

    match action.opens() {
        Some(kind) => {
            next.sessions.push(Session::open(user_id, kind, now));
            next.status = AttendanceStatus::for_open(Some(kind));
        }
        None => next.status = AttendanceStatus::Offline,
    }

    Ok(next)
}

/// Apply `action` at `now`. Any action is legal from any status.
///
/// # Panics
///
/// Panics when `current` fails [`check_preconditions`]: the transition is only
/// correct on a well-formed record, so a malformed one is a caller bug.
pub fn apply_transition(
    current: Option<&DailyAttendance>,
    user_id: &str,
    action: Action,
    now: DateTime<Utc>,
) -> DailyAttendance {
    match try_apply_transition(current, user_id, action, now) {
        Ok(next) => next,
        Err(e) => panic!("{e}"),
    }
}
