use crate::db::models::LogRow;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::DailyAttendance;
use crate::models::session::Session;
use crate::models::session_type::SessionType;
use crate::models::status::AttendanceStatus;
use crate::utils::time::to_iso;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_db_timestamp(idx: usize, s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| conversion_error(idx, AppError::InvalidTime(s.to_string())))
}

pub fn map_session(row: &Row) -> Result<Session> {
    let kind_str: String = row.get("kind")?;
    let kind = SessionType::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(0, AppError::InvalidSessionType(kind_str.clone())))?;

    let start_str: String = row.get("start_time")?;
    let end_str: Option<String> = row.get("end_time")?;

    Ok(Session {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        kind,
        start_time: parse_db_timestamp(0, &start_str)?,
        end_time: end_str.map(|s| parse_db_timestamp(0, &s)).transpose()?,
    })
}

fn load_sessions(conn: &Connection, user_id: &str, date_str: &str) -> AppResult<Vec<Session>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, kind, start_time, end_time
         FROM sessions
         WHERE user_id = ?1 AND date = ?2
         ORDER BY seq ASC",
    )?;

    let rows = stmt.query_map(params![user_id, date_str], map_session)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Load the record for `user_id` on `date`, if one was ever saved.
pub fn load_attendance(
    conn: &Connection,
    user_id: &str,
    date: &NaiveDate,
) -> AppResult<Option<DailyAttendance>> {
    let date_str = date.format("%Y-%m-%d").to_string();

    let header: Option<(String, i64, i64)> = conn
        .query_row(
            "SELECT status, total_work_minutes, total_break_minutes
             FROM attendance
             WHERE user_id = ?1 AND date = ?2",
            params![user_id, &date_str],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .optional()?;

    let Some((status_str, work, brk)) = header else {
        return Ok(None);
    };

    let status = AttendanceStatus::from_db_str(&status_str)
        .ok_or_else(|| AppError::InvalidStatus(status_str.clone()))?;

    Ok(Some(DailyAttendance {
        user_id: user_id.to_string(),
        date: *date,
        sessions: load_sessions(conn, user_id, &date_str)?,
        status,
        total_work_minutes: work,
        total_break_minutes: brk,
    }))
}

/// Store `rec`, replacing whatever was saved for the same user and day.
///
/// Issues several statements: run it inside a transaction.
pub fn save_attendance(conn: &Connection, rec: &DailyAttendance) -> AppResult<()> {
    let date_str = rec.date_str();

    conn.execute(
        "INSERT INTO attendance (user_id, date, status, total_work_minutes, total_break_minutes, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(user_id, date) DO UPDATE SET
             status = excluded.status,
             total_work_minutes = excluded.total_work_minutes,
             total_break_minutes = excluded.total_break_minutes,
             updated_at = excluded.updated_at",
        params![
            rec.user_id,
            &date_str,
            rec.status.to_db_str(),
            rec.total_work_minutes,
            rec.total_break_minutes,
            to_iso(&Utc::now()),
        ],
    )?;

    conn.execute(
        "DELETE FROM sessions WHERE user_id = ?1 AND date = ?2",
        params![rec.user_id, &date_str],
    )?;

    let mut stmt = conn.prepare_cached(
        "INSERT INTO sessions (id, user_id, date, seq, kind, start_time, end_time)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;

    for (seq, s) in rec.sessions.iter().enumerate() {
        stmt.execute(params![
            s.id,
            s.user_id,
            &date_str,
            seq as i64,
            s.kind.to_db_str(),
            to_iso(&s.start_time),
            s.end_time.as_ref().map(to_iso),
        ])?;
    }

    Ok(())
}

/// Day of the user's open session, if any day still holds one.
pub fn load_open_session_date(conn: &Connection, user_id: &str) -> AppResult<Option<NaiveDate>> {
    let date: Option<String> = conn
        .query_row(
            "SELECT date FROM sessions
             WHERE user_id = ?1 AND end_time IS NULL
             ORDER BY date DESC
             LIMIT 1",
            [user_id],
            |row| row.get(0),
        )
        .optional()?;

    date.map(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s)))
        .transpose()
}

/// Days that hold a record for `user_id`, oldest first.
pub fn load_attendance_dates(conn: &Connection, user_id: &str) -> AppResult<Vec<NaiveDate>> {
    let mut stmt =
        conn.prepare("SELECT date FROM attendance WHERE user_id = ?1 ORDER BY date ASC")?;

    let rows = stmt.query_map([user_id], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        let s = r?;
        let d = NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s))?;
        out.push(d);
    }
    Ok(out)
}

pub fn load_log(conn: &Connection) -> AppResult<Vec<LogRow>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(LogRow {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
