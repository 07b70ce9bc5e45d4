use super::{session::Session, status::AttendanceStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One user's attendance record for a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAttendance {
    pub user_id: String,
    pub date: NaiveDate,
    pub sessions: Vec<Session>,
    pub status: AttendanceStatus,
    pub total_work_minutes: i64,
    pub total_break_minutes: i64,
}

impl DailyAttendance {
    /// Empty, offline record: the starting point of every day.
    pub fn empty(user_id: &str, date: NaiveDate) -> Self {
        Self {
            user_id: user_id.to_string(),
            date,
            sessions: Vec::new(),
            status: AttendanceStatus::Offline,
            total_work_minutes: 0,
            total_break_minutes: 0,
        }
    }

    /// The open session, if the record holds one in last position.
    pub fn open_session(&self) -> Option<&Session> {
        self.sessions.last().filter(|s| s.is_open())
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
