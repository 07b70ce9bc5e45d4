// src/export/model.rs

use crate::models::attendance::DailyAttendance;
use crate::models::session::Session;
use crate::utils::time::to_iso;
use serde::Serialize;

/// Flat row for one session of a day.
///
/// `end_time` reads `"Active"` and `duration_minutes` reads `"Ongoing"`
/// while the session is open.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionExport {
    #[serde(rename = "type")]
    pub kind: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: String,
    pub date: String,
}

impl SessionExport {
    pub fn from_session(s: &Session, date: &str) -> Self {
        Self {
            kind: s.kind.to_db_str().to_string(),
            start_time: to_iso(&s.start_time),
            end_time: s
                .end_time
                .as_ref()
                .map(to_iso)
                .unwrap_or_else(|| "Active".to_string()),
            duration_minutes: s
                .duration_minutes()
                .map(|m| m.to_string())
                .unwrap_or_else(|| "Ongoing".to_string()),
            date: date.to_string(),
        }
    }
}

/// All rows of one day, in session order.
pub fn rows_for_day(rec: &DailyAttendance) -> Vec<SessionExport> {
    let date = rec.date_str();
    rec.sessions
        .iter()
        .map(|s| SessionExport::from_session(s, &date))
        .collect()
}
