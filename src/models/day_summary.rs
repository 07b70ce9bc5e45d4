use super::status::AttendanceStatus;
use serde::Serialize;

/// Derived display values for one record at one instant.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub status: AttendanceStatus,
    pub elapsed_seconds: i64,
    pub work_seconds: i64,
    pub break_seconds: i64,
    pub productivity: f64,
    pub session_count: usize,
}
