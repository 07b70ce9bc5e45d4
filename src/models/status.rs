use super::session_type::SessionType;
use serde::{Deserialize, Serialize};

/// Cached status of a daily record: the type of the open session, or Offline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    #[default]
    Offline,
    Working,
    OnBreak,
    OnLunch,
}

impl AttendanceStatus {
    /// Status implied by an open session of the given type.
    pub fn for_open(kind: Option<SessionType>) -> Self {
        match kind {
            None => AttendanceStatus::Offline,
            Some(SessionType::Work) => AttendanceStatus::Working,
            Some(SessionType::Break) => AttendanceStatus::OnBreak,
            Some(SessionType::Lunch) => AttendanceStatus::OnLunch,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Offline => "OFFLINE",
            AttendanceStatus::Working => "WORKING",
            AttendanceStatus::OnBreak => "ON_BREAK",
            AttendanceStatus::OnLunch => "ON_LUNCH",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "OFFLINE" => Some(AttendanceStatus::Offline),
            "WORKING" => Some(AttendanceStatus::Working),
            "ON_BREAK" => Some(AttendanceStatus::OnBreak),
            "ON_LUNCH" => Some(AttendanceStatus::OnLunch),
            _ => None,
        }
    }

    pub fn is_on_break(&self) -> bool {
        matches!(self, AttendanceStatus::OnBreak | AttendanceStatus::OnLunch)
    }
}
