use serde::{Deserialize, Serialize};

/// Activity recorded by a single session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionType {
    Work,
    Break,
    Lunch,
}

impl SessionType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            SessionType::Work => "WORK",
            SessionType::Break => "BREAK",
            SessionType::Lunch => "LUNCH",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "WORK" => Some(SessionType::Work),
            "BREAK" => Some(SessionType::Break),
            "LUNCH" => Some(SessionType::Lunch),
            _ => None,
        }
    }

    /// Human label used by list/status output.
    pub fn label(&self) -> &'static str {
        match self {
            SessionType::Work => "Work",
            SessionType::Break => "Break",
            SessionType::Lunch => "Lunch",
        }
    }

    /// Break and lunch both count as break time.
    pub fn is_break_like(&self) -> bool {
        matches!(self, SessionType::Break | SessionType::Lunch)
    }
}
