use super::session_type::SessionType;
use serde::{Deserialize, Serialize};

/// Transition requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Work,
    Break,
    Lunch,
    ClockOut,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Work, Action::Break, Action::Lunch, Action::ClockOut];

    /// Session type opened by this action (`None` for clock-out).
    pub fn opens(&self) -> Option<SessionType> {
        match self {
            Action::Work => Some(SessionType::Work),
            Action::Break => Some(SessionType::Break),
            Action::Lunch => Some(SessionType::Lunch),
            Action::ClockOut => None,
        }
    }

    /// Name written to the operation log.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Work => "work",
            Action::Break => "break",
            Action::Lunch => "lunch",
            Action::ClockOut => "clock_out",
        }
    }
}
