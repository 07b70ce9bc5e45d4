pub mod action;
pub mod attendance;
pub mod day_summary;
pub mod session;
pub mod session_type;
pub mod status;
