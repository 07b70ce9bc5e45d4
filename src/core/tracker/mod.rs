//! Attendance tracker: pure transitions and derived durations over a
//! [`DailyAttendance`](crate::models::attendance::DailyAttendance).

pub mod elapsed;
pub mod productivity;
pub mod transition;

pub use crate::utils::time::format_duration;
pub use elapsed::{aggregate_break_seconds, aggregate_work_seconds, elapsed_seconds};
pub use productivity::productivity_ratio;
pub use transition::{apply_transition, check_preconditions, record_date, try_apply_transition};
