use crate::core::tracker::{
    aggregate_break_seconds, aggregate_work_seconds, elapsed_seconds, productivity_ratio,
};
use crate::errors::{AppError, AppResult};
use crate::models::{attendance::DailyAttendance, day_summary::DaySummary};
use crate::utils::time::to_iso;
use chrono::{DateTime, Utc};

pub struct Core;

impl Core {
    /// Everything the status views show for `record` at `now`.
    /// An absent record reads as an offline day with nothing tracked.
    pub fn build_day_summary(record: Option<&DailyAttendance>, now: DateTime<Utc>) -> DaySummary {
        let Some(rec) = record else {
            return DaySummary::default();
        };

        let work_seconds = aggregate_work_seconds(record, now);
        let break_seconds = aggregate_break_seconds(record, now);

        DaySummary {
            status: rec.status,
            elapsed_seconds: elapsed_seconds(record, now),
            work_seconds,
            break_seconds,
            productivity: productivity_ratio(work_seconds, break_seconds),
            session_count: rec.sessions.len(),
        }
    }

    /// Reject an instant earlier than the last start or end stored in `record`.
    pub fn check_not_before_last(
        record: Option<&DailyAttendance>,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        if let Some(last) = record.and_then(|r| r.sessions.last()) {
            let last_mark = last.end_time.unwrap_or(last.start_time);
            if now < last_mark {
                return Err(AppError::InvalidTime(format!(
                    "{} is earlier than the last recorded instant {}",
                    to_iso(&now),
                    to_iso(&last_mark)
                )));
            }
        }
        Ok(())
    }
}
