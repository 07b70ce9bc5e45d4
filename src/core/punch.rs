use crate::core::logic::Core;
use crate::core::tracker::{record_date, try_apply_transition};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_attendance, load_open_session_date, save_attendance};
use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::models::attendance::DailyAttendance;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::{clock_str, to_iso};
use chrono::{DateTime, Utc};

/// High-level business logic for the `work`, `break`, `lunch` and `out` commands.
pub struct PunchLogic;

impl PunchLogic {
    /// Load the user's record for the day of `now`, apply `action`, store the result.
    ///
    /// Load and save share one immediate transaction. A session left open on
    /// another day blocks the punch until it is closed on that day.
    pub fn apply(
        pool: &mut DbPool,
        user_id: &str,
        action: Action,
        now: DateTime<Utc>,
    ) -> AppResult<DailyAttendance> {
        let date = record_date(now);
        let tx = pool.immediate()?;

        if let Some(open_day) = load_open_session_date(&tx, user_id)?
            && open_day != date
        {
            return Err(AppError::Precondition(format!(
                "{} still has an open session on {}; close it with `out --at` on that day first",
                user_id, open_day
            )));
        }

        let current = load_attendance(&tx, user_id, &date)?;
        Core::check_not_before_last(current.as_ref(), now)?;

        let next = try_apply_transition(current.as_ref(), user_id, action, now)?;
        save_attendance(&tx, &next)?;

        let before = current.as_ref().map(|r| r.status).unwrap_or_default();
        let closed = current
            .as_ref()
            .and_then(|r| r.open_session())
            .and_then(|open| next.sessions.iter().find(|s| s.id == open.id));

        let message = format!(
            "{} -> {} at {}",
            before.to_db_str(),
            next.status.to_db_str(),
            to_iso(&now)
        );

        if let Err(e) = ttlog(&tx, action.as_str(), &format!("{}@{}", user_id, date), &message) {
            warning(format!("Failed to write internal log: {}", e));
        }

        tx.commit()?;

        if let Some(s) = closed {
            info(format!(
                "Closed {} session: {} min",
                s.kind.label(),
                s.duration_minutes().unwrap_or(0)
            ));
        }

        success(format!(
            "{} at {} on {}: {} → {}",
            action.as_str(),
            clock_str(&now),
            date,
            before.to_db_str(),
            next.status.to_db_str()
        ));

        Ok(next)
    }
}
