use crate::config::Config;
use crate::core::logic::Core;
use crate::core::tracker::{format_duration, record_date};
use crate::db::pool::DbPool;
use crate::db::queries::load_attendance;
use crate::errors::{AppError, AppResult};
use crate::models::day_summary::DaySummary;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_productivity};
use crate::utils::describe_status;
use crate::utils::formatting::{percent, separator};
use crate::utils::time::to_iso;
use chrono::{DateTime, Utc};

pub struct StatusLogic;

impl StatusLogic {
    /// Print the live summary of `user_id`'s day at `now`.
    pub fn print(
        pool: &mut DbPool,
        cfg: &Config,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> AppResult<DaySummary> {
        let date = record_date(now);
        let record = load_attendance(&pool.conn, user_id, &date)?;

        if let Some(open) = record.as_ref().and_then(|r| r.open_session())
            && now < open.start_time
        {
            return Err(AppError::InvalidTime(format!(
                "{} is earlier than the start of the running session {}",
                to_iso(&now),
                to_iso(&open.start_time)
            )));
        }

        let summary = Core::build_day_summary(record.as_ref(), now);

        let (label, color) = describe_status(summary.status);

        header(format!("{} · {}", user_id, date));
        println!("Status       : {}{}{}", color, label, RESET);
        println!("Current      : {}", format_duration(summary.elapsed_seconds));
        println!("Work time    : {}", format_duration(summary.work_seconds));
        println!("Break time   : {}", format_duration(summary.break_seconds));

        if cfg.show_productivity {
            println!(
                "Productivity : {}{}{}",
                color_for_productivity(summary.productivity),
                percent(summary.productivity),
                RESET
            );
        }

        println!("Sessions     : {}", summary.session_count);
        println!("{}", separator(&cfg.separator_char, 32));

        Ok(summary)
    }
}
