use crate::config::Config;
use crate::core::logic::Core;
use crate::core::tracker::format_duration;
use crate::db::pool::DbPool;
use crate::db::queries::load_attendance;
use crate::errors::AppResult;
use crate::models::attendance::DailyAttendance;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::{bold, percent, separator};
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::clock_str;
use chrono::{DateTime, NaiveDate, Utc};

/// Session history per day, as the duty-log matrix shows it.
pub struct ListLogic;

impl ListLogic {
    /// Print every stored day of `user_id` among `dates`. Returns how many days were printed.
    pub fn print(
        pool: &mut DbPool,
        cfg: &Config,
        user_id: &str,
        dates: &[NaiveDate],
        now: DateTime<Utc>,
    ) -> AppResult<usize> {
        let mut printed = 0;

        for d in dates {
            let Some(rec) = load_attendance(&pool.conn, user_id, d)? else {
                continue;
            };

            print_day(&rec, cfg, now);
            printed += 1;
        }

        if printed == 0 {
            info(format!("No attendance records for {}.", user_id));
        }

        Ok(printed)
    }
}

fn print_day(rec: &DailyAttendance, cfg: &Config, now: DateTime<Utc>) {
    header(format!("{} · {}", rec.user_id, rec.date));

    let mut table = Table::new(vec![
        Column::new("#", 3),
        Column::new("Type", 6),
        Column::new("Start", 8),
        Column::new("End", 8),
        Column::new("Duration", 8),
    ]);

    for (i, s) in rec.sessions.iter().enumerate() {
        let end = s
            .end_time
            .as_ref()
            .map(clock_str)
            .unwrap_or_else(|| "Active".to_string());
        let duration = s
            .duration_minutes()
            .map(|m| mins2readable(m, false))
            .unwrap_or_else(|| "Ongoing".to_string());

        table.add_row(vec![
            (i + 1).to_string(),
            s.kind.label().to_string(),
            clock_str(&s.start_time),
            end,
            duration,
        ]);
    }

    for line in table.render().lines() {
        println!("{}", colorize_cells(line));
    }

    let summary = Core::build_day_summary(Some(rec), now);

    println!("{}", separator(&cfg.separator_char, 40));
    println!(
        "{} {} | {} {}",
        bold("Work:"),
        mins2readable(rec.total_work_minutes, true),
        bold("Break:"),
        mins2readable(rec.total_break_minutes, true)
    );

    if rec.open_session().is_some() {
        println!(
            "Live totals: work {} | break {}",
            format_duration(summary.work_seconds),
            format_duration(summary.break_seconds)
        );
    }

    if cfg.show_productivity {
        println!("Productivity: {}", percent(summary.productivity));
    }
}

fn colorize_cells(line: &str) -> String {
    line.replace("Active", &colorize_optional("Active"))
        .replace("Ongoing", &colorize_optional("Ongoing"))
}
