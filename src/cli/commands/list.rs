use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::user::resolve_user;
use chrono::{NaiveDate, Utc};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        user,
        period,
        today,
    } = cmd
    {
        let user_id = resolve_user(user.as_ref(), cfg)?;

        let dates = if *today {
            vec![date::today()]
        } else {
            resolve_period(period)?
        };

        let mut pool = DbPool::new(&cfg.database)?;
        ListLogic::print(&mut pool, cfg, &user_id, &dates, Utc::now())?;
    }
    Ok(())
}

fn resolve_period(period: &Option<String>) -> AppResult<Vec<NaiveDate>> {
    match period {
        Some(p) => date::resolve_period(p).map_err(AppError::InvalidDate),
        None => Ok(date::current_month_dates()),
    }
}
