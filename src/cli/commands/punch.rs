use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::utils::time::parse_optional_timestamp;
use crate::utils::user::resolve_user;

/// Handle `work`, `break`, `lunch` and `out`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (action, user, at) = match cmd {
        Commands::Work { user, at } => (Action::Work, user, at),
        Commands::Break { user, at } => (Action::Break, user, at),
        Commands::Lunch { user, at } => (Action::Lunch, user, at),
        Commands::Out { user, at } => (Action::ClockOut, user, at),
        _ => return Err(AppError::Other("not a punch command".into())),
    };

    let user_id = resolve_user(user.as_ref(), cfg)?;
    let now = parse_optional_timestamp(at.as_ref())?;

    let mut pool = DbPool::new(&cfg.database)?;
    PunchLogic::apply(&mut pool, &user_id, action, now)?;

    Ok(())
}
