use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::time::parse_optional_timestamp;
use crate::utils::user::resolve_user;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { user, at } = cmd {
        let user_id = resolve_user(user.as_ref(), cfg)?;
        let now = parse_optional_timestamp(at.as_ref())?;

        let mut pool = DbPool::new(&cfg.database)?;
        StatusLogic::print(&mut pool, cfg, &user_id, now)?;
    }

    Ok(())
}
