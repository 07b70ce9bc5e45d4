use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::warning;
use crate::utils::user::resolve_user;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        user,
        range,
        force,
    } = cmd
    {
        let user_id = resolve_user(user.as_ref(), cfg)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let count = ExportLogic::export(&mut pool, &user_id, format, file, range, *force)?;

        if let Err(e) = ttlog(
            &pool.conn,
            "export",
            &user_id,
            &format!("{} rows as {} to {}", count, format.as_str(), file),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
    Ok(())
}
