use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        what,
        format,
        file,
        range,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let count = ExportLogic::export(&mut pool, *what, format.clone(), file, range.as_deref(), *force)?;
        if count > 0 {
            info(format!("{count} {} record(s) written.", what.as_str()));
        }
    }
    Ok(())
}
