use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db;
use crate::db::log::load_audit;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, GREY, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Audit { print } = cmd {
        if !*print {
            info("Use `rollcall audit --print` to show the internal audit log.");
            return Ok(());
        }

        let pool = db::open_store(cfg)?;
        let rows = load_audit(&pool.conn)?;

        if rows.is_empty() {
            info("Audit log is empty.");
            return Ok(());
        }

        for row in rows {
            println!(
                "{}{}{}  {}{:<8}{}  {}  {}",
                GREY, row.date, RESET, CYAN, row.operation, RESET, row.target, row.message
            );
        }
    }

    Ok(())
}
