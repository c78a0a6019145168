use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        let mut pool: Option<DbPool> = None;

        fn get_pool<'a>(pool: &'a mut Option<DbPool>, db_path: &str) -> AppResult<&'a mut DbPool> {
            if pool.is_none() {
                *pool = Some(DbPool::new(db_path)?);
            }
            Ok(pool.as_mut().expect("pool just initialized"))
        }

        //
        // 1) MIGRATE
        //
        if *migrate {
            let pool = get_pool(&mut pool, &cfg.database)?;
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            let report = run_pending_migrations(&pool.conn)?;
            if report.renamed_rows > 0 {
                println!("  renamed rows: {}", report.renamed_rows);
            }
            println!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        //
        // 2) INFO
        //
        if *info {
            let pool = get_pool(&mut pool, &cfg.database)?;
            stats::print_db_info(pool, &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            let pool = get_pool(&mut pool, &cfg.database)?;
            println!("{}▶ Running integrity check…{}", CYAN, RESET);
            let result: String =
                pool.conn
                    .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
            if result == "ok" {
                println!("{}✔ Database integrity OK.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check reported: {}{}\n", RED, result, RESET);
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            let pool = get_pool(&mut pool, &cfg.database)?;
            println!("{}▶ Optimizing database…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM")?;
            println!("{}✔ VACUUM completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
