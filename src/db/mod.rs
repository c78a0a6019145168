pub mod log;
pub mod migrate;
pub mod pool;
pub mod stats;
pub mod store;

use std::path::Path;

use rusqlite::Connection;

use crate::config::Config;
use crate::db::migrate::{run_pending_migrations, MigrationReport};
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<MigrationReport> {
    run_pending_migrations(conn)
}

/// Open the store for a command: connect, ensure the schema, then restore
/// from the local mirror when the ledger is empty. Runs before any other
/// read/write of the invocation.
pub fn open_store(cfg: &Config) -> AppResult<DbPool> {
    let mut pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    crate::backup::restore::bootstrap(&mut pool.conn, Path::new(&cfg.mirror_file));
    Ok(pool)
}
