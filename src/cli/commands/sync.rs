use crate::backup::{SyncOutcome, Synchronizer};
use crate::config::Config;
use crate::db;
use crate::db::store;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Push the current ledger to the remote backup on demand. Unlike the push
/// that follows a save, a failure here is surfaced as a real error.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = db::open_store(cfg)?;
    let records = store::load_all(&pool.conn)?;

    if records.is_empty() {
        warning("Ledger is empty; nothing to back up.");
        return Ok(());
    }

    let synchronizer = Synchronizer::from_config(cfg);
    match synchronizer.sync(&records)? {
        SyncOutcome::Skipped => {
            info("No remote configured; add a `remote` block to the config file to enable backups.");
        }
        SyncOutcome::Created => {
            success(format!("Backup created ({} records).", records.len()));
            let _ = db::log::audit(&pool.conn, "sync", "remote", "Snapshot created");
        }
        SyncOutcome::Updated => {
            success(format!("Backup updated ({} records).", records.len()));
            let _ = db::log::audit(&pool.conn, "sync", "remote", "Snapshot updated");
        }
    }

    Ok(())
}
