//! Restore bootstrapper: on startup, if the ledger is empty, import rows
//! from the last local mirror of the backup snapshot. Never blocks the
//! application from starting; an empty store is an acceptable degraded
//! state when the mirror is missing or corrupt.

use std::fs;
use std::path::Path;

use rusqlite::Connection;

use crate::backup::snapshot;
use crate::db::{log, store};
use crate::ui::messages::{info, warning};

/// Run once per process start, after schema init and before any other
/// read/write. Returns the number of rows restored (0 when nothing to do).
pub fn bootstrap(conn: &mut Connection, mirror: &Path) -> usize {
    match store::count_rows(conn) {
        Ok(n) if n > 0 => return 0,
        Ok(_) => {}
        Err(e) => {
            warning(format!("Restore skipped: cannot inspect the ledger: {}", e));
            return 0;
        }
    }

    if !mirror.exists() {
        return 0;
    }

    let text = match fs::read_to_string(mirror) {
        Ok(t) => t,
        Err(e) => {
            warning(format!(
                "Restore skipped: cannot read {}: {}",
                mirror.display(),
                e
            ));
            return 0;
        }
    };

    let records = match snapshot::from_csv(&text) {
        Ok(r) => r,
        Err(e) => {
            warning(format!(
                "Restore skipped: {} is not a valid snapshot: {}",
                mirror.display(),
                e
            ));
            return 0;
        }
    };

    if records.is_empty() {
        return 0;
    }

    // ids from the snapshot are kept as-is; renumbering would desync the
    // identity column from any previously pushed backup
    match store::insert_with_ids(conn, &records) {
        Ok(n) => {
            info(format!(
                "Restored {} attendance rows from {}",
                n,
                mirror.display()
            ));
            let _ = log::audit(
                conn,
                "restore",
                &mirror.display().to_string(),
                &format!("Restored {} rows from local mirror", n),
            );
            n
        }
        Err(e) => {
            warning(format!("Restore failed, starting empty: {}", e));
            0
        }
    }
}
