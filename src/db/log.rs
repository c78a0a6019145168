use chrono::Local;
use rusqlite::params;
use rusqlite::Connection;

use crate::errors::AppResult;

/// One row of the internal audit table.
#[derive(Debug, Clone)]
pub struct AuditRow {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write an internal audit line into the `audit` table.
pub fn audit(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO audit (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Load audit rows, newest first.
pub fn load_audit(conn: &Connection) -> AppResult<Vec<AuditRow>> {
    let mut stmt = conn.prepare(
        "SELECT date, operation, target, message FROM audit ORDER BY date DESC, id DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(AuditRow {
            date: row.get(0)?,
            operation: row.get(1)?,
            target: row.get(2)?,
            message: row.get(3)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
