//! Schema creation and one-off data migrations.
//! Everything here is idempotent: running it on every process start is the
//! supported mode of operation.

use rusqlite::{params, Connection, OptionalExtension, Result};

use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Historical lecturer renames. Rows written under the old name are folded
/// into the new one exactly once; re-running matches zero rows.
const RENAMED_LECTURERS: &[(&str, &str)] = &[("Mahesh Sir", "Viren Sir")];

/// What the migration pass actually changed, for the caller to inspect.
#[derive(Debug, Default, Clone, Copy)]
pub struct MigrationReport {
    pub renamed_rows: usize,
}

pub fn run_pending_migrations(conn: &Connection) -> AppResult<MigrationReport> {
    ensure_attendance_table(conn)?;
    ensure_audit_table(conn)?;

    let renamed_rows = apply_lecturer_renames(conn)?;
    if renamed_rows > 0 {
        info(format!(
            "Migrated {} attendance rows to renamed lecturers",
            renamed_rows
        ));
        audit(
            conn,
            "migrate",
            "attendance",
            &format!("Renamed lecturer on {} rows", renamed_rows),
        )?;
    }

    Ok(MigrationReport { renamed_rows })
}

/// Check if the `attendance` table exists.
pub fn attendance_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='attendance'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `attendance` ledger table. Column names are part of the
/// on-disk contract shared with the snapshot format.
fn ensure_attendance_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            timestamp TEXT NOT NULL,
            professor TEXT NOT NULL,
            status    TEXT NOT NULL CHECK(status IN ('Present','Absent'))
        );

        CREATE INDEX IF NOT EXISTS idx_attendance_professor ON attendance(professor);
        CREATE INDEX IF NOT EXISTS idx_attendance_date ON attendance(date);
        "#,
    )?;
    Ok(())
}

/// Ensure that the `audit` table exists.
fn ensure_audit_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS audit (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Fold historical rows written under a renamed lecturer into the current
/// name. Returns the number of rows touched; zero when already applied.
fn apply_lecturer_renames(conn: &Connection) -> Result<usize> {
    let mut touched = 0usize;
    for (old, new) in RENAMED_LECTURERS {
        touched += conn.execute(
            "UPDATE attendance SET professor = ?1 WHERE professor = ?2",
            params![new, old],
        )?;
    }
    Ok(touched)
}
