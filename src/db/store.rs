//! The record store: append-only ledger operations over the `attendance`
//! table. Input counts are pre-clamped by the caller; the store trusts them.

use chrono::{NaiveDate, NaiveTime};
use rusqlite::{params, Connection, Result, Row};

use crate::db::migrate::attendance_table_exists;
use crate::errors::{AppError, AppResult};
use crate::models::outcome::Outcome;
use crate::models::record::AttendanceRecord;

/// Per-lecturer counts for one submission, already clamped to
/// `[0, max_per_session]` before they reach the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionCounts {
    pub present: u32,
    pub absent: u32,
}

impl SessionCounts {
    pub fn is_empty(&self) -> bool {
        self.present == 0 && self.absent == 0
    }
}

/// Insert one ledger row per counted session, all sharing the given
/// date/timestamp, in a single transaction. Returns rows inserted;
/// zero means the caller submitted nothing and must not trigger a backup.
pub fn append_counts(
    conn: &mut Connection,
    entries: &[(String, SessionCounts)],
    date: NaiveDate,
    timestamp: NaiveTime,
) -> AppResult<usize> {
    let tx = conn.transaction()?;
    let mut inserted = 0usize;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO attendance (date, timestamp, professor, status)
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        let date_str = date.format("%Y-%m-%d").to_string();
        let ts_str = timestamp.format("%H:%M:%S").to_string();

        for (lecturer, counts) in entries {
            for _ in 0..counts.present {
                stmt.execute(params![date_str, ts_str, lecturer, Outcome::Present.to_db_str()])?;
                inserted += 1;
            }
            for _ in 0..counts.absent {
                stmt.execute(params![date_str, ts_str, lecturer, Outcome::Absent.to_db_str()])?;
                inserted += 1;
            }
        }
    }
    tx.commit()?;
    Ok(inserted)
}

/// Load the full ledger in insertion order (id ascending).
/// A missing table reads as an empty ledger, never an error.
pub fn load_all(conn: &Connection) -> AppResult<Vec<AttendanceRecord>> {
    if !attendance_table_exists(conn)? {
        return Ok(Vec::new());
    }

    let mut stmt = conn.prepare(
        "SELECT id, date, timestamp, professor, status
         FROM attendance
         ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Number of ledger rows; zero when the table does not exist yet.
pub fn count_rows(conn: &Connection) -> AppResult<i64> {
    if !attendance_table_exists(conn)? {
        return Ok(0);
    }
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM attendance", [], |row| row.get(0))?;
    Ok(count)
}

/// Bulk insert preserving explicit ids. Used only by the restore path, where
/// renumbering ids already present in a backup would corrupt the snapshot's
/// identity column on the next push.
pub fn insert_with_ids(conn: &mut Connection, records: &[AttendanceRecord]) -> AppResult<usize> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO attendance (id, date, timestamp, professor, status)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for r in records {
            stmt.execute(params![
                r.id,
                r.date.format("%Y-%m-%d").to_string(),
                r.timestamp.format("%H:%M:%S").to_string(),
                r.lecturer,
                r.outcome.to_db_str(),
            ])?;
        }
    }
    tx.commit()?;
    Ok(records.len())
}

pub fn map_row(row: &Row) -> Result<AttendanceRecord> {
    let date_str: String = row.get("date")?;
    let ts_str: String = row.get("timestamp")?;
    let status_str: String = row.get("status")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let timestamp = NaiveTime::parse_from_str(&ts_str, "%H:%M:%S").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!("invalid timestamp: {}", ts_str))),
        )
    })?;

    let outcome = Outcome::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!("invalid status: {}", status_str))),
        )
    })?;

    Ok(AttendanceRecord {
        id: row.get("id")?,
        date,
        timestamp,
        lecturer: row.get("professor")?,
        outcome,
    })
}
