use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::models::outcome::Outcome;

/// One row of the attendance ledger. Immutable once written; the ledger is
/// append-only and rows are never edited or deleted in normal operation.
///
/// `date` is the calendar date of the session; `timestamp` is the wall-clock
/// time of data entry, so several sessions logged together share one value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub timestamp: NaiveTime,
    pub lecturer: String,
    pub outcome: Outcome,
}
