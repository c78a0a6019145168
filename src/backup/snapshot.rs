//! The snapshot format: a flat CSV serialization of the whole ledger, used
//! both as the remote backup object and as the local mirror. Column order is
//! stable; identity is carried so a restore never renumbers rows.

use csv::{ReaderBuilder, Writer};

use crate::errors::{AppError, AppResult, SyncError};
use crate::models::outcome::Outcome;
use crate::models::record::AttendanceRecord;

pub const SNAPSHOT_HEADER: [&str; 5] = ["id", "date", "timestamp", "lecturer", "outcome"];

/// Serialize the full record sequence. All-or-nothing: any writer error
/// aborts the snapshot before a single byte leaves the process.
pub fn to_csv(records: &[AttendanceRecord]) -> Result<String, SyncError> {
    let mut wtr = Writer::from_writer(Vec::new());

    wtr.write_record(SNAPSHOT_HEADER).map_err(serialize_err)?;
    for r in records {
        wtr.write_record(&[
            r.id.to_string(),
            r.date.format("%Y-%m-%d").to_string(),
            r.timestamp.format("%H:%M:%S").to_string(),
            r.lecturer.clone(),
            r.outcome.to_db_str().to_string(),
        ])
        .map_err(serialize_err)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| SyncError::Serialize(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SyncError::Serialize(e.to_string()))
}

/// Parse a snapshot back into records. Used by the restore bootstrapper;
/// any malformed row fails the whole parse so a half-restored ledger can
/// never happen.
pub fn from_csv(text: &str) -> AppResult<Vec<AttendanceRecord>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(text.as_bytes());

    let mut out = Vec::new();
    for result in rdr.records() {
        let row = result.map_err(|e| AppError::Other(format!("snapshot parse: {}", e)))?;
        if row.len() != SNAPSHOT_HEADER.len() {
            return Err(AppError::Other(format!(
                "snapshot parse: expected {} columns, got {}",
                SNAPSHOT_HEADER.len(),
                row.len()
            )));
        }

        let id: i64 = row[0]
            .parse()
            .map_err(|_| AppError::Other(format!("snapshot parse: bad id '{}'", &row[0])))?;
        let date = chrono::NaiveDate::parse_from_str(&row[1], "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(row[1].to_string()))?;
        let timestamp = chrono::NaiveTime::parse_from_str(&row[2], "%H:%M:%S")
            .map_err(|_| AppError::Other(format!("snapshot parse: bad timestamp '{}'", &row[2])))?;
        let outcome = Outcome::from_db_str(&row[4])
            .ok_or_else(|| AppError::Other(format!("snapshot parse: bad outcome '{}'", &row[4])))?;

        out.push(AttendanceRecord {
            id,
            date,
            timestamp,
            lecturer: row[3].to_string(),
            outcome,
        });
    }
    Ok(out)
}

fn serialize_err(e: csv::Error) -> SyncError {
    SyncError::Serialize(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn sample() -> Vec<AttendanceRecord> {
        vec![
            AttendanceRecord {
                id: 1,
                date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
                timestamp: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
                lecturer: "Tanvi Mam".to_string(),
                outcome: Outcome::Present,
            },
            AttendanceRecord {
                id: 5,
                date: NaiveDate::from_ymd_opt(2025, 9, 2).unwrap(),
                timestamp: NaiveTime::from_hms_opt(18, 5, 12).unwrap(),
                lecturer: "Satish Sir (Dean)".to_string(),
                outcome: Outcome::Absent,
            },
        ]
    }

    #[test]
    fn snapshot_round_trips_with_identity() {
        let records = sample();
        let csv = to_csv(&records).unwrap();
        assert!(csv.starts_with("id,date,timestamp,lecturer,outcome\n"));

        let parsed = from_csv(&csv).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn empty_ledger_serializes_to_header_only() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(csv.trim_end(), "id,date,timestamp,lecturer,outcome");
        assert!(from_csv(&csv).unwrap().is_empty());
    }

    #[test]
    fn names_with_commas_survive_quoting() {
        let mut records = sample();
        records[0].lecturer = "Sharma, P. (Dean)".to_string();
        let csv = to_csv(&records).unwrap();
        let parsed = from_csv(&csv).unwrap();
        assert_eq!(parsed[0].lecturer, "Sharma, P. (Dean)");
    }

    #[test]
    fn malformed_rows_fail_the_whole_parse() {
        assert!(from_csv("id,date,timestamp,lecturer,outcome\nnot-a-number,2025-09-01,10:00:00,X,Present\n").is_err());
        assert!(from_csv("id,date,timestamp,lecturer,outcome\n1,2025-99-01,10:00:00,X,Present\n").is_err());
        assert!(from_csv("id,date,timestamp,lecturer,outcome\n1,2025-09-01,10:00:00,X,Sleeping\n").is_err());
    }
}
