use csv::Writer;
use std::path::Path;

use crate::export::notify_export_success;
use crate::models::record::AttendanceRecord;

/// Write the raw ledger to a CSV file, verbatim columns in id order.
pub fn write_csv(path: &Path, records: &[AttendanceRecord]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["id", "date", "timestamp", "lecturer", "outcome"])?;

    for r in records {
        wtr.write_record(&[
            r.id.to_string(),
            r.date.format("%Y-%m-%d").to_string(),
            r.timestamp.format("%H:%M:%S").to_string(),
            r.lecturer.clone(),
            r.outcome.to_db_str().to_string(),
        ])?;
    }

    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}
