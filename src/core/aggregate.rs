//! Grouping of ledger rows into per-lecturer and overall summaries.
//! Read-only over its input; recomputed on every read so the numbers can
//! never drift from the stored rows.

use crate::models::record::AttendanceRecord;
use crate::models::summary::{LecturerSummary, OverallSummary};

/// Build the overall summary plus one summary per configured lecturer,
/// in the configured order. Lecturers with no rows still appear with
/// `total = 0` so the dashboard always shows the full roster.
pub fn aggregate(
    records: &[AttendanceRecord],
    lecturers: &[String],
) -> (OverallSummary, Vec<LecturerSummary>) {
    let total = records.len() as u32;
    let present = records.iter().filter(|r| r.outcome.is_present()).count() as u32;

    let overall = OverallSummary {
        total,
        present,
        absent: total - present,
        percentage: percentage(present, total),
    };

    let per_lecturer = lecturers
        .iter()
        .map(|name| {
            let mut total = 0u32;
            let mut present = 0u32;
            for r in records.iter().filter(|r| &r.lecturer == name) {
                total += 1;
                if r.outcome.is_present() {
                    present += 1;
                }
            }
            LecturerSummary {
                lecturer: name.clone(),
                total,
                present,
                absent: total - present,
                percentage: percentage(present, total),
            }
        })
        .collect();

    (overall, per_lecturer)
}

fn percentage(present: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * present as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::outcome::Outcome;
    use chrono::{NaiveDate, NaiveTime};

    fn rec(id: i64, lecturer: &str, outcome: Outcome) -> AttendanceRecord {
        AttendanceRecord {
            id,
            date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            timestamp: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            lecturer: lecturer.to_string(),
            outcome,
        }
    }

    fn roster(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_ledger_yields_zero_rows_in_roster_order() {
        let lecturers = roster(&["B Sir", "A Mam"]);
        let (overall, per) = aggregate(&[], &lecturers);

        assert_eq!(overall.total, 0);
        assert_eq!(overall.percentage, 0.0);
        assert_eq!(per.len(), 2);
        // configured order preserved, not alphabetical
        assert_eq!(per[0].lecturer, "B Sir");
        assert_eq!(per[1].lecturer, "A Mam");
        assert!(per.iter().all(|s| s.total == 0 && s.percentage == 0.0));
    }

    #[test]
    fn counts_split_per_lecturer() {
        let lecturers = roster(&["A Mam", "B Sir", "C Sir"]);
        let records = vec![
            rec(1, "A Mam", Outcome::Present),
            rec(2, "A Mam", Outcome::Present),
            rec(3, "A Mam", Outcome::Absent),
            rec(4, "B Sir", Outcome::Absent),
        ];

        let (overall, per) = aggregate(&records, &lecturers);

        assert_eq!(overall.total, 4);
        assert_eq!(overall.present, 2);
        assert_eq!(overall.absent, 2);
        assert!((overall.percentage - 50.0).abs() < 1e-9);

        assert_eq!(per[0].total, 3);
        assert_eq!(per[0].present, 2);
        assert!((per[0].percentage - 200.0 / 3.0).abs() < 1e-9);

        assert_eq!(per[1].total, 1);
        assert_eq!(per[1].present, 0);
        assert_eq!(per[1].percentage, 0.0);

        // no rows for C Sir, but the card still exists
        assert_eq!(per[2].total, 0);
    }

    #[test]
    fn rows_outside_the_roster_count_in_overall_only() {
        let lecturers = roster(&["A Mam"]);
        let records = vec![rec(1, "Left Long Ago Sir", Outcome::Present)];

        let (overall, per) = aggregate(&records, &lecturers);
        assert_eq!(overall.total, 1);
        assert_eq!(per.len(), 1);
        assert_eq!(per[0].total, 0);
    }
}
