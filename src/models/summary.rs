use serde::Serialize;

/// Per-lecturer tallies derived from the ledger on every read.
/// Never persisted, so it cannot drift from the stored rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LecturerSummary {
    pub lecturer: String,
    pub total: u32,
    pub present: u32,
    pub absent: u32,
    pub percentage: f64,
}

/// Whole-ledger tallies across all lecturers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OverallSummary {
    pub total: u32,
    pub present: u32,
    pub absent: u32,
    pub percentage: f64,
}
