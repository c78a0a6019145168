use serde::Serialize;

/// Outcome of a single logged session: the student was there or wasn't.
/// Closed set; the DB column carries the same spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    Present,
    Absent,
}

impl Outcome {
    pub fn to_db_str(self) -> &'static str {
        match self {
            Outcome::Present => "Present",
            Outcome::Absent => "Absent",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Present" => Some(Outcome::Present),
            "Absent" => Some(Outcome::Absent),
            _ => None,
        }
    }

    pub fn is_present(self) -> bool {
        matches!(self, Outcome::Present)
    }
}
