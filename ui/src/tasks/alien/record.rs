//! Row appended to `adhd_log.csv` for every alien that is shot or escapes.

use time::OffsetDateTime;

use crate::core::format::{format_log_timestamp, yes_no};
use crate::core::storage::CsvRecord;

use super::engine::AlienKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotAction {
    Shoot,
    NoShot,
}

impl ShotAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shoot => "Shoot",
            Self::NoShot => "No Shot",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShotRecord {
    pub logged_at: OffsetDateTime,
    pub kind: AlienKind,
    pub action: ShotAction,
    pub correct: bool,
    pub reaction_time_ms: Option<f64>,
}

impl CsvRecord for ShotRecord {
    fn header() -> &'static [&'static str] {
        &[
            "Timestamp",
            "Stimulus",
            "Action",
            "Correct",
            "Reaction_Time_ms",
        ]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            format_log_timestamp(self.logged_at),
            self.kind.as_str().to_string(),
            self.action.as_str().to_string(),
            yes_no(self.correct).to_string(),
            self.reaction_time_ms
                .map(|rt| format!("{rt:.0}"))
                .unwrap_or_default(),
        ]
    }
}
