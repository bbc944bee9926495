//! The per-trial row appended to `nback_sessions.csv`.

use time::OffsetDateTime;

use crate::core::format::{format_log_timestamp, yes_no};
use crate::core::storage::CsvRecord;

use super::metrics::TrialMetrics;
use super::stimulus::GridPos;

#[derive(Debug, Clone, PartialEq)]
pub struct TrialRecord {
    pub session_id: String,
    /// 1-based.
    pub trial_number: usize,
    pub letter: char,
    pub position: GridPos,
    pub is_match: bool,
    pub user_pressed: bool,
    pub correct: bool,
    pub reaction_time_ms: Option<f64>,
    /// Cumulative score after this trial.
    pub score: i32,
    pub logged_at: OffsetDateTime,
    pub metrics: TrialMetrics,
    pub stimulus_duration_ms: u64,
    pub inter_trial_interval_ms: u64,
}

const HEADER: [&str; 24] = [
    "Session",
    "Trial",
    "Letter",
    "Position",
    "IsMatch",
    "UserPressed",
    "Correct",
    "RT",
    "Score",
    "Timestamp",
    "ResponseType",
    "Difficulty",
    "TrialType",
    "PrevTrialCorrect",
    "ConsecutiveErrors",
    "RTVariability",
    "PrematureResponse",
    "LateResponse",
    "AttentionLapse",
    "ImpulsivityScore",
    "WorkingMemoryLoad",
    "DistractorPresent",
    "StimulusDuration",
    "InterTrialInterval",
];

impl CsvRecord for TrialRecord {
    fn header() -> &'static [&'static str] {
        &HEADER
    }

    fn fields(&self) -> Vec<String> {
        let m = &self.metrics;
        vec![
            self.session_id.clone(),
            self.trial_number.to_string(),
            self.letter.to_string(),
            self.position.label(),
            yes_no(self.is_match).to_string(),
            yes_no(self.user_pressed).to_string(),
            yes_no(self.correct).to_string(),
            self.reaction_time_ms
                .map(|rt| format!("{rt:.0}"))
                .unwrap_or_default(),
            self.score.to_string(),
            format_log_timestamp(self.logged_at),
            m.response_type.as_str().to_string(),
            m.difficulty.as_str().to_string(),
            m.trial_type().to_string(),
            yes_no(m.prev_correct).to_string(),
            m.consecutive_errors.to_string(),
            format_variability(m.rt_variability),
            yes_no(m.premature).to_string(),
            yes_no(m.late_response).to_string(),
            yes_no(m.attention_lapse).to_string(),
            m.impulsivity_score.to_string(),
            m.working_memory_load.to_string(),
            yes_no(m.distractor_present).to_string(),
            self.stimulus_duration_ms.to_string(),
            self.inter_trial_interval_ms.to_string(),
        ]
    }
}

/// Two decimals, with trailing zeros trimmed (`0`, `12.5`, `33.17`).
fn format_variability(value: f64) -> String {
    let rounded = format!("{value:.2}");
    rounded
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::nback::stimulus::{Difficulty, ResponseType};
    use time::macros::datetime;

    fn sample() -> TrialRecord {
        TrialRecord {
            session_id: "20250314_092653".into(),
            trial_number: 3,
            letter: 'B',
            position: GridPos::new(1, 1),
            is_match: true,
            user_pressed: true,
            correct: true,
            reaction_time_ms: Some(512.4),
            score: 10,
            logged_at: datetime!(2025-03-14 09:27:01 UTC),
            metrics: TrialMetrics {
                response_type: ResponseType::Hit,
                difficulty: Difficulty::Easy,
                is_target: true,
                prev_correct: true,
                consecutive_errors: 0,
                rt_variability: 0.0,
                premature: false,
                late_response: false,
                attention_lapse: false,
                impulsivity_score: 0,
                working_memory_load: 1,
                distractor_present: false,
            },
            stimulus_duration_ms: 2_000,
            inter_trial_interval_ms: 500,
        }
    }

    #[test]
    fn row_matches_header_width_and_order() {
        let fields = sample().fields();
        assert_eq!(fields.len(), TrialRecord::header().len());
        assert_eq!(
            fields,
            vec![
                "20250314_092653",
                "3",
                "B",
                "(1,1)",
                "Yes",
                "Yes",
                "Yes",
                "512",
                "10",
                "2025-03-14 09:27:01",
                "Hit",
                "Easy",
                "Target",
                "Yes",
                "0",
                "0",
                "No",
                "No",
                "No",
                "0",
                "1",
                "No",
                "2000",
                "500",
            ]
        );
    }

    #[test]
    fn missing_rt_is_blank() {
        let mut record = sample();
        record.reaction_time_ms = None;
        assert_eq!(record.fields()[7], "");
    }

    #[test]
    fn variability_rounds_to_two_places() {
        assert_eq!(format_variability(0.0), "0");
        assert_eq!(format_variability(12.5), "12.5");
        assert_eq!(format_variability(33.16666), "33.17");
        assert_eq!(format_variability(100.0), "100");
    }
}
