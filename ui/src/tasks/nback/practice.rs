//! Authored walkthrough shown before a real run. Never scored or logged.

use super::stimulus::{GridPos, Stimulus};

const PRACTICE_DATA: [(char, (u8, u8), bool, &str); 6] = [
    ('A', (0, 0), false, "First trial - nothing to compare"),
    ('B', (1, 1), false, "Different from trial 1 - do nothing"),
    ('B', (1, 1), true, "MATCH! Same as trial 2 - PRESS SPACE!"),
    ('B', (2, 0), false, "Same letter but different position - do nothing"),
    (
        'C',
        (1, 1),
        false,
        "Different letter, even though same position - do nothing",
    ),
    ('C', (1, 1), true, "MATCH! Same as trial 5 - PRESS SPACE!"),
];

pub fn practice_trials() -> Vec<Stimulus> {
    PRACTICE_DATA
        .iter()
        .enumerate()
        .map(|(index, &(letter, (col, row), is_match, explanation))| {
            let mut stimulus = Stimulus::new(letter, GridPos::new(col, row), is_match, index);
            stimulus.explanation = explanation;
            stimulus
        })
        .collect()
}

/// Immediate verdict on one practice judgment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeVerdict {
    pub correct: bool,
    pub message: &'static str,
}

pub fn judge(stimulus: &Stimulus, claimed_match: bool) -> PracticeVerdict {
    let correct = claimed_match == stimulus.is_match;
    let message = match (correct, stimulus.is_match) {
        (true, true) => "Correct! This WAS a match",
        (true, false) => "Correct! This was NOT a match",
        (false, true) => "Incorrect. This WAS a match - should press SPACE",
        (false, false) => "Incorrect. This was NOT a match",
    };
    PracticeVerdict { correct, message }
}
