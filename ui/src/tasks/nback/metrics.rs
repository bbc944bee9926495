//! Per-trial behavioral features used in ADHD-oriented analyses.
//!
//! Computed once for every finalized playing trial and written alongside the raw
//! response. Nothing here feeds back into scoring.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::config::NBackConfig;
use super::stimulus::{Difficulty, ResponseType, Stimulus};

/// Running counters carried across trials of one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BehaviorCounters {
    pub consecutive_errors: u32,
    pub attention_lapses: u32,
    pub premature_responses: u32,
    pub late_responses: u32,
    /// Most recent reaction times, oldest first, capped at `rt_window`.
    pub recent_rts: VecDeque<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialMetrics {
    pub response_type: ResponseType,
    pub difficulty: Difficulty,
    pub is_target: bool,
    pub prev_correct: bool,
    pub consecutive_errors: u32,
    pub rt_variability: f64,
    pub premature: bool,
    pub late_response: bool,
    pub attention_lapse: bool,
    pub impulsivity_score: u32,
    pub working_memory_load: usize,
    pub distractor_present: bool,
}

impl TrialMetrics {
    /// Derives the metrics for `stimulus` and folds it into `counters`.
    ///
    /// `history` holds every stimulus of the session up to and including
    /// `stimulus`; the n-back reference and predecessor are looked up by index.
    pub fn compute(
        stimulus: &Stimulus,
        history: &[Stimulus],
        counters: &mut BehaviorCounters,
        config: &NBackConfig,
    ) -> Self {
        let response_type = ResponseType::classify(stimulus.user_pressed, stimulus.is_match);

        let mut premature = false;
        let mut late_response = false;
        if let Some(rt) = stimulus.reaction_time_ms {
            if rt < config.premature_rt_ms {
                premature = true;
                counters.premature_responses += 1;
            } else if rt > config.late_rt_ms {
                late_response = true;
                counters.late_responses += 1;
            }
            counters.recent_rts.push_back(rt);
            while counters.recent_rts.len() > config.rt_window {
                counters.recent_rts.pop_front();
            }
        }

        let attention_lapse = stimulus.is_match && !stimulus.user_pressed;
        if attention_lapse {
            counters.attention_lapses += 1;
        }

        if stimulus.is_correct() {
            counters.consecutive_errors = 0;
        } else {
            counters.consecutive_errors += 1;
        }

        let rt_variability = if counters.recent_rts.len() >= config.rt_min_samples {
            let window: Vec<f64> = counters.recent_rts.iter().copied().collect();
            sample_std_dev(&window)
        } else {
            0.0
        };

        let reference = stimulus
            .trial_index
            .checked_sub(config.n_back)
            .filter(|_| config.n_back > 0)
            .and_then(|index| history.get(index));
        let difficulty = Difficulty::grade(stimulus, reference);

        let mut impulsivity_score = 0;
        if premature {
            impulsivity_score += 2;
        }
        if response_type == ResponseType::FalseAlarm {
            impulsivity_score += 1;
        }

        let prev_correct = stimulus
            .trial_index
            .checked_sub(1)
            .and_then(|index| history.get(index))
            .map_or(true, Stimulus::is_correct);

        Self {
            response_type,
            difficulty,
            is_target: stimulus.is_match,
            prev_correct,
            consecutive_errors: counters.consecutive_errors,
            rt_variability,
            premature,
            late_response,
            attention_lapse,
            impulsivity_score,
            working_memory_load: (stimulus.trial_index + 1).min(config.n_back),
            distractor_present: false,
        }
    }

    pub fn trial_type(&self) -> &'static str {
        if self.is_target {
            "Target"
        } else {
            "NonTarget"
        }
    }
}

pub(crate) fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        0.0
    } else {
        data.iter().sum::<f64>() / data.len() as f64
    }
}

/// Sample (n − 1) standard deviation; zero below two samples.
pub(crate) fn sample_std_dev(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let mean = mean(data);
    let variance = data
        .iter()
        .map(|value| {
            let diff = value - mean;
            diff * diff
        })
        .sum::<f64>()
        / (n as f64 - 1.0);
    variance.sqrt()
}
