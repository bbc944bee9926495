//! Tunable constants for the N-back session.

use serde::{Deserialize, Serialize};

/// Log file name inside the log directory.
pub const NBACK_LOG_FILE: &str = "nback_sessions.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NBackConfig {
    /// How long each stimulus stays on screen.
    pub stimulus_duration_ms: u64,
    /// Feedback pause between trials.
    pub inter_stimulus_interval_ms: u64,
    pub trial_count: usize,
    pub n_back: usize,
    /// Target share of trials constructed as exact n-back repeats.
    pub match_probability: f64,
    /// Presses faster than this count as premature.
    pub premature_rt_ms: f64,
    /// Presses slower than this count as late.
    pub late_rt_ms: f64,
    pub hit_points: i32,
    pub error_penalty: i32,
    /// Number of recent reaction times kept for variability.
    pub rt_window: usize,
    /// Minimum samples in the window before variability is reported.
    pub rt_min_samples: usize,
}

impl Default for NBackConfig {
    fn default() -> Self {
        Self {
            stimulus_duration_ms: 2_000,
            inter_stimulus_interval_ms: 500,
            trial_count: 30,
            n_back: 1,
            match_probability: 0.4,
            premature_rt_ms: 200.0,
            late_rt_ms: 1_800.0,
            hit_points: 10,
            error_penalty: 5,
            rt_window: 5,
            rt_min_samples: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config: NBackConfig =
            serde_json::from_str(r#"{ "n_back": 2, "trial_count": 20 }"#).unwrap();
        assert_eq!(config.n_back, 2);
        assert_eq!(config.trial_count, 20);
        assert_eq!(config.stimulus_duration_ms, 2_000);
        assert_eq!(config.match_probability, 0.4);
    }
}
