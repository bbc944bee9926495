//! End-of-run aggregate for the N-back session: signal-detection indices and hit RT spread.

use serde::{Deserialize, Serialize};

use super::metrics::{mean, sample_std_dev};
use super::stimulus::{ResponseType, Stimulus};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SessionSummary {
    pub total_trials: usize,
    pub target_trials: usize,
    pub non_target_trials: usize,
    pub hits: u32,
    pub misses: u32,
    pub false_alarms: u32,
    pub correct_rejections: u32,
    pub hit_rate: f64,
    pub false_alarm_rate: f64,
    pub accuracy: f64,
    pub d_prime: f64,
    pub criterion: f64,
    pub mean_hit_rt_ms: f64,
    pub median_hit_rt_ms: f64,
    pub sd_hit_rt_ms: f64,
    pub p10_hit_rt_ms: f64,
    pub p90_hit_rt_ms: f64,
    pub response_count: u32,
}

impl SessionSummary {
    /// Summarises the finalized stimuli; unanswered ones are skipped.
    pub fn from_stimuli(stimuli: &[Stimulus]) -> Self {
        let finalized: Vec<&Stimulus> = stimuli.iter().filter(|s| s.responded).collect();
        let total_trials = finalized.len();
        if total_trials == 0 {
            return Self::default();
        }

        let mut summary = Self {
            total_trials,
            ..Self::default()
        };
        let mut hit_rts = Vec::new();

        for stimulus in &finalized {
            if stimulus.is_match {
                summary.target_trials += 1;
            } else {
                summary.non_target_trials += 1;
            }

            match ResponseType::classify(stimulus.user_pressed, stimulus.is_match) {
                ResponseType::Hit => {
                    summary.hits += 1;
                    if let Some(rt) = stimulus.reaction_time_ms {
                        hit_rts.push(rt);
                    }
                }
                ResponseType::Miss => summary.misses += 1,
                ResponseType::FalseAlarm => summary.false_alarms += 1,
                ResponseType::CorrectRejection => summary.correct_rejections += 1,
            }
        }

        summary.response_count = summary.hits + summary.false_alarms;

        if !hit_rts.is_empty() {
            hit_rts.sort_by(f64::total_cmp);
            summary.mean_hit_rt_ms = mean(&hit_rts);
            summary.median_hit_rt_ms = percentile(&hit_rts, 0.5);
            summary.sd_hit_rt_ms = sample_std_dev(&hit_rts);
            summary.p10_hit_rt_ms = percentile(&hit_rts, 0.10);
            summary.p90_hit_rt_ms = percentile(&hit_rts, 0.90);
        }

        if summary.target_trials > 0 {
            summary.hit_rate = summary.hits as f64 / summary.target_trials as f64;
        }
        if summary.non_target_trials > 0 {
            summary.false_alarm_rate =
                summary.false_alarms as f64 / summary.non_target_trials as f64;
        }

        let sdt = SignalDetection::from_counts(
            summary.hits,
            summary.false_alarms,
            summary.target_trials,
            summary.non_target_trials,
        );
        summary.d_prime = sdt.d_prime;
        summary.criterion = sdt.criterion;

        summary.accuracy =
            (summary.hits + summary.correct_rejections) as f64 / total_trials as f64;

        summary
    }

    /// Accuracy at or above 70% is presented as a good run.
    pub fn is_strong(&self) -> bool {
        self.accuracy >= 0.7
    }
}

/// Linear-interpolated quantile of an ascending slice.
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    let Some(&first) = sorted.first() else {
        return 0.0;
    };
    let rank = pct.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let below = rank.floor() as usize;
    let Some(&next) = sorted.get(below + 1) else {
        return sorted.get(below).copied().unwrap_or(first);
    };
    let base = sorted[below];
    base + (next - base) * rank.fract()
}

/// Sensitivity and response bias for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SignalDetection {
    d_prime: f64,
    criterion: f64,
}

impl SignalDetection {
    /// Uses the log-linear correction so perfect or empty rates stay finite.
    fn from_counts(hits: u32, false_alarms: u32, targets: usize, lures: usize) -> Self {
        let corrected = |count: u32, trials: usize| {
            let rate = (f64::from(count) + 0.5) / (trials.max(1) as f64 + 1.0);
            probit(rate.clamp(1e-6, 1.0 - 1e-6))
        };
        let z_hit = corrected(hits, targets);
        let z_fa = corrected(false_alarms, lures);
        Self {
            d_prime: z_hit - z_fa,
            criterion: -(z_hit + z_fa) / 2.0,
        }
    }
}

const PROBIT_TAIL: f64 = 0.02425;
const CENTRAL_NUM: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_69e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];
const CENTRAL_DEN: [f64; 6] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
    1.0,
];
const TAIL_NUM: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];
const TAIL_DEN: [f64; 5] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
    1.0,
];

/// Evaluates a polynomial with coefficients from the highest power down.
fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, c| acc * x + c)
}

/// Standard normal quantile (Acklam's rational approximation, error below 5e-4).
fn probit(p: f64) -> f64 {
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    let tail = |tail_p: f64| {
        let q = (-2.0 * tail_p.ln()).sqrt();
        horner(&TAIL_NUM, q) / horner(&TAIL_DEN, q)
    };

    if p < PROBIT_TAIL {
        tail(p)
    } else if p > 1.0 - PROBIT_TAIL {
        -tail(1.0 - p)
    } else {
        let q = p - 0.5;
        q * horner(&CENTRAL_NUM, q * q) / horner(&CENTRAL_DEN, q * q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::nback::stimulus::GridPos;

    fn answered(index: usize, is_match: bool, rt: Option<f64>) -> Stimulus {
        let mut stimulus = Stimulus::new('A', GridPos::new(0, 0), is_match, index);
        stimulus.responded = true;
        stimulus.user_pressed = rt.is_some();
        stimulus.reaction_time_ms = rt;
        stimulus.correct = Some(ResponseType::classify(rt.is_some(), is_match).is_correct());
        stimulus
    }

    #[test]
    fn summary_counts_hits_and_false_alarms() {
        let stimuli = vec![
            answered(0, false, None),
            answered(1, false, Some(420.0)),
            answered(2, true, Some(480.0)),
            answered(3, true, None),
        ];

        let summary = SessionSummary::from_stimuli(&stimuli);
        assert_eq!(summary.total_trials, 4);
        assert_eq!(summary.hits, 1);
        assert_eq!(summary.false_alarms, 1);
        assert_eq!(summary.misses, 1);
        assert_eq!(summary.correct_rejections, 1);
        assert_eq!(summary.accuracy, 0.5);
        assert_eq!(summary.hit_rate, 0.5);
        assert_eq!(summary.false_alarm_rate, 0.5);
        assert!(summary.d_prime.is_finite());
        assert!(summary.criterion.is_finite());
        assert_eq!(summary.median_hit_rt_ms, 480.0);
        assert!(!summary.is_strong());
    }

    #[test]
    fn pending_stimulus_is_ignored() {
        let mut stimuli = vec![answered(0, false, None)];
        stimuli.push(Stimulus::new('B', GridPos::new(1, 1), false, 1));

        let summary = SessionSummary::from_stimuli(&stimuli);
        assert_eq!(summary.total_trials, 1);
        assert_eq!(summary.accuracy, 1.0);
        assert!(summary.is_strong());
    }

    #[test]
    fn perfect_discrimination_has_positive_d_prime() {
        let stimuli: Vec<Stimulus> = (0..10)
            .map(|i| {
                if i % 2 == 0 {
                    answered(i, true, Some(500.0 + i as f64))
                } else {
                    answered(i, false, None)
                }
            })
            .collect();

        let summary = SessionSummary::from_stimuli(&stimuli);
        assert!(summary.d_prime > 1.0);
        assert_eq!(summary.response_count, 5);
        assert!((summary.mean_hit_rt_ms - 504.0).abs() < 1e-9);
    }

    #[test]
    fn probit_matches_known_quantiles() {
        assert!(probit(0.5).abs() < 1e-9);
        assert!((probit(0.975) - 1.959_964).abs() < 1e-3);
        assert!((probit(0.01) + 2.326_348).abs() < 1e-3);
        assert_eq!(probit(0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn percentile_interpolates_between_ranks() {
        let sorted = [100.0, 200.0, 300.0, 400.0];
        assert_eq!(percentile(&sorted, 0.0), 100.0);
        assert_eq!(percentile(&sorted, 1.0), 400.0);
        assert!((percentile(&sorted, 0.5) - 250.0).abs() < 1e-9);
        assert_eq!(percentile(&[], 0.5), 0.0);
    }

    #[test]
    fn empty_session_is_default() {
        assert_eq!(SessionSummary::from_stimuli(&[]), SessionSummary::default());
    }
}
