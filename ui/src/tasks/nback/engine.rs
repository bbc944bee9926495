//! Session state machine for the N-back grid task.
//!
//! The view feeds one [`Tick`] and at most one [`Command`] per frame into
//! [`NBackSession::advance`]; everything that has to leave the engine (log rows,
//! feedback, exit) comes back as [`Effect`]s so the engine runs headless.
//!
//! A press during the stimulus is recorded immediately, but the stimulus stays
//! up for the full `stimulus_duration_ms` before the feedback break starts.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::format::session_slug;
use crate::core::storage::{StorageError, TrialSink};
use crate::core::timing::{InstantStamp, Tick};

use super::config::NBackConfig;
use super::generator;
use super::metrics::{BehaviorCounters, TrialMetrics};
use super::practice;
use super::record::TrialRecord;
use super::stimulus::{ResponseType, Stimulus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Instructions,
    Practice,
    Playing,
    Break,
    Finished,
}

/// Participant input after key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Practice,
    /// "This is a match."
    Press,
    OtherKey,
    Exit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub text: String,
    pub positive: bool,
    pub at: InstantStamp,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    TrialLogged(Box<TrialRecord>),
    Feedback(Feedback),
    Exit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Advance {
    pub phase: Phase,
    pub effects: Vec<Effect>,
}

impl Advance {
    pub fn records(&self) -> impl Iterator<Item = &TrialRecord> {
        self.effects.iter().filter_map(|effect| match effect {
            Effect::TrialLogged(record) => Some(record.as_ref()),
            _ => None,
        })
    }

    pub fn wants_exit(&self) -> bool {
        self.effects.contains(&Effect::Exit)
    }

    /// Appends every logged trial to `sink`, attempting all rows even after a failure.
    pub fn flush<S: TrialSink<TrialRecord>>(&self, sink: &mut S) -> Result<usize, StorageError> {
        let mut written = 0;
        let mut first_error = None;
        for record in self.records() {
            match sink.append(record) {
                Ok(()) => written += 1,
                Err(err) => {
                    tracing::error!(trial = record.trial_number, error = %err, "failed to log trial");
                    first_error.get_or_insert(err);
                }
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(written),
        }
    }
}

/// Counters shown beside the grid and on the final screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Scoreboard {
    pub score: i32,
    pub hits: u32,
    pub misses: u32,
    pub false_alarms: u32,
    pub correct_rejections: u32,
    /// 1-based trial on screen, capped at `trial_count`.
    pub trial_number: usize,
    pub trial_count: usize,
    pub n_back: usize,
    pub hit_points: i32,
    pub error_penalty: i32,
}

impl Scoreboard {
    pub fn accuracy(&self) -> f64 {
        let total = self.hits + self.misses + self.false_alarms + self.correct_rejections;
        if total == 0 {
            0.0
        } else {
            (self.hits + self.correct_rejections) as f64 / total as f64
        }
    }
}

#[derive(Debug, Clone)]
pub struct NBackSession {
    pub config: NBackConfig,
    pub session_id: String,
    rng: StdRng,
    /// Every presented stimulus, in order.
    pub stimuli: Vec<Stimulus>,
    current: Option<usize>,
    pub score: i32,
    pub hits: u32,
    pub misses: u32,
    pub false_alarms: u32,
    pub correct_rejections: u32,
    pub phase: Phase,
    pub phase_started_at: InstantStamp,
    /// Index of the trial being presented; reaches `trial_count` at the end.
    pub trial: usize,
    pub counters: BehaviorCounters,
    pub practice_trials: Vec<Stimulus>,
    pub practice_index: usize,
    pub feedback: Option<Feedback>,
}

impl Default for NBackSession {
    fn default() -> Self {
        Self::new(NBackConfig::default())
    }
}

impl NBackSession {
    /// Fresh session seeded from OS entropy and named after the current wall clock.
    pub fn new(config: NBackConfig) -> Self {
        let session_id = session_slug(crate::core::timing::wall_clock());
        Self::with_rng(config, session_id, StdRng::from_entropy())
    }

    /// Deterministic session for replays and tests.
    pub fn seeded(config: NBackConfig, session_id: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(config, session_id.into(), StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: NBackConfig, session_id: String, rng: StdRng) -> Self {
        Self {
            config,
            session_id,
            rng,
            stimuli: Vec::new(),
            current: None,
            score: 0,
            hits: 0,
            misses: 0,
            false_alarms: 0,
            correct_rejections: 0,
            phase: Phase::Instructions,
            phase_started_at: InstantStamp::default(),
            trial: 0,
            counters: BehaviorCounters::default(),
            practice_trials: Vec::new(),
            practice_index: 0,
            feedback: None,
        }
    }

    pub fn current_stimulus(&self) -> Option<&Stimulus> {
        self.current.and_then(|index| self.stimuli.get(index))
    }

    /// The stimulus `n_back` trials before the current one, if any.
    pub fn reference_stimulus(&self) -> Option<&Stimulus> {
        let index = self.current?.checked_sub(self.config.n_back)?;
        if self.config.n_back == 0 {
            return None;
        }
        self.stimuli.get(index)
    }

    pub fn practice_complete(&self) -> bool {
        self.phase == Phase::Practice && self.practice_index >= self.practice_trials.len()
    }

    /// Milliseconds left in the current timed phase.
    pub fn remaining_ms(&self, now: InstantStamp) -> f64 {
        let budget = match self.phase {
            Phase::Playing => self.config.stimulus_duration_ms,
            Phase::Break => self.config.inter_stimulus_interval_ms,
            _ => return 0.0,
        } as f64;
        (budget - now.since(self.phase_started_at)).max(0.0)
    }

    pub fn finalized_trials(&self) -> usize {
        (self.hits + self.misses + self.false_alarms + self.correct_rejections) as usize
    }

    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            score: self.score,
            hits: self.hits,
            misses: self.misses,
            false_alarms: self.false_alarms,
            correct_rejections: self.correct_rejections,
            trial_number: (self.trial + 1).min(self.config.trial_count),
            trial_count: self.config.trial_count,
            n_back: self.config.n_back,
            hit_points: self.config.hit_points,
            error_penalty: self.config.error_penalty,
        }
    }

    /// One frame: apply `input` if it is valid for the current phase, then run timers.
    pub fn advance(&mut self, tick: Tick, input: Option<Command>) -> Advance {
        let mut effects = Vec::new();

        if let Some(command) = input {
            self.apply(command, tick, &mut effects);
        }

        match self.phase {
            Phase::Playing => self.step_playing(tick, &mut effects),
            Phase::Break => {
                if tick.now.since(self.phase_started_at)
                    >= self.config.inter_stimulus_interval_ms as f64
                {
                    self.trial += 1;
                    self.current = None;
                    self.enter(Phase::Playing, tick.now);
                    self.step_playing(tick, &mut effects);
                }
            }
            Phase::Instructions | Phase::Practice | Phase::Finished => {}
        }

        Advance {
            phase: self.phase,
            effects,
        }
    }

    fn apply(&mut self, command: Command, tick: Tick, effects: &mut Vec<Effect>) {
        match (self.phase, command) {
            (Phase::Instructions, Command::Start) => self.enter(Phase::Playing, tick.now),
            (Phase::Instructions, Command::Practice) => {
                self.practice_trials = practice::practice_trials();
                self.practice_index = 0;
                self.enter(Phase::Practice, tick.now);
            }
            (Phase::Practice, command) => {
                if let Some(stimulus) = self.practice_trials.get(self.practice_index) {
                    // Every key, Escape included, answers the current practice trial.
                    let verdict = practice::judge(stimulus, command == Command::Press);
                    self.push_feedback(verdict.message.to_string(), verdict.correct, tick, effects);
                    self.practice_index += 1;
                } else if command == Command::Start {
                    self.enter(Phase::Playing, tick.now);
                } else {
                    tracing::trace!(?command, "practice complete, waiting for start");
                }
            }
            (Phase::Playing, Command::Press) => {
                let within_window = tick.now.since(self.phase_started_at)
                    < self.config.stimulus_duration_ms as f64;
                if within_window {
                    if let Some(record) = self.handle_response(true, tick, effects) {
                        effects.push(Effect::TrialLogged(Box::new(record)));
                    }
                }
            }
            (Phase::Finished, Command::Exit) => effects.push(Effect::Exit),
            (phase, command) => {
                tracing::trace!(?phase, ?command, "ignoring command outside its phase");
            }
        }
    }

    fn step_playing(&mut self, tick: Tick, effects: &mut Vec<Effect>) {
        if self.trial >= self.config.trial_count {
            self.enter(Phase::Finished, tick.now);
            tracing::info!(
                session = %self.session_id,
                score = self.score,
                hits = self.hits,
                misses = self.misses,
                false_alarms = self.false_alarms,
                "n-back session finished"
            );
            return;
        }

        let Some(index) = self.current else {
            let mut stimulus = generator::generate(
                &mut self.rng,
                self.trial,
                &self.stimuli,
                self.config.n_back,
                self.config.match_probability,
            );
            stimulus.shown_at = tick.now;
            self.stimuli.push(stimulus);
            self.current = Some(self.stimuli.len() - 1);
            self.phase_started_at = tick.now;
            return;
        };

        if tick.now.since(self.phase_started_at) >= self.config.stimulus_duration_ms as f64 {
            if !self.stimuli[index].responded {
                if let Some(record) = self.handle_response(false, tick, effects) {
                    effects.push(Effect::TrialLogged(Box::new(record)));
                }
            }
            self.enter(Phase::Break, tick.now);
        }
    }

    /// Finalizes the current stimulus. Returns `None` if it was already answered.
    pub fn handle_response(
        &mut self,
        pressed: bool,
        tick: Tick,
        effects: &mut Vec<Effect>,
    ) -> Option<TrialRecord> {
        let index = self.current?;
        let config = &self.config;
        let stimulus = &mut self.stimuli[index];
        if stimulus.responded {
            return None;
        }

        stimulus.user_pressed = pressed;
        stimulus.responded = true;
        if pressed {
            stimulus.reaction_time_ms = Some(tick.now.since(stimulus.shown_at));
        }

        let outcome = ResponseType::classify(pressed, stimulus.is_match);
        stimulus.correct = Some(outcome.is_correct());

        let (delta, text) = match outcome {
            ResponseType::Hit => {
                self.hits += 1;
                (config.hit_points, format!("HIT! +{}", config.hit_points))
            }
            ResponseType::Miss => {
                self.misses += 1;
                (-config.error_penalty, format!("MISS! -{}", config.error_penalty))
            }
            ResponseType::FalseAlarm => {
                self.false_alarms += 1;
                (
                    -config.error_penalty,
                    format!("FALSE ALARM! -{}", config.error_penalty),
                )
            }
            ResponseType::CorrectRejection => {
                self.correct_rejections += 1;
                (0, "CORRECT!".to_string())
            }
        };
        self.score += delta;

        let stimulus = &self.stimuli[index];
        let metrics = TrialMetrics::compute(stimulus, &self.stimuli, &mut self.counters, config);

        let record = TrialRecord {
            session_id: self.session_id.clone(),
            trial_number: stimulus.trial_index + 1,
            letter: stimulus.letter,
            position: stimulus.position,
            is_match: stimulus.is_match,
            user_pressed: stimulus.user_pressed,
            correct: outcome.is_correct(),
            reaction_time_ms: stimulus.reaction_time_ms,
            score: self.score,
            logged_at: tick.wall,
            metrics,
            stimulus_duration_ms: config.stimulus_duration_ms,
            inter_trial_interval_ms: config.inter_stimulus_interval_ms,
        };

        tracing::debug!(
            trial = record.trial_number,
            outcome = outcome.as_str(),
            score = self.score,
            "trial finalized"
        );

        self.push_feedback(text, outcome.is_correct(), tick, effects);
        Some(record)
    }

    fn push_feedback(&mut self, text: String, positive: bool, tick: Tick, effects: &mut Vec<Effect>) {
        let feedback = Feedback {
            text,
            positive,
            at: tick.now,
        };
        self.feedback = Some(feedback.clone());
        effects.push(Effect::Feedback(feedback));
    }

    fn enter(&mut self, phase: Phase, now: InstantStamp) {
        tracing::debug!(from = ?self.phase, to = ?phase, "phase transition");
        self.phase = phase;
        self.phase_started_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemorySink;
    use crate::tasks::nback::stimulus::GridPos;

    fn session() -> NBackSession {
        NBackSession::seeded(NBackConfig::default(), "test", 42)
    }

    /// Started session sized for `script`; tests overwrite each generated stimulus.
    fn scripted(script: &[(char, (u8, u8))], n_back: usize) -> NBackSession {
        let config = NBackConfig {
            n_back,
            trial_count: script.len(),
            ..NBackConfig::default()
        };
        let mut session = NBackSession::seeded(config, "scripted", 1);
        session.advance(Tick::at(0.0), Some(Command::Start));
        session
    }

    fn overwrite_current(session: &mut NBackSession, letter: char, cell: (u8, u8)) {
        let index = session.current.unwrap();
        let n_back = session.config.n_back;
        let reference = index
            .checked_sub(n_back)
            .map(|i| (session.stimuli[i].letter, session.stimuli[i].position));
        let stimulus = &mut session.stimuli[index];
        stimulus.letter = letter;
        stimulus.position = GridPos::new(cell.0, cell.1);
        stimulus.is_match = reference == Some((letter, stimulus.position));
    }

    #[test]
    fn start_presents_first_stimulus_immediately() {
        let mut s = session();
        assert_eq!(s.phase, Phase::Instructions);
        let step = s.advance(Tick::at(100.0), Some(Command::Start));
        assert_eq!(step.phase, Phase::Playing);
        let current = s.current_stimulus().unwrap();
        assert_eq!(current.trial_index, 0);
        assert!(!current.is_match);
        assert_eq!(current.shown_at, InstantStamp::from_ms(100.0));
    }

    #[test]
    fn commands_outside_phase_are_ignored() {
        let mut s = session();
        let step = s.advance(Tick::at(0.0), Some(Command::Press));
        assert_eq!(step.phase, Phase::Instructions);
        assert!(step.effects.is_empty());
        let step = s.advance(Tick::at(1.0), Some(Command::Exit));
        assert!(!step.wants_exit());
        assert!(s.stimuli.is_empty());
    }

    #[test]
    fn timeout_finalizes_then_breaks_then_next_trial() {
        let mut s = session();
        s.advance(Tick::at(0.0), Some(Command::Start));

        let step = s.advance(Tick::at(1_999.0), None);
        assert_eq!(step.phase, Phase::Playing);
        assert_eq!(step.records().count(), 0);

        let step = s.advance(Tick::at(2_000.0), None);
        assert_eq!(step.phase, Phase::Break);
        assert_eq!(step.records().count(), 1);
        let first = s.current_stimulus().unwrap();
        assert!(first.responded);
        assert!(!first.user_pressed);
        assert_eq!(first.reaction_time_ms, None);

        let step = s.advance(Tick::at(2_499.0), None);
        assert_eq!(step.phase, Phase::Break);

        let step = s.advance(Tick::at(2_500.0), None);
        assert_eq!(step.phase, Phase::Playing);
        assert_eq!(s.trial, 1);
        assert_eq!(s.current_stimulus().unwrap().trial_index, 1);
        assert_eq!(s.stimuli.len(), 2);
    }

    #[test]
    fn early_press_keeps_stimulus_for_full_duration() {
        let mut s = session();
        s.advance(Tick::at(0.0), Some(Command::Start));

        let step = s.advance(Tick::at(640.0), Some(Command::Press));
        assert_eq!(step.phase, Phase::Playing);
        let record = step.records().next().unwrap();
        assert_eq!(record.reaction_time_ms, Some(640.0));
        assert!(record.user_pressed);

        // A second press is not a second response.
        let step = s.advance(Tick::at(900.0), Some(Command::Press));
        assert_eq!(step.records().count(), 0);
        assert_eq!(s.finalized_trials(), 1);

        let step = s.advance(Tick::at(2_000.0), None);
        assert_eq!(step.phase, Phase::Break);
        assert_eq!(step.records().count(), 0);
    }

    #[test]
    fn handle_response_is_not_reentrant() {
        let mut s = session();
        s.advance(Tick::at(0.0), Some(Command::Start));
        let mut effects = Vec::new();
        assert!(s.handle_response(false, Tick::at(10.0), &mut effects).is_some());
        let score = s.score;
        assert!(s.handle_response(true, Tick::at(20.0), &mut effects).is_none());
        assert_eq!(s.score, score);
        assert_eq!(s.finalized_trials(), 1);
    }

    #[test]
    fn documented_one_back_walkthrough_scores_ten() {
        let script = [
            ('A', (0, 0)),
            ('B', (1, 1)),
            ('B', (1, 1)),
            ('B', (2, 0)),
            ('C', (1, 1)),
        ];
        let mut s = scripted(&script, 1);
        let mut sink = MemorySink::default();
        let mut t = 0.0;

        for (index, &(letter, cell)) in script.iter().enumerate() {
            overwrite_current(&mut s, letter, cell);
            if index == 2 {
                s.advance(Tick::at(t + 450.0), Some(Command::Press))
                    .flush(&mut sink)
                    .unwrap();
            }
            t += 2_000.0;
            s.advance(Tick::at(t), None).flush(&mut sink).unwrap();
            t += 500.0;
            s.advance(Tick::at(t), None);
        }

        assert_eq!(s.phase, Phase::Finished);
        let matches: Vec<bool> = s.stimuli.iter().map(|st| st.is_match).collect();
        assert_eq!(matches, vec![false, false, true, false, false]);
        assert_eq!(s.score, 10);
        assert_eq!(s.hits, 1);
        assert_eq!(s.correct_rejections, 4);
        assert_eq!(s.scoreboard().accuracy(), 1.0);
        assert_eq!(s.scoreboard().trial_number, 5);

        let types: Vec<ResponseType> = sink.records.iter().map(|r| r.metrics.response_type).collect();
        assert_eq!(
            types,
            vec![
                ResponseType::CorrectRejection,
                ResponseType::CorrectRejection,
                ResponseType::Hit,
                ResponseType::CorrectRejection,
                ResponseType::CorrectRejection,
            ]
        );
        let numbers: Vec<usize> = sink.records.iter().map(|r| r.trial_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert_eq!(sink.records[2].score, 10);
        assert_eq!(sink.records[2].reaction_time_ms, Some(450.0));
        assert_eq!(
            sink.records[3].metrics.difficulty,
            crate::tasks::nback::stimulus::Difficulty::Hard
        );
        // Trial 5 is compared against trial 4, not trial 2.
        assert_eq!(
            sink.records[4].metrics.difficulty,
            crate::tasks::nback::stimulus::Difficulty::Easy
        );
    }

    #[test]
    fn unanswered_match_is_miss_and_lapse() {
        let script = [('D', (2, 2)), ('D', (2, 2))];
        let mut s = scripted(&script, 1);
        let mut sink = MemorySink::default();

        overwrite_current(&mut s, 'D', (2, 2));
        s.advance(Tick::at(2_000.0), None).flush(&mut sink).unwrap();
        s.advance(Tick::at(2_500.0), None);
        overwrite_current(&mut s, 'D', (2, 2));
        assert!(s.current_stimulus().unwrap().is_match);
        s.advance(Tick::at(4_500.0), None).flush(&mut sink).unwrap();

        let miss = &sink.records[1];
        assert_eq!(miss.metrics.response_type, ResponseType::Miss);
        assert!(miss.metrics.attention_lapse);
        assert!(!miss.correct);
        assert_eq!(s.score, -5);
        assert_eq!(s.counters.attention_lapses, 1);
        assert_eq!(s.counters.consecutive_errors, 1);
    }

    #[test]
    fn false_alarm_costs_five_and_score_has_no_floor() {
        let mut s = session();
        s.advance(Tick::at(0.0), Some(Command::Start));
        // The first trial can never be a match.
        let step = s.advance(Tick::at(100.0), Some(Command::Press));
        let record = step.records().next().unwrap();
        assert_eq!(record.metrics.response_type, ResponseType::FalseAlarm);
        assert!(record.metrics.premature);
        assert_eq!(record.metrics.impulsivity_score, 3);
        assert_eq!(s.score, -5);
        assert_eq!(s.false_alarms, 1);
    }

    #[test]
    fn score_delta_is_one_of_three_values() {
        let mut s = session();
        let mut t = 0.0;
        s.advance(Tick::at(t), Some(Command::Start));
        let mut previous = 0;
        let mut trial = 0;
        while s.phase != Phase::Finished {
            let input = (trial % 3 == 0).then_some(Command::Press);
            s.advance(Tick::at(t + 300.0), input);
            t += 2_000.0;
            s.advance(Tick::at(t), None);
            let delta = s.score - previous;
            assert!([10, -5, 0].contains(&delta), "delta {delta}");
            previous = s.score;
            t += 500.0;
            s.advance(Tick::at(t), None);
            trial += 1;
        }
        assert_eq!(trial, 30);
        assert_eq!(s.trial, s.config.trial_count);
        assert_eq!(s.finalized_trials(), 30);
        assert!(s.stimuli.iter().all(|st| st.responded));
    }

    #[test]
    fn practice_completes_after_six_advances_of_any_key() {
        let mut s = session();
        s.advance(Tick::at(0.0), Some(Command::Practice));
        assert_eq!(s.phase, Phase::Practice);

        let keys = [
            Command::Exit,
            Command::Start,
            Command::Press,
            Command::Press,
            Command::OtherKey,
            Command::OtherKey,
        ];
        for (i, key) in keys.into_iter().enumerate() {
            assert!(!s.practice_complete());
            let step = s.advance(Tick::at(10.0 * (i + 1) as f64), Some(key));
            assert_eq!(step.phase, Phase::Practice);
            assert!(step.records().next().is_none());
        }
        assert_eq!(s.practice_index, 6);
        assert!(s.practice_complete());
        assert_eq!(s.score, 0);
        // The last key skipped an authored match.
        assert!(s.feedback.as_ref().is_some_and(|f| !f.positive));

        let step = s.advance(Tick::at(100.0), Some(Command::OtherKey));
        assert_eq!(step.phase, Phase::Practice);
        let step = s.advance(Tick::at(105.0), Some(Command::Exit));
        assert_eq!(step.phase, Phase::Practice);
        assert!(!step.wants_exit());
        assert_eq!(s.practice_index, 6);
        let step = s.advance(Tick::at(110.0), Some(Command::Start));
        assert_eq!(step.phase, Phase::Playing);
        assert_eq!(s.stimuli.len(), 1);
    }

    #[test]
    fn escape_key_answers_a_practice_trial() {
        let mut s = session();
        s.advance(Tick::at(0.0), Some(Command::Practice));
        let step = s.advance(Tick::at(10.0), Some(super::super::view::command_for_key("Escape")));
        assert_eq!(s.practice_index, 1);
        assert_eq!(step.phase, Phase::Practice);
        assert!(!step.wants_exit());
    }

    #[test]
    fn finished_waits_for_exit() {
        let config = NBackConfig {
            trial_count: 1,
            ..NBackConfig::default()
        };
        let mut s = NBackSession::seeded(config, "short", 5);
        s.advance(Tick::at(0.0), Some(Command::Start));
        s.advance(Tick::at(2_000.0), None);
        let step = s.advance(Tick::at(2_500.0), None);
        assert_eq!(step.phase, Phase::Finished);
        assert_eq!(s.trial, 1);

        let step = s.advance(Tick::at(3_000.0), Some(Command::Start));
        assert_eq!(step.phase, Phase::Finished);
        assert!(!step.wants_exit());
        let step = s.advance(Tick::at(3_100.0), Some(Command::Exit));
        assert!(step.wants_exit());
    }

    #[test]
    fn remaining_time_counts_down() {
        let mut s = session();
        s.advance(Tick::at(1_000.0), Some(Command::Start));
        assert_eq!(s.remaining_ms(InstantStamp::from_ms(1_500.0)), 1_500.0);
        assert_eq!(s.remaining_ms(InstantStamp::from_ms(4_000.0)), 0.0);
    }
}
