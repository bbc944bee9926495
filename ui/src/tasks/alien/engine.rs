//! Go/no-go shooting game: red aliens must be shot, green aliens left alone.
//!
//! Aliens fall from the top of the field. Every `difficulty_interval_ms` the
//! spawn delay shrinks and the fall speed grows, both clamped. An alien that is
//! shot or falls off the bottom produces exactly one [`ShotRecord`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::core::storage::{StorageError, TrialSink};
use crate::core::timing::{InstantStamp, Tick};

use super::config::AlienConfig;
use super::record::{ShotAction, ShotRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlienKind {
    Go,
    NoGo,
}

impl AlienKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Go => "Go",
            Self::NoGo => "No-Go",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alien {
    pub id: u64,
    pub kind: AlienKind,
    pub x: f64,
    pub y: f64,
    pub spawned_at: InstantStamp,
    pub responded: bool,
    pub exploding_since: Option<InstantStamp>,
}

impl Alien {
    fn contains(&self, px: f64, py: f64, size: f64) -> bool {
        px >= self.x && px < self.x + size && py >= self.y && py < self.y + size
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlienPhase {
    Ready,
    Playing,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlienCommand {
    Start,
    /// Click at field coordinates.
    Shoot { x: f64, y: f64 },
    Exit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlienEffect {
    Logged(ShotRecord),
    /// A shot connected; the view plays the laser cue.
    Shot,
    Exit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlienAdvance {
    pub phase: AlienPhase,
    pub effects: Vec<AlienEffect>,
}

impl AlienAdvance {
    pub fn records(&self) -> impl Iterator<Item = &ShotRecord> {
        self.effects.iter().filter_map(|effect| match effect {
            AlienEffect::Logged(record) => Some(record),
            _ => None,
        })
    }

    pub fn wants_exit(&self) -> bool {
        self.effects.contains(&AlienEffect::Exit)
    }

    pub fn flush<S: TrialSink<ShotRecord>>(&self, sink: &mut S) -> Result<usize, StorageError> {
        let mut written = 0;
        let mut first_error = None;
        for record in self.records() {
            match sink.append(record) {
                Ok(()) => written += 1,
                Err(err) => {
                    tracing::error!(error = %err, "failed to log alien response");
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

#[derive(Debug, Clone)]
pub struct AlienGame {
    pub config: AlienConfig,
    rng: StdRng,
    pub phase: AlienPhase,
    pub started_at: InstantStamp,
    last_tick: Option<InstantStamp>,
    next_spawn_at: InstantStamp,
    last_ramp_at: InstantStamp,
    pub spawn_delay_ms: f64,
    pub speed: f64,
    pub aliens: Vec<Alien>,
    pub score: i32,
    pub hits: u32,
    pub misses: u32,
    next_id: u64,
}

impl Default for AlienGame {
    fn default() -> Self {
        Self::new(AlienConfig::default())
    }
}

impl AlienGame {
    pub fn new(config: AlienConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn seeded(config: AlienConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: AlienConfig, rng: StdRng) -> Self {
        Self {
            spawn_delay_ms: config.initial_spawn_delay_ms,
            speed: config.initial_speed,
            config,
            rng,
            phase: AlienPhase::Ready,
            started_at: InstantStamp::default(),
            last_tick: None,
            next_spawn_at: InstantStamp::default(),
            last_ramp_at: InstantStamp::default(),
            aliens: Vec::new(),
            score: 0,
            hits: 0,
            misses: 0,
            next_id: 0,
        }
    }

    pub fn remaining_ms(&self, now: InstantStamp) -> f64 {
        match self.phase {
            AlienPhase::Playing => {
                (self.config.game_duration_ms as f64 - now.since(self.started_at)).max(0.0)
            }
            AlienPhase::Ready => self.config.game_duration_ms as f64,
            AlienPhase::Finished => 0.0,
        }
    }

    pub fn advance(&mut self, tick: Tick, input: Option<AlienCommand>) -> AlienAdvance {
        let mut effects = Vec::new();

        match (self.phase, input) {
            (_, Some(AlienCommand::Exit)) => effects.push(AlienEffect::Exit),
            (AlienPhase::Ready | AlienPhase::Finished, Some(AlienCommand::Start)) => {
                self.begin(tick.now)
            }
            _ => {}
        }

        if self.phase != AlienPhase::Playing {
            return AlienAdvance {
                phase: self.phase,
                effects,
            };
        }

        let now = tick.now;
        if now.since(self.started_at) > self.config.game_duration_ms as f64 {
            self.phase = AlienPhase::Finished;
            self.aliens.clear();
            tracing::info!(score = self.score, hits = self.hits, misses = self.misses, "alien game over");
            return AlienAdvance {
                phase: self.phase,
                effects,
            };
        }

        if now.since(self.last_ramp_at) > self.config.difficulty_interval_ms {
            self.last_ramp_at = now;
            self.spawn_delay_ms = (self.spawn_delay_ms - self.config.spawn_delay_step_ms)
                .max(self.config.min_spawn_delay_ms);
            self.speed = (self.speed + self.config.speed_step).min(self.config.max_speed);
            tracing::debug!(spawn_delay_ms = self.spawn_delay_ms, speed = self.speed, "difficulty ramp");
        }

        if let Some(AlienCommand::Shoot { x, y }) = input {
            self.shoot(x, y, tick, &mut effects);
        }

        if now >= self.next_spawn_at {
            self.spawn(now);
            self.next_spawn_at = InstantStamp::from_ms(now.ms + self.spawn_delay_ms);
        }

        let frames = self
            .last_tick
            .map_or(0.0, |last| now.since(last) / self.config.reference_frame_ms);
        self.last_tick = Some(now);
        for alien in self.aliens.iter_mut().filter(|a| a.exploding_since.is_none()) {
            alien.y += self.speed * frames;
        }

        self.sweep(tick, &mut effects);

        AlienAdvance {
            phase: self.phase,
            effects,
        }
    }

    fn begin(&mut self, now: InstantStamp) {
        let config = self.config.clone();
        let rng = self.rng.clone();
        *self = Self::with_rng(config, rng);
        self.phase = AlienPhase::Playing;
        self.started_at = now;
        self.last_ramp_at = now;
        self.next_spawn_at = now;
        self.last_tick = Some(now);
    }

    fn spawn(&mut self, now: InstantStamp) {
        let kind = if self.rng.gen_bool(self.config.go_probability.clamp(0.0, 1.0)) {
            AlienKind::Go
        } else {
            AlienKind::NoGo
        };
        let low = self.config.spawn_margin;
        let high = (self.config.field_width - self.config.spawn_margin).max(low);
        let x = self.rng.gen_range(low..=high).round();
        self.aliens.push(Alien {
            id: self.next_id,
            kind,
            x,
            y: self.config.spawn_y,
            spawned_at: now,
            responded: false,
            exploding_since: None,
        });
        self.next_id += 1;
    }

    fn shoot(&mut self, x: f64, y: f64, tick: Tick, effects: &mut Vec<AlienEffect>) {
        let size = self.config.alien_size;
        let Some(alien) = self
            .aliens
            .iter_mut()
            .find(|a| !a.responded && a.contains(x, y, size))
        else {
            return;
        };

        alien.responded = true;
        alien.exploding_since = Some(tick.now);
        let rt = tick.now.since(alien.spawned_at);
        let correct = alien.kind == AlienKind::Go;
        if correct {
            self.score += self.config.hit_points;
            self.hits += 1;
        } else {
            self.score -= self.config.error_penalty;
            self.misses += 1;
        }

        effects.push(AlienEffect::Logged(ShotRecord {
            logged_at: tick.wall,
            kind: alien.kind,
            action: ShotAction::Shoot,
            correct,
            reaction_time_ms: Some(rt),
        }));
        effects.push(AlienEffect::Shot);
    }

    /// Logs escaped aliens and drops finished explosions.
    fn sweep(&mut self, tick: Tick, effects: &mut Vec<AlienEffect>) {
        let height = self.config.field_height;
        let explosion_ms = self.config.explosion_ms;
        let mut escaped_go = 0;

        self.aliens.retain(|alien| {
            if !alien.responded && alien.y > height {
                let correct = alien.kind == AlienKind::NoGo;
                if !correct {
                    escaped_go += 1;
                }
                effects.push(AlienEffect::Logged(ShotRecord {
                    logged_at: tick.wall,
                    kind: alien.kind,
                    action: ShotAction::NoShot,
                    correct,
                    reaction_time_ms: None,
                }));
                return false;
            }
            match alien.exploding_since {
                Some(since) => tick.now.since(since) <= explosion_ms,
                None => true,
            }
        });

        self.misses += escaped_go;
    }
}
