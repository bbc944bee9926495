//! Tunable constants for the alien go/no-go game.

use serde::{Deserialize, Serialize};

pub const ALIEN_LOG_FILE: &str = "adhd_log.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlienConfig {
    pub field_width: f64,
    pub field_height: f64,
    pub alien_size: f64,
    /// Horizontal spawn range keeps this distance from both edges.
    pub spawn_margin: f64,
    pub spawn_y: f64,
    pub game_duration_ms: u64,
    /// Share of spawns that must be shot.
    pub go_probability: f64,
    pub initial_spawn_delay_ms: f64,
    pub min_spawn_delay_ms: f64,
    pub spawn_delay_step_ms: f64,
    /// Pixels per reference frame.
    pub initial_speed: f64,
    pub speed_step: f64,
    pub max_speed: f64,
    pub difficulty_interval_ms: f64,
    pub explosion_ms: f64,
    /// Speeds are expressed per frame at this duration.
    pub reference_frame_ms: f64,
    pub hit_points: i32,
    pub error_penalty: i32,
}

impl Default for AlienConfig {
    fn default() -> Self {
        Self {
            field_width: 800.0,
            field_height: 600.0,
            alien_size: 50.0,
            spawn_margin: 100.0,
            spawn_y: -60.0,
            game_duration_ms: 60_000,
            go_probability: 0.7,
            initial_spawn_delay_ms: 1_000.0,
            min_spawn_delay_ms: 200.0,
            spawn_delay_step_ms: 150.0,
            initial_speed: 2.0,
            speed_step: 0.7,
            max_speed: 6.0,
            difficulty_interval_ms: 5_000.0,
            explosion_ms: 250.0,
            reference_frame_ms: 1_000.0 / 60.0,
            hit_points: 10,
            error_penalty: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_the_default_game() {
        let config: AlienConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AlienConfig::default());
    }

    #[test]
    fn ramp_reaches_floor_within_a_game() {
        let c = AlienConfig::default();
        let steps = (c.game_duration_ms as f64 / c.difficulty_interval_ms).floor();
        assert!(c.initial_spawn_delay_ms - steps * c.spawn_delay_step_ms <= c.min_spawn_delay_ms);
    }
}
