//! "Alien Defense": a go/no-go response-inhibition game.

pub mod config;
pub mod engine;
pub mod record;
mod view;

pub use config::AlienConfig;
pub use engine::{AlienAdvance, AlienCommand, AlienEffect, AlienGame, AlienKind, AlienPhase};
pub use record::ShotRecord;
pub use view::AlienView;
