//! N-back grid task: letter + position must match the stimulus `n_back` trials earlier.

pub mod config;
pub mod engine;
pub mod generator;
pub mod metrics;
pub mod practice;
pub mod record;
pub mod stimulus;
pub mod summary;
mod view;

pub use config::NBackConfig;
pub use engine::{Advance, Command, Effect, NBackSession, Phase};
pub use record::TrialRecord;
pub use summary::SessionSummary;
pub use view::NBackView;
