//! Cognitive task engines and their views.

pub mod alien;
pub mod nback;
