//! High-resolution timing utilities for task engines.
//!
//! Engines never read the clock themselves. The view captures one [`Tick`] per
//! frame and every duration comparison inside that frame uses the same reading.

use std::time::{Duration, Instant};

use once_cell::sync::Lazy;
use time::OffsetDateTime;

/// Monotonic anchor for [`InstantStamp`]; fixed at first use.
static CLOCK_ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);

/// Milliseconds on the monotonic clock since the process anchor.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct InstantStamp {
    pub ms: f64,
}

impl InstantStamp {
    pub const fn from_ms(ms: f64) -> Self {
        Self { ms }
    }

    /// Milliseconds elapsed from `earlier` to `self`, clamped at zero.
    pub fn since(self, earlier: InstantStamp) -> f64 {
        (self.ms - earlier.ms).max(0.0)
    }
}

/// One frame's view of time: a monotonic stamp plus the wall clock used for log rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub now: InstantStamp,
    pub wall: OffsetDateTime,
}

impl Tick {
    pub fn capture() -> Self {
        Self {
            now: now(),
            wall: wall_clock(),
        }
    }

    /// Fixed tick for headless drivers and tests.
    pub fn at(ms: f64) -> Self {
        Self {
            now: InstantStamp::from_ms(ms),
            wall: OffsetDateTime::UNIX_EPOCH,
        }
    }
}

pub fn now() -> InstantStamp {
    InstantStamp::from_ms(CLOCK_ORIGIN.elapsed().as_secs_f64() * 1000.0)
}

/// Local wall clock, falling back to UTC when the offset cannot be determined.
pub fn wall_clock() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
