//! Frame clocks supplying the delta time for each tick.

use std::time::{Duration, Instant};

use district_core::constants::MAX_FRAME_DELTA;

/// Supplies elapsed time since the previous step.
pub trait Clock {
    /// Seconds since the last call. Never negative.
    fn delta_secs(&mut self) -> f32;
}

/// Constant step, for deterministic runs and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub dt: f32,
}

/// Real elapsed time between calls, clamped so a stalled host does not
/// produce one giant step.
#[derive(Debug, Clone)]
pub struct WallClock {
    last: Option<Instant>,
    max_delta: Duration,
}

impl FixedClock {
    pub fn new(dt: f32) -> Self {
        Self { dt: dt.max(0.0) }
    }
}

impl Clock for FixedClock {
    fn delta_secs(&mut self) -> f32 {
        self.dt
    }
}

impl WallClock {
    pub fn new() -> Self {
        Self::with_max_delta(Duration::from_secs_f32(MAX_FRAME_DELTA))
    }

    pub fn with_max_delta(max_delta: Duration) -> Self {
        Self {
            last: None,
            max_delta,
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WallClock {
    /// The first call returns zero.
    fn delta_secs(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = match self.last.replace(now) {
            Some(previous) => now.saturating_duration_since(previous),
            None => Duration::ZERO,
        };
        elapsed.min(self.max_delta).as_secs_f32()
    }
}
