use std::time::Instant;

/// Longest step handed to the simulation, in seconds.
pub const DEFAULT_MAX_DELTA: f32 = 0.1;

/// Minimal frame clock - tracks delta time between ticks
/// Long stalls (window drags, breakpoints) are clamped to `max_delta`
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
    max_delta: f32,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self::with_max_delta(DEFAULT_MAX_DELTA)
    }

    pub fn with_max_delta(max_delta: f32) -> Self {
        Self {
            last_tick: Instant::now(),
            max_delta: max_delta.max(0.0),
        }
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds, within [0, max_delta]
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta.min(self.max_delta)
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
