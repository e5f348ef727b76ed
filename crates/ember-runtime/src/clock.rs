//! Game clock with fixed-timestep accumulator

use std::time::Instant;

/// Longest elapsed time a single host callback may contribute to the
/// accumulator. A suspended host (backgrounded tab, stopped debugger)
/// otherwise banks hours of catch-up steps on resume.
const MAX_FRAME_TIME: f64 = 0.25;

/// Tracks elapsed time and provides a fixed-timestep accumulator.
///
/// The clock separates *when the host repaints* from *how often the
/// simulation steps*: every callback feeds real elapsed time into the
/// accumulator, and the loop drains it in fixed-size steps.
pub struct GameClock {
    /// Total elapsed game time in seconds
    pub total_time: f64,
    /// Time since last frame in seconds (after clamping)
    pub delta_time: f64,
    /// Fixed timestep interval (default: 1/60 second)
    pub fixed_timestep: f64,
    /// Accumulated time for fixed-step consumption
    accumulator: f64,
    /// Last tick instant
    last_instant: Instant,
    /// Whether this is the first tick since creation or reset
    first_tick: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            fixed_timestep: 1.0 / 60.0,
            accumulator: 0.0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl GameClock {
    /// Create a new game clock with the default 60Hz fixed timestep
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a game clock with a custom fixed update rate
    pub fn with_rate(hz: f64) -> Self {
        Self {
            fixed_timestep: 1.0 / hz,
            ..Self::default()
        }
    }

    /// Advance the clock from the monotonic system clock. Call once per
    /// host callback.
    pub fn tick(&mut self) {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_time = 0.0;
            return;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.advance(elapsed);
    }

    /// Advance the clock by host-supplied elapsed seconds.
    ///
    /// Hosts whose scheduler hands them timestamps (wasm animation frames,
    /// headless test drivers) use this instead of [`tick`](Self::tick).
    pub fn advance(&mut self, elapsed: f64) {
        self.delta_time = elapsed.min(MAX_FRAME_TIME);
        self.total_time += self.delta_time;
        self.accumulator += self.delta_time;
    }

    /// Discard banked time so the next tick starts a fresh frame sequence.
    ///
    /// Called when a loop starts; a restarted loop must not replay time
    /// accumulated before it was stopped.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.delta_time = 0.0;
        self.first_tick = true;
    }

    /// Returns true if there's enough accumulated time for a fixed update step
    pub fn should_fixed_update(&self) -> bool {
        self.accumulator >= self.fixed_timestep
    }

    /// Consume one fixed timestep from the accumulator
    pub fn consume_fixed_step(&mut self) {
        self.accumulator -= self.fixed_timestep;
    }

    /// Get the interpolation alpha for rendering between fixed steps
    pub fn interpolation_alpha(&self) -> f64 {
        self.accumulator / self.fixed_timestep
    }
}
