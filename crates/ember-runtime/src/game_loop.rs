//! Fixed-timestep game loop

use crate::clock::GameClock;
use crate::simulation::{LoopControl, Simulation};

/// Drives a [`Simulation`] at a constant update rate regardless of how fast
/// the host repaints.
///
/// One instance per active game screen. The host calls
/// [`frame`](Self::frame) from its per-repaint callback; the loop feeds
/// elapsed time into its [`GameClock`], runs every due fixed-step update,
/// then renders once with the leftover fraction as interpolation alpha.
///
/// `start` and `stop` are idempotent. A stopped loop never advances the
/// simulation: `frame` on a stopped loop is a no-op, and an update that
/// returns [`LoopControl::Stop`] suppresses the remaining updates and the
/// render of that same frame.
pub struct GameLoop {
    pub clock: GameClock,
    running: bool,
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl GameLoop {
    /// Create a loop with the default 60Hz update rate
    pub fn new() -> Self {
        Self {
            clock: GameClock::new(),
            running: false,
        }
    }

    /// Create a loop with a custom fixed update rate
    pub fn with_rate(hz: f64) -> Self {
        Self {
            clock: GameClock::with_rate(hz),
            running: false,
        }
    }

    /// Begin accepting frames. No-op if already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.clock.reset();
        println!(
            "[runtime] loop started at {:.0}Hz",
            1.0 / self.clock.fixed_timestep
        );
    }

    /// Stop the loop. No-op if already stopped.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance one host callback using the monotonic system clock.
    pub fn frame<S: Simulation>(&mut self, sim: &mut S) {
        if !self.running {
            return;
        }
        self.clock.tick();
        self.pump(sim);
    }

    /// Advance one host callback with host-supplied elapsed seconds.
    ///
    /// For hosts whose scheduler reports timestamps directly, and for
    /// deterministic headless drivers.
    pub fn frame_with<S: Simulation>(&mut self, elapsed: f64, sim: &mut S) {
        if !self.running {
            return;
        }
        self.clock.advance(elapsed);
        self.pump(sim);
    }

    fn pump<S: Simulation>(&mut self, sim: &mut S) {
        while self.clock.should_fixed_update() {
            if let LoopControl::Stop = sim.update(self.clock.fixed_timestep) {
                self.running = false;
                return;
            }
            self.clock.consume_fixed_step();
        }
        sim.render(self.clock.interpolation_alpha());
    }
}
