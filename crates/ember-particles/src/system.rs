//! The particle system game modules emit through

use ember_core::{Color, Surface};

use crate::emitter::EmitterConfig;
use crate::particle::ParticlePool;
use crate::rand::ParticleRng;

/// Pool size when none is given. Plenty for the heaviest burst patterns the
/// arcade modules use; emissions past it are dropped.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Emission speed upper bound when the caller has no preference
pub const DEFAULT_SPEED: f32 = 80.0;

/// Particle lifetime in seconds when the caller has no preference
pub const DEFAULT_LIFE: f32 = 0.6;

/// Pooled point-sprite simulation.
///
/// One instance per game screen. `emit` draws particles from the pool,
/// `update` integrates and reclaims expired particles in the same tick,
/// `draw` renders every active particle as an alpha-faded square, and
/// `clear` reclaims everything on scene transitions.
pub struct ParticleSystem {
    pool: ParticlePool,
    rng: ParticleRng,
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a system with a fixed pool capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pool: ParticlePool::new(capacity),
            rng: ParticleRng::new(0x51ED_1E55),
        }
    }

    /// Reseed the RNG, for reproducible effect sequences
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.rng = ParticleRng::new(seed);
        self
    }

    /// Emit `count` particles at (x, y), each with a uniformly random
    /// direction, a speed sampled in [0.5 * speed, speed], and a constant
    /// `life`. Emissions beyond pool capacity are dropped.
    pub fn emit(&mut self, x: f32, y: f32, count: u32, color: Color, speed: f32, life: f32) {
        for _ in 0..count {
            let (dir_x, dir_y) = self.rng.unit_direction();
            let spd = speed * self.rng.range(0.5, 1.0);
            let size = self.rng.range(2.0, 5.0);

            let Some(p) = self.pool.spawn() else {
                break;
            };
            p.pos.x = x;
            p.pos.y = y;
            p.vel.x = dir_x * spd;
            p.vel.y = dir_y * spd;
            p.life = life;
            p.max_life = life;
            p.size = size;
            p.color = color;
        }
    }

    /// Emit one burst described by a preset
    pub fn emit_config(&mut self, x: f32, y: f32, config: &EmitterConfig) {
        self.emit(x, y, config.count, config.color, config.speed, config.life);
    }

    /// Integrate positions, age particles, and reclaim the expired ones.
    /// Reclamation happens in the same tick a particle's life reaches 0.
    pub fn update(&mut self, dt: f32) {
        for p in self.pool.alive_slice_mut() {
            p.pos += p.vel * dt;
            p.life -= dt;
        }
        self.pool.compact_expired();
    }

    /// Draw every active particle as a filled square centered on its
    /// position, alpha scaled by remaining life.
    pub fn draw(&self, surface: &mut dyn Surface) {
        for p in self.pool.alive_slice() {
            let half = p.size * 0.5;
            surface.fill_rect(
                p.pos.x - half,
                p.pos.y - half,
                p.size,
                p.size,
                p.color.with_alpha(p.color.a * p.alpha()),
            );
        }
    }

    /// Reclaim every active particle (scene/level transitions)
    pub fn clear(&mut self) {
        self.pool.clear();
    }

    pub fn alive_count(&self) -> usize {
        self.pool.alive_count()
    }

    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_core::{Color, TextAlign};

    /// Records fill_rect calls for draw assertions
    struct RecordingSurface {
        rects: Vec<(f32, f32, f32, f32, Color)>,
    }

    impl RecordingSurface {
        fn new() -> Self {
            Self { rects: Vec::new() }
        }
    }

    impl Surface for RecordingSurface {
        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
            self.rects.push((x, y, w, h, color));
        }
        fn fill_circle(&mut self, _x: f32, _y: f32, _r: f32, _color: Color) {}
        fn text(&mut self, _s: &str, _x: f32, _y: f32, _c: Color, _size: f32, _a: TextAlign) {}
        fn translate(&mut self, _dx: f32, _dy: f32) {}
    }

    #[test]
    fn emit_spawns_with_sampled_speed_range() {
        let mut sys = ParticleSystem::with_capacity(64);
        sys.emit(0.0, 0.0, 32, Color::RED, 80.0, 0.6);
        assert_eq!(sys.alive_count(), 32);

        for p in sys.pool.alive_slice() {
            let speed = p.vel.length();
            assert!(speed >= 40.0 - 1e-3 && speed <= 80.0 + 1e-3);
            assert!(p.size >= 2.0 && p.size < 5.0);
            assert_eq!(p.life, 0.6);
        }
    }

    #[test]
    fn emit_zero_count_is_a_noop() {
        let mut sys = ParticleSystem::new();
        sys.emit(0.0, 0.0, 0, Color::WHITE, 80.0, 0.6);
        assert_eq!(sys.alive_count(), 0);
    }

    #[test]
    fn emit_past_capacity_drops_excess() {
        let mut sys = ParticleSystem::with_capacity(8);
        sys.emit(0.0, 0.0, 100, Color::WHITE, 80.0, 0.6);
        assert_eq!(sys.alive_count(), 8);

        // Reclaimed slots become available again
        sys.update(1.0);
        assert_eq!(sys.alive_count(), 0);
        sys.emit(0.0, 0.0, 3, Color::WHITE, 80.0, 0.6);
        assert_eq!(sys.alive_count(), 3);
    }

    #[test]
    fn particles_expire_after_their_life() {
        let mut sys = ParticleSystem::new();
        sys.emit(0.0, 0.0, 10, Color::RED, 80.0, 0.5);

        // Tick in small steps until past every particle's life
        let mut elapsed = 0.0;
        while elapsed < 0.5 {
            sys.update(0.1);
            elapsed += 0.1;
        }
        assert_eq!(sys.alive_count(), 0);
    }

    #[test]
    fn repeated_single_emits_never_leak() {
        let mut sys = ParticleSystem::with_capacity(50);
        for _ in 0..50 {
            sys.emit(0.0, 0.0, 1, Color::GREEN, 80.0, 0.2);
        }
        assert_eq!(sys.alive_count(), 50);

        sys.update(0.25);
        assert_eq!(sys.alive_count(), 0);
        // Every slot is back in the free list: a full re-emit succeeds
        for _ in 0..50 {
            sys.emit(0.0, 0.0, 1, Color::GREEN, 80.0, 0.2);
        }
        assert_eq!(sys.alive_count(), 50);
    }

    #[test]
    fn update_integrates_position() {
        let mut sys = ParticleSystem::new();
        sys.emit(10.0, 20.0, 1, Color::WHITE, 80.0, 1.0);
        let vel = sys.pool.alive_slice()[0].vel;

        sys.update(0.1);
        let p = &sys.pool.alive_slice()[0];
        assert!((p.pos.x - (10.0 + vel.x * 0.1)).abs() < 1e-4);
        assert!((p.pos.y - (20.0 + vel.y * 0.1)).abs() < 1e-4);
    }

    #[test]
    fn emit_config_matches_direct_emit() {
        let mut sys = ParticleSystem::with_capacity(32);
        let config = EmitterConfig {
            count: 6,
            color: Color::BLUE,
            speed: 40.0,
            life: 0.3,
        };
        sys.emit_config(12.0, 8.0, &config);

        assert_eq!(sys.alive_count(), 6);
        for p in sys.pool.alive_slice() {
            assert_eq!(p.color, Color::BLUE);
            assert_eq!(p.max_life, 0.3);
        }
    }

    #[test]
    fn clear_reclaims_all() {
        let mut sys = ParticleSystem::new();
        sys.emit(0.0, 0.0, 20, Color::BLUE, 80.0, 10.0);
        sys.clear();
        assert_eq!(sys.alive_count(), 0);
    }

    #[test]
    fn draw_renders_centered_faded_squares() {
        let mut sys = ParticleSystem::new().with_seed(99);
        sys.emit(50.0, 50.0, 1, Color::RED, 0.0, 1.0);
        sys.update(0.5); // half life -> alpha 0.5

        let mut surface = RecordingSurface::new();
        sys.draw(&mut surface);

        assert_eq!(surface.rects.len(), 1);
        let (x, y, w, h, color) = surface.rects[0];
        assert!((x + w * 0.5 - 50.0).abs() < 1e-3);
        assert!((y + h * 0.5 - 50.0).abs() < 1e-3);
        assert!((color.a - 0.5).abs() < 1e-3);
    }

    #[test]
    fn same_seed_gives_identical_bursts() {
        let mut a = ParticleSystem::with_capacity(16).with_seed(5);
        let mut b = ParticleSystem::with_capacity(16).with_seed(5);
        a.emit(0.0, 0.0, 16, Color::WHITE, 80.0, 1.0);
        b.emit(0.0, 0.0, 16, Color::WHITE, 80.0, 1.0);

        for (pa, pb) in a.pool.alive_slice().iter().zip(b.pool.alive_slice()) {
            assert_eq!(pa.vel, pb.vel);
            assert_eq!(pa.size, pb.size);
        }
    }
}
