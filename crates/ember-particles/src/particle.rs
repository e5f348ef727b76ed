//! Particle state and the swap-remove pool

use ember_core::{Color, Vec2};

/// One point sprite. Alpha is derived from remaining life, not stored.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining life in seconds; the particle dies at 0
    pub life: f32,
    pub max_life: f32,
    /// Side length of the drawn square
    pub size: f32,
    pub color: Color,
}

impl Particle {
    pub fn dead() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            life: 0.0,
            max_life: 0.0,
            size: 0.0,
            color: Color::WHITE,
        }
    }

    /// Fade factor in [0, 1]: fraction of life remaining
    pub fn alpha(&self) -> f32 {
        if self.max_life <= 0.0 {
            0.0
        } else {
            (self.life / self.max_life).max(0.0)
        }
    }
}

/// Swap-remove pool for O(1) particle kill and contiguous alive iteration.
///
/// The first `alive_count` slots are the active list; the remainder is the
/// free list. Every particle the pool ever allocates is in exactly one of
/// the two at all times, and a kill moves it from active to free within the
/// same update tick.
pub struct ParticlePool {
    particles: Vec<Particle>,
    alive_count: usize,
}

impl ParticlePool {
    pub fn new(capacity: usize) -> Self {
        let mut particles = Vec::with_capacity(capacity);
        for _ in 0..capacity {
            particles.push(Particle::dead());
        }
        Self {
            particles,
            alive_count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    pub fn alive_count(&self) -> usize {
        self.alive_count
    }

    /// Slots available for spawning
    pub fn free_count(&self) -> usize {
        self.particles.len() - self.alive_count
    }

    /// Spawn one particle, returning a mutable ref to initialize it.
    /// Returns None if the pool is full.
    pub fn spawn(&mut self) -> Option<&mut Particle> {
        if self.alive_count >= self.particles.len() {
            return None;
        }
        let idx = self.alive_count;
        self.alive_count += 1;
        Some(&mut self.particles[idx])
    }

    /// Kill expired particles via swap-remove, keeping the alive range
    /// contiguous.
    pub fn compact_expired(&mut self) {
        let mut i = 0;
        while i < self.alive_count {
            if self.particles[i].life <= 0.0 {
                self.alive_count -= 1;
                if i < self.alive_count {
                    self.particles.swap(i, self.alive_count);
                }
                // Don't increment i — the swapped-in particle needs checking
            } else {
                i += 1;
            }
        }
    }

    /// Return every active particle to the free list
    pub fn clear(&mut self) {
        self.alive_count = 0;
    }

    /// Active particles (first `alive_count` elements)
    pub fn alive_slice(&self) -> &[Particle] {
        &self.particles[..self.alive_count]
    }

    /// Active particles, mutable
    pub fn alive_slice_mut(&mut self) -> &mut [Particle] {
        &mut self.particles[..self.alive_count]
    }
}
