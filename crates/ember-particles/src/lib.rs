//! Ember Particles - pooled point-sprite effects
//!
//! Provides per-instance particle simulation with:
//! - CPU-side position/velocity/lifetime integration
//! - Swap-remove particle pool for O(1) kill and allocation-free emission
//! - Alpha fade derived from remaining life
//! - TOML-loadable burst presets
//!
//! The pool is sized at construction and never grows; emissions past
//! capacity are dropped, which bounds memory under sustained high emit
//! rates.

mod emitter;
mod particle;
mod rand;
mod system;

pub use emitter::EmitterConfig;
pub use particle::{Particle, ParticlePool};
pub use rand::ParticleRng;
pub use system::{ParticleSystem, DEFAULT_CAPACITY, DEFAULT_LIFE, DEFAULT_SPEED};
