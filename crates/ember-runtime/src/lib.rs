//! Ember Runtime - Game loop infrastructure
//!
//! Provides the core game loop building blocks:
//! - `GameClock` — fixed-timestep accumulator for deterministic simulation
//! - `GameLoop` — drives a `Simulation` at a fixed update rate with
//!   interpolated rendering
//! - `Simulation` / `LoopControl` — the trait game modules implement
//! - `InputState` — frame-scoped keyboard and mouse tracking with action
//!   bindings

mod clock;
mod game_loop;
mod input;
mod simulation;

pub use clock::GameClock;
pub use game_loop::GameLoop;
pub use input::InputState;
pub use simulation::{LoopControl, Simulation};
