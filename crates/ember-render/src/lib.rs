//! Ember Render - drawing helpers over the abstract surface
//!
//! Everything here renders through [`ember_core::Surface`]; no concrete
//! canvas or window API appears in this crate:
//! - `Camera` — viewport-follow transform with world-bounds clamping
//! - `TileMap` / `draw_layers` — TOML-loadable tile layers with visible-range
//!   culling
//! - `AnimatedSprite` — fixed-rate frame sequencer

mod camera;
mod sprite;
mod tilemap;

pub use camera::Camera;
pub use sprite::{AnimatedSprite, SpriteFrame};
pub use tilemap::{draw_layers, TileMap};
