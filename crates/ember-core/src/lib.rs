//! Ember Core - Foundational types for the Ember engine
//!
//! This crate provides the types that all other Ember crates depend on:
//! - `Vec2`, `Rect` - 2D spatial primitives
//! - `Color` - RGBA color
//! - `Surface`, `TextAlign` - the abstract drawing boundary
//! - Error types and Result alias

mod error;
mod surface;
mod types;

pub use error::{EmberError, Result};
pub use surface::{Surface, TextAlign};
pub use types::{Color, Rect, Vec2};
