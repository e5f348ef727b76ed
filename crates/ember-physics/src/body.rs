//! Movable rectangle body

use ember_core::{Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A movable axis-aligned rectangle.
///
/// Owned by the game module that created it; the resolver only borrows a
/// body for the duration of one call. `grounded` is recomputed by every
/// [`move_and_collide`](crate::move_and_collide) pass and never persists
/// across frames on its own.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    /// Set when the last vertical resolution hit a solid from above
    pub grounded: bool,
    /// Non-solid bodies are ignored by the resolver
    pub solid: bool,
    /// Free-form label game modules use to classify hits
    pub tag: Option<String>,
}

impl Body {
    /// Create a body at (x, y) with the given size. Sizes must be positive.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        debug_assert!(w > 0.0 && h > 0.0, "body size must be positive");
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
            ..Self::default()
        }
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.vel = Vec2::new(vx, vy);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn as_solid(mut self) -> Self {
        self.solid = true;
        self
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.pos.x + self.size.x * 0.5,
            self.pos.y + self.size.y * 0.5,
        )
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }
}
