//! Ember Physics - rectangle collision and movement resolution
//!
//! Pure functions over movable rectangle bodies:
//! - `aabb` / `point_in_rect` — overlap and hit tests
//! - `apply_gravity` — velocity integration
//! - `move_and_collide` — axis-separated movement with edge snapping
//!
//! There is no physics world and no persistent state; game modules own
//! their bodies and call these functions from their fixed update.

mod body;
mod resolve;

pub use body::Body;
pub use resolve::{aabb, apply_gravity, move_and_collide, point_in_rect};
