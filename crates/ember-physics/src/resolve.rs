//! Axis-separated movement resolution
//!
//! Movement resolves one axis at a time: advance x, snap against every
//! overlapping solid, then advance y and snap again. Resolving both axes
//! together produces corner-clipping artifacts on rectangle-tile worlds;
//! sequential resolution with per-axis velocity zeroing does not.

use crate::body::Body;

/// Exclusive-edge overlap test. Rectangles that merely touch do not collide.
pub fn aabb(a: &Body, b: &Body) -> bool {
    a.pos.x < b.right() && a.right() > b.pos.x && a.pos.y < b.bottom() && a.bottom() > b.pos.y
}

/// Inclusive containment test for pointer hit-testing against a body
pub fn point_in_rect(px: f32, py: f32, b: &Body) -> bool {
    px >= b.pos.x && px <= b.right() && py >= b.pos.y && py <= b.bottom()
}

/// Integrate gravity into vertical velocity. No terminal velocity clamp.
pub fn apply_gravity(body: &mut Body, gravity: f32, dt: f32) {
    body.vel.y += gravity * dt;
}

/// Advance `body` by its velocity over `dt`, snapping out of every solid it
/// overlaps, one axis at a time.
///
/// Solids are examined in slice order and the last overlapping solid
/// determines the final snap position, so the order of `solids` is part of
/// the contract: keep it stable (insertion order) for deterministic
/// resolution. Non-solid entries are skipped. The moving body itself must
/// not be an element of `solids` — the disjoint borrows enforce this.
///
/// Horizontal hits snap to the near edge by sign of `vel.x` and zero it.
/// Vertical hits snap by sign of `vel.y` and zero it; a downward or
/// stationary overlap marks the body `grounded`. `grounded` is reset at the
/// start of every vertical pass.
///
/// Returns the solid that produced the vertical collision if any, else the
/// horizontal one, else `None` — callers use this to detect landings.
pub fn move_and_collide<'a>(body: &mut Body, solids: &'a [Body], dt: f32) -> Option<&'a Body> {
    // Horizontal
    body.pos.x += body.vel.x * dt;
    let mut hit_x: Option<&Body> = None;
    for s in solids {
        if !s.solid {
            continue;
        }
        if aabb(body, s) {
            hit_x = Some(s);
            if body.vel.x > 0.0 {
                body.pos.x = s.pos.x - body.size.x;
            } else if body.vel.x < 0.0 {
                body.pos.x = s.right();
            }
            body.vel.x = 0.0;
        }
    }

    // Vertical
    body.pos.y += body.vel.y * dt;
    body.grounded = false;
    let mut hit_y: Option<&Body> = None;
    for s in solids {
        if !s.solid {
            continue;
        }
        if aabb(body, s) {
            hit_y = Some(s);
            if body.vel.y > 0.0 {
                body.pos.y = s.pos.y - body.size.y;
            } else if body.vel.y < 0.0 {
                body.pos.y = s.bottom();
            }
            if body.vel.y >= 0.0 {
                body.grounded = true;
            }
            body.vel.y = 0.0;
        }
    }

    hit_y.or(hit_x)
}
