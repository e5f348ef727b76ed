//! 2D follow camera with world-bounds clamping

use ember_core::{Surface, Vec2};

/// A camera is the top-left world coordinate visible on screen.
///
/// The offset is a pure function of the latest follow target and bounds;
/// the camera never integrates velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Center the target in the viewport, clamped so the viewport never
    /// shows beyond world bounds. When the world is smaller than the
    /// viewport on an axis the clamp collapses to 0 and the caller
    /// letterboxes.
    pub fn follow(
        &mut self,
        target_x: f32,
        target_y: f32,
        viewport_w: f32,
        viewport_h: f32,
        world_w: f32,
        world_h: f32,
    ) {
        self.x = (target_x - viewport_w * 0.5)
            .min(world_w - viewport_w)
            .max(0.0);
        self.y = (target_y - viewport_h * 0.5)
            .min(world_h - viewport_h)
            .max(0.0);
    }

    /// Translate the surface origin so subsequent draw calls use world
    /// coordinates
    pub fn apply(&self, surface: &mut dyn Surface) {
        surface.translate(-self.x, -self.y);
    }

    /// Inverse transform for pointer hit-testing against world entities
    pub fn screen_to_world(&self, sx: f32, sy: f32) -> Vec2 {
        Vec2::new(sx + self.x, sy + self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_core::{Color, TextAlign};

    struct TranslateSurface {
        origin: (f32, f32),
    }

    impl Surface for TranslateSurface {
        fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _c: Color) {}
        fn fill_circle(&mut self, _x: f32, _y: f32, _r: f32, _c: Color) {}
        fn text(&mut self, _s: &str, _x: f32, _y: f32, _c: Color, _size: f32, _a: TextAlign) {}
        fn translate(&mut self, dx: f32, dy: f32) {
            self.origin.0 += dx;
            self.origin.1 += dy;
        }
    }

    #[test]
    fn test_follow_centers_target() {
        let mut cam = Camera::new();
        cam.follow(500.0, 300.0, 800.0, 450.0, 2000.0, 1000.0);
        assert_eq!(cam.x, 100.0);
        assert_eq!(cam.y, 75.0);
    }

    #[test]
    fn test_follow_clamps_to_world_edges() {
        let mut cam = Camera::new();

        cam.follow(0.0, 0.0, 800.0, 450.0, 2000.0, 1000.0);
        assert_eq!((cam.x, cam.y), (0.0, 0.0));

        cam.follow(2000.0, 1000.0, 800.0, 450.0, 2000.0, 1000.0);
        assert_eq!((cam.x, cam.y), (1200.0, 550.0));
    }

    #[test]
    fn test_clamp_property_holds_for_any_target() {
        let mut cam = Camera::new();
        let (vw, vh, ww, wh) = (800.0, 450.0, 1200.0, 700.0);
        for target in [
            (-1e6, -1e6),
            (0.0, 0.0),
            (600.0, 350.0),
            (1e6, 1e6),
            (1199.0, 1.0),
        ] {
            cam.follow(target.0, target.1, vw, vh, ww, wh);
            assert!(cam.x >= 0.0 && cam.x <= ww - vw);
            assert!(cam.y >= 0.0 && cam.y <= wh - vh);
        }
    }

    #[test]
    fn test_world_smaller_than_viewport_collapses_to_zero() {
        let mut cam = Camera::new();
        cam.follow(100.0, 100.0, 800.0, 450.0, 320.0, 240.0);
        assert_eq!((cam.x, cam.y), (0.0, 0.0));
    }

    #[test]
    fn test_apply_translates_by_negative_offset() {
        let mut cam = Camera::new();
        cam.follow(500.0, 300.0, 800.0, 450.0, 2000.0, 1000.0);

        let mut surface = TranslateSurface { origin: (0.0, 0.0) };
        cam.apply(&mut surface);
        assert_eq!(surface.origin, (-100.0, -75.0));
    }

    #[test]
    fn test_screen_to_world_adds_offset_back() {
        let mut cam = Camera::new();
        cam.follow(500.0, 300.0, 800.0, 450.0, 2000.0, 1000.0);

        let world = cam.screen_to_world(10.0, 20.0);
        assert_eq!(world, Vec2::new(110.0, 95.0));
    }
}
