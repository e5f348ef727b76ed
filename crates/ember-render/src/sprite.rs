//! Fixed-rate sprite frame sequencer

use ember_core::{Color, Surface};
use serde::{Deserialize, Serialize};

/// Source rectangle of one animation frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteFrame {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Cycles through frames at a fixed rate, independent of how often the host
/// repaints.
///
/// The timer carries its remainder across updates instead of resetting, so
/// long-running animations do not drift. `flip_x` is plain state for the
/// owning module to mirror its own frame-based drawing; the flat-shaded
/// [`draw`](Self::draw) fallback renders the same rectangle either way.
pub struct AnimatedSprite {
    frames: Vec<SpriteFrame>,
    fps: f32,
    frame: usize,
    timer: f32,
    pub flip_x: bool,
}

impl AnimatedSprite {
    /// Create a sequencer over `frames` at `fps`. Frames must be non-empty.
    pub fn new(frames: Vec<SpriteFrame>, fps: f32) -> Self {
        debug_assert!(!frames.is_empty(), "sprite needs at least one frame");
        Self {
            frames,
            fps,
            frame: 0,
            timer: 0.0,
            flip_x: false,
        }
    }

    /// Advance the frame timer; steps at most one frame per call
    pub fn update(&mut self, dt: f32) {
        if self.frames.is_empty() || self.fps <= 0.0 {
            return;
        }
        self.timer += dt;
        if self.timer >= 1.0 / self.fps {
            self.timer -= 1.0 / self.fps;
            self.frame = (self.frame + 1) % self.frames.len();
        }
    }

    /// Current frame's source rectangle
    pub fn frame(&self) -> SpriteFrame {
        self.frames[self.frame.min(self.frames.len().saturating_sub(1))]
    }

    pub fn frame_index(&self) -> usize {
        self.frame
    }

    /// Rewind to the first frame
    pub fn reset(&mut self) {
        self.frame = 0;
        self.timer = 0.0;
    }

    /// Flat-shaded fallback: fill the destination rectangle
    pub fn draw(&self, surface: &mut dyn Surface, x: f32, y: f32, w: f32, h: f32, color: Color) {
        surface.fill_rect(x, y, w, h, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(n: usize) -> Vec<SpriteFrame> {
        (0..n)
            .map(|i| SpriteFrame {
                x: i as f32 * 8.0,
                y: 0.0,
                w: 8.0,
                h: 8.0,
            })
            .collect()
    }

    #[test]
    fn test_frames_advance_at_configured_fps() {
        let mut sprite = AnimatedSprite::new(strip(4), 8.0);
        assert_eq!(sprite.frame_index(), 0);

        // 8 fps = one frame per 0.125s; fixed 60Hz ticks
        let dt = 1.0 / 60.0;
        let mut elapsed = 0.0;
        while elapsed < 0.125 {
            sprite.update(dt);
            elapsed += dt;
        }
        assert_eq!(sprite.frame_index(), 1);
    }

    #[test]
    fn test_sequence_wraps_around() {
        let mut sprite = AnimatedSprite::new(strip(3), 10.0);
        for _ in 0..3 {
            sprite.update(0.1);
        }
        assert_eq!(sprite.frame_index(), 0);
    }

    #[test]
    fn test_timer_carries_remainder() {
        let mut sprite = AnimatedSprite::new(strip(4), 10.0);

        // 0.15s = one 0.1s frame plus 0.05s carried into the next
        sprite.update(0.15);
        assert_eq!(sprite.frame_index(), 1);
        sprite.update(0.05);
        assert_eq!(sprite.frame_index(), 2);
    }

    #[test]
    fn test_frame_returns_source_rect() {
        let mut sprite = AnimatedSprite::new(strip(4), 10.0);
        sprite.update(0.1);
        assert_eq!(sprite.frame().x, 8.0);
    }

    #[test]
    fn test_reset_rewinds() {
        let mut sprite = AnimatedSprite::new(strip(4), 10.0);
        sprite.update(0.1);
        sprite.update(0.1);
        sprite.reset();
        assert_eq!(sprite.frame_index(), 0);
        sprite.update(0.05);
        assert_eq!(sprite.frame_index(), 0);
    }
}
