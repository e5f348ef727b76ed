//! The abstract drawing boundary between the engine and its host

use crate::types::Color;

/// Horizontal anchoring for [`Surface::text`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// The drawing operations a host backend must provide.
///
/// Game modules and the engine's own draw helpers render exclusively
/// through this trait; nothing in the engine touches a concrete canvas or
/// window API. Coordinates are in world space once [`translate`] has been
/// applied by the camera, screen space otherwise.
///
/// [`translate`]: Surface::translate
pub trait Surface {
    /// Draw a filled axis-aligned rectangle
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    /// Draw a filled circle centered at (x, y)
    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Color);

    /// Draw a line of text anchored at (x, y)
    fn text(&mut self, s: &str, x: f32, y: f32, color: Color, size: f32, align: TextAlign);

    /// Shift the origin of subsequent draw calls by (dx, dy)
    fn translate(&mut self, dx: f32, dy: f32);
}
