//! Debug drawing seam.
//!
//! Geometry types only know how to describe their outline; the actual
//! backend lives behind [`DebugCanvas`].

/// Stroke color used when a caller does not pick one.
pub const DEFAULT_DEBUG_COLOR: &str = "red";

/// A surface that can stroke rectangle outlines.
pub trait DebugCanvas {
    /// Stroke the outline of the rectangle at (`x`, `y`) with the given size.
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);
}

impl<C: DebugCanvas + ?Sized> DebugCanvas for &mut C {
    #[inline]
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        (**self).stroke_rect(x, y, width, height, color);
    }
}
