//! Axis-aligned bounding box with an adjustable hit box.
//!
//! A [`Rect`] tracks a shared [`PositionHandle`] plus an extent. The
//! collision edges (`left`, `right`, `top`, `bottom`) are derived on every
//! call from the current position, the hit box offset and the extent, so
//! moving the owner's position moves the box immediately.
//!
//! None of these operations validate their input. Zero, negative or
//! non-finite extents flow through the arithmetic unchanged; use
//! [`Rect::validate`] where a caller wants to reject them up front.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::canvas::{DebugCanvas, DEFAULT_DEBUG_COLOR};
use crate::error::{Result, TileboxError};
use crate::position::PositionHandle;

/// 2D vector.
pub type Vec2 = glam::Vec2;

/// Hit box settings for a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HitboxAxis {
    /// Offset of the hit box relative to the position.
    pub offset: f32,
    /// Extent of the hit box along this axis.
    pub extent: f32,
}

impl HitboxAxis {
    #[inline]
    pub const fn new(offset: f32, extent: f32) -> Self {
        Self { offset, extent }
    }
}

#[inline]
fn half_extent(extent: f32) -> f32 {
    (extent / 2.0).floor()
}

/// Axis-aligned bounding box.
///
/// Cloning a `Rect` copies its position into a fresh handle; the clone
/// never aliases the source's position. Share a position on purpose by
/// passing the same [`PositionHandle`] to [`Rect::new`].
#[derive(Debug)]
pub struct Rect {
    position: PositionHandle,
    width: f32,
    height: f32,
    half_width: f32,
    half_height: f32,
    hitbox_offset: Vec2,
    anchor_point: Vec2,
}

impl Rect {
    /// Create a new box tracking `position`.
    pub fn new(position: PositionHandle, width: f32, height: f32) -> Self {
        Self {
            position,
            width,
            height,
            half_width: half_extent(width),
            half_height: half_extent(height),
            hitbox_offset: Vec2::ZERO,
            anchor_point: Vec2::new(0.5, 0.5),
        }
    }

    /// Create a box with its own, unshared position.
    #[inline]
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(PositionHandle::new(x, y), width, height)
    }

    /// Replace position and extent. The hit box offset is kept.
    pub fn set(&mut self, position: PositionHandle, width: f32, height: f32) {
        self.position = position;
        self.resize(width, height);
    }

    /// Replace the extent, keeping position and hit box offset.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.half_width = half_extent(width);
        self.half_height = half_extent(height);
    }

    /// The shared position handle.
    #[inline]
    pub fn position(&self) -> &PositionHandle {
        &self.position
    }

    /// Current value of the position.
    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.position.get()
    }

    /// Hit box width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Hit box height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Half of the width, floored.
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    /// Half of the height, floored.
    #[inline]
    pub fn half_height(&self) -> f32 {
        self.half_height
    }

    /// Offset of the hit box from the position.
    #[inline]
    pub fn hitbox_offset(&self) -> Vec2 {
        self.hitbox_offset
    }

    /// Normalized pivot used by owners for scaling and rotation.
    #[inline]
    pub fn anchor_point(&self) -> Vec2 {
        self.anchor_point
    }

    /// Replace the normalized pivot.
    #[inline]
    pub fn set_anchor_point(&mut self, anchor: Vec2) {
        self.anchor_point = anchor;
    }

    /// Left edge in world space.
    #[inline]
    pub fn left(&self) -> f32 {
        self.position.x() + self.hitbox_offset.x
    }

    /// Right edge in world space.
    #[inline]
    pub fn right(&self) -> f32 {
        self.left() + self.width
    }

    /// Top edge in world space.
    #[inline]
    pub fn top(&self) -> f32 {
        self.position.y() + self.hitbox_offset.y
    }

    /// Bottom edge in world space.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top() + self.height
    }

    /// Center of the hit box, using the floored half extents.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left() + self.half_width, self.top() + self.half_height)
    }

    /// Move the position by (`dx`, `dy`).
    pub fn translate(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.position.translate(Vec2::new(dx, dy));
        self
    }

    /// Move the position by `v`.
    pub fn translate_by(&mut self, v: Vec2) -> &mut Self {
        self.position.translate(v);
        self
    }

    /// Grow this box to cover both itself and `other`.
    ///
    /// Works on positions, not hit boxes. The origin is floored and the
    /// extents are ceiled.
    pub fn union(&mut self, other: &Rect) -> &mut Self {
        let pos = self.pos();
        let other_pos = other.pos();
        let x1 = pos.x.min(other_pos.x);
        let y1 = pos.y.min(other_pos.y);

        let width = ((pos.x + self.width).max(other_pos.x + other.width) - x1).ceil();
        let height = ((pos.y + self.height).max(other_pos.y + other.height) - y1).ceil();
        self.resize(width, height);
        self.position.set(x1.floor(), y1.floor());

        trace!(x = x1.floor(), y = y1.floor(), width, height, "Rect union");
        self
    }

    /// Set the hit box offset and extent per axis. `None` leaves an axis
    /// untouched.
    pub fn adjust_hitbox(&mut self, x: Option<HitboxAxis>, y: Option<HitboxAxis>) {
        if let Some(axis) = x {
            self.hitbox_offset.x = axis.offset;
            self.width = axis.extent;
            self.half_width = half_extent(axis.extent);
        }
        if let Some(axis) = y {
            self.hitbox_offset.y = axis.offset;
            self.height = axis.extent;
            self.half_height = half_extent(axis.extent);
        }
    }

    /// Mirror the hit box horizontally inside a frame of `sprite_width`.
    pub fn flip_horizontal(&mut self, sprite_width: f32) {
        self.hitbox_offset.x = sprite_width - self.width - self.hitbox_offset.x;
        self.half_width = half_extent(self.width);
    }

    /// Mirror the hit box vertically inside a frame of `sprite_height`.
    pub fn flip_vertical(&mut self, sprite_height: f32) {
        self.hitbox_offset.y = sprite_height - self.height - self.hitbox_offset.y;
        self.half_height = half_extent(self.height);
    }

    /// True if all four edges match exactly.
    pub fn equals(&self, other: &Rect) -> bool {
        self.left() == other.left()
            && self.right() == other.right()
            && self.top() == other.top()
            && self.bottom() == other.bottom()
    }

    /// Check if two boxes overlap. Touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// True if this box lies inside `other` (edges inclusive).
    pub fn within(&self, other: &Rect) -> bool {
        other.left() <= self.left()
            && other.right() >= self.right()
            && other.top() <= self.top()
            && other.bottom() >= self.bottom()
    }

    /// True if `other` lies inside this box (edges inclusive).
    pub fn contains(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// Check if a point is inside the box (edges inclusive).
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }

    #[inline]
    pub fn contains_point_v(&self, point: Vec2) -> bool {
        self.contains_point(point.x, point.y)
    }

    /// AABB vs AABB response vector.
    ///
    /// Returns zero when the boxes do not overlap. Otherwise only the axis
    /// with the smaller penetration is kept, signed by the center delta so
    /// that translating `self` by the result pushes it out of `other`. Equal
    /// penetrations resolve on the Y axis.
    pub fn collide_vs_aabb(&self, other: &Rect) -> Vec2 {
        if !self.overlaps(other) {
            return Vec2::ZERO;
        }

        let dx = self.left() + self.half_width - other.left() - other.half_width;
        let dy = self.top() + self.half_height - other.top() - other.half_height;

        let px = (other.half_width + self.half_width) - dx.abs();
        let py = (other.half_height + self.half_height) - dy.abs();

        let response = if px < py {
            Vec2::new(if dx < 0.0 { -px } else { px }, 0.0)
        } else {
            Vec2::new(0.0, if dy < 0.0 { -py } else { py })
        };

        trace!(dx, dy, px, py, x = response.x, y = response.y, "AABB response");
        response
    }

    /// Stroke the hit box outline, in red unless a color is given.
    pub fn draw<C: DebugCanvas + ?Sized>(&self, canvas: &mut C, color: Option<&str>) {
        canvas.stroke_rect(
            self.left(),
            self.top(),
            self.width,
            self.height,
            color.unwrap_or(DEFAULT_DEBUG_COLOR),
        );
    }

    /// Reject non-finite coordinates and negative extents.
    pub fn validate(&self) -> Result<()> {
        let pos = self.pos();
        if !pos.is_finite() || !self.hitbox_offset.is_finite() {
            return Err(TileboxError::InvalidGeometry(format!(
                "non-finite position {pos} or hit box offset {}",
                self.hitbox_offset
            )));
        }
        if !(self.width.is_finite() && self.height.is_finite()) {
            return Err(TileboxError::InvalidGeometry(format!(
                "non-finite extent {}x{}",
                self.width, self.height
            )));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(TileboxError::InvalidGeometry(format!(
                "negative extent {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Clone for Rect {
    /// Deep copy: the clone gets its own position.
    fn clone(&self) -> Self {
        Self {
            position: self.position.detach(),
            width: self.width,
            height: self.height,
            half_width: self.half_width,
            half_height: self.half_height,
            hitbox_offset: self.hitbox_offset,
            anchor_point: self.anchor_point,
        }
    }
}

impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
