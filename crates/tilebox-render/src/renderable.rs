//! Base renderable: a bounding box plus a transform.
//!
//! `Renderable` owns one [`Rect`] and one [`Matrix2d`] and forwards to
//! them. Concrete sprites wrap it and override `update`/`draw` behavior by
//! composition.

use tilebox_core::{DebugCanvas, Matrix2d, PositionHandle, Rect, Result, Vec2, DEFAULT_DEBUG_COLOR};
use tracing::debug;

use crate::config::RenderableConfig;

/// A drawable object with bounds, flags and a transformation matrix.
#[derive(Debug, Clone)]
pub struct Renderable {
    bounds: Rect,
    matrix: Matrix2d,
    /// Whether the object is drawn at all (default: true).
    pub visible: bool,
    in_viewport: bool,
    /// Keep updating even outside of the viewport.
    pub always_update: bool,
    /// Keep updating while the game is paused.
    pub update_when_paused: bool,
    /// Survive level changes.
    pub is_persistent: bool,
    /// Follow screen coordinates instead of world coordinates.
    pub floating: bool,
    /// Z-order for sorting.
    pub z: i32,
    /// Outline color used by [`Renderable::draw`] when none is passed.
    pub debug_color: String,
    angle: f32,
    scale: Vec2,
}

impl Renderable {
    /// Create a renderable tracking `position`, with an identity transform.
    pub fn new(position: PositionHandle, width: f32, height: f32) -> Self {
        Self {
            bounds: Rect::new(position, width, height),
            matrix: Matrix2d::IDENTITY,
            visible: true,
            in_viewport: false,
            always_update: false,
            update_when_paused: false,
            is_persistent: false,
            floating: false,
            z: 0,
            debug_color: DEFAULT_DEBUG_COLOR.to_string(),
            angle: 0.0,
            scale: Vec2::ONE,
        }
    }

    /// Build a renderable from a validated preset.
    pub fn from_config(position: PositionHandle, config: &RenderableConfig) -> Result<Self> {
        config.validate()?;

        let mut renderable = Self::new(position, config.width, config.height);
        if let Some(hitbox) = config.hitbox {
            renderable.bounds.adjust_hitbox(hitbox.x, hitbox.y);
        }
        renderable
            .bounds
            .set_anchor_point(Vec2::from_array(config.anchor_point));
        renderable.visible = config.visible;
        renderable.always_update = config.always_update;
        renderable.update_when_paused = config.update_when_paused;
        renderable.is_persistent = config.is_persistent;
        renderable.floating = config.floating;
        renderable.z = config.z;
        renderable.debug_color = config.debug_color.clone();
        Ok(renderable)
    }

    /// Re-initialize geometry, scale, angle and transform in place.
    pub fn reset(&mut self, position: PositionHandle, width: f32, height: f32) {
        self.bounds = Rect::new(position, width, height);
        self.scale = Vec2::ONE;
        self.angle = 0.0;
        self.matrix.identity();
    }

    #[inline]
    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    #[inline]
    pub fn bounds_mut(&mut self) -> &mut Rect {
        &mut self.bounds
    }

    #[inline]
    pub fn matrix(&self) -> &Matrix2d {
        &self.matrix
    }

    #[inline]
    pub fn matrix_mut(&mut self) -> &mut Matrix2d {
        &mut self.matrix
    }

    /// Current rotation in radians.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Current scale factors.
    #[inline]
    pub fn current_scale(&self) -> Vec2 {
        self.scale
    }

    /// Viewport flag set by culling. Does not check `visible`.
    #[inline]
    pub fn in_viewport(&self) -> bool {
        self.in_viewport
    }

    /// Set by the owning viewport after culling.
    #[inline]
    pub fn set_in_viewport(&mut self, in_viewport: bool) {
        self.in_viewport = in_viewport;
    }

    #[inline]
    pub fn position(&self) -> &PositionHandle {
        self.bounds.position()
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.bounds.left()
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.bounds.right()
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.bounds.top()
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.bounds.bottom()
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bounds.height()
    }

    #[inline]
    pub fn overlaps(&self, other: &Renderable) -> bool {
        self.bounds.overlaps(&other.bounds)
    }

    #[inline]
    pub fn collide_vs_aabb(&self, other: &Renderable) -> Vec2 {
        self.bounds.collide_vs_aabb(&other.bounds)
    }

    /// Multiply the current transform by the given values.
    pub fn transform(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        self.matrix.multiply(a, b, c, d, e, f);
        debug!(matrix = ?self.matrix.to_array(), "Renderable transform");
    }

    /// Overwrite the transform. A `None`, zero or NaN translation component
    /// keeps its current value.
    pub fn set_transform(
        &mut self,
        a: f32,
        b: f32,
        c: f32,
        d: f32,
        e: Option<f32>,
        f: Option<f32>,
    ) {
        self.matrix.set(a, b, c, d, e, f);
        debug!(matrix = ?self.matrix.to_array(), "Renderable set_transform");
    }

    /// Rotate to the absolute `angle` in radians.
    ///
    /// Only the difference to the current angle is applied to the matrix.
    pub fn rotate(&mut self, angle: f32) {
        if angle != self.angle {
            let delta = angle - self.angle;
            self.angle = angle;
            self.matrix.rotate(delta);
            debug!(angle, delta, "Renderable rotate");
        }
    }

    /// Scale to the absolute factors `scale_x`/`scale_y`. A missing
    /// `scale_y` uses `scale_x`.
    ///
    /// Each axis applies the ratio between the new and the current factor;
    /// an axis that does not change contributes 1.
    pub fn scale(&mut self, scale_x: f32, scale_y: Option<f32>) {
        let scale_y = scale_y.unwrap_or(scale_x);

        let ratio_x = if self.scale.x != scale_x {
            let ratio = scale_x / self.scale.x;
            self.scale.x = scale_x;
            ratio
        } else {
            1.0
        };
        let ratio_y = if self.scale.y != scale_y {
            let ratio = scale_y / self.scale.y;
            self.scale.y = scale_y;
            ratio
        } else {
            1.0
        };

        self.matrix.scale(ratio_x, ratio_y);
        debug!(scale_x, scale_y, ratio_x, ratio_y, "Renderable scale");
    }

    /// Per-tick update. The base renderable never changes on its own.
    pub fn update(&mut self) -> bool {
        false
    }

    /// Stroke the bounds outline, using [`Renderable::debug_color`] unless
    /// a color is given.
    pub fn draw<C: DebugCanvas + ?Sized>(&self, canvas: &mut C, color: Option<&str>) {
        self.bounds
            .draw(canvas, Some(color.unwrap_or(&self.debug_color)));
    }
}
