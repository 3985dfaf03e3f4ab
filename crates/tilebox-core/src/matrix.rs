//! 2×3 affine transformation matrix.
//!
//! The six components map a point as
//! `(x, y) -> (a*x + c*y + e, b*x + d*y + f)`, which is the same column
//! layout `glam::Affine2` uses, so conversions are a straight copy.

use bytemuck::{Pod, Zeroable};
use glam::{Affine2, Mat3};
use serde::{Deserialize, Serialize};

use crate::geometry::Vec2;

/// 2D affine matrix: linear part `a, b, c, d` and translation `e, f`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Matrix2d {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Matrix2d {
    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_values(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Create an identity matrix.
    #[inline]
    pub const fn new() -> Self {
        Self::IDENTITY
    }

    /// Create a matrix from its six components.
    #[inline]
    pub const fn from_values(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Reset to the identity matrix.
    pub fn identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    /// Assign the linear part, and the translation where given.
    ///
    /// A translation component that is `None`, zero or NaN keeps its
    /// current value, so call sites can replace only the linear part.
    pub fn set(
        &mut self,
        a: f32,
        b: f32,
        c: f32,
        d: f32,
        e: Option<f32>,
        f: Option<f32>,
    ) -> &mut Self {
        self.a = a;
        self.b = b;
        self.c = c;
        self.d = d;
        if let Some(e) = e.filter(|v| is_supplied(*v)) {
            self.e = e;
        }
        if let Some(f) = f.filter(|v| is_supplied(*v)) {
            self.f = f;
        }
        self
    }

    /// Compose the given transform with this one.
    ///
    /// The incoming linear part is applied in the frame of the current one,
    /// and the incoming translation is mapped through the current linear
    /// part before it is accumulated.
    pub fn multiply(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> &mut Self {
        let a1 = self.a;
        let b1 = self.b;
        let c1 = self.c;
        let d1 = self.d;

        self.a = a * a1 + b * c1;
        self.b = a * b1 + b * d1;
        self.c = c * a1 + d * c1;
        self.d = c * b1 + d * d1;
        self.e += e * a1 + f * c1;
        self.f += e * b1 + f * d1;
        self
    }

    /// [`Matrix2d::multiply`] with the components of `other`.
    #[inline]
    pub fn multiply_matrix(&mut self, other: &Matrix2d) -> &mut Self {
        self.multiply(other.a, other.b, other.c, other.d, other.e, other.f)
    }

    /// Scale the diagonal and the translation.
    pub fn scale(&mut self, sx: f32, sy: f32) -> &mut Self {
        self.a *= sx;
        self.d *= sy;
        self.e *= sx;
        self.f *= sy;
        self
    }

    /// Rotate all six components by `angle` radians. An angle of exactly
    /// zero leaves the matrix untouched.
    pub fn rotate(&mut self, angle: f32) -> &mut Self {
        if angle != 0.0 {
            let (sin, cos) = angle.sin_cos();
            let Self { a, b, c, d, e, f } = *self;
            self.a = a * cos - b * sin;
            self.b = a * sin + b * cos;
            self.c = c * cos - d * sin;
            self.d = c * sin + d * cos;
            self.e = e * cos - f * sin;
            self.f = e * sin + f * cos;
        }
        self
    }

    /// Add (`x`, `y`) to the translation.
    pub fn translate(&mut self, x: f32, y: f32) -> &mut Self {
        self.e += x;
        self.f += y;
        self
    }

    #[inline]
    pub fn translate_vector(&mut self, v: Vec2) -> &mut Self {
        self.translate(v.x, v.y)
    }

    /// Exact comparison against the identity, no epsilon.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Transform a point.
    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Get the inverse transform, or `None` for a singular matrix.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.a * self.d - self.b * self.c;
        if det.abs() < f32::EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;
        let a = self.d * inv_det;
        let b = -self.b * inv_det;
        let c = -self.c * inv_det;
        let d = self.a * inv_det;
        let e = -(a * self.e + c * self.f);
        let f = -(b * self.e + d * self.f);
        Some(Self::from_values(a, b, c, d, e, f))
    }

    /// Components in `[a, b, c, d, e, f]` order.
    #[inline]
    pub fn to_array(&self) -> [f32; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    #[inline]
    pub fn to_affine2(&self) -> Affine2 {
        Affine2::from_cols_array(&self.to_array())
    }

    /// Convert to a 3x3 matrix for GPU upload.
    #[inline]
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from(self.to_affine2())
    }
}

/// Zero and NaN translation arguments count as not supplied.
#[inline]
fn is_supplied(v: f32) -> bool {
    v != 0.0 && !v.is_nan()
}

impl Default for Matrix2d {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Matrix2d> for Affine2 {
    fn from(m: Matrix2d) -> Self {
        m.to_affine2()
    }
}

impl From<Affine2> for Matrix2d {
    fn from(m: Affine2) -> Self {
        let [a, b, c, d, e, f] = m.to_cols_array();
        Self::from_values(a, b, c, d, e, f)
    }
}
