//! Tilebox Core - 2D collision and transform primitives
//!
//! This crate provides the geometry the rest of Tilebox is built on:
//! - Axis-aligned bounding boxes with an adjustable hit box (`Rect`)
//! - Shared, aliasable positions (`PositionHandle`)
//! - 2×3 affine transformation matrices (`Matrix2d`)
//! - The `DebugCanvas` seam for outline drawing

pub mod canvas;
pub mod error;
pub mod geometry;
pub mod matrix;
pub mod position;

pub use canvas::{DebugCanvas, DEFAULT_DEBUG_COLOR};
pub use error::{Result, TileboxError};
pub use geometry::{HitboxAxis, Rect, Vec2};
pub use matrix::Matrix2d;
pub use position::PositionHandle;

#[cfg(test)]
mod proptests;
