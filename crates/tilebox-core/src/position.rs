//! Shared position handle.
//!
//! A box does not own its position: the entity that created it keeps a
//! handle to the same point and moves the box by writing through it.
//! Cloning a [`PositionHandle`] aliases the point; use
//! [`PositionHandle::detach`] to get an independent copy.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::geometry::Vec2;

/// Single-threaded shared handle to a mutable 2D point.
#[derive(Clone, Default)]
pub struct PositionHandle(Rc<Cell<Vec2>>);

impl PositionHandle {
    /// Create a handle to a new point.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self::from_vec(Vec2::new(x, y))
    }

    /// Create a handle owning the given point.
    #[inline]
    pub fn from_vec(v: Vec2) -> Self {
        Self(Rc::new(Cell::new(v)))
    }

    /// Current value of the point.
    #[inline]
    pub fn get(&self) -> Vec2 {
        self.0.get()
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.0.get().x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0.get().y
    }

    /// Overwrite the point. Every alias observes the change.
    #[inline]
    pub fn set(&self, x: f32, y: f32) {
        self.0.set(Vec2::new(x, y));
    }

    #[inline]
    pub fn set_vec(&self, v: Vec2) {
        self.0.set(v);
    }

    /// Add an offset to the point in place.
    #[inline]
    pub fn translate(&self, delta: Vec2) {
        self.0.set(self.0.get() + delta);
    }

    /// Copy the current value into a new, unaliased handle.
    #[inline]
    pub fn detach(&self) -> Self {
        Self::from_vec(self.get())
    }

    /// True if both handles point at the same underlying point.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Vec2> for PositionHandle {
    fn from(v: Vec2) -> Self {
        Self::from_vec(v)
    }
}

impl fmt::Debug for PositionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.get();
        f.debug_tuple("PositionHandle").field(&v.x).field(&v.y).finish()
    }
}
