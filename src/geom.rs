//! Axis-aligned box geometry shared by the pong entities
//!
//! Entities own a `Bounds` value; overlap and clamping are free functions
//! over it rather than methods on the entities.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box, `pos` is the top-left corner (screen y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Bounds {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Box of `size` whose center sits at `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Strict overlap: boxes that only share an edge do not collide
pub fn overlaps(a: &Bounds, b: &Bounds) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Keep a box inside the vertical band [0, height]
pub fn clamp_vertical(bounds: &mut Bounds, height: f32) {
    let max_top = (height - bounds.size.y).max(0.0);
    bounds.pos.y = bounds.pos.y.clamp(0.0, max_top);
}
