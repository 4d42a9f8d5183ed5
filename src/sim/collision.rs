//! Collision detection for axis-aligned rectangles
//!
//! Everything in here is a pure test. Reacting to a hit (bouncing, scoring,
//! playing a sound) is the caller's job.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, `pos` is the top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
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

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Horizontal wall of the play area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Top,
    Bottom,
}

/// Side of the play area a rectangle has crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Check a rectangle against the top and bottom walls of an area `height` tall.
///
/// Touching a wall counts as a contact. The top wall is checked first.
pub fn wall_contact(rect: &Rect, height: f32) -> Option<Wall> {
    if rect.top() <= 0.0 {
        Some(Wall::Top)
    } else if rect.top() >= height - rect.size.y {
        Some(Wall::Bottom)
    } else {
        None
    }
}

/// Check whether a rectangle has crossed the left or right boundary of an
/// area `width` wide.
pub fn boundary_exit(rect: &Rect, width: f32) -> Option<Side> {
    if rect.left() < 0.0 {
        Some(Side::Left)
    } else if rect.right() > width {
        Some(Side::Right)
    } else {
        None
    }
}
