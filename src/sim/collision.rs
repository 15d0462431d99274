//! Axis-aligned collision tests
//!
//! Everything on screen is a rectangle: the player, the coin, the obstacle,
//! and the clickable buttons. Overlap and point containment cover all of it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, origin at the top-left (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict AABB overlap test (touching edges do not collide)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }

    /// Whether a point (cursor position) lies inside the rectangle
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x <= self.right()
            && point.y >= self.pos.y
            && point.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(25.0, 25.0, 50.0, 50.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_disjoint() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(100.0, 0.0, 50.0, 50.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_overlap_touching_edges_is_miss() {
        // Strict inequalities, as in the original overlap check
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(50.0, 0.0, 50.0, 50.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_overlap_vertical_only_is_miss() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(0.0, 200.0, 50.0, 50.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::new(300.0, 250.0, 200.0, 100.0);
        assert!(r.contains_point(Vec2::new(400.0, 300.0)));
        assert!(r.contains_point(Vec2::new(300.0, 250.0))); // corner counts
        assert!(!r.contains_point(Vec2::new(501.0, 300.0)));
        assert!(!r.contains_point(Vec2::new(400.0, 100.0)));
    }
}
