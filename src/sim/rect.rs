//! Axis-aligned rectangles
//!
//! Every entity uses a `Rect` as both its position and collision volume.
//! Origin is the top-left corner, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(
            width > 0.0 && height > 0.0,
            "rect extent must be positive, got {width}x{height}"
        );
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of side `size` with its top-left corner at (x, y)
    pub fn square(x: f32, y: f32, size: f32) -> Self {
        Self::new(x, y, size, size)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True when both extents are strictly positive
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_translate() {
        let mut r = Rect::square(0.0, 0.0, 5.0);
        r.translate(Vec2::new(3.0, -2.0));
        assert_eq!((r.x, r.y), (3.0, -2.0));
        assert_eq!((r.width, r.height), (5.0, 5.0));
    }

    #[test]
    #[should_panic(expected = "rect extent must be positive")]
    #[cfg(debug_assertions)]
    fn test_zero_extent_rejected() {
        let _ = Rect::new(0.0, 0.0, 0.0, 10.0);
    }
}
