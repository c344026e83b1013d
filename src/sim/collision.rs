//! Collision detection and response for axis-aligned rectangles
//!
//! Overlap is strict: rectangles that only share an edge do not collide.

use glam::Vec2;

use super::rect::Rect;

/// Check whether two rectangles intersect
///
/// Symmetric in its arguments. Both rectangles must have positive extent.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    debug_assert!(a.is_valid() && b.is_valid(), "collision against degenerate rect");
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Reflect a velocity off the edges of `bounds`
///
/// Each axis is flipped independently when the rect has crossed the matching
/// pair of edges. No position correction is applied.
pub fn bounce_velocity(rect: &Rect, vel: Vec2, bounds: &Rect) -> Vec2 {
    let mut out = vel;
    if rect.x < bounds.x || rect.right() > bounds.right() {
        out.x = -out.x;
    }
    if rect.y < bounds.y || rect.bottom() > bounds.bottom() {
        out.y = -out.y;
    }
    out
}

/// Move a rect back inside `bounds`, keeping its size
pub fn clamp_inside(rect: &mut Rect, bounds: &Rect) {
    if rect.x < bounds.x {
        rect.x = bounds.x;
    }
    if rect.right() > bounds.right() {
        rect.x = bounds.right() - rect.width;
    }
    if rect.y < bounds.y {
        rect.y = bounds.y;
    }
    if rect.bottom() > bounds.bottom() {
        rect.y = bounds.bottom() - rect.height;
    }
}
