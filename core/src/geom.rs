//! Axis-aligned rectangle geometry.
//!
//! All rectangle relations use half-open intervals: a rectangle covers
//! `[x, x+w) × [y, y+h)`, so two rectangles that only share an edge do not
//! intersect. Seam detection relies on exactly that boundary.

/// An axis-aligned rectangle in design units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

impl Rect {
    pub fn new(x: i64, y: i64, w: i64, h: i64) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge coordinate (exclusive).
    pub fn right(&self) -> i64 {
        self.x + self.w
    }

    /// Bottom edge coordinate (exclusive). The y axis grows downward.
    pub fn bottom(&self) -> i64 {
        self.y + self.h
    }

    /// Half-open overlap test.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// True if `self` lies fully within `other` on all four sides.
    pub fn inside(&self, other: &Rect) -> bool {
        self.x >= other.x
            && self.y >= other.y
            && self.right() <= other.right()
            && self.bottom() <= other.bottom()
    }
}
