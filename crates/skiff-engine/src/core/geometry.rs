use glam::Vec2;

use crate::api::error::LevelError;

/// Axis-aligned rectangle in y-down screen space.
///
/// `x`/`y` are the top-left corner. Edge setters move the rectangle without
/// resizing it, so `set_bottom(32.0)` on a 64-tall rect puts its top at -32.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    width: f32,
    height: f32,
}

impl Rect {
    /// Create a rectangle. Zero-size and inverted rectangles are rejected.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Result<Self, LevelError> {
        // NaN fails both comparisons, so it is rejected too.
        if !(width > 0.0 && height > 0.0) {
            return Err(LevelError::DegenerateRect { x, y, width, height });
        }
        Ok(Self { x, y, width, height })
    }

    /// Create a rectangle from its top-left corner and size.
    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Result<Self, LevelError> {
        Self::new(top_left.x, top_left.y, size.x, size.y)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.center_y())
    }

    /// Midpoint of the bottom edge (where a body's feet are).
    pub fn mid_bottom(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.bottom())
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.width;
    }

    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.height;
    }

    /// Move horizontally by `dx`.
    pub fn shift_x(&mut self, dx: f32) {
        self.x += dx;
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// True if any rectangle in `others` overlaps this one.
    pub fn overlaps_any<'a>(&self, others: impl IntoIterator<Item = &'a Rect>) -> bool {
        others.into_iter().any(|other| self.overlaps(other))
    }
}
