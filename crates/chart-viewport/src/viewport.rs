// File: crates/chart-viewport/src/viewport.rs
// Summary: Data-space rectangle mapped onto the drawable pixel area.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in data space.
///
/// Y grows upward here, so a well-formed viewport has `top > bottom` (the
/// opposite of pixel rects). `height()` is `top - bottom`. The type does not
/// enforce ordering; the computator re-clamps whatever it is handed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Viewport {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn set(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        self.left = left;
        self.top = top;
        self.right = right;
        self.bottom = bottom;
    }

    #[inline]
    pub fn width(&self) -> f32 { self.right - self.left }
    #[inline]
    pub fn height(&self) -> f32 { self.top - self.bottom }
    #[inline]
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    #[inline]
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }

    /// True when the viewport has no positive area.
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.bottom >= self.top
    }

    /// Half-open containment: `left <= x < right`, `bottom <= y < top`.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        !self.is_empty() && x >= self.left && x < self.right && y >= self.bottom && y < self.top
    }

    /// Translates by `(dx, dy)` in data units.
    pub fn offset(&mut self, dx: f32, dy: f32) {
        self.left += dx;
        self.right += dx;
        self.top += dy;
        self.bottom += dy;
    }

    /// Moves the top-left corner to `(new_left, new_top)`, keeping the size.
    pub fn offset_to(&mut self, new_left: f32, new_top: f32) {
        self.right += new_left - self.left;
        self.bottom += new_top - self.top;
        self.left = new_left;
        self.top = new_top;
    }

    /// Shrinks by `dx` on left and right and by `dy` on top and bottom.
    /// Negative values grow the viewport.
    pub fn inset(&mut self, dx: f32, dy: f32) {
        self.left += dx;
        self.right -= dx;
        self.top -= dy;
        self.bottom += dy;
    }
}
