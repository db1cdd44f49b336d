// File: crates/chart-viewport/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (content rects, points, sizes).

use serde::{Deserialize, Serialize};

use crate::types::Insets;

/// Integer pixel rectangle. Y grows downward, so `top <= bottom` for a
/// non-empty rect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    pub const fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Half-open containment: `left <= x < right` and `top <= y < bottom`.
    /// An empty rect contains nothing.
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        !self.is_empty() && x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Shrinks the rect: left/top move inward by the given amounts, right/bottom
    /// move inward by theirs. Negative deltas grow the rect.
    pub fn inset(&mut self, insets: Insets) {
        self.left += insets.left;
        self.top += insets.top;
        self.right -= insets.right;
        self.bottom -= insets.bottom;
    }
}

/// A point in data space, produced by inverse pixel transforms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Integer pixel size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeI32 {
    pub width: i32,
    pub height: i32,
}

impl SizeI32 {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Bounds `v` to `[lo, hi]`. When the bounds cross (`lo > hi`), `lo` wins.
#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    let v = if v > hi { hi } else { v };
    if v < lo { lo } else { v }
}
