// File: crates/chart-viewport/src/types.rs
// Summary: Shared types and constants (zoom defaults, paddings/margin deltas).

use serde::{Deserialize, Serialize};

/// Default upper bound on zoom; the current viewport may shrink to
/// `max_viewport / DEFAULT_MAXIMUM_ZOOM` on each axis.
pub const DEFAULT_MAXIMUM_ZOOM: f32 = 20.0;

/// Lowest accepted zoom factor; anything below is floored to it.
pub const MINIMUM_ZOOM: f32 = 1.0;

/// Per-side pixel amounts: chart padding or content-rect inset deltas.
/// Left/top are added to the rect's left/top; right/bottom are subtracted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    /// Same amount on every side.
    pub const fn uniform(v: i32) -> Self {
        Self::new(v, v, v, v)
    }
}
