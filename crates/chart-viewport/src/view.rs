// File: crates/chart-viewport/src/view.rs
// Summary: Pixel-driven pan and focal zoom applied through the computator's constraints.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::computator::ChartComputator;

/// Axes a zoom gesture is allowed to change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomType {
    Horizontal,
    Vertical,
    #[default]
    HorizontalAndVertical,
}

/// Which axes accepted a pan; a host uses this to decide whether to pass the
/// gesture on (e.g. to an enclosing scroll container).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollResult {
    pub can_scroll_x: bool,
    pub can_scroll_y: bool,
}

impl ScrollResult {
    pub fn scrolled(&self) -> bool {
        self.can_scroll_x || self.can_scroll_y
    }
}

impl ChartComputator {
    /// Pans by a pixel distance. Positive `distance_x` moves the window right,
    /// positive `distance_y` moves it down (towards smaller data Y).
    ///
    /// The pixel distance is scaled by the visible viewport, so in a preview
    /// pane dragging the highlight moves it across the full data extent.
    pub fn pan_by_pixels(&mut self, distance_x: f32, distance_y: f32) -> ScrollResult {
        let max = self.maximum_viewport();
        let visible = self.visible_viewport();
        let current = self.current_viewport();
        let rect = self.content_rect_minus_all_margins();

        let can_scroll_left = current.left > max.left;
        let can_scroll_right = current.right < max.right;
        let can_scroll_top = current.top < max.top;
        let can_scroll_bottom = current.bottom > max.bottom;

        let can_scroll_x = (can_scroll_left && distance_x <= 0.0) || (can_scroll_right && distance_x >= 0.0);
        let can_scroll_y = (can_scroll_top && distance_y <= 0.0) || (can_scroll_bottom && distance_y >= 0.0);

        if can_scroll_x || can_scroll_y {
            let offset_x = distance_x * visible.width() / rect.width() as f32;
            let offset_y = -distance_y * visible.height() / rect.height() as f32;
            trace!("pan by ({distance_x}, {distance_y})px -> ({offset_x}, {offset_y})");
            self.set_viewport_top_left(current.left + offset_x, current.top + offset_y);
        }

        ScrollResult { can_scroll_x, can_scroll_y }
    }

    /// Scales the current viewport by `scale` around the pixel `(focus_x,
    /// focus_y)`, keeping the data point under the focus fixed. `scale < 1`
    /// zooms in. Returns false, leaving everything untouched, when the focus
    /// lies outside the content rect.
    pub fn zoom_at_pixel(&mut self, zoom_type: ZoomType, focus_x: f32, focus_y: f32, scale: f32) -> bool {
        let Some(focus) = self.raw_pixels_to_data_point(focus_x, focus_y) else {
            return false;
        };
        let current = self.current_viewport();
        let rect = self.content_rect_minus_all_margins();
        let new_width = scale * current.width();
        let new_height = scale * current.height();

        let left = focus.x - (focus_x - rect.left as f32) * (new_width / rect.width() as f32);
        let top = focus.y + (focus_y - rect.top as f32) * (new_height / rect.height() as f32);
        let right = left + new_width;
        let bottom = top - new_height;

        trace!("zoom x{scale} at ({focus_x}, {focus_y}) -> focus data ({}, {})", focus.x, focus.y);
        match zoom_type {
            ZoomType::HorizontalAndVertical => self.set_current_viewport(left, top, right, bottom),
            ZoomType::Horizontal => self.set_current_viewport(left, current.top, right, current.bottom),
            ZoomType::Vertical => self.set_current_viewport(current.left, top, current.right, bottom),
        }
        true
    }
}
