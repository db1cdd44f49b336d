// File: crates/chart-viewport/src/computator.rs
// Summary: Maps data-space viewports onto pixel content rects and keeps the current
// viewport inside the maximum one (zoom/pan constraints).

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::ComputatorConfig;
use crate::error::Result;
use crate::geometry::{clamp, PointF, RectI32, SizeI32};
use crate::listener::{DummyViewportChangeListener, ViewportChangeListener};
use crate::types::{Insets, DEFAULT_MAXIMUM_ZOOM, MINIMUM_ZOOM};
use crate::viewport::Viewport;

/// Selects which viewport backs the pixel transforms.
///
/// `Standard` draws the current viewport (the zoomed/panned window).
/// `Preview` draws the whole maximum viewport, as an overview pane does; its
/// current viewport is then the highlighted sub-region, usually mirrored from
/// the main chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputatorKind {
    #[default]
    Standard,
    Preview,
}

/// Owns the content rects and the maximum/current viewport pair.
///
/// Call [`ChartComputator::set_content_rect`] before any pixel transform; until
/// then the rects are empty and transforms produce non-finite values.
pub struct ChartComputator {
    kind: ComputatorKind,
    max_zoom: f32,
    chart_width: i32,
    chart_height: i32,
    max_content_rect: RectI32,
    content_rect_minus_axes_margins: RectI32,
    content_rect_minus_all_margins: RectI32,
    current_viewport: Viewport,
    max_viewport: Viewport,
    min_viewport_width: f32,
    min_viewport_height: f32,
    listener: Box<dyn ViewportChangeListener>,
}

impl std::fmt::Debug for ChartComputator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartComputator")
            .field("kind", &self.kind)
            .field("max_zoom", &self.max_zoom)
            .field("chart_width", &self.chart_width)
            .field("chart_height", &self.chart_height)
            .field("max_content_rect", &self.max_content_rect)
            .field("content_rect_minus_axes_margins", &self.content_rect_minus_axes_margins)
            .field("content_rect_minus_all_margins", &self.content_rect_minus_all_margins)
            .field("current_viewport", &self.current_viewport)
            .field("max_viewport", &self.max_viewport)
            .field("min_viewport_width", &self.min_viewport_width)
            .field("min_viewport_height", &self.min_viewport_height)
            .finish_non_exhaustive()
    }
}

impl Default for ChartComputator {
    fn default() -> Self {
        Self::with_kind(ComputatorKind::Standard)
    }
}

impl ChartComputator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computator for an overview pane; see [`ComputatorKind::Preview`].
    pub fn preview() -> Self {
        Self::with_kind(ComputatorKind::Preview)
    }

    pub fn with_kind(kind: ComputatorKind) -> Self {
        Self {
            kind,
            max_zoom: DEFAULT_MAXIMUM_ZOOM,
            chart_width: 0,
            chart_height: 0,
            max_content_rect: RectI32::default(),
            content_rect_minus_axes_margins: RectI32::default(),
            content_rect_minus_all_margins: RectI32::default(),
            current_viewport: Viewport::default(),
            max_viewport: Viewport::default(),
            min_viewport_width: 0.0,
            min_viewport_height: 0.0,
            listener: Box::new(DummyViewportChangeListener),
        }
    }

    /// Builds a computator from a validated config: layout first, then the
    /// maximum viewport and zoom limit, then the current viewport (defaults to
    /// the maximum one).
    pub fn from_config(config: &ComputatorConfig) -> Result<Self> {
        config.validate()?;
        let mut computator = Self::with_kind(config.kind);
        computator.set_content_rect_with_padding(config.chart_width, config.chart_height, config.padding);
        if let Some(max) = config.max_viewport {
            computator.set_max_viewport_from(&max);
        }
        computator.set_max_zoom(config.max_zoom);
        let current = config.current_viewport.unwrap_or(computator.max_viewport);
        computator.set_current_viewport_from(&current);
        Ok(computator)
    }

    pub fn kind(&self) -> ComputatorKind { self.kind }

    // ---- content rects ------------------------------------------------------

    /// Establishes the padded drawable area and resets both inset rects to it.
    pub fn set_content_rect(
        &mut self,
        width: i32,
        height: i32,
        padding_left: i32,
        padding_top: i32,
        padding_right: i32,
        padding_bottom: i32,
    ) {
        self.chart_width = width;
        self.chart_height = height;
        self.max_content_rect =
            RectI32::from_ltrb(padding_left, padding_top, width - padding_right, height - padding_bottom);
        self.content_rect_minus_axes_margins = self.max_content_rect;
        self.content_rect_minus_all_margins = self.max_content_rect;
        debug!("content rect set to {:?} for chart {}x{}", self.max_content_rect, width, height);
    }

    pub fn set_content_rect_with_padding(&mut self, width: i32, height: i32, padding: Insets) {
        self.set_content_rect(width, height, padding.left, padding.top, padding.right, padding.bottom);
    }

    /// Drops all inset deltas applied since the last `set_content_rect`.
    pub fn reset_content_rect(&mut self) {
        self.content_rect_minus_axes_margins = self.max_content_rect;
        self.content_rect_minus_all_margins = self.max_content_rect;
    }

    /// Reserves room for axes; shrinks both inset rects.
    pub fn inset_content_rect(&mut self, delta_left: i32, delta_top: i32, delta_right: i32, delta_bottom: i32) {
        let deltas = Insets::new(delta_left, delta_top, delta_right, delta_bottom);
        self.content_rect_minus_axes_margins.inset(deltas);
        self.content_rect_minus_all_margins.inset(deltas);
    }

    /// Reserves room for in-chart overflow (e.g. point radii); shrinks only the
    /// innermost rect.
    pub fn inset_content_rect_by_internal_margins(
        &mut self,
        delta_left: i32,
        delta_top: i32,
        delta_right: i32,
        delta_bottom: i32,
    ) {
        self.content_rect_minus_all_margins
            .inset(Insets::new(delta_left, delta_top, delta_right, delta_bottom));
    }

    pub fn inset_content_rect_by(&mut self, deltas: Insets) {
        self.inset_content_rect(deltas.left, deltas.top, deltas.right, deltas.bottom);
    }

    pub fn inset_content_rect_by_internal_margins_by(&mut self, deltas: Insets) {
        self.inset_content_rect_by_internal_margins(deltas.left, deltas.top, deltas.right, deltas.bottom);
    }

    pub fn chart_width(&self) -> i32 { self.chart_width }
    pub fn chart_height(&self) -> i32 { self.chart_height }
    pub fn max_content_rect(&self) -> RectI32 { self.max_content_rect }
    pub fn content_rect_minus_axes_margins(&self) -> RectI32 { self.content_rect_minus_axes_margins }
    pub fn content_rect_minus_all_margins(&self) -> RectI32 { self.content_rect_minus_all_margins }

    // ---- viewports ----------------------------------------------------------

    /// Re-clamps the requested viewport to the maximum viewport and the
    /// minimum (max-zoom) size, stores it as current, and notifies the listener.
    ///
    /// Never rejects input: inverted or out-of-range requests are corrected.
    pub fn constrain_viewport(&mut self, mut left: f32, mut top: f32, mut right: f32, mut bottom: f32) {
        let max = self.max_viewport;

        if right - left < self.min_viewport_width {
            right = left + self.min_viewport_width;
            if left < max.left {
                left = max.left;
                right = left + self.min_viewport_width;
            } else if right > max.right {
                right = max.right;
                left = right - self.min_viewport_width;
            }
        }

        if top - bottom < self.min_viewport_height {
            bottom = top - self.min_viewport_height;
            if top > max.top {
                top = max.top;
                bottom = top - self.min_viewport_height;
            } else if bottom < max.bottom {
                bottom = max.bottom;
                top = bottom + self.min_viewport_height;
            }
        }

        self.current_viewport.left = max.left.max(left);
        self.current_viewport.top = max.top.min(top);
        self.current_viewport.right = max.right.min(right);
        self.current_viewport.bottom = max.bottom.max(bottom);

        trace!("viewport constrained to {:?}", self.current_viewport);
        self.listener.on_viewport_changed(&self.current_viewport);
    }

    /// Moves the viewport's top-left corner, keeping its size and keeping it
    /// inside the maximum viewport.
    pub fn set_viewport_top_left(&mut self, left: f32, top: f32) {
        let cur_width = self.current_viewport.width();
        let cur_height = self.current_viewport.height();
        let max = self.max_viewport;

        let left = clamp(left, max.left, max.right - cur_width);
        let top = clamp(top, max.bottom + cur_height, max.top);
        self.constrain_viewport(left, top, left + cur_width, top - cur_height);
    }

    pub fn current_viewport(&self) -> Viewport { self.current_viewport }

    pub fn set_current_viewport(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        self.constrain_viewport(left, top, right, bottom);
    }

    pub fn set_current_viewport_from(&mut self, viewport: &Viewport) {
        self.constrain_viewport(viewport.left, viewport.top, viewport.right, viewport.bottom);
    }

    pub fn maximum_viewport(&self) -> Viewport { self.max_viewport }

    /// Sets the outer bound and recomputes the minimum viewport size. The
    /// current viewport is left as is until its next mutation.
    pub fn set_max_viewport(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        self.max_viewport.set(left, top, right, bottom);
        self.compute_minimum_width_and_height();
        debug!("max viewport set to {:?}", self.max_viewport);
    }

    pub fn set_max_viewport_from(&mut self, viewport: &Viewport) {
        self.set_max_viewport(viewport.left, viewport.top, viewport.right, viewport.bottom);
    }

    /// What the pixel transforms currently display: the current viewport for
    /// `Standard`, the maximum viewport for `Preview`.
    pub fn visible_viewport(&self) -> Viewport {
        *self.transform_viewport()
    }

    pub fn set_visible_viewport(&mut self, viewport: &Viewport) {
        match self.kind {
            ComputatorKind::Standard => self.set_current_viewport_from(viewport),
            ComputatorKind::Preview => self.set_max_viewport_from(viewport),
        }
    }

    pub fn minimum_viewport_width(&self) -> f32 { self.min_viewport_width }
    pub fn minimum_viewport_height(&self) -> f32 { self.min_viewport_height }

    pub fn max_zoom(&self) -> f32 { self.max_zoom }

    /// Floors `max_zoom` to 1, recomputes the minimum viewport size and
    /// re-applies the current viewport so an over-zoomed view snaps back.
    pub fn set_max_zoom(&mut self, max_zoom: f32) {
        self.max_zoom = if max_zoom < MINIMUM_ZOOM { MINIMUM_ZOOM } else { max_zoom };
        self.compute_minimum_width_and_height();
        debug!("max zoom set to {}", self.max_zoom);
        let current = self.current_viewport;
        self.set_current_viewport_from(&current);
    }

    /// Replaces the observer; only one is registered at a time.
    pub fn set_viewport_change_listener<L>(&mut self, listener: L)
    where
        L: ViewportChangeListener + 'static,
    {
        self.listener = Box::new(listener);
    }

    pub fn clear_viewport_change_listener(&mut self) {
        self.listener = Box::new(DummyViewportChangeListener);
    }

    fn compute_minimum_width_and_height(&mut self) {
        self.min_viewport_width = self.max_viewport.width() / self.max_zoom;
        self.min_viewport_height = self.max_viewport.height() / self.max_zoom;
    }

    #[inline]
    fn transform_viewport(&self) -> &Viewport {
        match self.kind {
            ComputatorKind::Standard => &self.current_viewport,
            ComputatorKind::Preview => &self.max_viewport,
        }
    }

    // ---- transforms ---------------------------------------------------------

    /// Data X to pixel X inside the all-margins rect.
    pub fn compute_raw_x(&self, value_x: f32) -> f32 {
        let rect = &self.content_rect_minus_all_margins;
        let viewport = self.transform_viewport();
        let pixel_offset = (value_x - viewport.left) * (rect.width() as f32 / viewport.width());
        rect.left as f32 + pixel_offset
    }

    /// Data Y to pixel Y. Pixel Y grows downward, hence the subtraction from
    /// the bottom edge.
    pub fn compute_raw_y(&self, value_y: f32) -> f32 {
        let rect = &self.content_rect_minus_all_margins;
        let viewport = self.transform_viewport();
        let pixel_offset = (value_y - viewport.bottom) * (rect.height() as f32 / viewport.height());
        rect.bottom as f32 - pixel_offset
    }

    pub fn compute_raw_distance_x(&self, distance: f32) -> f32 {
        distance * (self.content_rect_minus_all_margins.width() as f32 / self.transform_viewport().width())
    }

    pub fn compute_raw_distance_y(&self, distance: f32) -> f32 {
        distance * (self.content_rect_minus_all_margins.height() as f32 / self.transform_viewport().height())
    }

    /// Inverse of [`compute_raw_x`](Self::compute_raw_x) /
    /// [`compute_raw_y`](Self::compute_raw_y). `None` when the pixel (truncated
    /// to integers) lies outside the all-margins rect.
    pub fn raw_pixels_to_data_point(&self, x: f32, y: f32) -> Option<PointF> {
        let rect = &self.content_rect_minus_all_margins;
        if !rect.contains(x as i32, y as i32) {
            return None;
        }
        let viewport = self.transform_viewport();
        Some(PointF::new(
            viewport.left + (x - rect.left as f32) * viewport.width() / rect.width() as f32,
            viewport.bottom + (y - rect.bottom as f32) * viewport.height() / -(rect.height() as f32),
        ))
    }

    /// Pixel size of the full scrollable surface at the current zoom level.
    pub fn compute_scroll_surface_size(&self) -> SizeI32 {
        let rect = &self.content_rect_minus_all_margins;
        let current = &self.current_viewport;
        SizeI32::new(
            (self.max_viewport.width() * rect.width() as f32 / current.width()) as i32,
            (self.max_viewport.height() * rect.height() as f32 / current.height()) as i32,
        )
    }

    /// Inclusive test against the all-margins rect grown by `precision` pixels.
    pub fn is_within_content_rect(&self, x: f32, y: f32, precision: f32) -> bool {
        let rect = &self.content_rect_minus_all_margins;
        x >= rect.left as f32 - precision
            && x <= rect.right as f32 + precision
            && y <= rect.bottom as f32 + precision
            && y >= rect.top as f32 - precision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_size_tracks_zoom_limit() {
        let mut c = ChartComputator::new();
        c.set_max_viewport(0.0, 50.0, 100.0, 0.0);
        assert_eq!(c.minimum_viewport_width(), 5.0);
        assert_eq!(c.minimum_viewport_height(), 2.5);

        c.set_max_zoom(10.0);
        assert_eq!(c.minimum_viewport_width(), 10.0);
        assert_eq!(c.minimum_viewport_height(), 5.0);
    }

    #[test]
    fn transform_viewport_follows_kind() {
        let mut standard = ChartComputator::new();
        let mut preview = ChartComputator::preview();
        for c in [&mut standard, &mut preview] {
            c.set_max_viewport(0.0, 10.0, 10.0, 0.0);
            c.set_current_viewport(2.0, 8.0, 4.0, 6.0);
        }
        assert_eq!(standard.visible_viewport(), Viewport::new(2.0, 8.0, 4.0, 6.0));
        assert_eq!(preview.visible_viewport(), Viewport::new(0.0, 10.0, 10.0, 0.0));
    }

    #[test]
    fn debug_skips_listener() {
        let c = ChartComputator::new();
        let s = format!("{c:?}");
        assert!(s.contains("ChartComputator"));
        assert!(s.contains("max_zoom: 20.0"));
    }
}
