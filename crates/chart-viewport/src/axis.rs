// File: crates/chart-viewport/src/axis.rs
// Summary: Automatic axis ticks: "nice" evenly spaced values plus a shared display precision.

use log::trace;

use crate::float::{next_up, round_to_one_significant_figure};
use crate::format::ValueFormatter;

/// Output of [`compute_auto_generated_axis_values`].
///
/// The backing buffer is reused across calls and only ever grows; the first
/// `values_number` entries are the ticks of the latest computation.
/// `values_number <= values.len()` always holds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisAutoValues {
    values: Vec<f32>,
    values_number: usize,
    decimals: usize,
}

impl AxisAutoValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks of the latest computation, ascending.
    pub fn values(&self) -> &[f32] {
        &self.values[..self.values_number]
    }

    pub fn len(&self) -> usize { self.values_number }
    pub fn is_empty(&self) -> bool { self.values_number == 0 }

    /// Fractional digits to display, uniform across the tick set.
    pub fn decimals(&self) -> usize { self.decimals }

    /// Size of the backing buffer; never shrinks.
    pub fn capacity(&self) -> usize { self.values.len() }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, f32>> {
        self.values().iter().copied()
    }

    /// One label per tick, using this set's `decimals` unless the formatter
    /// fixes its own digit count.
    pub fn format_labels(&self, formatter: &ValueFormatter) -> Vec<String> {
        self.iter().map(|v| formatter.format(v, self.decimals)).collect()
    }
}

/// Fills `out` with ticks covering `[start, stop]` spaced by a one-significant
/// figure interval close to `(stop - start) / steps`.
///
/// Intervals whose leading digit would exceed 5 are bumped to the next power of
/// ten (0.7 -> 1, 90 -> 100). The first tick is the smallest multiple of the
/// interval `>= start`, the last the largest `<= stop`. `steps == 0`, an empty
/// or inverted range, or non-finite bounds produce zero ticks.
pub fn compute_auto_generated_axis_values(start: f32, stop: f32, steps: usize, out: &mut AxisAutoValues) {
    let range = stop as f64 - start as f64;
    if steps == 0 || !(range > 0.0) || !range.is_finite() {
        out.values_number = 0;
        out.decimals = 0;
        return;
    }

    let raw_interval = range / steps as f64;
    let mut interval = round_to_one_significant_figure(raw_interval);
    let interval_magnitude = 10f64.powi(interval.log10().floor() as i32);
    let interval_sig_digit = (interval / interval_magnitude).round() as i64;
    if interval_sig_digit > 5 {
        interval = 10.0 * interval_magnitude;
    }

    let first = (start as f64 / interval).ceil() * interval;
    let last = next_up((stop as f64 / interval).floor() * interval);

    let mut values_number = 0usize;
    while first + values_number as f64 * interval <= last {
        values_number += 1;
    }

    if out.values.len() < values_number {
        out.values.resize(values_number, 0.0);
    }
    for (i, slot) in out.values[..values_number].iter_mut().enumerate() {
        *slot = (first + i as f64 * interval) as f32;
    }
    out.values_number = values_number;
    out.decimals = if interval < 1.0 { (-interval.log10()).ceil() as usize } else { 0 };

    trace!(
        "auto axis values for [{start}, {stop}] / {steps}: interval {interval}, {values_number} ticks, {} decimals",
        out.decimals
    );
}

/// Allocating convenience around [`compute_auto_generated_axis_values`].
pub fn auto_generated_axis_values(start: f32, stop: f32, steps: usize) -> AxisAutoValues {
    let mut out = AxisAutoValues::new();
    compute_auto_generated_axis_values(start, stop, steps, &mut out);
    out
}
