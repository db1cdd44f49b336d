// File: crates/chart-viewport/tests/axis_values.rs
// Purpose: Auto-generated axis ticks (spacing, bounds, decimals, buffer reuse) and their labels.

use chart_viewport::{
    auto_generated_axis_values, compute_auto_generated_axis_values, format_float, AxisAutoValues, ValueFormatter,
};

#[test]
fn zero_to_hundred_in_five_steps() {
    let ticks = auto_generated_axis_values(0.0, 100.0, 5);
    assert_eq!(ticks.values(), &[0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    assert_eq!(ticks.decimals(), 0);
}

#[test]
fn unit_range_in_ten_steps_uses_tenths() {
    let ticks = auto_generated_axis_values(0.0, 1.0, 10);
    assert_eq!(ticks.len(), 11);
    assert_eq!(ticks.decimals(), 1);
    for (i, v) in ticks.iter().enumerate() {
        assert!((v - i as f32 * 0.1).abs() < 1e-6, "tick {i} = {v}");
    }
}

#[test]
fn large_leading_digit_bumps_to_next_power_of_ten() {
    // Raw interval 0.9 would be an odd step; 1 is used instead.
    let ticks = auto_generated_axis_values(0.0, 9.0, 10);
    assert_eq!(ticks.values(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    assert_eq!(ticks.decimals(), 0);
}

#[test]
fn ticks_are_multiples_inside_the_range() {
    let ticks = auto_generated_axis_values(3.0, 97.0, 4);
    assert_eq!(ticks.values(), &[20.0, 40.0, 60.0, 80.0]);
}

#[test]
fn range_crossing_zero() {
    let ticks = auto_generated_axis_values(-1.0, 1.0, 4);
    assert_eq!(ticks.values(), &[-1.0, -0.5, 0.0, 0.5, 1.0]);
    assert_eq!(ticks.decimals(), 1);
}

#[test]
fn degenerate_inputs_yield_no_ticks() {
    assert!(auto_generated_axis_values(0.0, 10.0, 0).is_empty());
    assert!(auto_generated_axis_values(5.0, 5.0, 4).is_empty());
    assert!(auto_generated_axis_values(10.0, 0.0, 4).is_empty());
    assert!(auto_generated_axis_values(0.0, f32::INFINITY, 4).is_empty());
    assert!(auto_generated_axis_values(f32::NAN, 1.0, 4).is_empty());
}

#[test]
fn backing_buffer_is_reused_and_never_shrinks() {
    let mut out = AxisAutoValues::new();
    compute_auto_generated_axis_values(0.0, 100.0, 10, &mut out);
    assert_eq!(out.len(), 11);
    let capacity = out.capacity();

    compute_auto_generated_axis_values(0.0, 100.0, 2, &mut out);
    assert_eq!(out.values(), &[0.0, 50.0, 100.0]);
    assert_eq!(out.capacity(), capacity);

    compute_auto_generated_axis_values(0.0, 100.0, 0, &mut out);
    assert!(out.is_empty());
    assert_eq!(out.values().len(), 0);
    assert_eq!(out.capacity(), capacity);
    assert_eq!(out.decimals(), 0);

    // Growing again after an empty result reuses and extends the same buffer.
    compute_auto_generated_axis_values(0.0, 100.0, 50, &mut out);
    assert_eq!(out.len(), 51);
    assert_eq!(out.capacity(), 51);
    assert_eq!(out.values().last(), Some(&100.0));
}

#[test]
fn labels_share_the_set_precision() {
    let ticks = auto_generated_axis_values(0.0, 1.0, 4);
    // Interval 0.25 rounds to 0.3 at one significant figure.
    assert_eq!(ticks.values(), &[0.0, 0.3, 0.6, 0.9]);
    let labels = ticks.format_labels(&ValueFormatter::new().with_appended_text("%"));
    assert_eq!(labels, vec!["0%", "0.3%", "0.6%", "0.9%"]);
}

#[test]
fn labels_can_be_written_without_allocating() {
    let ticks = auto_generated_axis_values(0.0, 1.0, 10);
    let mut buf = [0u8; 64];
    let mut end = buf.len();
    for v in ticks.iter().rev() {
        let n = format_float(&mut buf, v, end, ticks.decimals(), b'.');
        end -= n + 1;
        buf[end] = b' ';
    }
    let text = std::str::from_utf8(&buf[end + 1..]).unwrap();
    assert_eq!(text, "0 0.1 0.2 0.3 0.4 0.5 0.6 0.7 0.8 0.9 1.0");
}
