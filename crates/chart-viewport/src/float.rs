// File: crates/chart-viewport/src/float.rs
// Summary: Float helpers: near-equality, ULP stepping, one-significant-figure rounding.

/// Powers of ten used by the formatter; digit counts past the table are not
/// representable.
pub const POW10: [i64; 10] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// True if `a` and `b` are within `max_absolute_diff` of each other, or within
/// `max_relative_diff` of the larger magnitude.
pub fn almost_equal(a: f32, b: f32, max_absolute_diff: f32, max_relative_diff: f32) -> bool {
    let diff = (a - b).abs();
    if diff <= max_absolute_diff {
        return true;
    }
    let largest = a.abs().max(b.abs());
    diff <= largest * max_relative_diff
}

/// Smallest `f64` strictly greater than `d`. NaN and +inf map to themselves.
pub fn next_up(d: f64) -> f64 {
    if d.is_nan() || d == f64::INFINITY {
        return d;
    }
    // +0.0 and -0.0 both step to the smallest positive subnormal.
    let d = d + 0.0;
    let bits = d.to_bits();
    f64::from_bits(if d >= 0.0 { bits + 1 } else { bits - 1 })
}

/// Largest `f64` strictly less than `d`. NaN and -inf map to themselves.
pub fn next_down(d: f64) -> f64 {
    if d.is_nan() || d == f64::NEG_INFINITY {
        return d;
    }
    if d == 0.0 {
        return -f64::from_bits(1);
    }
    let bits = d.to_bits();
    f64::from_bits(if d > 0.0 { bits - 1 } else { bits + 1 })
}

pub fn next_up_f32(f: f32) -> f32 {
    if f.is_nan() || f == f32::INFINITY {
        return f;
    }
    let f = f + 0.0;
    let bits = f.to_bits();
    f32::from_bits(if f >= 0.0 { bits + 1 } else { bits - 1 })
}

pub fn next_down_f32(f: f32) -> f32 {
    if f.is_nan() || f == f32::NEG_INFINITY {
        return f;
    }
    if f == 0.0 {
        return -f32::from_bits(1);
    }
    let bits = f.to_bits();
    f32::from_bits(if f > 0.0 { bits - 1 } else { bits + 1 })
}

/// Rounds to one significant figure, e.g. `0.0734 -> 0.07`, `260.0 -> 300.0`.
pub fn round_to_one_significant_figure(num: f64) -> f64 {
    if num == 0.0 || !num.is_finite() {
        return num;
    }
    let d = num.abs().log10().ceil();
    let power = 1 - d as i32;
    let magnitude = 10f64.powi(power);
    let shifted = (num * magnitude).round();
    shifted / magnitude
}
