// File: crates/chart-viewport/src/format.rs
// Summary: Allocation-free fixed-point float formatting and an affix-aware value formatter.

use crate::float::POW10;

/// Writes `value` with exactly `digits` fractional digits into `buf`, filling
/// backward so the text ends at `end_index` (exclusive). Returns the number of
/// bytes written; the text is `buf[end_index - n..end_index]`.
///
/// The scaled value is rounded half away from zero. Zero is written as `"0"`
/// regardless of `digits`. A `digits` past the supported precision writes the
/// separator alone and returns 1.
///
/// # Panics
///
/// If `buf[..end_index]` is too short for the output.
pub fn format_float(buf: &mut [u8], value: f32, end_index: usize, digits: usize, separator: u8) -> usize {
    write_fixed(buf, value, end_index, digits, &[separator])
}

/// Shared writer; `separator` is the UTF-8 encoding of the separator char.
fn write_fixed(buf: &mut [u8], value: f32, end_index: usize, digits: usize, separator: &[u8]) -> usize {
    if digits >= POW10.len() {
        buf[end_index - separator.len()..end_index].copy_from_slice(separator);
        return separator.len();
    }
    if value == 0.0 {
        buf[end_index - 1] = b'0';
        return 1;
    }

    let negative = value < 0.0;
    let magnitude = value.abs() * POW10[digits] as f32;
    let mut lval = magnitude.round() as i64;

    // At least one integer digit: "0.05", never ".05".
    let min_digits = if digits > 0 { digits + 1 } else { 1 };
    let mut index = end_index;
    let mut written = 0usize;
    while lval != 0 || written < min_digits {
        let digit = (lval % 10) as u8;
        lval /= 10;
        index -= 1;
        buf[index] = b'0' + digit;
        written += 1;
        if digits > 0 && written == digits {
            index -= separator.len();
            buf[index..index + separator.len()].copy_from_slice(separator);
        }
    }
    if negative {
        index -= 1;
        buf[index] = b'-';
    }
    end_index - index
}

/// Allocating counterpart of [`format_float`]; same output text.
pub fn format_float_to_string(value: f32, digits: usize, separator: char) -> String {
    let mut sep = [0u8; 4];
    let sep = separator.encode_utf8(&mut sep);
    // Longest i64 is 19 digits, plus sign and a 4-byte separator.
    let mut buf = [0u8; 28];
    let end = buf.len();
    let n = write_fixed(&mut buf, value, end, digits, sep.as_bytes());
    String::from_utf8_lossy(&buf[end - n..end]).into_owned()
}

/// Formats axis and value labels: optional fixed digit count, prefix/suffix
/// text, decimal separator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueFormatter {
    decimal_digits: Option<usize>,
    prepended_text: String,
    appended_text: String,
    decimal_separator: char,
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self {
            decimal_digits: None,
            prepended_text: String::new(),
            appended_text: String::new(),
            decimal_separator: '.',
        }
    }
}

impl ValueFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed digit count overriding the tick planner's automatic decimals.
    pub fn with_decimal_digits(mut self, digits: usize) -> Self {
        self.decimal_digits = Some(digits);
        self
    }

    pub fn with_prepended_text(mut self, text: impl Into<String>) -> Self {
        self.prepended_text = text.into();
        self
    }

    pub fn with_appended_text(mut self, text: impl Into<String>) -> Self {
        self.appended_text = text.into();
        self
    }

    /// Any char; multi-byte separators are written as their UTF-8 bytes.
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    pub fn decimal_digits(&self) -> Option<usize> { self.decimal_digits }
    pub fn decimal_separator(&self) -> char { self.decimal_separator }

    pub fn applied_digits(&self, auto_decimals: usize) -> usize {
        self.decimal_digits.unwrap_or(auto_decimals)
    }

    /// Writes `prefix + number + suffix` so it ends at the end of `buf` and
    /// returns its byte length. Nothing is allocated.
    ///
    /// # Panics
    ///
    /// If `buf` is too short for the output.
    pub fn format_into(&self, buf: &mut [u8], value: f32, auto_decimals: usize) -> usize {
        let mut end = buf.len();
        let suffix = self.appended_text.as_bytes();
        buf[end - suffix.len()..end].copy_from_slice(suffix);
        end -= suffix.len();

        let mut sep = [0u8; 4];
        let sep = self.decimal_separator.encode_utf8(&mut sep);
        let n = write_fixed(buf, value, end, self.applied_digits(auto_decimals), sep.as_bytes());
        end -= n;

        let prefix = self.prepended_text.as_bytes();
        buf[end - prefix.len()..end].copy_from_slice(prefix);
        suffix.len() + n + prefix.len()
    }

    pub fn format(&self, value: f32, auto_decimals: usize) -> String {
        let number = format_float_to_string(value, self.applied_digits(auto_decimals), self.decimal_separator);
        let mut out = String::with_capacity(self.prepended_text.len() + number.len() + self.appended_text.len());
        out.push_str(&self.prepended_text);
        out.push_str(&number);
        out.push_str(&self.appended_text);
        out
    }
}
