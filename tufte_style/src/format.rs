// Copyright 2025 the Tufte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value formatting for direct labels.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Turns a data value into label text.
///
/// One formatter applies to every label a chart produces (end labels, bar
/// labels, peak labels), so a chart reads with a single number style.
#[derive(Clone)]
pub struct ValueFormatter(Arc<dyn Fn(f64) -> String + Send + Sync>);

impl ValueFormatter {
    /// Wraps a formatting closure.
    pub fn new(f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Thousands-grouped numbers: `5000.0` → `5,000`, `1234.5` → `1,234.5`.
    pub fn grouped() -> Self {
        Self::new(format_grouped)
    }

    /// Divides by `divisor`, rounds to an integer and wraps it: with `("$", 1000.0, "k")`,
    /// `42000.0` → `$42k`.
    pub fn scaled(prefix: &str, divisor: f64, suffix: &str) -> Self {
        let prefix = String::from(prefix);
        let suffix = String::from(suffix);
        Self::new(move |v| {
            if !v.is_finite() || divisor == 0.0 {
                return alloc::format!("{v}");
            }
            let scaled = (v / divisor).round();
            let scaled = if scaled == 0.0 { 0.0 } else { scaled };
            alloc::format!("{prefix}{scaled}{suffix}")
        })
    }

    /// Formats one value.
    pub fn format(&self, v: f64) -> String {
        (self.0)(v)
    }
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::grouped()
    }
}

impl core::fmt::Debug for ValueFormatter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("ValueFormatter(..)")
    }
}

/// Formats `v` with `,` thousands separators and at most three decimals.
///
/// Integral values print without a fractional part. Non-finite values use
/// Rust's own spelling (`NaN`, `inf`).
pub fn format_grouped(v: f64) -> String {
    if !v.is_finite() {
        return alloc::format!("{v}");
    }
    // From 1e15 up, f64 spacing is at least 0.125, so there is nothing to
    // round, and scaling by 1000 would lose digits or overflow.
    let rounded = if !(-1e15..1e15).contains(&v) {
        v
    } else {
        (v * 1000.0).round() / 1000.0
    };
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let negative = rounded < 0.0;
    let magnitude = if negative { -rounded } else { rounded };
    // `Display` for f64 never switches to exponent notation.
    let digits = alloc::format!("{magnitude}");
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn grouped_integers() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(5000.0), "5,000");
        assert_eq!(format_grouped(6200.0), "6,200");
        assert_eq!(format_grouped(1_234_567.0), "1,234,567");
        assert_eq!(format_grouped(-42_000.0), "-42,000");
    }

    #[test]
    fn grouped_fractions_keep_three_decimals() {
        assert_eq!(format_grouped(1234.5), "1,234.5");
        assert_eq!(format_grouped(0.12345), "0.123");
        assert_eq!(format_grouped(-0.0001), "0");
    }

    #[test]
    fn grouped_huge_values_keep_their_digits() {
        // 2^53 + 1 is not representable; the nearest f64 is 2^53.
        assert_eq!(
            format_grouped(9_007_199_254_740_993.0),
            "9,007,199,254,740,992"
        );
        assert_eq!(format_grouped(1e15), "1,000,000,000,000,000");
        let huge = format_grouped(1e306);
        assert!(huge.starts_with("1,000,000,"));
        assert!(!huge.contains('.'));
        assert!(!huge.contains("inf"));
        assert_eq!(huge.chars().filter(|c| c.is_ascii_digit()).count(), 307);
    }

    #[test]
    fn grouped_non_finite() {
        assert_eq!(format_grouped(f64::NAN), "NaN");
        assert_eq!(format_grouped(f64::INFINITY), "inf");
    }

    #[test]
    fn scaled_rounds_to_whole_units() {
        let f = ValueFormatter::scaled("$", 1000.0, "k");
        assert_eq!(f.format(42_000.0), "$42k");
        assert_eq!(f.format(38_400.0), "$38k");
        assert_eq!(f.format(12_500.0), "$13k");
        assert_eq!(f.format(-200.0), "$0k");
    }

    #[test]
    fn custom_closure_is_used_verbatim() {
        let f = ValueFormatter::new(|v| alloc::format!("<{v}>"));
        assert_eq!(f.format(1.5), "<1.5>");
    }
}
