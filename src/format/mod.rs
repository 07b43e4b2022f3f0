// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT

//! Lenient numeric text conversion.
//!
//! The calculator accepts every input sequence and signals nothing: anomalies
//! surface only as the float sentinels `NaN` and `Infinity`, rendered into the
//! display string. Parsing therefore never fails, and formatting mirrors the
//! display shape users of pocket calculators (and `Number#toString`) expect:
//! integral results carry no fractional part.

use smol_str::{format_smolstr, SmolStr};

/// Parses an operand string, yielding NaN for anything unparseable.
///
/// The empty string (the first-operand field while no operator is pending) is
/// NaN. `"Infinity"`, `"-Infinity"`, and `"NaN"` parse back to their float
/// values, so a result display can be snapshotted as the next first operand.
pub fn lenient_parse(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Renders a result for the display.
///
/// NaN and the infinities use their spelled-out names; negative zero collapses
/// to `"0"`; integral values render without a fractional part; everything else
/// is the shortest round-trip decimal form.
pub fn format_number(value: f64) -> SmolStr {
    if value.is_nan() {
        return SmolStr::new_static("NaN");
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            SmolStr::new_static("Infinity")
        } else {
            SmolStr::new_static("-Infinity")
        };
    }
    if value == 0.0 {
        // -0.0 compares equal to 0.0 and displays as plain zero.
        return SmolStr::new_static("0");
    }
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        let mut buffer = itoa::Buffer::new();
        return SmolStr::new(buffer.format(value as i64));
    }
    format_smolstr!("{value}")
}

#[cfg(test)]
mod tests {
    use super::{format_number, lenient_parse};

    #[test]
    fn empty_and_garbage_parse_to_nan() {
        assert!(lenient_parse("").is_nan());
        assert!(lenient_parse("   ").is_nan());
        assert!(lenient_parse("abc").is_nan());
        assert!(lenient_parse("1.2.3").is_nan());
    }

    #[test]
    fn numeric_literals_parse() {
        assert_eq!(lenient_parse("0"), 0.0);
        assert_eq!(lenient_parse("507"), 507.0);
        assert_eq!(lenient_parse("2.5"), 2.5);
        assert_eq!(lenient_parse("-12"), -12.0);
    }

    #[test]
    fn sentinel_spellings_parse_back() {
        assert_eq!(lenient_parse("Infinity"), f64::INFINITY);
        assert_eq!(lenient_parse("-Infinity"), f64::NEG_INFINITY);
        assert!(lenient_parse("NaN").is_nan());
    }

    #[test]
    fn integral_results_drop_the_fraction() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(507.0), "507");
        assert_eq!(format_number(1e15), "1000000000000000");
    }

    #[test]
    fn fractional_results_keep_shortest_decimal_form() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn sentinels_render_spelled_out() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn display_output_parses_back_to_the_same_value() {
        for value in [0.0, 8.0, -3.0, 2.5, 1e15, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(lenient_parse(&format_number(value)), value, "value {value}");
        }
        assert!(lenient_parse(&format_number(f64::NAN)).is_nan());
    }
}
