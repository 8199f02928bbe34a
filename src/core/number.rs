//! Conversions between display text and `f64`.
//!
//! The display shows numbers in the same shape a browser would print them:
//! shortest round-trip digits, plain notation between `1e-6` and `1e21`,
//! exponent notation outside that range. Reading the display back takes the
//! longest numeric prefix and yields `NaN` when there is none.

/// Render a number the way it appears on the display.
///
/// # Example
///
/// ```rust
/// use keycalc::core::format_number;
///
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest digits that round-trip, e.g. "1.2345e3".
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{sign}{scientific}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{sign}{scientific}");
    };

    let digits = mantissa.replace('.', "");
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat(n.unsigned_abs() as usize))
    } else {
        let exp_sign = if n - 1 < 0 { '-' } else { '+' };
        let magnitude = (n - 1).unsigned_abs();
        let (head, tail) = digits.split_at(1);
        if tail.is_empty() {
            format!("{head}e{exp_sign}{magnitude}")
        } else {
            format!("{head}.{tail}e{exp_sign}{magnitude}")
        }
    };

    format!("{sign}{body}")
}

/// Read the display text as a number.
///
/// Takes the longest prefix that forms a decimal literal (or `Infinity`),
/// ignoring leading whitespace. Text with no numeric prefix reads as `NaN`.
///
/// # Example
///
/// ```rust
/// use keycalc::core::parse_display;
///
/// assert_eq!(parse_display("12."), 12.0);
/// assert_eq!(parse_display("0.5"), 0.5);
/// assert_eq!(parse_display("1e+21"), 1e21);
/// assert!(parse_display("NaN").is_nan());
/// ```
pub fn parse_display(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if trimmed[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = leading_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = leading_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = leading_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn leading_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_render_without_fraction() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn fractions_keep_float_artifacts() {
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_number(-2.5), "-2.5");
    }

    #[test]
    fn small_magnitudes_switch_to_exponent_below_one_millionth() {
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(0.00000123), "0.00000123");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-1.5e-7), "-1.5e-7");
    }

    #[test]
    fn large_magnitudes_switch_to_exponent_at_1e21() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.25e22), "1.25e+22");
        assert_eq!(format_number(f64::MAX), "1.7976931348623157e+308");
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn non_finite_values_use_words() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn parse_reads_typed_numerals() {
        assert_eq!(parse_display("0"), 0.0);
        assert_eq!(parse_display("123"), 123.0);
        assert_eq!(parse_display("0."), 0.0);
        assert_eq!(parse_display("7."), 7.0);
        assert_eq!(parse_display("1.5"), 1.5);
        assert_eq!(parse_display("-3.25"), -3.25);
    }

    #[test]
    fn parse_reads_result_forms() {
        assert_eq!(parse_display("1e+21"), 1e21);
        assert_eq!(parse_display("1.5e-7"), 1.5e-7);
        assert_eq!(parse_display("Infinity"), f64::INFINITY);
        assert_eq!(parse_display("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_display("NaN").is_nan());
    }

    #[test]
    fn parse_takes_longest_numeric_prefix() {
        assert_eq!(parse_display("  42abc"), 42.0);
        assert_eq!(parse_display(".5"), 0.5);
        assert_eq!(parse_display("3e"), 3.0);
        assert_eq!(parse_display("3e+"), 3.0);
        assert!(parse_display(".").is_nan());
        assert!(parse_display("-").is_nan());
        assert!(parse_display("").is_nan());
        assert!(parse_display("abc").is_nan());
    }

    #[test]
    fn formatted_values_read_back_exactly() {
        for value in [0.1 + 0.2, 1e21, 1.5e-7, -987.654, 1.0 / 3.0] {
            assert_eq!(parse_display(&format_number(value)), value);
        }
    }
}
