//! Display string <-> number conversion.
//!
//! The display always holds the canonical string of the last number written to
//! it: shortest round-trip digits, plain notation between `1e-6` and `1e21`,
//! exponent notation outside that range.

/// Fractional digits kept when a result is written to the display.
pub const RESULT_PRECISION: usize = 7;

/// Magnitude from which numbers are written in exponent form and rounding
/// is skipped.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Parse the longest numeric prefix of `text`, or NaN when there is none.
///
/// `"5."` reads as 5, `"Infinity"` as positive infinity, `"1e+21"` as 1e21.
pub fn parse_float(text: &str) -> f64 {
    let text = text.trim_start();
    if let Ok(v) = text.parse::<f64>() {
        return v;
    }
    for (end, _) in text.char_indices().rev() {
        let prefix = &text[..end];
        // "inf" is a Rust spelling; the display only ever writes "Infinity"
        if prefix.eq_ignore_ascii_case("inf") {
            continue;
        }
        if let Ok(v) = prefix.parse::<f64>() {
            return v;
        }
    }
    f64::NAN
}

/// Canonical display string for `value`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // covers -0
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e-7"
    let sci = format!("{:e}", value.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();

    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let sign = if e < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, sign, e.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, sign, e.abs())
        }
    };

    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// Round a computed result to [`RESULT_PRECISION`] fractional digits and drop
/// insignificant trailing zeros by re-parsing.
pub fn round_result(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= EXPONENT_THRESHOLD {
        return value;
    }
    let fixed = format!("{:.*}", RESULT_PRECISION, value);
    parse_float(&fixed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_prefixes() {
        assert_eq!(parse_float("42"), 42.0);
        assert_eq!(parse_float("0."), 0.0);
        assert_eq!(parse_float("-3.5"), -3.5);
        assert_eq!(parse_float("1e+21"), 1e21);
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse_float("Infinity5"), f64::INFINITY);
        assert_eq!(parse_float("12abc"), 12.0);
        assert!(parse_float("NaN").is_nan());
        assert!(parse_float("NaN7").is_nan());
        assert!(parse_float("").is_nan());
        assert!(parse_float("-").is_nan());
    }

    #[test]
    fn test_format_plain_range() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-12.25), "-12.25");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(123456789.0), "123456789");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_exponent_range() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e22), "1.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-2.5e-8), "-2.5e-8");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_round_result() {
        assert_eq!(format_number(round_result(0.1 + 0.2)), "0.3");
        assert_eq!(format_number(round_result(1.0 / 3.0)), "0.3333333");
        assert_eq!(format_number(round_result(2.0 / 3.0)), "0.6666667");
        assert_eq!(format_number(round_result(10.0)), "10");
        assert_eq!(format_number(round_result(-1e-10)), "0");
        assert_eq!(round_result(1e25), 1e25);
        assert!(round_result(f64::NAN).is_nan());
    }
}
