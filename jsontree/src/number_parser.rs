// SPDX-License-Identifier: Apache-2.0

//! Evaluation of number lexemes.
//!
//! The value is rebuilt directly from the digits: the integer part by
//! repeated multiply-by-ten-and-add, each fractional digit `d` at position `k`
//! as `d * 10^-k`, and the exponent as a signed integer. The result is
//! `sign * (integer + fraction) * 10^exponent`. Integer digits beyond `1e300`
//! are folded into the exponent, and the exponent is applied in steps when a
//! single power of ten would overflow.
//!
//! This is not a correctly-rounded conversion. For values close to the limits
//! of `f64` precision the result can differ in the last bit from what
//! `str::parse::<f64>` returns.

/// Computes the value of a number lexeme.
///
/// The lexeme must already satisfy the JSON number grammar, which the
/// tokenizer guarantees. Bytes outside the grammar end evaluation early
/// instead of failing. Exponents beyond the `f64` range produce infinities
/// or zeros.
///
/// # Examples
/// ```
/// use jsontree::number_parser::evaluate;
/// assert_eq!(evaluate(b"-123.45e2"), -12345.0);
/// assert_eq!(evaluate(b"0"), 0.0);
/// ```
pub fn evaluate(lexeme: &[u8]) -> f64 {
    let mut bytes = lexeme.iter().copied().peekable();

    let sign = if bytes.next_if_eq(&b'-').is_some() {
        -1.0
    } else {
        1.0
    };

    let mut integer = 0.0f64;
    // Integer digits past f64 range only shift the decimal point
    let mut shift: i32 = 0;
    while let Some(digit) = bytes.next_if(u8::is_ascii_digit) {
        if integer < INTEGER_CAP {
            integer = integer * 10.0 + f64::from(digit - b'0');
        } else {
            shift = shift.saturating_add(1);
        }
    }

    let mut fraction = 0.0f64;
    if bytes.next_if_eq(&b'.').is_some() {
        let mut k: i32 = 0;
        while let Some(digit) = bytes.next_if(u8::is_ascii_digit) {
            k = k.saturating_add(1);
            fraction += f64::from(digit - b'0') * 10f64.powi(-k);
        }
    }

    let mut exponent: i32 = 0;
    if bytes.next_if(|b| matches!(b, b'e' | b'E')).is_some() {
        let negative = bytes.next_if(|b| matches!(b, b'+' | b'-')) == Some(b'-');
        let mut magnitude: i32 = 0;
        while let Some(digit) = bytes.next_if(u8::is_ascii_digit) {
            magnitude = magnitude
                .saturating_mul(10)
                .saturating_add(i32::from(digit - b'0'));
        }
        exponent = if negative { -magnitude } else { magnitude };
    }

    let mantissa = integer + fraction;
    // 0 * 10^huge would be NaN
    if mantissa == 0.0 {
        return sign * 0.0;
    }
    sign * scale(mantissa, exponent.saturating_add(shift))
}

/// Largest accumulated integer part; further digits only move the exponent.
const INTEGER_CAP: f64 = 1e300;

/// Largest power of ten that `powi` can produce without overflowing.
const MAX_STEP: i32 = 308;

/// Computes `mantissa * 10^exponent` for a finite, positive mantissa.
///
/// Exponents beyond the range of a single `powi` are applied in steps, so
/// subnormal results such as `1e-310` survive.
fn scale(mut mantissa: f64, mut exponent: i32) -> f64 {
    let up = 10f64.powi(MAX_STEP);
    let down = 10f64.powi(-MAX_STEP);
    while exponent > MAX_STEP && mantissa.is_finite() {
        mantissa *= up;
        exponent -= MAX_STEP;
    }
    while exponent < -MAX_STEP && mantissa != 0.0 {
        mantissa *= down;
        exponent += MAX_STEP;
    }
    mantissa * 10f64.powi(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = expected.abs() * 1e-12;
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_integers() {
        assert_eq!(evaluate(b"0"), 0.0);
        assert_eq!(evaluate(b"7"), 7.0);
        assert_eq!(evaluate(b"-123"), -123.0);
        assert_eq!(evaluate(b"9007199254740991"), 9007199254740991.0);
    }

    #[test]
    fn test_negative_zero() {
        let value = evaluate(b"-0");
        assert_eq!(value, 0.0);
        assert!(value.is_sign_negative());
    }

    #[test]
    fn test_fractions() {
        assert_eq!(evaluate(b"0.0"), 0.0);
        assert_eq!(evaluate(b"1.5"), 1.5);
        assert_eq!(evaluate(b"-0.5"), -0.5);
        assert_close(evaluate(b"3.14159"), 3.14159);
        assert_close(evaluate(b"123.456"), 123.456);
    }

    #[test]
    fn test_exponents() {
        assert_eq!(evaluate(b"-123.45e2"), -12345.0);
        assert_eq!(evaluate(b"1e2"), 100.0);
        assert_eq!(evaluate(b"1E+2"), 100.0);
        assert_eq!(evaluate(b"12e3"), 12000.0);
        assert_eq!(evaluate(b"2.5e-1"), 0.25);
        assert_close(evaluate(b"6.02214076e23"), 6.02214076e23);
        assert_close(evaluate(b"1.6e-19"), 1.6e-19);
    }

    #[test]
    fn test_exponent_out_of_range() {
        assert_eq!(evaluate(b"1e400"), f64::INFINITY);
        assert_eq!(evaluate(b"-1e400"), f64::NEG_INFINITY);
        assert_eq!(evaluate(b"1e-400"), 0.0);
        // Exponent digits beyond i32 saturate instead of overflowing
        assert_eq!(evaluate(b"1e99999999999999999999"), f64::INFINITY);
        assert_eq!(evaluate(b"1e-99999999999999999999"), 0.0);
    }

    #[test]
    fn test_subnormal_results() {
        let value = evaluate(b"1e-310");
        assert!(value > 0.0 && value < f64::MIN_POSITIVE);
        assert!((value - 1e-310).abs() <= 1e-310 * 1e-9);
        assert!(evaluate(b"-2.5e-315") < 0.0);
    }

    #[test]
    fn test_huge_integer_part() {
        // 1 followed by 400 zeros
        let mut digits = Vec::from(&b"1"[..]);
        digits.extend(core::iter::repeat(b'0').take(400));

        assert_eq!(evaluate(&digits), f64::INFINITY);

        let mut scaled_down = digits.clone();
        scaled_down.extend_from_slice(b"e-400");
        let value = evaluate(&scaled_down);
        assert!(!value.is_nan());
        assert!((value - 1.0).abs() < 1e-9, "got {}", value);

        let mut negative = Vec::from(&b"-"[..]);
        negative.extend_from_slice(&scaled_down);
        assert!((evaluate(&negative) + 1.0).abs() < 1e-9);

        let mut tiny = digits;
        tiny.extend_from_slice(b"e-800");
        assert_eq!(evaluate(&tiny), 0.0);
    }

    #[test]
    fn test_zero_mantissa_with_huge_exponent() {
        assert_eq!(evaluate(b"0e999"), 0.0);
        assert_eq!(evaluate(b"0.000e99999999999"), 0.0);
    }

    #[test]
    fn test_matches_std_for_simple_values() {
        for input in ["0.1", "0.25", "42.0", "100", "-7.75", "1024e-3"] {
            let expected: f64 = input.parse().unwrap();
            assert_close(evaluate(input.as_bytes()), expected);
        }
    }
}
