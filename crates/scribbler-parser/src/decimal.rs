//! Locale-independent decimal numbers.

use winnow::{Parser, ascii::float, error::ModalResult};

/// Digits kept after the decimal point when encoding.
const FRACTION_DIGITS: u32 = 4;

/// Formats `value` with at most four fractional digits, rounding half away
/// from zero and dropping trailing zeros.
///
/// Integral values are written without a decimal point and a value that
/// rounds to zero is written as `0`.
pub(crate) fn format_decimal(value: f64) -> String {
    let scale = 10u64.pow(FRACTION_DIGITS);
    let scaled = (value.abs() * scale as f64).round() as u64;
    let integer = scaled / scale;
    let fraction = scaled % scale;

    let sign = if value.is_sign_negative() && scaled != 0 {
        "-"
    } else {
        ""
    };

    if fraction == 0 {
        return format!("{sign}{integer}");
    }

    let digits = format!("{fraction:0width$}", width = FRACTION_DIGITS as usize);
    format!("{sign}{integer}.{}", digits.trim_end_matches('0'))
}

/// Parses a finite decimal number from compact input.
pub(crate) fn number(input: &mut &str) -> ModalResult<f64> {
    float
        .verify(|value: &f64| value.is_finite())
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(42.0), "42");
        assert_eq!(format_decimal(0.12345), "0.1235");
        assert_eq!(format_decimal(0.5), "0.5");
        assert_eq!(format_decimal(-3.14159), "-3.1416");
        assert_eq!(format_decimal(1.00004), "1");
        assert_eq!(format_decimal(-0.00001), "0");
        assert_eq!(format_decimal(1234567.0), "1234567");
    }

    #[test]
    fn test_number() {
        let mut input = "-3.1415rad";
        assert_approx_eq!(f64, number(&mut input).unwrap(), -3.1415);
        assert_eq!(input, "rad");

        let mut input = "inf";
        assert!(number(&mut input).is_err());

        let mut input = "deg";
        assert!(number(&mut input).is_err());
    }
}
