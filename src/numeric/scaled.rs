// ============================================================================
// Scaled-Decimal Codec
// Lossless conversion between decimal text/float and scaled integers
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// Compute 10^n as a `BigInt`.
#[inline]
pub fn pow10(n: u32) -> BigInt {
    BigInt::from(10u32).pow(n)
}

/// Parse a decimal literal into an integer scaled by `10^scale`.
///
/// The accepted grammar is strict: optional leading `-`, one or more digits,
/// optional `.` followed by one or more digits. String parsing splits on the
/// decimal point and pads digits directly, so exact decimal input never
/// passes through binary floating point.
///
/// Fractional digits beyond `scale` are rounded half away from zero.
///
/// # Errors
/// Returns `InvalidAmount` if the text does not match the decimal grammar.
pub fn parse_decimal(text: &str, scale: u32) -> MoneyResult<BigInt> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (int_part, frac_part) = match unsigned.find('.') {
        Some(pos) => (&unsigned[..pos], Some(&unsigned[pos + 1..])),
        None => (unsigned, None),
    };

    let valid = !int_part.is_empty()
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.map_or(true, |f| {
            !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit())
        });
    if !valid {
        return Err(MoneyError::InvalidAmount(format!(
            "'{}' is not a valid decimal literal",
            text
        )));
    }

    let frac = frac_part.unwrap_or("");
    let mut digits = String::with_capacity(int_part.len() + scale as usize);
    digits.push_str(int_part);

    let mut scaled = if frac.len() <= scale as usize {
        digits.push_str(frac);
        for _ in 0..(scale as usize - frac.len()) {
            digits.push('0');
        }
        parse_digits(&digits)
    } else {
        // More fractional digits than the target scale: keep `scale` digits
        // and round half away from zero on the first dropped digit.
        let (kept, dropped) = frac.split_at(scale as usize);
        digits.push_str(kept);
        let mut value = parse_digits(&digits);
        if dropped.as_bytes()[0] >= b'5' {
            value += 1;
        }
        value
    };

    if negative {
        scaled = -scaled;
    }
    Ok(scaled)
}

/// Rescale a `Decimal` into an integer scaled by `10^scale`.
///
/// The conversion is exact when the decimal carries `scale` or fewer
/// fractional digits; excess digits are rounded half away from zero.
pub fn from_decimal(value: &Decimal, scale: u32) -> BigInt {
    let mantissa = BigInt::from(value.mantissa());
    let decimal_scale = value.scale();

    if decimal_scale <= scale {
        mantissa * pow10(scale - decimal_scale)
    } else {
        let divisor = pow10(decimal_scale - scale);
        let quotient = &mantissa / &divisor;
        let remainder = &mantissa % &divisor;
        if remainder.magnitude() * 2u32 >= *divisor.magnitude() {
            match mantissa.sign() {
                Sign::Minus => quotient - 1,
                _ => quotient + 1,
            }
        } else {
            quotient
        }
    }
}

/// Convert a float into an integer scaled by `10^scale`.
///
/// The float is normalized through `rust_decimal` first, which recovers the
/// shortest decimal representation and so absorbs binary representation
/// error (0.1f64 becomes exactly 0.1).
///
/// # Errors
/// Returns `InvalidAmount` if the value is NaN or infinite.
pub fn from_f64(value: f64, scale: u32) -> MoneyResult<BigInt> {
    if !value.is_finite() {
        return Err(MoneyError::InvalidAmount(format!(
            "{} is not a finite amount",
            value
        )));
    }
    let decimal = Decimal::from_f64(value).ok_or_else(|| {
        MoneyError::InvalidAmount(format!("{} cannot be represented as a decimal", value))
    })?;
    Ok(from_decimal(&decimal, scale))
}

/// Render a scaled integer as a decimal string with exactly `scale`
/// fractional digits. A scale of zero renders a bare integer.
pub fn to_decimal_string(value: &BigInt, scale: u32) -> String {
    let mut digits = value.magnitude().to_string();
    let sign = if value.is_negative() { "-" } else { "" };

    if scale == 0 {
        return format!("{}{}", sign, digits);
    }

    // Left-pad so there is at least one integer digit.
    let min_len = scale as usize + 1;
    if digits.len() < min_len {
        digits = format!("{}{}", "0".repeat(min_len - digits.len()), digits);
    }

    let split = digits.len() - scale as usize;
    format!("{}{}.{}", sign, &digits[..split], &digits[split..])
}

// Digits are pre-validated ASCII, so this cannot fail; an empty string
// (all-zero padding edge) parses as zero.
fn parse_digits(digits: &str) -> BigInt {
    if digits.is_empty() {
        return BigInt::zero();
    }
    BigInt::parse_bytes(digits.as_bytes(), 10).unwrap_or_else(BigInt::zero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_decimal("42", 2).unwrap(), BigInt::from(4200));
        assert_eq!(parse_decimal("0", 4).unwrap(), BigInt::from(0));
        assert_eq!(parse_decimal("-7", 3).unwrap(), BigInt::from(-7000));
    }

    #[test]
    fn test_parse_fractional() {
        assert_eq!(parse_decimal("10.99", 2).unwrap(), BigInt::from(1099));
        assert_eq!(parse_decimal("10.99", 4).unwrap(), BigInt::from(109900));
        assert_eq!(parse_decimal("-0.05", 2).unwrap(), BigInt::from(-5));
        assert_eq!(parse_decimal("0.5", 0).unwrap(), BigInt::from(1));
    }

    #[test]
    fn test_parse_excess_digits_round_half_away() {
        assert_eq!(parse_decimal("1.23456", 4).unwrap(), BigInt::from(12346));
        assert_eq!(parse_decimal("1.23454", 4).unwrap(), BigInt::from(12345));
        assert_eq!(parse_decimal("-1.23455", 4).unwrap(), BigInt::from(-12346));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "-", ".", "1.", ".5", "1..2", "1,5", "+1", "1e3", "abc", " 1"] {
            assert!(
                matches!(parse_decimal(bad, 2), Err(MoneyError::InvalidAmount(_))),
                "expected rejection for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(from_f64(10.99, 4).unwrap(), BigInt::from(109900));
        assert_eq!(from_f64(0.1, 6).unwrap(), BigInt::from(100000));
        assert_eq!(from_f64(-2.5, 2).unwrap(), BigInt::from(-250));
        assert!(matches!(
            from_f64(f64::NAN, 2),
            Err(MoneyError::InvalidAmount(_))
        ));
        assert!(matches!(
            from_f64(f64::INFINITY, 2),
            Err(MoneyError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_from_decimal_rescale() {
        use std::str::FromStr;
        let d = Decimal::from_str("123.45").unwrap();
        assert_eq!(from_decimal(&d, 4), BigInt::from(1234500));
        assert_eq!(from_decimal(&d, 1), BigInt::from(1235)); // ties away
        assert_eq!(from_decimal(&d, 0), BigInt::from(123));
    }

    #[test]
    fn test_render() {
        assert_eq!(to_decimal_string(&BigInt::from(1099), 2), "10.99");
        assert_eq!(to_decimal_string(&BigInt::from(-5), 2), "-0.05");
        assert_eq!(to_decimal_string(&BigInt::from(0), 3), "0.000");
        assert_eq!(to_decimal_string(&BigInt::from(42), 0), "42");
        assert_eq!(to_decimal_string(&BigInt::from(-42), 0), "-42");
        assert_eq!(to_decimal_string(&BigInt::from(7), 6), "0.000007");
    }

    #[test]
    fn test_round_trip() {
        for (text, scale) in [("10.99", 2), ("0.001", 3), ("-12345.6789", 4), ("0", 0)] {
            let scaled = parse_decimal(text, scale).unwrap();
            assert_eq!(to_decimal_string(&scaled, scale), text);
        }
    }

    proptest! {
        // Parse-then-render reproduces the input up to trailing-zero padding.
        #[test]
        fn prop_round_trip(int_part in 0i64..1_000_000_000, frac in 0u32..10_000) {
            let text = format!("{}.{:04}", int_part, frac);
            let scaled = parse_decimal(&text, 4).unwrap();
            prop_assert_eq!(to_decimal_string(&scaled, 4), text);
        }

        #[test]
        fn prop_scale_zero_is_bare_integer(v in -1_000_000i64..1_000_000) {
            let rendered = to_decimal_string(&BigInt::from(v), 0);
            prop_assert_eq!(rendered, v.to_string());
        }
    }
}
