// ============================================================================
// Exact Rational Factors
// Normalizes integer/float/decimal multipliers into numerator/denominator
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use super::scaled::pow10;
use num_bigint::{BigInt, Sign};
use num_traits::{One, Zero};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// A multiplier or divisor supplied to an arithmetic operation.
///
/// Integer, float and `Decimal` call shapes all normalize into the same
/// internal exact-rational representation before the shared arithmetic path
/// executes, so a factor's fractional part never introduces binary rounding
/// error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Factor {
    /// Whole-number factor
    Int(i64),
    /// Floating-point factor, normalized through `rust_decimal`
    Float(f64),
    /// Exact decimal factor
    Decimal(Decimal),
}

impl From<i64> for Factor {
    #[inline]
    fn from(value: i64) -> Self {
        Factor::Int(value)
    }
}

impl From<f64> for Factor {
    #[inline]
    fn from(value: f64) -> Self {
        Factor::Float(value)
    }
}

impl From<Decimal> for Factor {
    #[inline]
    fn from(value: Decimal) -> Self {
        Factor::Decimal(value)
    }
}

/// Exact fraction with a power-of-ten denominator.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Rational {
    pub numer: BigInt,
    pub denom: BigInt,
}

impl Rational {
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numer.sign() == Sign::Plus
    }
}

impl Factor {
    /// Normalize into the exact-rational representation.
    ///
    /// A float factor is converted to an integer numerator over a
    /// power-of-ten denominator derived from its own decimal digit count.
    ///
    /// # Errors
    /// Returns `InvalidAmount` for NaN or infinite floats.
    pub(crate) fn into_rational(self) -> MoneyResult<Rational> {
        match self {
            Factor::Int(value) => Ok(Rational {
                numer: BigInt::from(value),
                denom: BigInt::one(),
            }),
            Factor::Float(value) => {
                if !value.is_finite() {
                    return Err(MoneyError::InvalidAmount(format!(
                        "{} is not a finite factor",
                        value
                    )));
                }
                // from_f64 recovers the shortest decimal representation, so
                // 0.1f64 becomes 1/10 rather than its binary expansion.
                let decimal = Decimal::from_f64(value)
                    .ok_or_else(|| {
                        MoneyError::InvalidAmount(format!(
                            "{} cannot be represented as a decimal factor",
                            value
                        ))
                    })?
                    .normalize();
                Ok(Rational::from(&decimal))
            }
            Factor::Decimal(value) => Ok(Rational::from(&value)),
        }
    }
}

impl From<&Decimal> for Rational {
    fn from(value: &Decimal) -> Self {
        Rational {
            numer: BigInt::from(value.mantissa()),
            denom: pow10(value.scale()),
        }
    }
}
