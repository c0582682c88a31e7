// ============================================================================
// Money
// Immutable exact amount-in-a-currency value object
// ============================================================================

use crate::domain::currency::Currency;
use crate::format::{FormatOptions, MoneyFormatter};
use crate::numeric::{
    default_rounding_mode, from_decimal, from_f64, parse_decimal, pow10, round_scaled,
    to_decimal_string, Factor, MoneyError, MoneyResult, RoundingMode,
};
use num_bigint::{BigInt, Sign};
use num_traits::{One, ToPrimitive, Zero};
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Extra fractional digits carried internally beyond a currency's canonical
/// scale. Intermediate multiplication/division results keep this precision
/// until an explicit rounding step is requested.
pub const GUARD_DIGITS: u32 = 4;

/// Fixed precision factor used to turn allocation ratio weights into
/// comparable integers.
pub const ALLOCATION_PRECISION: i64 = 1000;

/// An exact amount of money in a specific currency.
///
/// The amount is stored as an arbitrary-precision integer scaled by
/// `10^(fractional_digits + GUARD_DIGITS)`. Every operation returns a new
/// value; nothing mutates in place.
///
/// # Example
/// ```
/// use exact_money::prelude::*;
///
/// let usd = Currency::from_code("USD")?;
/// let price = Money::new(10.99, usd.clone())?;
/// let tax = price.multiply(0.0825)?;
/// let total = price.add(&tax)?;
/// assert_eq!(total.amount(Some(RoundingMode::HalfEven)), "11.90");
/// # Ok::<(), MoneyError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Money {
    scaled: BigInt,
    currency: Currency,
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a major-unit float amount (e.g. 10.99 dollars).
    ///
    /// # Errors
    /// Returns `InvalidAmount` if the value is NaN or infinite.
    pub fn new(amount: f64, currency: Currency) -> MoneyResult<Self> {
        let scaled = from_f64(amount, currency.fractional_digits() + GUARD_DIGITS)?;
        Ok(Self { scaled, currency })
    }

    /// Create from a major-unit decimal string (e.g. `"10.99"`).
    ///
    /// # Errors
    /// Returns `InvalidAmount` unless the text matches `-?\d+(\.\d+)?`.
    pub fn from_str_amount(text: &str, currency: Currency) -> MoneyResult<Self> {
        let scaled = parse_decimal(text, currency.fractional_digits() + GUARD_DIGITS)?;
        Ok(Self { scaled, currency })
    }

    /// Create from an exact `Decimal` major-unit amount.
    pub fn from_decimal(amount: &Decimal, currency: Currency) -> Self {
        let scaled = from_decimal(amount, currency.fractional_digits() + GUARD_DIGITS);
        Self { scaled, currency }
    }

    /// Create from an integer count of the currency's minor units
    /// (e.g. 1099 cents is $10.99).
    pub fn from_minor_units(units: i64, currency: Currency) -> Self {
        let scaled = BigInt::from(units) * pow10(GUARD_DIGITS);
        Self { scaled, currency }
    }

    /// Create from a raw scaled integer already at guard precision,
    /// i.e. in units of `10^-(fractional_digits + GUARD_DIGITS)`.
    pub fn from_scaled(scaled: BigInt, currency: Currency) -> Self {
        Self { scaled, currency }
    }

    /// The zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self {
            scaled: BigInt::zero(),
            currency,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The currency this amount is denominated in.
    #[inline]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// The raw internal scaled integer, including the guard digits beyond
    /// the currency's canonical scale. Callers needing canonical minor units
    /// must apply rounding first via [`Money::amount`].
    #[inline]
    pub fn minor_units(&self) -> BigInt {
        self.scaled.clone()
    }

    /// Number of fractional digits the internal integer is scaled by.
    #[inline]
    fn internal_scale(&self) -> u32 {
        self.currency.fractional_digits() + GUARD_DIGITS
    }

    /// The major-unit decimal string, rounded from guard precision to the
    /// currency's canonical scale with the given mode. Without an explicit
    /// mode the process-wide default applies; `RoundingMode::None` renders
    /// the full guard precision.
    pub fn amount(&self, mode: Option<RoundingMode>) -> String {
        let mode = mode.unwrap_or_else(default_rounding_mode);
        if mode == RoundingMode::None {
            to_decimal_string(&self.scaled, self.internal_scale())
        } else {
            let digits = self.currency.fractional_digits();
            let rounded = round_scaled(&self.scaled, self.internal_scale(), digits, mode);
            to_decimal_string(&rounded, digits)
        }
    }

    // ========================================================================
    // Sign tests
    // ========================================================================

    /// Check if the amount is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.scaled.is_zero()
    }

    /// Check if the amount is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.scaled.sign() == Sign::Plus
    }

    /// Check if the amount is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.scaled.sign() == Sign::Minus
    }

    /// Absolute value, exact.
    pub fn abs(&self) -> Self {
        Self {
            scaled: self.scaled.magnitude().clone().into(),
            currency: self.currency.clone(),
        }
    }

    /// Negated value, exact.
    pub fn negate(&self) -> Self {
        Self {
            scaled: -&self.scaled,
            currency: self.currency.clone(),
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Exact addition. Never rounds.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        Ok(Self {
            scaled: &self.scaled + &other.scaled,
            currency: self.currency.clone(),
        })
    }

    /// Exact subtraction. Never rounds.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        Ok(Self {
            scaled: &self.scaled - &other.scaled,
            currency: self.currency.clone(),
        })
    }

    /// Multiply by an integer, float or `Decimal` factor.
    ///
    /// The factor is normalized into an exact fraction (integer numerator
    /// over a power-of-ten denominator), so its fractional part never
    /// introduces binary rounding error. The division step truncates at
    /// guard precision.
    ///
    /// # Errors
    /// Returns `InvalidAmount` for NaN or infinite factors.
    pub fn multiply(&self, factor: impl Into<Factor>) -> MoneyResult<Self> {
        let rational = factor.into().into_rational()?;
        let product = &self.scaled * &rational.numer;
        let scaled = if rational.denom.is_one() {
            product
        } else {
            product / &rational.denom
        };
        Ok(Self {
            scaled,
            currency: self.currency.clone(),
        })
    }

    /// Divide by an integer, float or `Decimal` divisor.
    ///
    /// The quotient is computed exactly at guard precision (truncating),
    /// then reduced to the currency's canonical scale with the given mode
    /// and re-extended. Without an explicit mode the process-wide default
    /// applies; `RoundingMode::None` keeps the guard-digit quotient.
    ///
    /// # Errors
    /// Returns `InvalidAmount` for zero, NaN or infinite divisors.
    pub fn divide(
        &self,
        divisor: impl Into<Factor>,
        mode: Option<RoundingMode>,
    ) -> MoneyResult<Self> {
        let rational = divisor.into().into_rational()?;
        if rational.is_zero() {
            return Err(MoneyError::InvalidAmount("division by zero".to_string()));
        }

        // Dividing by numer/denom is multiplying by denom/numer.
        let quotient = (&self.scaled * &rational.denom) / &rational.numer;

        let mode = mode.unwrap_or_else(default_rounding_mode);
        let scaled = if mode == RoundingMode::None {
            quotient
        } else {
            let digits = self.currency.fractional_digits();
            round_scaled(&quotient, self.internal_scale(), digits, mode) * pow10(GUARD_DIGITS)
        };
        Ok(Self {
            scaled,
            currency: self.currency.clone(),
        })
    }

    /// The floating-point ratio of this amount to another.
    ///
    /// A zero numerator with a nonzero denominator returns exactly 0.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ and
    /// `InvalidOperation` if `other` is zero.
    pub fn ratio_to(&self, other: &Self) -> MoneyResult<f64> {
        self.ensure_same_currency(other)?;
        if other.is_zero() {
            return Err(MoneyError::InvalidOperation(
                "cannot take a ratio to a zero amount".to_string(),
            ));
        }
        if self.is_zero() {
            return Ok(0.0);
        }
        // Both operands share the same scale, so the raw ratio is the
        // major-unit ratio.
        let numer = self.scaled.to_f64().ok_or_else(|| {
            MoneyError::InvalidOperation("amount is not representable as a float".to_string())
        })?;
        let denom = other.scaled.to_f64().ok_or_else(|| {
            MoneyError::InvalidOperation("amount is not representable as a float".to_string())
        })?;
        Ok(numer / denom)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Exact less-than comparison.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn less_than(&self, other: &Self) -> MoneyResult<bool> {
        self.ensure_same_currency(other)?;
        Ok(self.scaled < other.scaled)
    }

    /// Exact greater-than comparison.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn greater_than(&self, other: &Self) -> MoneyResult<bool> {
        self.ensure_same_currency(other)?;
        Ok(self.scaled > other.scaled)
    }

    /// Exact less-than-or-equal comparison.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn less_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        self.ensure_same_currency(other)?;
        Ok(self.scaled <= other.scaled)
    }

    /// Exact greater-than-or-equal comparison.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn greater_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        self.ensure_same_currency(other)?;
        Ok(self.scaled >= other.scaled)
    }

    // ========================================================================
    // Allocation and distribution
    // ========================================================================

    /// Split the amount proportionally to a list of non-negative weights.
    ///
    /// Each weight and the weight total are scaled by
    /// [`ALLOCATION_PRECISION`] to obtain comparable integers; each share is
    /// the floor of its proportional slice, and the integer remainder is
    /// handed out one unit at a time to the earliest shares in list order.
    /// The returned shares always sum to the original amount exactly.
    ///
    /// # Errors
    /// Returns `Allocation` if the list is empty, any weight is negative or
    /// non-finite, or all weights are zero.
    pub fn allocate(&self, ratios: &[f64]) -> MoneyResult<Vec<Self>> {
        if ratios.is_empty() {
            return Err(MoneyError::Allocation("ratio list is empty".to_string()));
        }

        let mut weights = Vec::with_capacity(ratios.len());
        for &ratio in ratios {
            if !ratio.is_finite() || ratio < 0.0 {
                return Err(MoneyError::Allocation(format!(
                    "ratio {} is negative or not finite",
                    ratio
                )));
            }
            let scaled = (ratio * ALLOCATION_PRECISION as f64).round() as i64;
            weights.push(BigInt::from(scaled));
        }

        let total: BigInt = weights.iter().sum();
        if total.is_zero() {
            return Err(MoneyError::Allocation("all ratios are zero".to_string()));
        }

        let mut shares = Vec::with_capacity(weights.len());
        let mut handed_out = BigInt::zero();
        for weight in &weights {
            let share = floor_div(&(&self.scaled * weight), &total);
            handed_out += &share;
            shares.push(share);
        }

        // Floor division hands out at most the full amount; the remainder is
        // a non-negative count of scaled units strictly below shares.len().
        let mut remainder = &self.scaled - handed_out;
        for share in shares.iter_mut() {
            if remainder.is_zero() {
                break;
            }
            *share += 1;
            remainder -= 1;
        }

        Ok(shares
            .into_iter()
            .map(|scaled| Self {
                scaled,
                currency: self.currency.clone(),
            })
            .collect())
    }

    /// Divide into `parts` equal shares, spreading the remainder one unit
    /// each over the first shares. The parts always sum to the original
    /// amount exactly.
    ///
    /// # Errors
    /// Returns `InvalidOperation` unless `parts` is a positive integer.
    pub fn distribute(&self, parts: i64) -> MoneyResult<Vec<Self>> {
        if parts < 1 {
            return Err(MoneyError::InvalidOperation(format!(
                "cannot distribute into {} parts",
                parts
            )));
        }

        let divisor = BigInt::from(parts);
        let base = floor_div(&self.scaled, &divisor);
        let remainder = &self.scaled - &base * &divisor;
        let extra = remainder.to_i64().unwrap_or(0); // remainder < parts <= i64::MAX

        Ok((0..parts)
            .map(|index| {
                let scaled = if index < extra { &base + 1 } else { base.clone() };
                Self {
                    scaled,
                    currency: self.currency.clone(),
                }
            })
            .collect())
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Convert into another currency at the given exchange rate.
    ///
    /// The rate goes through the same exact-fraction path as [`Money::multiply`];
    /// the result is then rescaled from this currency's guarded precision to
    /// the target's (multiplying or truncating by a power of ten depending on
    /// which currency carries more fractional digits).
    ///
    /// # Errors
    /// Returns `InvalidAmount` unless the rate is positive and finite.
    pub fn convert(&self, target: Currency, rate: impl Into<Factor>) -> MoneyResult<Self> {
        let rational = rate.into().into_rational()?;
        if !rational.is_positive() {
            return Err(MoneyError::InvalidAmount(
                "exchange rate must be positive".to_string(),
            ));
        }

        let product = &self.scaled * &rational.numer;
        let converted = if rational.denom.is_one() {
            product
        } else {
            product / &rational.denom
        };

        let from_digits = self.currency.fractional_digits();
        let to_digits = target.fractional_digits();
        let scaled = if to_digits >= from_digits {
            converted * pow10(to_digits - from_digits)
        } else {
            converted / pow10(from_digits - to_digits)
        };

        Ok(Self {
            scaled,
            currency: target,
        })
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Render as a display string with the built-in locale formatter.
    /// See [`MoneyFormatter`] for custom locale services.
    pub fn format(&self, options: &FormatOptions) -> String {
        MoneyFormatter::default().format(self, options)
    }

    fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                left: self.currency.code().to_string(),
                right: other.currency.code().to_string(),
            })
        }
    }
}

/// Integer division rounding toward negative infinity.
fn floor_div(value: &BigInt, divisor: &BigInt) -> BigInt {
    let quotient = value / divisor;
    let remainder = value % divisor;
    if !remainder.is_zero() && (remainder.sign() == Sign::Minus) != (divisor.sign() == Sign::Minus)
    {
        quotient - 1
    } else {
        quotient
    }
}

// ============================================================================
// Operator Implementations
// ============================================================================

// Infallible operators for ergonomics (panic on currency mismatch - use the
// checked methods in production code). The trait names stay out of module
// scope so `money.add(&other)` keeps resolving to the checked inherent
// method rather than the by-value operator.
impl std::ops::Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money::add(&self, &rhs).expect("Money addition requires matching currencies")
    }
}

impl std::ops::Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Money::subtract(&self, &rhs).expect("Money subtraction requires matching currencies")
    }
}

impl std::ops::Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            to_decimal_string(&self.scaled, self.internal_scale()),
            self.currency.code()
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
