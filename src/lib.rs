// ============================================================================
// Exact Money Library
// Exact monetary arithmetic with currency-aware rounding and conversion
// ============================================================================

//! # Exact Money
//!
//! A monetary-value arithmetic library for exact decimal bookkeeping
//! (billing, accounting, e-commerce) without floating-point drift.
//!
//! ## Features
//!
//! - **Scaled-integer amounts** — every value is an arbitrary-precision
//!   integer at the currency's canonical scale plus four guard digits
//! - **Eight rounding policies** including banker's rounding and a
//!   no-rounding mode that defers precision loss until explicitly requested
//! - **Exact allocation** — proportional splits and equal distribution that
//!   always conserve the original amount to the last unit
//! - **Currency conversion** through base-anchored cross-rate tables
//! - **Locale-aware formatting** behind a pluggable formatter seam
//!
//! ## Example
//!
//! ```rust
//! use exact_money::prelude::*;
//!
//! let usd = Currency::from_code("USD")?;
//! let invoice = Money::new(100.0, usd.clone())?;
//!
//! // Split 70/30; the shares always sum back to the original.
//! let shares = invoice.allocate(&[0.7, 0.3])?;
//! assert_eq!(shares[0].amount(Some(RoundingMode::HalfEven)), "70.00");
//!
//! // Convert through a rate table anchored at USD.
//! let provider = ExchangeRateProvider::new("USD", [("EUR".to_string(), 0.9)])?;
//! let converter = CurrencyConverter::new(provider);
//! let eur = Currency::from_code("EUR")?;
//! let abroad = converter.convert(&invoice, &eur)?;
//! assert_eq!(abroad.amount(Some(RoundingMode::HalfEven)), "90.00");
//!
//! // Render for display.
//! assert_eq!(invoice.format(&FormatOptions::default()), "$100.00");
//! # Ok::<(), MoneyError>(())
//! ```

pub mod domain;
pub mod exchange;
pub mod format;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{iso_currencies, Currency, Money, ALLOCATION_PRECISION, GUARD_DIGITS};
    pub use crate::exchange::{CurrencyConverter, ExchangeRateProvider, RateSnapshot};
    pub use crate::format::{
        BasicLocaleFormatter, FormatOptions, LocaleNumberFormatter, MoneyFormatter,
    };
    pub use crate::numeric::{
        default_rounding_mode, set_default_rounding_mode, Factor, MoneyError, MoneyResult,
        RoundingMode,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_invoice_split_and_conversion() {
        let usd = Currency::from_code("USD").unwrap();
        let subtotal = Money::new(1249.99, usd.clone()).unwrap();
        let tax = subtotal.multiply(0.0875).unwrap();
        let total = subtotal.add(&tax).unwrap();
        assert_eq!(total.amount(Some(RoundingMode::HalfEven)), "1359.36");

        // Three-way split conserves the total exactly.
        let splits = total.allocate(&[1.0, 1.0, 1.0]).unwrap();
        let rejoined = splits
            .iter()
            .fold(Money::zero(usd), |acc, s| acc.add(s).unwrap());
        assert_eq!(rejoined, total);

        // Convert one share to JPY and render it.
        let provider =
            ExchangeRateProvider::new("USD", [("JPY".to_string(), 150.0)]).unwrap();
        let converter = CurrencyConverter::new(provider);
        let jpy = Currency::from_code("JPY").unwrap();
        let abroad = converter.convert(&splits[0], &jpy).unwrap();
        assert_eq!(abroad.currency().code(), "JPY");

        let formatter = MoneyFormatter::default();
        let rendered = formatter.format(
            &abroad,
            &FormatOptions {
                rounding: Some(RoundingMode::HalfEven),
                ..FormatOptions::default()
            },
        );
        assert!(rendered.starts_with('¥'));
    }

    #[test]
    fn test_mismatched_currencies_fail_loudly() {
        let usd = Money::new(10.0, Currency::from_code("USD").unwrap()).unwrap();
        let eur = Money::new(10.0, Currency::from_code("EUR").unwrap()).unwrap();
        assert!(matches!(
            usd.add(&eur),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }
}
