// ============================================================================
// Currency Converter
// Converts Money values between currencies through a rate provider
// ============================================================================

use super::provider::ExchangeRateProvider;
use crate::domain::{Currency, Money};
use crate::numeric::MoneyResult;

/// Converts money between currencies using the cross rates of a wrapped
/// [`ExchangeRateProvider`].
#[derive(Debug, Clone)]
pub struct CurrencyConverter {
    provider: ExchangeRateProvider,
}

impl CurrencyConverter {
    /// Wrap a rate provider.
    pub fn new(provider: ExchangeRateProvider) -> Self {
        Self { provider }
    }

    /// The wrapped provider.
    #[inline]
    pub fn provider(&self) -> &ExchangeRateProvider {
        &self.provider
    }

    /// Convert into the target currency.
    ///
    /// Converting into the money's own currency is a no-op that never
    /// consults the rate table.
    ///
    /// # Errors
    /// Returns `InvalidCurrency` if either currency has no stored rate.
    pub fn convert(&self, money: &Money, target: &Currency) -> MoneyResult<Money> {
        if money.currency() == target {
            return Ok(money.clone());
        }
        let rate = self
            .provider
            .get_rate(money.currency().code(), target.code())?;
        tracing::debug!(
            from = %money.currency().code(),
            to = %target.code(),
            rate,
            "converting money"
        );
        money.convert(target.clone(), rate)
    }

    /// Convert into several currencies at once. The returned pairs keep the
    /// input order; duplicate codes are collapsed onto their first mention.
    ///
    /// # Errors
    /// Returns `InvalidCurrency` for codes missing from the ISO registry or
    /// the rate table.
    pub fn convert_to_multiple(
        &self,
        money: &Money,
        codes: &[&str],
    ) -> MoneyResult<Vec<(String, Money)>> {
        let mut results: Vec<(String, Money)> = Vec::with_capacity(codes.len());
        for code in codes {
            let target = Currency::from_code(code)?;
            if results.iter().any(|(c, _)| c == target.code()) {
                continue;
            }
            let converted = self.convert(money, &target)?;
            results.push((target.code().to_string(), converted));
        }
        Ok(results)
    }

    /// Convert into every currency the provider stores a rate for, in rate
    /// table order.
    ///
    /// # Errors
    /// Returns `InvalidCurrency` if a stored code is missing from the ISO
    /// registry.
    pub fn convert_to_all_supported(&self, money: &Money) -> MoneyResult<Vec<(String, Money)>> {
        let codes: Vec<String> = self
            .provider
            .supported_currencies()
            .map(str::to_string)
            .collect();
        let mut results = Vec::with_capacity(codes.len());
        for code in codes {
            let target = Currency::from_code(&code)?;
            let converted = self.convert(money, &target)?;
            results.push((code, converted));
        }
        Ok(results)
    }
}
