// ============================================================================
// Exchange Rate Provider
// Base-anchored rate table with cross-rate lookup and rebasing
// ============================================================================

use crate::numeric::{MoneyError, MoneyResult};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rate feed as delivered by an external collaborator: every rate is
/// relative to `base_currency` ("1 unit of base = rate units of this
/// currency"). The timestamp is informational only.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RateSnapshot {
    /// The anchor currency code
    pub base_currency: String,
    /// Currency code to multiplier, in feed order
    pub rates: Vec<(String, f64)>,
    /// When the feed was produced, if known
    pub timestamp: Option<DateTime<Utc>>,
}

/// Holds currency-to-currency multipliers anchored at a base currency.
///
/// The base currency always maps to 1.0 and every stored rate is finite and
/// strictly positive. The table preserves insertion order, which defines the
/// iteration order of [`supported_currencies`](Self::supported_currencies).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExchangeRateProvider {
    base: String,
    rates: Vec<(String, f64)>,
}

impl ExchangeRateProvider {
    /// Build a provider from a base currency code and a rate table.
    ///
    /// Codes are normalized to uppercase; the base currency is pinned to 1.0
    /// at the front of the table.
    ///
    /// # Errors
    /// Returns `InvalidAmount` if any rate is NaN, infinite or non-positive.
    pub fn new(
        base: &str,
        rates: impl IntoIterator<Item = (String, f64)>,
    ) -> MoneyResult<Self> {
        let base = base.to_uppercase();
        let mut table = vec![(base.clone(), 1.0)];
        for (code, rate) in rates {
            validate_rate(&code, rate)?;
            let code = code.to_uppercase();
            if code != base {
                upsert(&mut table, code, rate);
            }
        }
        Ok(Self { base, rates: table })
    }

    /// Build a provider from an external rate feed.
    pub fn from_snapshot(snapshot: &RateSnapshot) -> MoneyResult<Self> {
        Self::new(&snapshot.base_currency, snapshot.rates.iter().cloned())
    }

    /// The anchor currency code.
    #[inline]
    pub fn base_currency(&self) -> &str {
        &self.base
    }

    /// Every currency code with a stored rate, in table order (base first).
    pub fn supported_currencies(&self) -> impl Iterator<Item = &str> {
        self.rates.iter().map(|(code, _)| code.as_str())
    }

    fn rate_of(&self, code: &str) -> MoneyResult<f64> {
        self.rates
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(code))
            .map(|&(_, rate)| rate)
            .ok_or_else(|| {
                MoneyError::InvalidCurrency(format!("no exchange rate stored for '{}'", code))
            })
    }

    /// The cross rate from one currency to another, derived from each one's
    /// rate relative to the base: `rate(to) / rate(from)`.
    ///
    /// # Errors
    /// Returns `InvalidCurrency` if either code is absent from the table.
    pub fn get_rate(&self, from: &str, to: &str) -> MoneyResult<f64> {
        let from_rate = self.rate_of(from)?;
        let to_rate = self.rate_of(to)?;
        Ok(to_rate / from_rate)
    }

    /// Insert or overwrite a single rate.
    ///
    /// # Errors
    /// Returns `InvalidAmount` if the rate is NaN, infinite or non-positive.
    pub fn update_rate(&mut self, code: &str, rate: f64) -> MoneyResult<()> {
        validate_rate(code, rate)?;
        upsert(&mut self.rates, code.to_uppercase(), rate);
        Ok(())
    }

    /// Insert or overwrite several rates at once. The whole update is
    /// rejected if any rate is invalid; nothing is applied partially.
    pub fn update_rates(
        &mut self,
        rates: impl IntoIterator<Item = (String, f64)>,
    ) -> MoneyResult<()> {
        let mut validated = Vec::new();
        for (code, rate) in rates {
            validate_rate(&code, rate)?;
            validated.push((code.to_uppercase(), rate));
        }
        for (code, rate) in validated {
            upsert(&mut self.rates, code, rate);
        }
        Ok(())
    }

    /// A new provider rebased onto another currency from the table: every
    /// rate is divided by the old rate of the new base. The original
    /// provider is left untouched.
    ///
    /// # Errors
    /// Returns `InvalidCurrency` if the code has no stored rate.
    pub fn with_base_currency(&self, code: &str) -> MoneyResult<Self> {
        let pivot = self.rate_of(code)?;
        let base = code.to_uppercase();
        tracing::debug!(old_base = %self.base, new_base = %base, "rebasing rate table");

        let rates = self
            .rates
            .iter()
            .map(|(c, rate)| {
                if c.eq_ignore_ascii_case(&base) {
                    (c.clone(), 1.0)
                } else {
                    (c.clone(), rate / pivot)
                }
            })
            .collect();
        Ok(Self { base, rates })
    }
}

fn validate_rate(code: &str, rate: f64) -> MoneyResult<()> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(MoneyError::InvalidAmount(format!(
            "exchange rate {} for '{}' must be finite and positive",
            rate, code
        )));
    }
    Ok(())
}

fn upsert(table: &mut Vec<(String, f64)>, code: String, rate: f64) {
    match table.iter_mut().find(|(c, _)| *c == code) {
        Some(entry) => entry.1 = rate,
        None => table.push((code, rate)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd_provider() -> ExchangeRateProvider {
        ExchangeRateProvider::new(
            "USD",
            [
                ("EUR".to_string(), 0.9),
                ("GBP".to_string(), 0.8),
                ("JPY".to_string(), 150.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_base_maps_to_one() {
        let provider = usd_provider();
        assert_eq!(provider.get_rate("USD", "USD").unwrap(), 1.0);
        assert_eq!(provider.get_rate("USD", "JPY").unwrap(), 150.0);
    }

    #[test]
    fn test_cross_rate() {
        let provider = usd_provider();
        let rate = provider.get_rate("EUR", "GBP").unwrap();
        assert!((rate - 0.8 / 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_code() {
        let provider = usd_provider();
        assert!(matches!(
            provider.get_rate("USD", "CHF"),
            Err(MoneyError::InvalidCurrency(_))
        ));
        assert!(matches!(
            provider.with_base_currency("CHF"),
            Err(MoneyError::InvalidCurrency(_))
        ));
    }

    #[test]
    fn test_invalid_rates_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(ExchangeRateProvider::new("USD", [("EUR".to_string(), bad)]).is_err());
        }

        let mut provider = usd_provider();
        assert!(provider.update_rate("EUR", -0.5).is_err());
        // A rejected batch applies nothing.
        let before = provider.clone();
        assert!(provider
            .update_rates([("CHF".to_string(), 0.95), ("SEK".to_string(), f64::NAN)])
            .is_err());
        assert_eq!(provider, before);
    }

    #[test]
    fn test_update_rates() {
        let mut provider = usd_provider();
        provider
            .update_rates([("EUR".to_string(), 0.95), ("CHF".to_string(), 0.88)])
            .unwrap();
        assert_eq!(provider.get_rate("USD", "EUR").unwrap(), 0.95);
        assert_eq!(provider.get_rate("USD", "CHF").unwrap(), 0.88);
        // Updating an existing code keeps its table position.
        let codes: Vec<&str> = provider.supported_currencies().collect();
        assert_eq!(codes, vec!["USD", "EUR", "GBP", "JPY", "CHF"]);
    }

    #[test]
    fn test_rebase_does_not_mutate_original() {
        let provider = usd_provider();
        let rebased = provider.with_base_currency("EUR").unwrap();

        assert_eq!(provider.base_currency(), "USD");
        assert_eq!(rebased.base_currency(), "EUR");
        assert_eq!(rebased.get_rate("EUR", "EUR").unwrap(), 1.0);

        // USD in the rebased table is 1/0.9.
        let usd = rebased.get_rate("EUR", "USD").unwrap();
        assert!((usd - 1.0 / 0.9).abs() < 1e-12);

        // Cross rates survive the rebase.
        let before = provider.get_rate("GBP", "JPY").unwrap();
        let after = rebased.get_rate("GBP", "JPY").unwrap();
        assert!((before - after).abs() < 1e-9);
    }

    #[test]
    fn test_from_snapshot() {
        let snapshot = RateSnapshot {
            base_currency: "eur".to_string(),
            rates: vec![("usd".to_string(), 1.1), ("gbp".to_string(), 0.85)],
            timestamp: Some(Utc::now()),
        };
        let provider = ExchangeRateProvider::from_snapshot(&snapshot).unwrap();
        assert_eq!(provider.base_currency(), "EUR");
        assert_eq!(provider.get_rate("EUR", "USD").unwrap(), 1.1);
    }
}
