// ============================================================================
// Format Options
// Sign, symbol and locale configuration for money rendering
// ============================================================================

use crate::numeric::RoundingMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Placeholder substituted into the positive/negative templates.
pub const AMOUNT_PLACEHOLDER: &str = "${amount}";

/// Configuration for rendering a money value as a display string.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    /// Prefix the currency symbol ("$10.99")
    pub with_symbol: bool,
    /// Suffix the currency code ("10.99 USD")
    pub with_code: bool,
    /// Use the currency's full name instead of its symbol
    pub with_currency_name: bool,
    /// BCP-47 style locale tag handed to the locale formatter
    pub locale: String,
    /// Display this many fractional digits instead of the currency's
    /// canonical count
    pub decimal_places: Option<u32>,
    /// Apply digit grouping ("1,234,567.89")
    pub grouping: bool,
    /// Rounding mode passed through to the amount; `None` consults the
    /// process-wide default, and display rendering falls back to
    /// `RoundingMode::HalfEven` when that default is `RoundingMode::None`
    pub rounding: Option<RoundingMode>,
    /// Force a leading `+` on positive non-zero amounts
    pub force_sign: bool,
    /// Template for positive amounts, containing the literal `${amount}`
    pub positive_template: Option<String>,
    /// Template for negative amounts; the substituted amount is
    /// sign-stripped
    pub negative_template: Option<String>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            with_symbol: true,
            with_code: false,
            with_currency_name: false,
            locale: "en-US".to_string(),
            decimal_places: None,
            grouping: true,
            rounding: None,
            force_sign: false,
            positive_template: None,
            negative_template: None,
        }
    }
}

impl FormatOptions {
    /// Default options with a different locale tag.
    pub fn with_locale(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            ..Self::default()
        }
    }
}
