// ============================================================================
// Currency
// Currency value object and the static ISO-4217 registry
// ============================================================================

use crate::numeric::{MoneyError, MoneyResult};
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Static ISO-4217 table: code, display name, symbol, canonical fractional
/// digits. Registry order is the iteration order of [`iso_currencies`].
const ISO_TABLE: &[(&str, &str, &str, u32)] = &[
    ("USD", "US Dollar", "$", 2),
    ("EUR", "Euro", "€", 2),
    ("GBP", "Pound Sterling", "£", 2),
    ("JPY", "Japanese Yen", "¥", 0),
    ("CHF", "Swiss Franc", "CHF", 2),
    ("CAD", "Canadian Dollar", "C$", 2),
    ("AUD", "Australian Dollar", "A$", 2),
    ("NZD", "New Zealand Dollar", "NZ$", 2),
    ("CNY", "Yuan Renminbi", "¥", 2),
    ("HKD", "Hong Kong Dollar", "HK$", 2),
    ("SGD", "Singapore Dollar", "S$", 2),
    ("SEK", "Swedish Krona", "kr", 2),
    ("NOK", "Norwegian Krone", "kr", 2),
    ("DKK", "Danish Krone", "kr", 2),
    ("ISK", "Iceland Krona", "kr", 0),
    ("PLN", "Zloty", "zł", 2),
    ("CZK", "Czech Koruna", "Kč", 2),
    ("HUF", "Forint", "Ft", 2),
    ("RON", "Romanian Leu", "lei", 2),
    ("BGN", "Bulgarian Lev", "лв", 2),
    ("TRY", "Turkish Lira", "₺", 2),
    ("RUB", "Russian Ruble", "₽", 2),
    ("UAH", "Hryvnia", "₴", 2),
    ("INR", "Indian Rupee", "₹", 2),
    ("IDR", "Rupiah", "Rp", 2),
    ("KRW", "Won", "₩", 0),
    ("VND", "Dong", "₫", 0),
    ("THB", "Baht", "฿", 2),
    ("MYR", "Malaysian Ringgit", "RM", 2),
    ("PHP", "Philippine Peso", "₱", 2),
    ("TWD", "New Taiwan Dollar", "NT$", 2),
    ("PKR", "Pakistan Rupee", "₨", 2),
    ("BHD", "Bahraini Dinar", ".د.ب", 3),
    ("KWD", "Kuwaiti Dinar", "د.ك", 3),
    ("OMR", "Rial Omani", "﷼", 3),
    ("JOD", "Jordanian Dinar", "JD", 3),
    ("TND", "Tunisian Dinar", "د.ت", 3),
    ("IQD", "Iraqi Dinar", "ع.د", 3),
    ("AED", "UAE Dirham", "د.إ", 2),
    ("SAR", "Saudi Riyal", "﷼", 2),
    ("QAR", "Qatari Rial", "﷼", 2),
    ("ILS", "New Israeli Sheqel", "₪", 2),
    ("EGP", "Egyptian Pound", "£", 2),
    ("ZAR", "Rand", "R", 2),
    ("NGN", "Naira", "₦", 2),
    ("KES", "Kenyan Shilling", "KSh", 2),
    ("GHS", "Ghana Cedi", "₵", 2),
    ("MAD", "Moroccan Dirham", "د.م.", 2),
    ("BRL", "Brazilian Real", "R$", 2),
    ("MXN", "Mexican Peso", "$", 2),
    ("ARS", "Argentine Peso", "$", 2),
    ("CLP", "Chilean Peso", "$", 0),
    ("COP", "Colombian Peso", "$", 2),
    ("PEN", "Sol", "S/", 2),
    ("UYU", "Peso Uruguayo", "$U", 2),
];

/// A currency: normalized uppercase code, display name, symbol, and the
/// canonical number of fractional digits (2 for USD, 0 for JPY, 3 for BHD).
///
/// Two currencies are equal iff their codes match. Codes are normalized to
/// uppercase at construction, so comparison is case-sensitive thereafter.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Currency {
    code: String,
    name: String,
    symbol: String,
    fractional_digits: u32,
}

impl Currency {
    /// Look up a currency in the static ISO-4217 table, case-insensitively.
    ///
    /// # Errors
    /// Returns `InvalidCurrency` if the code is not in the table.
    pub fn from_code(code: &str) -> MoneyResult<Self> {
        ISO_TABLE
            .iter()
            .find(|(iso_code, _, _, _)| iso_code.eq_ignore_ascii_case(code))
            .map(|&(iso_code, name, symbol, digits)| Self {
                code: iso_code.to_string(),
                name: name.to_string(),
                symbol: symbol.to_string(),
                fractional_digits: digits,
            })
            .ok_or_else(|| {
                MoneyError::InvalidCurrency(format!("unknown currency code '{}'", code))
            })
    }

    /// Build a custom currency from caller-supplied metadata, bypassing the
    /// ISO table entirely. Both factories converge on the same validated
    /// representation.
    ///
    /// # Errors
    /// Returns `InvalidCurrency` if any field is empty.
    pub fn from_metadata(
        code: &str,
        name: &str,
        symbol: &str,
        fractional_digits: u32,
    ) -> MoneyResult<Self> {
        if code.trim().is_empty() {
            return Err(MoneyError::InvalidCurrency(
                "currency code must be non-empty".to_string(),
            ));
        }
        if name.trim().is_empty() {
            return Err(MoneyError::InvalidCurrency(
                "currency name must be non-empty".to_string(),
            ));
        }
        if symbol.trim().is_empty() {
            return Err(MoneyError::InvalidCurrency(
                "currency symbol must be non-empty".to_string(),
            ));
        }
        Ok(Self {
            code: code.to_uppercase(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            fractional_digits,
        })
    }

    /// The normalized uppercase currency code.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The display symbol.
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The canonical number of fractional digits.
    #[inline]
    pub fn fractional_digits(&self) -> u32 {
        self.fractional_digits
    }
}

// Identity is the code alone; name/symbol/digits are display metadata.
impl PartialEq for Currency {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Iterate every currency in the static ISO table, in registry order.
pub fn iso_currencies() -> impl Iterator<Item = Currency> {
    ISO_TABLE
        .iter()
        .map(|&(code, name, symbol, digits)| Currency {
            code: code.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            fractional_digits: digits,
        })
}
