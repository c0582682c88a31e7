// ============================================================================
// Money Formatter
// Composes rounded amounts, currency metadata and locale rendering
// ============================================================================

use super::locale::{BasicLocaleFormatter, LocaleNumberFormatter};
use super::options::{FormatOptions, AMOUNT_PLACEHOLDER};
use crate::domain::Money;
use crate::numeric::{default_rounding_mode, RoundingMode};

/// Renders [`Money`] values as display strings.
///
/// The heavy lifting is delegated: the amount string comes from the money
/// value (already rounded per the options) and digit grouping comes from the
/// wrapped [`LocaleNumberFormatter`].
pub struct MoneyFormatter {
    locale_formatter: Box<dyn LocaleNumberFormatter>,
}

impl Default for MoneyFormatter {
    fn default() -> Self {
        Self::new(Box::new(BasicLocaleFormatter))
    }
}

impl MoneyFormatter {
    /// Build a formatter around a locale service implementation.
    pub fn new(locale_formatter: Box<dyn LocaleNumberFormatter>) -> Self {
        Self { locale_formatter }
    }

    /// Render one money value per the options.
    ///
    /// When neither the options nor the process-wide default name a rounding
    /// mode, display rendering falls back to banker's rounding so trailing
    /// guard digits are rounded instead of cut off. Passing
    /// `Some(RoundingMode::None)` explicitly keeps the full guard precision.
    pub fn format(&self, money: &Money, options: &FormatOptions) -> String {
        let mode = match options.rounding {
            Some(mode) => mode,
            None => match default_rounding_mode() {
                RoundingMode::None => RoundingMode::HalfEven,
                mode => mode,
            },
        };
        let amount = money.amount(Some(mode));
        let negative = amount.starts_with('-');
        let unsigned = amount.trim_start_matches('-');

        let decimal_places = options
            .decimal_places
            .unwrap_or_else(|| money.currency().fractional_digits());
        let number = self.locale_formatter.format_number(
            unsigned,
            decimal_places,
            &options.locale,
            options.grouping,
        );

        let mut body = if options.with_currency_name {
            format!("{} {}", number, money.currency().name())
        } else if options.with_symbol {
            format!("{}{}", money.currency().symbol(), number)
        } else {
            number
        };
        if options.with_code {
            body = format!("{} {}", body, money.currency().code());
        }

        // Templates receive the sign-stripped formatted amount.
        if negative {
            if let Some(template) = &options.negative_template {
                return template.replace(AMOUNT_PLACEHOLDER, &body);
            }
            return format!("-{}", body);
        }
        if let Some(template) = &options.positive_template {
            return template.replace(AMOUNT_PLACEHOLDER, &body);
        }
        if options.force_sign && !money.is_zero() {
            return format!("+{}", body);
        }
        body
    }

    /// Accounting convention: negative amounts wrapped in parentheses, sign
    /// stripped.
    pub fn format_accounting(&self, money: &Money, options: &FormatOptions) -> String {
        let options = FormatOptions {
            negative_template: Some(format!("({})", AMOUNT_PLACEHOLDER)),
            force_sign: false,
            ..options.clone()
        };
        self.format(money, &options)
    }

    /// Financial convention: explicit leading `+`/`-` sign on non-zero
    /// amounts.
    pub fn format_financial(&self, money: &Money, options: &FormatOptions) -> String {
        let options = FormatOptions {
            force_sign: true,
            negative_template: None,
            ..options.clone()
        };
        self.format(money, &options)
    }

    /// Format a list of values independently, left-aligned by space padding
    /// to a common width and joined with newlines. An empty list produces an
    /// empty string.
    pub fn format_money_table(&self, monies: &[Money], options: &FormatOptions) -> String {
        let rows: Vec<String> = monies
            .iter()
            .map(|money| self.format(money, options))
            .collect();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        rows.iter()
            .map(|row| {
                let padding = width - row.chars().count();
                format!("{}{}", row, " ".repeat(padding))
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Currency;
    use crate::numeric::RoundingMode;

    fn usd(amount: f64) -> Money {
        Money::new(amount, Currency::from_code("USD").unwrap()).unwrap()
    }

    fn options() -> FormatOptions {
        FormatOptions {
            rounding: Some(RoundingMode::HalfEven),
            ..FormatOptions::default()
        }
    }

    #[test]
    fn test_symbol_prefix() {
        let formatter = MoneyFormatter::default();
        assert_eq!(formatter.format(&usd(10.99), &options()), "$10.99");
        assert_eq!(formatter.format(&usd(-10.99), &options()), "-$10.99");
    }

    #[test]
    fn test_default_options_round_for_display() {
        let formatter = MoneyFormatter::default();
        // Trailing guard digits round rather than disappear when neither the
        // options nor the process default configure a mode.
        assert_eq!(
            formatter.format(&usd(10.996), &FormatOptions::default()),
            "$11.00"
        );
        assert_eq!(
            formatter.format(&usd(10.994), &FormatOptions::default()),
            "$10.99"
        );
    }

    #[test]
    fn test_explicit_none_keeps_guard_precision() {
        let formatter = MoneyFormatter::default();
        let opts = FormatOptions {
            rounding: Some(RoundingMode::None),
            decimal_places: Some(6),
            ..FormatOptions::default()
        };
        assert_eq!(formatter.format(&usd(10.996), &opts), "$10.996000");
    }

    #[test]
    fn test_code_suffix_without_symbol() {
        let formatter = MoneyFormatter::default();
        let opts = FormatOptions {
            with_symbol: false,
            with_code: true,
            ..options()
        };
        assert_eq!(formatter.format(&usd(10.99), &opts), "10.99 USD");
    }

    #[test]
    fn test_currency_name() {
        let formatter = MoneyFormatter::default();
        let opts = FormatOptions {
            with_currency_name: true,
            ..options()
        };
        assert_eq!(formatter.format(&usd(10.99), &opts), "10.99 US Dollar");
    }

    #[test]
    fn test_grouping_and_locale() {
        let formatter = MoneyFormatter::default();
        let opts = FormatOptions {
            locale: "de-DE".to_string(),
            ..options()
        };
        assert_eq!(formatter.format(&usd(1234567.89), &opts), "$1.234.567,89");

        let no_grouping = FormatOptions {
            grouping: false,
            ..options()
        };
        assert_eq!(formatter.format(&usd(1234567.89), &no_grouping), "$1234567.89");
    }

    #[test]
    fn test_decimal_place_override() {
        let formatter = MoneyFormatter::default();
        let opts = FormatOptions {
            decimal_places: Some(4),
            ..options()
        };
        assert_eq!(formatter.format(&usd(10.99), &opts), "$10.9900");
    }

    #[test]
    fn test_templates() {
        let formatter = MoneyFormatter::default();
        let opts = FormatOptions {
            positive_template: Some("you get ${amount}".to_string()),
            negative_template: Some("you owe ${amount}".to_string()),
            ..options()
        };
        assert_eq!(formatter.format(&usd(5.0), &opts), "you get $5.00");
        assert_eq!(formatter.format(&usd(-5.0), &opts), "you owe $5.00");
    }

    #[test]
    fn test_accounting() {
        let formatter = MoneyFormatter::default();
        assert_eq!(
            formatter.format_accounting(&usd(-10.99), &options()),
            "($10.99)"
        );
        assert_eq!(
            formatter.format_accounting(&usd(10.99), &options()),
            "$10.99"
        );
    }

    #[test]
    fn test_financial() {
        let formatter = MoneyFormatter::default();
        assert_eq!(formatter.format_financial(&usd(10.99), &options()), "+$10.99");
        assert_eq!(formatter.format_financial(&usd(-10.99), &options()), "-$10.99");
        // Zero carries no forced sign.
        assert_eq!(formatter.format_financial(&usd(0.0), &options()), "$0.00");
    }

    #[test]
    fn test_money_table() {
        let formatter = MoneyFormatter::default();
        let table = formatter.format_money_table(
            &[usd(5.0), usd(1234.56), usd(-7.5)],
            &options(),
        );
        let rows: Vec<&str> = table.split('\n').collect();
        assert_eq!(rows.len(), 3);
        let width = rows[1].chars().count();
        assert!(rows.iter().all(|row| row.chars().count() == width));
        assert!(rows[0].starts_with("$5.00"));
        assert!(rows[2].starts_with("-$7.50"));
    }

    #[test]
    fn test_empty_table() {
        let formatter = MoneyFormatter::default();
        assert_eq!(formatter.format_money_table(&[], &options()), "");
    }

    #[test]
    fn test_money_format_delegates() {
        assert_eq!(usd(10.99).format(&options()), "$10.99");
    }
}
