// ============================================================================
// Locale Number Formatter Interface
// Seam for the external locale-aware numeric rendering service
// ============================================================================

/// Renders a plain decimal string (`-?\d+(\.\d+)?` without the sign) with a
/// locale's digit grouping and decimal separator conventions.
///
/// Locale-specific rendering is an external collaborator concern; the
/// built-in [`BasicLocaleFormatter`] covers the common separator families
/// and implementations can swap in a full CLDR-backed service.
pub trait LocaleNumberFormatter: Send + Sync {
    /// Format an unsigned decimal string with exactly `decimal_places`
    /// fractional digits (padding or truncating at display level) and
    /// optional digit grouping.
    fn format_number(
        &self,
        amount: &str,
        decimal_places: u32,
        locale: &str,
        grouping: bool,
    ) -> String;
}

/// Built-in separator-table formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicLocaleFormatter;

impl BasicLocaleFormatter {
    /// Group and decimal separators for a locale tag's primary subtag.
    fn separators(locale: &str) -> (char, char) {
        let primary = locale
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match primary.as_str() {
            "de" | "es" | "it" | "nl" | "pt" | "id" | "tr" | "el" => ('.', ','),
            "fr" | "ru" | "uk" | "pl" | "cs" | "sv" | "nb" | "no" | "fi" => (' ', ','),
            _ => (',', '.'),
        }
    }
}

impl LocaleNumberFormatter for BasicLocaleFormatter {
    fn format_number(
        &self,
        amount: &str,
        decimal_places: u32,
        locale: &str,
        grouping: bool,
    ) -> String {
        let (group_sep, decimal_sep) = Self::separators(locale);

        let (int_part, frac_part) = match amount.find('.') {
            Some(pos) => (&amount[..pos], &amount[pos + 1..]),
            None => (amount, ""),
        };

        let int_digits = if grouping {
            group_digits(int_part, group_sep)
        } else {
            int_part.to_string()
        };

        if decimal_places == 0 {
            return int_digits;
        }

        // Display-level adjustment only: arithmetic rounding is the rounding
        // engine's job, requested through the format options.
        let mut frac: String = frac_part.chars().take(decimal_places as usize).collect();
        while frac.len() < decimal_places as usize {
            frac.push('0');
        }

        format!("{}{}{}", int_digits, decimal_sep, frac)
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let count = digits.len();
    let mut grouped = String::with_capacity(count + count / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (count - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_grouping() {
        let f = BasicLocaleFormatter;
        assert_eq!(f.format_number("1234567.89", 2, "en-US", true), "1,234,567.89");
        assert_eq!(f.format_number("123.45", 2, "en-US", true), "123.45");
        assert_eq!(f.format_number("1234.5", 2, "en-US", false), "1234.50");
    }

    #[test]
    fn test_separator_families() {
        let f = BasicLocaleFormatter;
        assert_eq!(f.format_number("1234567.89", 2, "de-DE", true), "1.234.567,89");
        assert_eq!(f.format_number("1234567.89", 2, "fr-FR", true), "1 234 567,89");
    }

    #[test]
    fn test_decimal_place_override() {
        let f = BasicLocaleFormatter;
        // Truncates or pads at display level.
        assert_eq!(f.format_number("10.990000", 2, "en-US", true), "10.99");
        assert_eq!(f.format_number("10.9", 3, "en-US", true), "10.900");
        assert_eq!(f.format_number("10.99", 0, "en-US", true), "10");
        assert_eq!(f.format_number("42", 2, "en-US", true), "42.00");
    }
}
