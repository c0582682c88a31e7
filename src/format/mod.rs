// ============================================================================
// Format Module
// Locale-aware display rendering of money values
// ============================================================================

mod formatter;
mod locale;
mod options;

pub use formatter::MoneyFormatter;
pub use locale::{BasicLocaleFormatter, LocaleNumberFormatter};
pub use options::{FormatOptions, AMOUNT_PLACEHOLDER};
