// ============================================================================
// Exchange Module
// Rate tables, cross rates and currency conversion
// ============================================================================

mod converter;
mod provider;

pub use converter::CurrencyConverter;
pub use provider::{ExchangeRateProvider, RateSnapshot};
