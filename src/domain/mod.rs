// ============================================================================
// Domain Module
// Core value objects: Currency and Money
// ============================================================================

pub mod currency;
pub mod money;

pub use currency::{iso_currencies, Currency};
pub use money::{Money, ALLOCATION_PRECISION, GUARD_DIGITS};
