// ============================================================================
// Numeric Module
// Exact scaled-integer arithmetic for monetary calculations
// ============================================================================
//
// This module provides:
// - The scaled-decimal codec: decimal text/float <-> BigInt at a given scale
// - RoundingMode and the rounding engine over scaled integers
// - Factor/Rational: exact-fraction normalization of multipliers
// - MoneyError: error taxonomy for all monetary operations
//
// Design principles:
// - No floating-point arithmetic on amounts, ever
// - All fallible operations return Result (no panics)
// - Arbitrary-precision integers so deep scales (18+ digits) cannot overflow
// - Ties detected on integers, never via float comparison

mod errors;
mod rational;
mod rounding;
mod scaled;

pub use errors::{MoneyError, MoneyResult};
pub use rational::Factor;
pub use rounding::{default_rounding_mode, round_scaled, set_default_rounding_mode, RoundingMode};
pub use scaled::{from_decimal, from_f64, parse_decimal, pow10, to_decimal_string};
