// ============================================================================
// Monetary Errors
// Error taxonomy for monetary arithmetic operations
// ============================================================================

use thiserror::Error;

/// Errors that can occur during monetary operations.
///
/// Every failure is a local, synchronous error surfaced directly to the
/// caller. No error is ever downgraded to a silent default value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Malformed or non-finite numeric input (amount, multiplier, divisor,
    /// or exchange rate).
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Unknown currency code, or malformed custom-currency metadata.
    #[error("invalid currency: {0}")]
    InvalidCurrency(String),

    /// Binary operation between money values of differing currencies.
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Currency code of the left-hand operand
        left: String,
        /// Currency code of the right-hand operand
        right: String,
    },

    /// Structurally invalid operation argument (zero ratio denominator,
    /// non-positive distribution count, ratio against a zero amount).
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Invalid allocation weight list (empty, negative entries, all-zero).
    #[error("invalid allocation: {0}")]
    Allocation(String),
}

/// Result type alias for monetary operations
pub type MoneyResult<T> = Result<T, MoneyError>;
