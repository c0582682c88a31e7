// ============================================================================
// Rounding Engine
// Scale reduction of exact integer-scaled values under eight policies
// ============================================================================

use super::scaled::pow10;
use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use parking_lot::RwLock;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounding policy applied when reducing a value to fewer fractional digits.
///
/// Tie detection operates on integer-scaled representations, never on
/// floating-point comparisons, so exact halves are always recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Toward positive infinity
    Ceiling,
    /// Toward negative infinity
    Floor,
    /// Toward zero (truncate)
    Down,
    /// Away from zero
    Up,
    /// Nearest neighbor, exact ties away from zero
    HalfUp,
    /// Nearest neighbor, exact ties toward zero
    HalfDown,
    /// Nearest neighbor, exact ties to the even neighbor (banker's rounding)
    HalfEven,
    /// No reduction — the value keeps its full guard precision
    #[default]
    None,
}

/// Process-wide default rounding mode, consulted only by operations that do
/// not receive an explicit mode argument. Initial value is `None`.
static DEFAULT_MODE: RwLock<RoundingMode> = RwLock::new(RoundingMode::None);

/// Read the process-wide default rounding mode.
pub fn default_rounding_mode() -> RoundingMode {
    *DEFAULT_MODE.read()
}

/// Overwrite the process-wide default rounding mode.
///
/// This is shared mutable state for the whole process; hosts with concurrent
/// writers must serialize configuration changes themselves.
pub fn set_default_rounding_mode(mode: RoundingMode) {
    tracing::debug!("default rounding mode set to {:?}", mode);
    *DEFAULT_MODE.write() = mode;
}

/// Reduce `value` from `current_scale` to `target_scale` fractional digits.
///
/// Returns the scaled integer at `target_scale`. `RoundingMode::None` and
/// target scales at or above the current scale leave the value unchanged,
/// so rounding an already-rounded value is a no-op.
pub fn round_scaled(
    value: &BigInt,
    current_scale: u32,
    target_scale: u32,
    mode: RoundingMode,
) -> BigInt {
    if mode == RoundingMode::None || target_scale >= current_scale {
        return value.clone();
    }

    let divisor = pow10(current_scale - target_scale);
    let quotient = value / &divisor;
    let remainder = value % &divisor;

    if remainder.is_zero() {
        return quotient;
    }

    let away = |q: &BigInt| match value.sign() {
        Sign::Minus => q - 1,
        _ => q + 1,
    };

    match mode {
        RoundingMode::Down => quotient,
        RoundingMode::Up => away(&quotient),
        RoundingMode::Ceiling => {
            if value.sign() == Sign::Plus {
                quotient + 1
            } else {
                quotient
            }
        }
        RoundingMode::Floor => {
            if value.sign() == Sign::Minus {
                quotient - 1
            } else {
                quotient
            }
        }
        RoundingMode::HalfUp | RoundingMode::HalfDown | RoundingMode::HalfEven => {
            let twice = remainder.magnitude() * 2u32;
            match twice.cmp(divisor.magnitude()) {
                Ordering::Greater => away(&quotient),
                Ordering::Less => quotient,
                Ordering::Equal => match mode {
                    RoundingMode::HalfUp => away(&quotient),
                    RoundingMode::HalfDown => quotient,
                    // HalfEven: bump only when the kept last digit is odd
                    _ => {
                        if (&quotient % 2i32).is_zero() {
                            quotient
                        } else {
                            away(&quotient)
                        }
                    }
                },
            }
        }
        RoundingMode::None => unreachable!("handled above"),
    }
}
