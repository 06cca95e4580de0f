//! Bound checks applied to a parsed value before it is handed to the caller.

use crate::config::BoundPolicy;
use crate::errors::InputFailure;

/// Exclusive upper bound check shared by every policy.
pub fn check_below(value: i64, limit: i64) -> Result<(), InputFailure> {
    if value >= limit {
        return Err(InputFailure::TooLarge { value, limit });
    }
    Ok(())
}

/// Ensure `value` fits in `u16` (0..=65535).
pub fn check_fits_u16(value: i64) -> Result<(), InputFailure> {
    if value < 0 {
        return Err(InputFailure::TooSmall { value, min: 0 });
    }
    if value > i64::from(u16::MAX) {
        return Err(InputFailure::TooLarge {
            value,
            limit: i64::from(u16::MAX) + 1,
        });
    }
    Ok(())
}

/// Apply the checks `policy` asks for. `UpperOnly` has no lower bound.
pub fn check_with_policy(value: i64, limit: i64, policy: BoundPolicy) -> Result<(), InputFailure> {
    check_below(value, limit)?;
    match policy {
        BoundPolicy::UpperOnly => Ok(()),
        BoundPolicy::Strict => check_fits_u16(value),
    }
}
