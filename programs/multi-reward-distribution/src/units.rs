//! Whole-token to base-unit conversion.

/// `amount × 10^decimals`, or `None` on overflow.
pub fn to_base_units(amount: u128, decimals: u32) -> Option<u128> {
    10u128.checked_pow(decimals)?.checked_mul(amount)
}
