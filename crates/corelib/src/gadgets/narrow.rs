//! Narrowing from `i64` into `u16`.
//! - wrapping reduction modulo 2^16 (the conversion the challenge exploits)
//! - checked variant for the strict policy
//! - preimage search: which wide values narrow to a given `u16`

/// Size of the `u16` value space.
pub const U16_MODULUS: i64 = 1 << 16;

/// Reduce `v` modulo 2^16 and reinterpret as unsigned. Never saturates.
pub fn narrow_to_u16(v: i64) -> u16 {
    // rem_euclid keeps the result in 0..65536 for negative v as well
    v.rem_euclid(U16_MODULUS) as u16
}

/// Range-checked conversion: `None` unless `v` already fits in `u16`.
pub fn checked_narrow_to_u16(v: i64) -> Option<u16> {
    u16::try_from(v).ok()
}

/// True when narrowing `v` changes its numeric value.
pub fn wraps_on_narrowing(v: i64) -> bool {
    checked_narrow_to_u16(v).is_none()
}

/// Largest `v < limit` with `narrow_to_u16(v) == target`.
/// Returns `None` when no such value exists in `i64`.
pub fn largest_preimage_below(target: u16, limit: i64) -> Option<i64> {
    let top = limit.checked_sub(1)?;
    let gap = (i128::from(top) - i128::from(target)).rem_euclid(i128::from(U16_MODULUS));
    i64::try_from(i128::from(top) - gap).ok()
}

/// All `v < limit` narrowing to `target`, in descending order.
pub fn preimages_below(target: u16, limit: i64) -> impl Iterator<Item = i64> {
    let mut next = largest_preimage_below(target, limit);
    std::iter::from_fn(move || {
        let cur = next?;
        next = cur.checked_sub(U16_MODULUS);
        Some(cur)
    })
}
