//! Bit utilities shared by the generator and the reconstructor.
//! - widths of offset spans
//! - per-position membership tests

/// Number of bits needed to represent `span` (the largest offset of a range).
/// Zero for a single-element range.
pub fn bit_width(span: u64) -> u32 {
    u64::BITS - span.leading_zeros()
}

/// True when bit `i` of `offset` is set. Positions past 63 are never set.
pub fn bit_is_set(offset: u64, i: u32) -> bool {
    offset.checked_shr(i).is_some_and(|shifted| shifted & 1 == 1)
}

/// Offset of `x` from `lower` as an unsigned value; exact whenever `x >= lower`.
pub fn offset_of(lower: i64, x: i64) -> u64 {
    (x as u64).wrapping_sub(lower as u64)
}
