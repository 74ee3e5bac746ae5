//! Size and position arithmetic for the implicit tree array.

use crate::BinaryMerkleError;

/// Exclusive upper bound on leaf counts accepted by the sizing helpers.
pub const MAX_LEAF_COUNT: u64 = 1 << 63;

/// Returns whether `n` is a power of two. Zero is not.
pub fn is_power_of_two(n: u64) -> bool {
    n > 0 && (n & (n - 1)) == 0
}

/// Returns the smallest power of two strictly greater than `n`.
///
/// An exact power of two maps to its double: `next_power_of_two(4) == 8`.
/// The tree sizing below depends on this, so it is deliberately not the
/// same as `u64::next_power_of_two`.
///
/// # Safety (arithmetic)
///
/// Wraps to 0 when `n >= 2^63`. Use [`checked_next_power_of_two`] when the
/// count is not already bounded by an in-memory slice length.
pub fn next_power_of_two(mut n: u64) -> u64 {
    n |= n >> 1;
    n |= n >> 2;
    n |= n >> 4;
    n |= n >> 8;
    n |= n >> 16;
    n |= n >> 32;
    n.wrapping_add(1)
}

/// Number of slots in the tree array for `n` leaves: `2 * P - 1` where
/// `P = next_power_of_two(n)` is the leaf-layer width.
///
/// # Safety (arithmetic)
///
/// Same bound as [`next_power_of_two`]. The largest valid count yields
/// `u64::MAX` slots.
pub fn tree_size(n: u64) -> u64 {
    let width = next_power_of_two(n);
    width - 1 + width
}

/// Index of the first leaf slot for `n` leaves.
///
/// The leaf layer is the last `P` slots of the `2P - 1` array, so it starts
/// right after the `P - 1` internal nodes.
pub fn leaf_offset(n: u64) -> u64 {
    next_power_of_two(n) - 1
}

/// [`next_power_of_two`] with the `n < 2^63` precondition checked.
pub fn checked_next_power_of_two(n: u64) -> Result<u64, BinaryMerkleError> {
    if n >= MAX_LEAF_COUNT {
        return Err(BinaryMerkleError::LeafCountTooLarge { count: n });
    }
    Ok(next_power_of_two(n))
}

/// [`tree_size`] with the `n < 2^63` precondition checked.
pub fn checked_tree_size(n: u64) -> Result<u64, BinaryMerkleError> {
    let width = checked_next_power_of_two(n)?;
    Ok(width - 1 + width)
}
