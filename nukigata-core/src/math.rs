//! Small arithmetic helpers for the swap machinery.

/// Splits `n` into its binary powers of two, largest first.
///
/// `decompose_to_powers_of_two(13)` yields `[8, 4, 1]`; zero decomposes into
/// nothing.
pub fn decompose_to_powers_of_two(n: u32) -> Vec<u32> {
    (0..u32::BITS)
        .rev()
        .filter(|bit| n & (1 << bit) != 0)
        .map(|bit| 1 << bit)
        .collect()
}
