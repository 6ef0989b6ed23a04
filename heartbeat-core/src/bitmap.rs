//! Row bitmap helpers
//!
//! A row bitmap is a `u32` covering the 32 columns of the chain. Bit 31 is
//! the leftmost column (first column of the farthest chip).

use heartbeat_protocol::COLUMN_COUNT;

// One bit per column across the whole chain
const _: () = assert!(u32::BITS as usize == COLUMN_COUNT);

/// Full-width bit reversal: bit 0 swaps with bit 31, bit 1 with bit 30, ...
///
/// `0x8000_0010` becomes `0x0800_0001`.
#[inline]
pub const fn mirror(bitmap: u32) -> u32 {
    bitmap.reverse_bits()
}

/// Left-right symmetric version of a row: the row OR-ed with its mirror
#[inline]
pub const fn symmetric(bitmap: u32) -> u32 {
    bitmap | mirror(bitmap)
}

/// True if the row reads the same from both ends
#[inline]
pub const fn is_palindrome(bitmap: u32) -> bool {
    bitmap == mirror(bitmap)
}

/// Split a row into its `(high, low)` 16-bit halves
#[inline]
pub const fn halves(bitmap: u32) -> (u16, u16) {
    ((bitmap >> 16) as u16, bitmap as u16)
}

/// Join `(high, low)` 16-bit halves back into a row
#[inline]
pub const fn join(high: u16, low: u16) -> u32 {
    (high as u32) << 16 | low as u32
}
