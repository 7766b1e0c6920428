//! Bit-level operations on register words
//!
//! Used for status registers where each bit carries a discrete signal.

/// Highest addressable bit in a 16-bit register
pub const MAX_BIT_U16: u8 = 15;

/// Extract single bit from u16 value
#[inline]
pub fn extract_bit_u16(value: u16, bit_index: u8) -> bool {
    debug_assert!(bit_index <= MAX_BIT_U16, "Bit index out of range: {}", bit_index);
    (value >> bit_index) & 1 != 0
}

/// Extract single bit, `None` when `bit_index` is outside 0..=15
#[inline]
pub fn checked_bit_u16(value: u16, bit_index: u8) -> Option<bool> {
    (bit_index <= MAX_BIT_U16).then(|| extract_bit_u16(value, bit_index))
}

/// Low byte of a register
#[inline]
pub fn low_byte(value: u16) -> u8 {
    (value & 0x00FF) as u8
}
