//! Register arrays to raw numeric values
//!
//! These helpers only reorder and reinterpret bits. Scaling, narrowing and
//! length checks live in [`crate::decode`].

use super::{ByteOrder16, ByteOrder32, ByteOrder64};

// ============================================================================
// Register to Bytes Conversions
// ============================================================================

/// Convert a single register to 2 bytes, most significant first
pub fn reg_to_bytes_2(reg: u16, order: ByteOrder16) -> [u8; 2] {
    order.apply(reg).to_be_bytes()
}

/// Convert 2 registers to 4 bytes with specified byte order
///
/// # Examples
/// ```
/// use voltage_regconv::bytes::{regs_to_bytes_4, ByteOrder32};
///
/// let regs = [0x1234, 0x5678];
/// assert_eq!(regs_to_bytes_4(&regs, ByteOrder32::Abcd), [0x12, 0x34, 0x56, 0x78]);
/// assert_eq!(regs_to_bytes_4(&regs, ByteOrder32::Cdab), [0x56, 0x78, 0x12, 0x34]);
/// ```
pub fn regs_to_bytes_4(regs: &[u16; 2], order: ByteOrder32) -> [u8; 4] {
    let mut bytes = [0u8; 4];
    order.layout().arrange_into(regs, &mut bytes);
    bytes
}

/// Convert 4 registers to 8 bytes with specified byte order
pub fn regs_to_bytes_8(regs: &[u16; 4], order: ByteOrder64) -> [u8; 8] {
    let mut bytes = [0u8; 8];
    order.layout().arrange_into(regs, &mut bytes);
    bytes
}

// ============================================================================
// Register to Raw Numeric Conversions
// ============================================================================

/// Reassemble 2 registers into an unsigned 32-bit pattern
#[inline]
pub fn regs_to_u32(regs: &[u16; 2], order: ByteOrder32) -> u32 {
    u32::from_be_bytes(regs_to_bytes_4(regs, order))
}

/// Reassemble 4 registers into an unsigned 64-bit pattern
#[inline]
pub fn regs_to_u64(regs: &[u16; 4], order: ByteOrder64) -> u64 {
    u64::from_be_bytes(regs_to_bytes_8(regs, order))
}

/// Reinterpret 2 registers as IEEE-754 binary32
#[inline]
pub fn regs_to_f32(regs: &[u16; 2], order: ByteOrder32) -> f32 {
    f32::from_be_bytes(regs_to_bytes_4(regs, order))
}

/// Reinterpret 4 registers as IEEE-754 binary64
#[inline]
pub fn regs_to_f64(regs: &[u16; 4], order: ByteOrder64) -> f64 {
    f64::from_be_bytes(regs_to_bytes_8(regs, order))
}
