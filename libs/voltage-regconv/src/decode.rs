//! Width-specific register decoders
//!
//! Each decoder checks that enough registers were supplied for its width,
//! reassembles the raw bits with the requested byte order and applies the
//! scaling factor (see [`crate::scaling`] for the overflow rules).
//!
//! The tag-driven entry points (`decode_int32`, `decode_int64`,
//! `decode_float32`, `decode_float64`) take a [`DataType`] and reject tags of
//! any other width class with [`DecodeError::InvalidType`].

use tracing::debug;

use crate::bytes::{
    checked_bit_u16, low_byte, regs_to_f32, regs_to_f64, regs_to_u32, regs_to_u64, ByteOrder16,
    ByteOrder32, ByteOrder64,
};
use crate::error::{DecodeError, Result};
use crate::scaling::{scale_f32, scale_f64, scale_int};
use crate::{DataType, Value};

/// Take the first `N` registers, or fail for `data_type`
fn take<const N: usize>(registers: &[u16], data_type: DataType) -> Result<[u16; N]> {
    registers
        .get(..N)
        .and_then(|regs| <[u16; N]>::try_from(regs).ok())
        .ok_or_else(|| {
            debug!(
                data_type = %data_type,
                required = N,
                actual = registers.len(),
                "Not enough registers for data type"
            );
            DecodeError::insufficient(data_type, registers.len())
        })
}

// ============================================================================
// Boolean
// ============================================================================

/// Extract bit `bit_pos` (0-15) of the first register
pub fn decode_bool(registers: &[u16], bit_pos: u8) -> Result<bool> {
    let [word] = take::<1>(registers, DataType::Boolean)?;
    checked_bit_u16(word, bit_pos).ok_or_else(|| {
        debug!(bit_pos, "Bit position out of range");
        DecodeError::InvalidBitPosition(bit_pos)
    })
}

// ============================================================================
// 8-bit
// ============================================================================

/// Low byte of the first register as two's complement
pub fn decode_i8(registers: &[u16], scaling_factor: f64) -> Result<i8> {
    let [word] = take::<1>(registers, DataType::Int8)?;
    Ok(scale_int(low_byte(word) as i8, scaling_factor))
}

/// Low byte of the first register
pub fn decode_u8(registers: &[u16], scaling_factor: f64) -> Result<u8> {
    let [word] = take::<1>(registers, DataType::UInt8)?;
    Ok(scale_int(low_byte(word), scaling_factor))
}

// ============================================================================
// 16-bit
// ============================================================================

pub fn decode_i16(registers: &[u16], order: ByteOrder16, scaling_factor: f64) -> Result<i16> {
    let [word] = take::<1>(registers, DataType::Int16(order))?;
    Ok(scale_int(order.apply(word) as i16, scaling_factor))
}

pub fn decode_u16(registers: &[u16], order: ByteOrder16, scaling_factor: f64) -> Result<u16> {
    let [word] = take::<1>(registers, DataType::UInt16(order))?;
    Ok(scale_int(order.apply(word), scaling_factor))
}

// ============================================================================
// 32-bit
// ============================================================================

pub fn decode_i32(registers: &[u16], order: ByteOrder32, scaling_factor: f64) -> Result<i32> {
    let regs = take::<2>(registers, DataType::Int32(order))?;
    Ok(scale_int(regs_to_u32(&regs, order) as i32, scaling_factor))
}

pub fn decode_u32(registers: &[u16], order: ByteOrder32, scaling_factor: f64) -> Result<u32> {
    let regs = take::<2>(registers, DataType::UInt32(order))?;
    Ok(scale_int(regs_to_u32(&regs, order), scaling_factor))
}

/// Decode any of the eight 32-bit integer types
pub fn decode_int32(registers: &[u16], data_type: DataType, scaling_factor: f64) -> Result<Value> {
    match data_type {
        DataType::Int32(order) => decode_i32(registers, order, scaling_factor).map(Value::I32),
        DataType::UInt32(order) => decode_u32(registers, order, scaling_factor).map(Value::U32),
        other => Err(DecodeError::invalid_type(other, "int32")),
    }
}

// ============================================================================
// 64-bit
// ============================================================================

pub fn decode_i64(registers: &[u16], order: ByteOrder64, scaling_factor: f64) -> Result<i64> {
    let regs = take::<4>(registers, DataType::Int64(order))?;
    Ok(scale_int(regs_to_u64(&regs, order) as i64, scaling_factor))
}

pub fn decode_u64(registers: &[u16], order: ByteOrder64, scaling_factor: f64) -> Result<u64> {
    let regs = take::<4>(registers, DataType::UInt64(order))?;
    Ok(scale_int(regs_to_u64(&regs, order), scaling_factor))
}

/// Decode any of the sixteen 64-bit integer types
pub fn decode_int64(registers: &[u16], data_type: DataType, scaling_factor: f64) -> Result<Value> {
    match data_type {
        DataType::Int64(order) => decode_i64(registers, order, scaling_factor).map(Value::I64),
        DataType::UInt64(order) => decode_u64(registers, order, scaling_factor).map(Value::U64),
        other => Err(DecodeError::invalid_type(other, "int64")),
    }
}

// ============================================================================
// IEEE-754
// ============================================================================

/// Reinterpret 2 registers as binary32, then scale
pub fn decode_f32(registers: &[u16], order: ByteOrder32, scaling_factor: f64) -> Result<f32> {
    let regs = take::<2>(registers, DataType::Float32(order))?;
    Ok(scale_f32(regs_to_f32(&regs, order), scaling_factor))
}

/// Reinterpret 4 registers as binary64, then scale
pub fn decode_f64(registers: &[u16], order: ByteOrder64, scaling_factor: f64) -> Result<f64> {
    let regs = take::<4>(registers, DataType::Float64(order))?;
    Ok(scale_f64(regs_to_f64(&regs, order), scaling_factor))
}

pub fn decode_float32(
    registers: &[u16],
    data_type: DataType,
    scaling_factor: f64,
) -> Result<Value> {
    match data_type {
        DataType::Float32(order) => decode_f32(registers, order, scaling_factor).map(Value::F32),
        other => Err(DecodeError::invalid_type(other, "float32")),
    }
}

pub fn decode_float64(
    registers: &[u16],
    data_type: DataType,
    scaling_factor: f64,
) -> Result<Value> {
    match data_type {
        DataType::Float64(order) => decode_f64(registers, order, scaling_factor).map(Value::F64),
        other => Err(DecodeError::invalid_type(other, "float64")),
    }
}
