//! Generic conversion entry points
//!
//! [`convert`] routes a `(registers, data type, bit position, scaling factor)`
//! request to the matching decoder in [`crate::decode`] and wraps the typed
//! result into a [`Value`].

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::decode::{
    decode_bool, decode_f32, decode_f64, decode_i16, decode_i32, decode_i64, decode_i8,
    decode_u16, decode_u32, decode_u64, decode_u8,
};
use crate::error::{DecodeError, Result};
use crate::{DataType, Value};

/// Convert registers into a typed value
///
/// `bit_pos` is only consulted for [`DataType::Boolean`], `scaling_factor`
/// for everything else. An empty register slice fails with
/// [`DecodeError::InsufficientRegisters`] regardless of type; shorter than
/// needed slices fail the same way in the width-specific decoder.
///
/// # Examples
/// ```
/// use voltage_regconv::{convert, DataType, Value};
///
/// let data_type: DataType = "uint32_cdab".parse().unwrap();
/// let value = convert(&[0x0001, 0x0000], data_type, 0, 2.0).unwrap();
/// assert_eq!(value, Value::U32(2));
/// ```
pub fn convert(
    registers: &[u16],
    data_type: DataType,
    bit_pos: u8,
    scaling_factor: f64,
) -> Result<Value> {
    trace!(
        data_type = %data_type,
        count = registers.len(),
        bit_pos,
        scaling_factor,
        "Converting registers"
    );

    if registers.is_empty() {
        debug!(data_type = %data_type, "Empty register block");
        return Err(DecodeError::insufficient(data_type, 0));
    }

    let value = match data_type {
        DataType::Boolean => Value::Bool(decode_bool(registers, bit_pos)?),
        DataType::Int8 => Value::I8(decode_i8(registers, scaling_factor)?),
        DataType::UInt8 => Value::U8(decode_u8(registers, scaling_factor)?),
        DataType::Int16(order) => Value::I16(decode_i16(registers, order, scaling_factor)?),
        DataType::UInt16(order) => Value::U16(decode_u16(registers, order, scaling_factor)?),
        DataType::Int32(order) => Value::I32(decode_i32(registers, order, scaling_factor)?),
        DataType::UInt32(order) => Value::U32(decode_u32(registers, order, scaling_factor)?),
        DataType::Int64(order) => Value::I64(decode_i64(registers, order, scaling_factor)?),
        DataType::UInt64(order) => Value::U64(decode_u64(registers, order, scaling_factor)?),
        DataType::Float32(order) => Value::F32(decode_f32(registers, order, scaling_factor)?),
        DataType::Float64(order) => Value::F64(decode_f64(registers, order, scaling_factor)?),
    };

    Ok(value)
}

/// Convert registers using a numeric data type code
///
/// The code is the position in [`DataType::ALL`]. Unknown codes fail with
/// [`DecodeError::UnknownTypeCode`], after the empty-input check.
pub fn convert_code(
    registers: &[u16],
    code: u32,
    bit_pos: u8,
    scaling_factor: f64,
) -> Result<Value> {
    if registers.is_empty() {
        debug!(code, "Empty register block");
        return Err(DecodeError::InsufficientRegisters {
            required: 1,
            actual: 0,
        });
    }

    let data_type = DataType::from_code(code).ok_or_else(|| {
        debug!(code, "Unknown data type code");
        DecodeError::UnknownTypeCode(code)
    })?;

    convert(registers, data_type, bit_pos, scaling_factor)
}

fn default_scale() -> f64 {
    1.0
}

fn is_default_scale(scale: &f64) -> bool {
    *scale == 1.0
}

fn is_zero(bit: &u8) -> bool {
    *bit == 0
}

/// A reusable conversion: data type plus its parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub data_type: DataType,
    /// Bit position, boolean only
    #[serde(default, skip_serializing_if = "is_zero")]
    pub bit: u8,
    /// Scaling factor, ignored for booleans
    #[serde(default = "default_scale", skip_serializing_if = "is_default_scale")]
    pub scale: f64,
}

impl Conversion {
    pub fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            bit: 0,
            scale: default_scale(),
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_bit(mut self, bit: u8) -> Self {
        self.bit = bit;
        self
    }

    /// Registers this conversion reads
    pub fn register_count(&self) -> usize {
        self.data_type.register_count()
    }

    pub fn apply(&self, registers: &[u16]) -> Result<Value> {
        convert(registers, self.data_type, self.bit, self.scale)
    }
}

impl From<DataType> for Conversion {
    fn from(data_type: DataType) -> Self {
        Self::new(data_type)
    }
}
