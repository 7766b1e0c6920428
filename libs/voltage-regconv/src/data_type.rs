//! Register data type taxonomy
//!
//! A [`DataType`] fixes the result width, signedness and the byte/word order
//! used to reassemble it. Every data type also has:
//! - a numeric wire code (its index in [`DataType::ALL`]), for device maps
//!   that store the type as an integer
//! - a canonical name such as `int32_cdab` or `float64_abcdefgh`, used for
//!   parsing, display and serde

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bytes::{ByteOrder16, ByteOrder32, ByteOrder64};
use crate::error::DecodeError;

/// Closed set of register data types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DataType {
    /// Single bit of the first register
    Boolean,
    /// Low byte of the first register, two's complement
    Int8,
    /// Low byte of the first register
    UInt8,
    Int16(ByteOrder16),
    UInt16(ByteOrder16),
    Int32(ByteOrder32),
    UInt32(ByteOrder32),
    Int64(ByteOrder64),
    UInt64(ByteOrder64),
    /// IEEE-754 binary32
    Float32(ByteOrder32),
    /// IEEE-754 binary64
    Float64(ByteOrder64),
}

impl DataType {
    /// Every data type, indexed by wire code
    pub const ALL: [DataType; 43] = [
        Self::Boolean,
        Self::Int8,
        Self::UInt8,
        Self::Int16(ByteOrder16::Ab),
        Self::Int16(ByteOrder16::Ba),
        Self::UInt16(ByteOrder16::Ab),
        Self::UInt16(ByteOrder16::Ba),
        Self::Int32(ByteOrder32::Abcd),
        Self::Int32(ByteOrder32::Dcba),
        Self::Int32(ByteOrder32::Badc),
        Self::Int32(ByteOrder32::Cdab),
        Self::UInt32(ByteOrder32::Abcd),
        Self::UInt32(ByteOrder32::Dcba),
        Self::UInt32(ByteOrder32::Badc),
        Self::UInt32(ByteOrder32::Cdab),
        Self::Int64(ByteOrder64::Abcdefgh),
        Self::Int64(ByteOrder64::Hgfedcba),
        Self::Int64(ByteOrder64::Badcfehg),
        Self::Int64(ByteOrder64::Cdabghef),
        Self::Int64(ByteOrder64::Dcbahgfe),
        Self::Int64(ByteOrder64::Ghefcdab),
        Self::Int64(ByteOrder64::Fehgbadc),
        Self::Int64(ByteOrder64::Efghabcd),
        Self::UInt64(ByteOrder64::Abcdefgh),
        Self::UInt64(ByteOrder64::Hgfedcba),
        Self::UInt64(ByteOrder64::Badcfehg),
        Self::UInt64(ByteOrder64::Cdabghef),
        Self::UInt64(ByteOrder64::Dcbahgfe),
        Self::UInt64(ByteOrder64::Ghefcdab),
        Self::UInt64(ByteOrder64::Fehgbadc),
        Self::UInt64(ByteOrder64::Efghabcd),
        // float32 codes follow ABCD, CDAB, DCBA, BADC
        Self::Float32(ByteOrder32::Abcd),
        Self::Float32(ByteOrder32::Cdab),
        Self::Float32(ByteOrder32::Dcba),
        Self::Float32(ByteOrder32::Badc),
        Self::Float64(ByteOrder64::Abcdefgh),
        Self::Float64(ByteOrder64::Hgfedcba),
        Self::Float64(ByteOrder64::Badcfehg),
        Self::Float64(ByteOrder64::Cdabghef),
        Self::Float64(ByteOrder64::Dcbahgfe),
        Self::Float64(ByteOrder64::Ghefcdab),
        Self::Float64(ByteOrder64::Fehgbadc),
        Self::Float64(ByteOrder64::Efghabcd),
    ];

    /// Wire code of this data type
    pub fn code(&self) -> u32 {
        match *self {
            Self::Boolean => 0,
            Self::Int8 => 1,
            Self::UInt8 => 2,
            Self::Int16(order) => 3 + order as u32,
            Self::UInt16(order) => 5 + order as u32,
            Self::Int32(order) => 7 + order as u32,
            Self::UInt32(order) => 11 + order as u32,
            Self::Int64(order) => 15 + order as u32,
            Self::UInt64(order) => 23 + order as u32,
            Self::Float32(order) => {
                31 + match order {
                    ByteOrder32::Abcd => 0,
                    ByteOrder32::Cdab => 1,
                    ByteOrder32::Dcba => 2,
                    ByteOrder32::Badc => 3,
                }
            },
            Self::Float64(order) => 35 + order as u32,
        }
    }

    /// Resolve a wire code, `None` when it is out of range
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Minimum number of registers this type reads
    pub fn register_count(&self) -> usize {
        match self {
            Self::Boolean | Self::Int8 | Self::UInt8 | Self::Int16(_) | Self::UInt16(_) => 1,
            Self::Int32(_) | Self::UInt32(_) | Self::Float32(_) => 2,
            Self::Int64(_) | Self::UInt64(_) | Self::Float64(_) => 4,
        }
    }

    /// Width of the decoded value in bits
    pub fn bit_width(&self) -> u32 {
        match self {
            Self::Boolean => 1,
            Self::Int8 | Self::UInt8 => 8,
            Self::Int16(_) | Self::UInt16(_) => 16,
            Self::Int32(_) | Self::UInt32(_) | Self::Float32(_) => 32,
            Self::Int64(_) | Self::UInt64(_) | Self::Float64(_) => 64,
        }
    }

    /// Check if this is a signed integer type
    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            Self::Int8 | Self::Int16(_) | Self::Int32(_) | Self::Int64(_)
        )
    }

    pub fn is_integer(&self) -> bool {
        !matches!(self, Self::Boolean | Self::Float32(_) | Self::Float64(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float32(_) | Self::Float64(_))
    }

    /// Whether a scaling factor affects the result
    pub fn is_scaled(&self) -> bool {
        !matches!(self, Self::Boolean)
    }

    /// Name of the value width, without byte order
    pub fn width_name(&self) -> &'static str {
        match self {
            Self::Boolean => "bool",
            Self::Int8 => "int8",
            Self::UInt8 => "uint8",
            Self::Int16(_) => "int16",
            Self::UInt16(_) => "uint16",
            Self::Int32(_) => "int32",
            Self::UInt32(_) => "uint32",
            Self::Int64(_) => "int64",
            Self::UInt64(_) => "uint64",
            Self::Float32(_) => "float32",
            Self::Float64(_) => "float64",
        }
    }

    /// Byte order label (`"CDAB"`, ...), `None` for single-byte types
    pub fn order_label(&self) -> Option<&'static str> {
        match self {
            Self::Boolean | Self::Int8 | Self::UInt8 => None,
            Self::Int16(order) | Self::UInt16(order) => Some(order.as_str()),
            Self::Int32(order) | Self::UInt32(order) | Self::Float32(order) => {
                Some(order.as_str())
            },
            Self::Int64(order) | Self::UInt64(order) | Self::Float64(order) => {
                Some(order.as_str())
            },
        }
    }

    /// Parse a data type name (case-insensitive)
    ///
    /// Accepts the canonical names (`int16_ba`, `uint32_cdab`,
    /// `float64_hgfedcba`), short forms (`i32_cdab`, `f32`, `float`,
    /// `double`), the `signed`/`unsigned` spellings used by older point
    /// tables (`int32_unsigned_cdab`), and a bare width (`int32`) which means
    /// big-endian order.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let mut tokens: Vec<&str> = normalized
            .split('_')
            .filter(|t| !t.is_empty() && !matches!(*t, "modbus" | "ieee"))
            .collect();

        let order = if tokens.last().is_some_and(|t| is_order_label(t)) {
            tokens.pop()
        } else {
            None
        };

        let base = Base::parse(&tokens.join("_"))?;
        base.with_order(order)
    }
}

fn is_order_label(token: &str) -> bool {
    matches!(token.len(), 2 | 4 | 8) && token.bytes().all(|b| (b'a'..=b'h').contains(&b))
}

/// Width/signedness part of a name
#[derive(Debug, Clone, Copy)]
enum Base {
    Bool,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl Base {
    fn parse(name: &str) -> Option<Self> {
        let base = match name {
            "bool" | "boolean" | "bit" | "bit_boolean" | "coil" => Self::Bool,
            "int8" | "i8" | "int8_signed" => Self::I8,
            "uint8" | "u8" | "int8_unsigned" => Self::U8,
            "int16" | "i16" | "int16_signed" => Self::I16,
            "uint16" | "u16" | "int16_unsigned" => Self::U16,
            "int32" | "i32" | "int32_signed" => Self::I32,
            "uint32" | "u32" | "int32_unsigned" => Self::U32,
            "int64" | "i64" | "int64_signed" => Self::I64,
            "uint64" | "u64" | "int64_unsigned" => Self::U64,
            "float32" | "f32" | "float" => Self::F32,
            "float64" | "f64" | "double" => Self::F64,
            _ => return None,
        };
        Some(base)
    }

    fn with_order(self, order: Option<&str>) -> Option<DataType> {
        let data_type = match self {
            Self::Bool | Self::I8 | Self::U8 if order.is_some() => return None,
            Self::Bool => DataType::Boolean,
            Self::I8 => DataType::Int8,
            Self::U8 => DataType::UInt8,
            Self::I16 => DataType::Int16(order16(order)?),
            Self::U16 => DataType::UInt16(order16(order)?),
            Self::I32 => DataType::Int32(order32(order)?),
            Self::U32 => DataType::UInt32(order32(order)?),
            Self::F32 => DataType::Float32(order32(order)?),
            Self::I64 => DataType::Int64(order64(order)?),
            Self::U64 => DataType::UInt64(order64(order)?),
            Self::F64 => DataType::Float64(order64(order)?),
        };
        Some(data_type)
    }
}

fn order16(label: Option<&str>) -> Option<ByteOrder16> {
    label.map_or(Some(ByteOrder16::default()), ByteOrder16::parse)
}

fn order32(label: Option<&str>) -> Option<ByteOrder32> {
    label.map_or(Some(ByteOrder32::default()), ByteOrder32::parse)
}

fn order64(label: Option<&str>) -> Option<ByteOrder64> {
    label.map_or(Some(ByteOrder64::default()), ByteOrder64::parse)
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.order_label() {
            Some(order) => write!(f, "{}_{}", self.width_name(), order.to_ascii_lowercase()),
            None => write!(f, "{}", self.width_name()),
        }
    }
}

impl FromStr for DataType {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DecodeError::UnknownTypeName(s.to_string()))
    }
}

impl TryFrom<String> for DataType {
    type Error = DecodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DataType> for String {
    fn from(value: DataType) -> Self {
        value.to_string()
    }
}
