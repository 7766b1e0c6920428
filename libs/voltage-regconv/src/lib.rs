//! Voltage Register Conversion Library
//!
//! Decodes raw 16-bit field-bus registers (Modbus holding/input registers
//! and the like) into typed values for VoltageEMS.
//!
//! # Architecture
//!
//! - **Bytes**: byte/word order patterns (`AB`, `CDAB`, `EFGHABCD`, ...),
//!   bit extraction and raw register reassembly
//! - **DataType**: the closed set of 43 register data types, with wire codes
//!   and names
//! - **Decoders**: one function per width class, each checking its register
//!   count
//! - **Dispatcher**: [`convert`] / [`convert_code`] route to the decoders and
//!   return a [`Value`]
//!
//! Every function is pure and synchronous; decoding never allocates.
//!
//! ```
//! use voltage_regconv::{convert, DataType, Value};
//!
//! let value = convert(&[0x3F80, 0x0000], "float32_abcd".parse().unwrap(), 0, 1.0).unwrap();
//! assert_eq!(value, Value::F32(1.0));
//! ```

pub mod bytes;
pub mod convert;
pub mod data_type;
pub mod decode;
pub mod error;
pub mod scaling;
pub mod value;

// Re-export core types
pub use bytes::{ByteOrder16, ByteOrder32, ByteOrder64};
pub use convert::{convert, convert_code, Conversion};
pub use data_type::DataType;
pub use error::{error_description, DecodeError, ErrorKind, Result};
pub use value::Value;

pub use decode::{
    decode_bool, decode_f32, decode_f64, decode_float32, decode_float64, decode_i16, decode_i32,
    decode_i64, decode_i8, decode_int32, decode_int64, decode_u16, decode_u32, decode_u64,
    decode_u8,
};
