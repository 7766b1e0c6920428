//! Binary data processing utilities
//!
//! Byte/word order handling, bit extraction and raw register reassembly.
//! Nothing in here scales, validates lengths or logs; see [`crate::decode`].

pub mod bit_ops;
pub mod byte_order;
pub mod conversions;

pub use bit_ops::*;
pub use byte_order::{ByteOrder16, ByteOrder32, ByteOrder64, WordLayout};
pub use conversions::*;
