//! Register Decoding Error Types
//!
//! Every failure carries a stable numeric code (see [`ErrorKind`]) so that
//! point tables and logs written against the numeric codes keep working.

use thiserror::Error;

use crate::DataType;

/// Result type for voltage-regconv operations
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Stable error categories and their numeric codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Success,
    NullPointer,
    InvalidType,
    InvalidBitPosition,
    InsufficientRegisters,
    Unknown,
}

impl ErrorKind {
    pub const ALL: [Self; 6] = [
        Self::Success,
        Self::NullPointer,
        Self::InvalidType,
        Self::InvalidBitPosition,
        Self::InsufficientRegisters,
        Self::Unknown,
    ];

    pub fn code(&self) -> i32 {
        match self {
            Self::Success => 0,
            Self::NullPointer => -1,
            Self::InvalidType => -2,
            Self::InvalidBitPosition => -3,
            Self::InsufficientRegisters => -4,
            Self::Unknown => -5,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Fixed human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::NullPointer => "Null pointer error",
            Self::InvalidType => "Invalid data type",
            Self::InvalidBitPosition => "Invalid bit position (must be 0-15)",
            Self::InsufficientRegisters => "Insufficient registers for conversion",
            Self::Unknown => "Unknown error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Description for a numeric error code
///
/// Codes that are not part of [`ErrorKind`] yield `"Unrecognized error code"`.
pub fn error_description(code: i32) -> &'static str {
    ErrorKind::from_code(code)
        .map(|kind| kind.description())
        .unwrap_or("Unrecognized error code")
}

/// Register decoding errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A required input was absent
    ///
    /// Borrowed slices cannot be null, so the decoders never produce this;
    /// it exists so code -1 keeps its meaning across integrations.
    #[error("Null pointer error")]
    NullPointer,

    /// Data type not handled by the called decoder
    #[error("Invalid data type: {data_type} is not accepted by the {decoder} decoder")]
    InvalidType {
        data_type: DataType,
        decoder: &'static str,
    },

    /// Raw numeric tag outside the data type table
    #[error("Invalid data type: unknown type code {0}")]
    UnknownTypeCode(u32),

    /// Data type name that does not parse
    #[error("Invalid data type: unknown type name '{0}'")]
    UnknownTypeName(String),

    #[error("Invalid bit position {0} (must be 0-15)")]
    InvalidBitPosition(u8),

    #[error("Insufficient registers for conversion: need {required}, got {actual}")]
    InsufficientRegisters { required: usize, actual: usize },

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl DecodeError {
    pub fn invalid_type(data_type: DataType, decoder: &'static str) -> Self {
        DecodeError::InvalidType { data_type, decoder }
    }

    /// Too few registers for `data_type`
    pub fn insufficient(data_type: DataType, actual: usize) -> Self {
        DecodeError::InsufficientRegisters {
            required: data_type.register_count(),
            actual,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        DecodeError::Unknown(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::NullPointer => ErrorKind::NullPointer,
            DecodeError::InvalidType { .. }
            | DecodeError::UnknownTypeCode(_)
            | DecodeError::UnknownTypeName(_) => ErrorKind::InvalidType,
            DecodeError::InvalidBitPosition(_) => ErrorKind::InvalidBitPosition,
            DecodeError::InsufficientRegisters { .. } => ErrorKind::InsufficientRegisters,
            DecodeError::Unknown(_) => ErrorKind::Unknown,
        }
    }

    /// Numeric code of this error's kind
    pub fn code(&self) -> i32 {
        self.kind().code()
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::bytes::ByteOrder32;

    #[test]
    fn test_error_description_known_codes() {
        assert_eq!(error_description(0), "Success");
        assert_eq!(error_description(-1), "Null pointer error");
        assert_eq!(error_description(-2), "Invalid data type");
        assert_eq!(error_description(-3), "Invalid bit position (must be 0-15)");
        assert_eq!(error_description(-4), "Insufficient registers for conversion");
        assert_eq!(error_description(-5), "Unknown error");
    }

    #[test]
    fn test_error_description_unrecognized() {
        assert_eq!(error_description(1), "Unrecognized error code");
        assert_eq!(error_description(-6), "Unrecognized error code");
        assert_eq!(error_description(i32::MIN), "Unrecognized error code");
    }

    #[test]
    fn test_kind_code_roundtrip() {
        for kind in ErrorKind::ALL {
            assert_eq!(ErrorKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_error_kinds() {
        let err = DecodeError::invalid_type(DataType::Float32(ByteOrder32::Abcd), "int32");
        assert_eq!(err.kind(), ErrorKind::InvalidType);
        assert_eq!(err.code(), -2);
        assert!(err.to_string().contains("float32_abcd"));

        assert_eq!(DecodeError::UnknownTypeCode(99).code(), -2);
        assert_eq!(DecodeError::UnknownTypeName("x".into()).code(), -2);
        assert_eq!(DecodeError::InvalidBitPosition(16).code(), -3);
        assert_eq!(DecodeError::NullPointer.code(), -1);
        assert_eq!(DecodeError::unknown("boom").code(), -5);

        let err = DecodeError::insufficient(DataType::Int32(ByteOrder32::Cdab), 1);
        assert_eq!(
            err,
            DecodeError::InsufficientRegisters {
                required: 2,
                actual: 1,
            }
        );
        assert_eq!(err.code(), -4);
    }
}
