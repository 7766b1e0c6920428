//! End-to-end decoding behaviour through the public API

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use proptest::prelude::*;
use voltage_regconv::bytes::{regs_to_bytes_4, regs_to_bytes_8};
use voltage_regconv::{
    convert, convert_code, decode_u32, error_description, ByteOrder16, ByteOrder32, ByteOrder64,
    DataType, DecodeError, ErrorKind, Value,
};

fn words_of_u32(bits: u32) -> [u16; 2] {
    [(bits >> 16) as u16, bits as u16]
}

fn words_of_u64(bits: u64) -> [u16; 4] {
    [
        (bits >> 48) as u16,
        (bits >> 32) as u16,
        (bits >> 16) as u16,
        bits as u16,
    ]
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn int8_signed_low_byte_ff_is_minus_one() {
    let value = convert(&[0x00FF], DataType::Int8, 0, 1.0).unwrap();
    assert_eq!(value, Value::I8(-1));
}

#[test]
fn float32_abcd_one() {
    let value = convert(&[0x3F80, 0x0000], DataType::Float32(ByteOrder32::Abcd), 0, 1.0).unwrap();
    assert_eq!(value, Value::F32(1.0));
}

#[test]
fn uint32_cdab_scaled_by_two() {
    let value = convert(&[0x0001, 0x0000], DataType::UInt32(ByteOrder32::Cdab), 0, 2.0).unwrap();
    assert_eq!(value, Value::U32(2));
}

#[test]
fn boolean_bit_position_boundaries() {
    assert_eq!(convert(&[0x8001], DataType::Boolean, 0, 1.0), Ok(Value::Bool(true)));
    assert_eq!(convert(&[0x8001], DataType::Boolean, 15, 1.0), Ok(Value::Bool(true)));

    let err = convert(&[0x8001], DataType::Boolean, 16, 1.0).unwrap_err();
    assert_eq!(err, DecodeError::InvalidBitPosition(16));
    assert_eq!(err.kind(), ErrorKind::InvalidBitPosition);
}

#[test]
fn empty_registers_fail_for_every_data_type() {
    for data_type in DataType::ALL {
        let err = convert(&[], data_type, 0, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientRegisters, "{}", data_type);
        assert_eq!(
            error_description(err.code()),
            "Insufficient registers for conversion"
        );
    }
}

#[test]
fn short_register_blocks_fail_instead_of_reading_past_the_end() {
    for data_type in DataType::ALL {
        let needed = data_type.register_count();
        let regs = vec![0xFFFFu16; needed - 1];
        if regs.is_empty() {
            continue;
        }
        let err = convert(&regs, data_type, 0, 1.0).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InsufficientRegisters {
                required: needed,
                actual: needed - 1,
            },
            "{}",
            data_type
        );
    }
}

#[test]
fn every_data_type_decodes_with_enough_registers() {
    let regs = [0x1234, 0x5678, 0x9ABC, 0xDEF0];
    for data_type in DataType::ALL {
        assert!(convert(&regs, data_type, 0, 1.0).is_ok(), "{}", data_type);
        assert!(convert_code(&regs, data_type.code(), 0, 1.0).is_ok());
    }
}

#[test]
fn sixty_four_bit_layout_rules() {
    let regs = [0x0102, 0x0304, 0x0506, 0x0708];
    let expected = [
        (ByteOrder64::Abcdefgh, 0x0102_0304_0506_0708u64),
        (ByteOrder64::Hgfedcba, 0x0201_0403_0605_0807),
        (ByteOrder64::Badcfehg, 0x0201_0403_0605_0807),
        (ByteOrder64::Cdabghef, 0x0304_0102_0708_0506),
        (ByteOrder64::Dcbahgfe, 0x0102_0304_0506_0708),
        (ByteOrder64::Ghefcdab, 0x0201_0403_0605_0807),
        (ByteOrder64::Fehgbadc, 0x0403_0201_0807_0605),
        (ByteOrder64::Efghabcd, 0x0304_0102_0708_0506),
    ];

    for (order, raw) in expected {
        assert_eq!(
            convert(&regs, DataType::UInt64(order), 0, 1.0),
            Ok(Value::U64(raw)),
            "{}",
            order
        );
        assert_eq!(
            convert(&regs, DataType::Float64(order), 0, 1.0),
            Ok(Value::F64(f64::from_bits(raw))),
            "{}",
            order
        );
    }
}

#[test]
fn signed_64_bit_reinterprets_twos_complement() {
    let regs = [0xFFFF, 0xFFFF, 0xFFFF, 0xFF38];
    assert_eq!(
        convert(&regs, DataType::Int64(ByteOrder64::Abcdefgh), 0, 1.0),
        Ok(Value::I64(-200))
    );
    assert_eq!(
        convert(&regs, DataType::Int64(ByteOrder64::Abcdefgh), 0, 0.01),
        Ok(Value::I64(-2))
    );
}

#[test]
fn scaled_overflow_wraps_to_target_width() {
    assert_eq!(
        convert(&[0x00C8], DataType::UInt8, 0, 2.0),
        Ok(Value::U8(144))
    );
    assert_eq!(
        convert(&[0x7FFF], DataType::Int16(ByteOrder16::Ab), 0, 2.0),
        Ok(Value::I16(-2))
    );
}

#[test]
fn unknown_type_code_is_invalid_type() {
    let err = convert_code(&[0x0000], 200, 0, 1.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidType);
    assert_eq!(error_description(err.code()), "Invalid data type");
    assert_eq!(error_description(42), "Unrecognized error code");
}

#[test]
fn names_parse_back_to_the_same_conversion() {
    let regs = [0x4049, 0x0FDB];
    let by_name = convert(&regs, "float32_abcd".parse().unwrap(), 0, 1.0).unwrap();
    let by_code = convert_code(&regs, 31, 0, 1.0).unwrap();
    assert_eq!(by_name, by_code);
    assert!((by_name.as_f64() - std::f64::consts::PI).abs() < 1e-6);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn uint16_identity_and_swap(word in any::<u16>()) {
        prop_assert_eq!(
            convert(&[word], DataType::UInt16(ByteOrder16::Ab), 0, 1.0),
            Ok(Value::U16(word))
        );
        prop_assert_eq!(
            convert(&[word], DataType::UInt16(ByteOrder16::Ba), 0, 1.0),
            Ok(Value::U16(word.swap_bytes()))
        );
    }

    #[test]
    fn dcba_matches_abcd_of_reversed_bytes(w0 in any::<u16>(), w1 in any::<u16>()) {
        let dcba = decode_u32(&[w0, w1], ByteOrder32::Dcba, 1.0).unwrap();
        let reversed = [w1.swap_bytes(), w0.swap_bytes()];
        let abcd = decode_u32(&reversed, ByteOrder32::Abcd, 1.0).unwrap();
        prop_assert_eq!(dcba, abcd);
    }

    #[test]
    fn layouts_only_permute_bytes(regs in any::<[u16; 4]>()) {
        let mut source = regs_to_bytes_8(&regs, ByteOrder64::Abcdefgh);
        source.sort_unstable();
        for order in ByteOrder64::ALL {
            let mut arranged = regs_to_bytes_8(&regs, order);
            arranged.sort_unstable();
            prop_assert_eq!(arranged, source);
        }

        let pair = [regs[0], regs[1]];
        let mut source = regs_to_bytes_4(&pair, ByteOrder32::Abcd);
        source.sort_unstable();
        for order in ByteOrder32::ALL {
            let mut arranged = regs_to_bytes_4(&pair, order);
            arranged.sort_unstable();
            prop_assert_eq!(arranged, source);
        }
    }

    #[test]
    fn float32_abcd_roundtrip_is_bit_exact(bits in any::<u32>()) {
        let original = f32::from_bits(bits);
        prop_assume!(!original.is_nan());

        let decoded = convert(&words_of_u32(bits), DataType::Float32(ByteOrder32::Abcd), 0, 1.0)
            .unwrap();
        match decoded {
            Value::F32(v) => prop_assert_eq!(v.to_bits(), bits),
            other => prop_assert!(false, "unexpected variant {:?}", other),
        }
    }

    #[test]
    fn float64_abcdefgh_roundtrip_is_bit_exact(bits in any::<u64>()) {
        let original = f64::from_bits(bits);
        prop_assume!(!original.is_nan());

        let decoded = convert(&words_of_u64(bits), DataType::Float64(ByteOrder64::Abcdefgh), 0, 1.0)
            .unwrap();
        prop_assert_eq!(decoded, Value::F64(original));
    }

    #[test]
    fn unscaled_64_bit_integers_are_exact(bits in any::<u64>()) {
        prop_assert_eq!(
            convert(&words_of_u64(bits), DataType::UInt64(ByteOrder64::Abcdefgh), 0, 1.0),
            Ok(Value::U64(bits))
        );
        prop_assert_eq!(
            convert(&words_of_u64(bits), DataType::Int64(ByteOrder64::Abcdefgh), 0, 1.0),
            Ok(Value::I64(bits as i64))
        );
    }
}
