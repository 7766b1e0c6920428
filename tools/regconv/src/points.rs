//! Point tables: named conversions over a register block
//!
//! A point table lists, for each signal, where it starts in the polled
//! register block and how to decode it:
//!
//! ```yaml
//! points:
//!   - name: grid_voltage
//!     offset: 0
//!     data_type: float32_cdab
//!   - name: breaker_closed
//!     offset: 2
//!     data_type: bool
//!     bit: 3
//!   - name: energy_kwh
//!     offset: 3
//!     data_type: uint32_abcd
//!     scale: 0.01
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use voltage_regconv::{Conversion, DataType, DecodeError, Value};

use crate::config::{self, ConfigError};

/// One named point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointDef {
    pub name: String,
    /// Index of the first register in the block
    pub offset: usize,
    pub data_type: DataType,
    #[serde(default)]
    pub bit: u8,
    /// Falls back to the configured default scale when absent
    #[serde(default)]
    pub scale: Option<f64>,
}

impl PointDef {
    pub fn conversion(&self, default_scale: f64) -> Conversion {
        Conversion::new(self.data_type)
            .with_bit(self.bit)
            .with_scale(self.scale.unwrap_or(default_scale))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointTable {
    #[serde(default)]
    pub points: Vec<PointDef>,
}

impl PointTable {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let table: PointTable = config::load_file(path)?;
        debug!(points = table.points.len(), path = %path.display(), "Loaded point table");
        Ok(table)
    }

    /// Registers a block must hold to satisfy every point
    ///
    /// Saturates at `usize::MAX` for offsets at the end of the address range.
    pub fn span(&self) -> usize {
        self.points
            .iter()
            .map(|p| p.offset.saturating_add(p.data_type.register_count()))
            .max()
            .unwrap_or(0)
    }

    /// Decode every point against `registers`
    ///
    /// A failing point is reported in its reading and does not stop the others.
    pub fn decode(&self, registers: &[u16], default_scale: f64) -> Vec<PointReading> {
        self.points
            .iter()
            .map(|point| {
                let block = registers.get(point.offset..).unwrap_or(&[]);
                let result = point.conversion(default_scale).apply(block);
                if let Err(err) = &result {
                    warn!(point = %point.name, offset = point.offset, "Point decode failed: {}", err);
                }
                PointReading {
                    name: point.name.clone(),
                    offset: point.offset,
                    data_type: point.data_type,
                    result,
                }
            })
            .collect()
    }
}

/// Outcome for one point
#[derive(Debug, Clone, PartialEq)]
pub struct PointReading {
    pub name: String,
    pub offset: usize,
    pub data_type: DataType,
    pub result: Result<Value, DecodeError>,
}

/// Serializable view of a reading
#[derive(Debug, Serialize)]
pub struct ReadingView<'a> {
    pub name: &'a str,
    pub offset: usize,
    pub data_type: DataType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
}

impl<'a> From<&'a PointReading> for ReadingView<'a> {
    fn from(reading: &'a PointReading) -> Self {
        let (value, error, code) = match &reading.result {
            Ok(value) => (Some(*value), None, None),
            Err(err) => (None, Some(err.to_string()), Some(err.code())),
        };
        Self {
            name: &reading.name,
            offset: reading.offset,
            data_type: reading.data_type,
            value,
            error,
            code,
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use std::fs;
    use voltage_regconv::{ByteOrder32, ErrorKind};

    fn sample_table() -> PointTable {
        PointTable {
            points: vec![
                PointDef {
                    name: "grid_voltage".into(),
                    offset: 0,
                    data_type: DataType::Float32(ByteOrder32::Cdab),
                    bit: 0,
                    scale: None,
                },
                PointDef {
                    name: "breaker_closed".into(),
                    offset: 2,
                    data_type: DataType::Boolean,
                    bit: 3,
                    scale: None,
                },
                PointDef {
                    name: "energy_kwh".into(),
                    offset: 3,
                    data_type: DataType::UInt32(ByteOrder32::Abcd),
                    bit: 0,
                    scale: Some(0.5),
                },
            ],
        }
    }

    #[test]
    fn test_span() {
        assert_eq!(sample_table().span(), 5);
        assert_eq!(PointTable::default().span(), 0);
    }

    #[test]
    fn test_decode_block() {
        // 230.0f32 = 0x43660000, sent CDAB
        let regs = [0x0000, 0x4366, 0b1000, 0x0000, 0x0064];
        let readings = sample_table().decode(&regs, 1.0);

        assert_eq!(readings[0].result, Ok(Value::F32(230.0)));
        assert_eq!(readings[1].result, Ok(Value::Bool(true)));
        assert_eq!(readings[2].result, Ok(Value::U32(50)));
    }

    #[test]
    fn test_failing_point_does_not_stop_others() {
        let regs = [0x0000, 0x4366, 0x0000, 0x0001];
        let readings = sample_table().decode(&regs, 1.0);

        assert!(readings[0].result.is_ok());
        assert!(readings[1].result.is_ok());
        let err = readings[2].result.as_ref().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientRegisters);
    }

    #[test]
    fn test_offset_past_block_is_insufficient() {
        let readings = sample_table().decode(&[0x0000], 1.0);
        let err = readings[2].result.as_ref().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientRegisters);
    }

    #[test]
    fn test_default_scale_applies_only_without_point_scale() {
        let regs = [0x0000, 0x4366, 0x0000, 0x0000, 0x0064];
        let readings = sample_table().decode(&regs, 2.0);
        assert_eq!(readings[0].result, Ok(Value::F32(460.0)));
        assert_eq!(readings[2].result, Ok(Value::U32(50)));
    }

    #[test]
    fn test_offset_at_end_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.yaml");
        fs::write(
            &path,
            format!(
                "points:\n  - name: far\n    offset: {}\n    data_type: uint32\n",
                usize::MAX
            ),
        )
        .unwrap();

        let table = PointTable::load(&path).unwrap();
        assert_eq!(table.span(), usize::MAX);

        let readings = table.decode(&[1, 2], 1.0);
        assert_eq!(
            readings[0].result,
            Err(DecodeError::InsufficientRegisters {
                required: 2,
                actual: 0
            })
        );
    }

    #[test]
    fn test_load_yaml_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.yaml");
        fs::write(
            &path,
            "points:\n  - name: flow\n    offset: 1\n    data_type: INT16_BA\n    scale: 0.1\n",
        )
        .unwrap();

        let table = PointTable::load(&path).unwrap();
        assert_eq!(table.points.len(), 1);
        assert_eq!(table.points[0].data_type.to_string(), "int16_ba");
        assert_eq!(table.points[0].scale, Some(0.1));
        assert_eq!(table.points[0].bit, 0);
    }

    #[test]
    fn test_load_rejects_unknown_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.toml");
        fs::write(
            &path,
            "[[points]]\nname = \"x\"\noffset = 0\ndata_type = \"int128\"\n",
        )
        .unwrap();

        assert!(PointTable::load(&path).is_err());
    }

    #[test]
    fn test_reading_view() {
        let readings = sample_table().decode(&[0x0000, 0x4366], 1.0);

        let ok = serde_json::to_value(ReadingView::from(&readings[0])).unwrap();
        assert_eq!(ok["value"], serde_json::json!(230.0));
        assert!(ok.get("error").is_none());

        let failed = serde_json::to_value(ReadingView::from(&readings[1])).unwrap();
        assert_eq!(failed["code"], serde_json::json!(-4));
        assert_eq!(failed["data_type"], serde_json::json!("bool"));
    }
}
