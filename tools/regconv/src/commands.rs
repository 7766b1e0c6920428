//! Command implementations
//!
//! Each command renders its result to a `String`; `main` only prints it.

use std::path::Path;

use anyhow::{Context, Result};
use colored::*;
use serde_json::json;
use tracing::{info, warn};
use voltage_regconv::{convert, error_description, DataType, ErrorKind};

use crate::config::OutputFormat;
use crate::points::{PointTable, ReadingView};
use crate::words::parse_words;

/// Decode one value from words given on the command line
pub fn decode(
    data_type: DataType,
    words: &[String],
    scale: f64,
    bit: u8,
    format: OutputFormat,
) -> Result<String> {
    let registers = parse_words(words)?;
    info!(data_type = %data_type, count = registers.len(), "Decoding registers");

    let value = convert(&registers, data_type, bit, scale)
        .with_context(|| format!("Failed to decode {} from {:04X?}", data_type, registers))?;

    let rendered = match format {
        OutputFormat::Text => value.to_string(),
        OutputFormat::Json => json!({
            "data_type": data_type,
            "type": value.type_name(),
            "value": value,
        })
        .to_string(),
    };
    Ok(rendered)
}

/// Decode every point of a point table against one register block
pub fn map(
    points: &Path,
    words: &[String],
    default_scale: f64,
    format: OutputFormat,
) -> Result<String> {
    let table = PointTable::load(points)
        .with_context(|| format!("Failed to load point table {}", points.display()))?;
    let registers = parse_words(words)?;

    if registers.len() < table.span() {
        warn!(
            have = registers.len(),
            need = table.span(),
            "Register block shorter than point table span"
        );
    }

    let readings = table.decode(&registers, default_scale);

    let rendered = match format {
        OutputFormat::Text => readings
            .iter()
            .map(|reading| match &reading.result {
                Ok(value) => format!("{} = {}", reading.name, value),
                Err(err) => format!("{} ! {}", reading.name, err),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => {
            let views: Vec<ReadingView<'_>> = readings.iter().map(ReadingView::from).collect();
            serde_json::to_string_pretty(&views)?
        },
    };
    Ok(rendered)
}

/// List every data type with its wire code and register count
pub fn types(format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => {
            let mut lines = vec![format!(
                "{:>4}  {:<18} {:>4}",
                "CODE".bold(),
                "NAME".bold(),
                "REGS".bold()
            )];
            lines.extend(DataType::ALL.iter().map(|t| {
                format!(
                    "{:>4}  {:<18} {:>4}",
                    t.code(),
                    t.to_string().cyan(),
                    t.register_count()
                )
            }));
            lines.join("\n")
        },
        OutputFormat::Json => {
            let list: Vec<_> = DataType::ALL
                .iter()
                .map(|t| {
                    json!({
                        "code": t.code(),
                        "name": t,
                        "registers": t.register_count(),
                        "bits": t.bit_width(),
                    })
                })
                .collect();
            serde_json::to_string_pretty(&list)?
        },
    };
    Ok(rendered)
}

/// Describe a numeric error code
pub fn explain(code: i32, format: OutputFormat) -> Result<String> {
    let description = error_description(code);
    let rendered = match format {
        OutputFormat::Text => format!("{}: {}", code, description),
        OutputFormat::Json => json!({
            "code": code,
            "known": ErrorKind::from_code(code).is_some(),
            "description": description,
        })
        .to_string(),
    };
    Ok(rendered)
}
