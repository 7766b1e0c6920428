//! regconv - Register decoding tool for VoltageEMS
//!
//! Decodes raw field-bus register words the same way the services do,
//! for checking point tables against values read off a device.

mod commands;
mod config;
mod logging;
mod points;
mod words;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use voltage_regconv::DataType;

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(name = "regconv")]
#[command(about = "Decode field-bus register words into typed values")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (toml, yaml or json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides configuration)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode register words as one data type
    Decode {
        /// Data type name, e.g. int16_ba, uint32_cdab, float64_abcdefgh
        data_type: DataType,

        /// Register words in transmission order (hex, or #decimal)
        #[arg(required = true)]
        words: Vec<String>,

        /// Scaling factor (default from configuration)
        #[arg(short, long)]
        scale: Option<f64>,

        /// Bit position for bool
        #[arg(short, long, default_value_t = 0)]
        bit: u8,
    },

    /// Decode a point table against a register block
    Map {
        /// Point table file (toml, yaml or json)
        #[arg(short, long)]
        points: PathBuf,

        /// Register block in transmission order, starting at offset 0
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List every data type with its code and register count
    Types,

    /// Describe a numeric conversion error code
    Explain {
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let config = config::load_config(&cwd, cli.config.as_deref())?;
    logging::init_logging(&config, cli.verbose)?;
    debug!(?config, "Configuration loaded");

    let format = cli.format.unwrap_or(config.format);

    let output = match cli.command {
        Commands::Decode {
            data_type,
            words,
            scale,
            bit,
        } => commands::decode(
            data_type,
            &words,
            scale.unwrap_or(config.default_scale),
            bit,
            format,
        )?,
        Commands::Map { points, words } => {
            commands::map(&points, &words, config.default_scale, format)?
        },
        Commands::Types => commands::types(format)?,
        Commands::Explain { code } => commands::explain(code, format)?,
    };

    println!("{}", output);
    Ok(())
}
