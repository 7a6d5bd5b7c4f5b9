//! CLI argument parsing for lfsr-sentinel

use crate::bits::InputFormat;
use clap::{Parser, ValueEnum};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

/// How the input stream is encoded
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum InputEncoding {
    /// ASCII '0'/'1' characters (whitespace, ',' and '_' ignored)
    Bits,
    /// Hex text, bytes expanded MSB-first
    Hex,
    /// Raw binary, bytes expanded MSB-first
    Raw,
}

impl From<InputEncoding> for InputFormat {
    fn from(encoding: InputEncoding) -> Self {
        match encoding {
            InputEncoding::Bits => InputFormat::Bits,
            InputEncoding::Hex => InputFormat::Hex,
            InputEncoding::Raw => InputFormat::Raw,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lfsr-sentinel")]
#[command(version)]
#[command(about = "Flag low linear complexity in bit streams (Berlekamp-Massey)")]
#[command(long_about = None)]
pub struct Cli {
    /// Input file ('-' or omitted reads stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Input encoding
    #[arg(short = 'i', long = "input-format", value_enum, default_value = "bits")]
    pub input_format: InputEncoding,

    /// Window size in bits (default: 100, or the config file value)
    #[arg(short = 'n', long = "capacity", value_name = "BITS")]
    pub capacity: Option<usize>,

    /// Minimum acceptable complexity ratio in (0, 1] (default: 0.8)
    #[arg(short = 't', long = "threshold", value_name = "RATIO")]
    pub threshold: Option<f64>,

    /// TOML file with monitor configuration (flags override its values)
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of bits delivered to the monitor per call
    #[arg(long = "chunk-size", value_name = "BITS", default_value = "8")]
    pub chunk_size: NonZeroUsize,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write monitor records to FILE instead of the tracing subscriber
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Show summary counters after the per-chunk output
    #[arg(short = 's', long = "summary")]
    pub summary: bool,

    /// Run the built-in scenario: 40 random bits then a period-2 pattern
    #[arg(long = "demo")]
    pub demo: bool,

    /// RNG seed for --demo
    #[arg(long = "seed", value_name = "SEED", default_value = "42")]
    pub seed: u64,

    /// Enable debug tracing output (to stderr)
    #[arg(long = "debug")]
    pub debug: bool,
}
