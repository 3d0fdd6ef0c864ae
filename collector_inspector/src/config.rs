use clap::{Parser, ValueEnum};
use collector_types::serde::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
use collector_types::{DecodeOptions, TagDialect};
use std::path::PathBuf;

pub const ENV_VAR_INPUT: &str = "COLLECTOR_INSPECT_INPUT";
pub const ENV_VAR_FORMAT: &str = "COLLECTOR_INSPECT_FORMAT";
pub const ENV_VAR_MAX_DEPTH: &str = "COLLECTOR_INSPECT_MAX_DEPTH";
pub const ENV_VAR_MAX_INPUT_BYTES: &str = "COLLECTOR_INSPECT_MAX_INPUT_BYTES";
pub const ENV_VAR_DIALECT: &str = "COLLECTOR_INSPECT_DIALECT";
pub const ENV_VAR_STRICT: &str = "COLLECTOR_INSPECT_STRICT";

pub const DEFAULT_MAX_INPUT_BYTES: usize = 1 << 20;

#[derive(ValueEnum, PartialEq, Eq, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// One JSON object per record.
    Json,
    /// Request line and headers, for records that describe a request.
    Summary,
}

#[derive(ValueEnum, PartialEq, Eq, Clone, Copy, Debug)]
pub enum DialectArg {
    Shifted,
    Standard,
}
impl From<DialectArg> for TagDialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Shifted => TagDialect::Shifted,
            DialectArg::Standard => TagDialect::Standard,
        }
    }
}

/// Decode base64-encoded collector payloads, one per line.
#[derive(Parser, Debug)]
#[command(name = "collector-inspect")]
#[command(long_about = None)]
pub struct Config {
    /// File to read; stdin when absent
    #[arg(long, env = ENV_VAR_INPUT)]
    pub input: Option<PathBuf>,

    #[arg(long, value_enum, env = ENV_VAR_FORMAT, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Deepest allowed list/set nesting
    #[arg(
        long,
        env = ENV_VAR_MAX_DEPTH,
        default_value_t = DEFAULT_MAX_DEPTH as u64,
        value_parser = clap::value_parser!(u64).range(1..=MAX_DEPTH_LIMIT as u64),
    )]
    pub max_depth: u64,

    /// Payloads larger than this, after base64 decoding, are rejected without decoding
    #[arg(long, env = ENV_VAR_MAX_INPUT_BYTES, default_value_t = DEFAULT_MAX_INPUT_BYTES)]
    pub max_input_bytes: usize,

    #[arg(long, value_enum, env = ENV_VAR_DIALECT, default_value_t = DialectArg::Shifted)]
    pub dialect: DialectArg,

    /// Require the end tag instead of accepting a buffer that ends between fields
    #[arg(long, env = ENV_VAR_STRICT)]
    pub strict: bool,
}

impl Config {
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions::default()
            .with_max_depth(self.max_depth as usize)
            .with_dialect(self.dialect.into())
            .with_require_end_marker(self.strict)
    }
}
