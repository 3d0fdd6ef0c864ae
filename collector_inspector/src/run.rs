use crate::config::{Config, OutputFormat};
use crate::input;
use crate::render;
use anyhow::{Context, Result};
use collector_types::{decode_with, DecodeOptions, Record, COLLECTOR_PAYLOAD_SCHEMA};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Per-run counts of candidate lines.
#[derive(PartialEq, Eq, Default, Debug)]
pub struct Summary {
    pub decoded: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Summary {
    /// A run fails when something looked like a payload and nothing decoded.
    pub fn is_failure(&self) -> bool {
        self.decoded == 0 && self.failed > 0
    }
}

fn decode_line(line: &str, conf: &Config, opts: &DecodeOptions) -> Result<Record> {
    let buf = input::transport_decode(line, conf.max_input_bytes)?;
    let rec = decode_with(&buf, &COLLECTOR_PAYLOAD_SCHEMA, opts)?;
    Ok(rec)
}

fn write_record(w: &mut impl Write, rec: &Record, format: OutputFormat) -> Result<()> {
    let summary = match format {
        OutputFormat::Summary => render::record_to_summary(rec),
        OutputFormat::Json => None,
    };
    match summary {
        Some(s) => writeln!(w, "{s}")?,
        None => writeln!(w, "{}", render::record_to_json(rec))?,
    }
    Ok(())
}

/// Decodes every payload line of `r` and writes the rendered records to `w`.
///
/// A line that fails to decode is logged with its raw content and does not stop the run.
pub fn run(conf: &Config, r: impl BufRead, w: &mut impl Write) -> Result<Summary> {
    let opts = conf.decode_options();
    let mut summary = Summary::default();

    for (line_i, line) in r.lines().enumerate() {
        let line_no = line_i + 1;
        let line = line.with_context(|| format!("Reading line {line_no}"))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !input::is_transport_encoded(line) {
            debug!(line_no, "not a transport-encoded payload; skipped");
            summary.skipped += 1;
            continue;
        }

        match decode_line(line, conf, &opts) {
            Ok(rec) => {
                write_record(w, &rec, conf.format)?;
                summary.decoded += 1;
            }
            Err(err) => {
                warn!(line_no, raw = line, "{err:#}");
                summary.failed += 1;
            }
        }
    }

    w.flush()?;
    Ok(summary)
}
