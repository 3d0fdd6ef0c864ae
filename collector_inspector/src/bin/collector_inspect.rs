//! Decodes base64-encoded collector payloads, one per input line.
//!
//! ```bash
//! # From a file of bad rows' payload strings
//! collector_inspect --input payloads.txt --format summary
//!
//! # From stdin, with the Apache Thrift tag numbering
//! COLLECTOR_INSPECT_DIALECT=standard collector_inspect < payloads.txt
//! ```

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use collector_inspector::config::Config;
use collector_inspector::run;
use std::fs::File;
use std::io::{self, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let conf = Config::parse();

    let stdout = io::stdout();
    let mut w = stdout.lock();
    let summary = match &conf.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Opening {path:?}"))?;
            run::run(&conf, BufReader::new(file), &mut w)?
        }
        None => run::run(&conf, io::stdin().lock(), &mut w)?,
    };

    info!(
        decoded = summary.decoded,
        failed = summary.failed,
        skipped = summary.skipped,
        "Inspection finished."
    );

    if summary.is_failure() {
        return Err(anyhow!("No payload could be decoded."));
    }
    Ok(())
}
