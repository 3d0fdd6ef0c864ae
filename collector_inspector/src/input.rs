use anyhow::{anyhow, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;
use std::sync::OnceLock;

fn transport_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9/+]{4})+([A-Za-z0-9/+=]{4})?$").expect("valid literal pattern")
    })
}

/// Whether a line has the shape of a base64 transport-encoded payload.
pub fn is_transport_encoded(line: &str) -> bool {
    transport_pattern().is_match(line)
}

/// Undoes the base64 transport encoding, refusing results over `max_len` bytes.
pub fn transport_decode(line: &str, max_len: usize) -> Result<Vec<u8>> {
    // At most two padding chars.
    // Reject before allocating when even the shortest decoding is too long.
    let min_len = (line.len() / 4 * 3).saturating_sub(2);
    if min_len > max_len {
        return Err(anyhow!(
            "Payload of at least {min_len} bytes exceeds the {max_len} byte limit."
        ));
    }
    let buf = STANDARD.decode(line)?;
    if buf.len() > max_len {
        return Err(anyhow!(
            "Payload of {} bytes exceeds the {max_len} byte limit.",
            buf.len()
        ));
    }
    Ok(buf)
}
