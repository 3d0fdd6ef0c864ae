use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use collector_types::{CollectorPayload, DecodedValue, Record};
use regex::Regex;
use serde_json::{json, Map, Value};
use std::fmt::Write;
use std::str;
use std::sync::OnceLock;

fn body_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9/_+-]{4})+([A-Za-z0-9/_+=-]{1,4})?$")
            .expect("valid literal pattern")
    })
}

/// Unwraps a body that is itself base64 text. Anything else is returned as is.
pub fn unwrap_body(body: &[u8]) -> Vec<u8> {
    let Ok(text) = str::from_utf8(body) else {
        return body.to_vec();
    };
    if !body_pattern().is_match(text) {
        return body.to_vec();
    }
    [STANDARD, URL_SAFE, STANDARD_NO_PAD, URL_SAFE_NO_PAD]
        .iter()
        .find_map(|engine| engine.decode(text).ok())
        .unwrap_or_else(|| body.to_vec())
}

fn bytes_to_json(b: &[u8]) -> Value {
    match str::from_utf8(b) {
        Ok(s) => Value::from(s),
        Err(_) => json!({ "base64": STANDARD.encode(b) }),
    }
}

pub fn value_to_json(val: &DecodedValue) -> Value {
    match val {
        DecodedValue::Bool(b) => Value::from(*b),
        DecodedValue::Int(i) => Value::from(*i),
        DecodedValue::Bytes(b) => bytes_to_json(b),
        DecodedValue::List(elems) => Value::Array(elems.iter().map(value_to_json).collect()),
    }
}

/// Field order is preserved.
pub fn record_to_json(rec: &Record) -> Value {
    let mut obj = Map::with_capacity(rec.len());
    for (name, val) in rec.iter() {
        let json_val = match (name.as_str(), val) {
            ("body", DecodedValue::Bytes(b)) => bytes_to_json(&unwrap_body(b)),
            _ => value_to_json(val),
        };
        obj.insert(name.clone(), json_val);
    }
    Value::Object(obj)
}

/// `METHOD URL` and indented headers, or `None` if the record is not a request.
pub fn record_to_summary(rec: &Record) -> Option<String> {
    let payload = CollectorPayload::new(rec)?;
    let mut out = format!("{} {}", payload.method(), payload.url());
    for (name, value) in payload.headers() {
        // Writing into a String is infallible.
        let _ = write!(out, "\n    {name}: {value}");
    }
    Some(out)
}
