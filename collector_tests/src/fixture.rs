use anyhow::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use collector_types::{DecodedValue, Record};

/// A synthetic Safari page view payload, base64 encoded, with the shifted tag
/// numbering. Written by [`crate::writer`] from [`collector_payload_record`].
pub const COLLECTOR_PAYLOAD_B64: &str = include_str!("../fixtures/collector_payload.b64");

pub const SCHEMA: &str = "iglu:com.snowplowanalytics.snowplow/CollectorPayload/thrift/1-0-0";
pub const IP_ADDRESS: &str = "49.255.197.126";
pub const TIMESTAMP: i64 = 1587092934000;
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_4) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/13.1 Safari/605.1.15";
pub const PATH: &str = "/com.snowplowanalytics.snowplow/tp2";
pub const BODY: &str = r#"{"schema":"iglu:com.snowplowanalytics.snowplow/payload_data/jsonschema/1-0-4","data":[{"e":"pv","url":"https://example.com/","aid":"site","p":"web","tv":"js-2.14.0","eid":"5b9f3c2e-7d4a-4b8e-9f21-3c6a1d0e8b47"}]}"#;
pub const HEADERS: [&str; 10] = [
    "Timeout-Access: <function1>",
    "Host: collector.example.com",
    "Accept: */*",
    "Accept-Language: en-au",
    "Accept-Encoding: br, gzip, deflate",
    "Origin: https://example.com",
    "Referer: https://example.com/",
    "Cookie: sp=c2b4a6f0-1d3e-4f5a-8b7c-9d0e1f2a3b4c",
    "X-Forwarded-For: 49.255.197.126",
    "application/json",
];
pub const HOSTNAME: &str = "collector.example.com";
pub const NETWORK_USER_ID: &str = "c2b4a6f0-1d3e-4f5a-8b7c-9d0e1f2a3b4c";

/// The fixture's raw bytes.
pub fn collector_payload_bytes() -> Result<Vec<u8>> {
    Ok(STANDARD.decode(COLLECTOR_PAYLOAD_B64.trim())?)
}

/// What the fixture decodes to, in wire order.
pub fn collector_payload_record() -> Record {
    Record::from_iter([
        ("schema", DecodedValue::from(SCHEMA)),
        ("ipAddress", DecodedValue::from(IP_ADDRESS)),
        ("timestamp", DecodedValue::Int(TIMESTAMP)),
        ("encoding", DecodedValue::from("UTF-8")),
        ("collector", DecodedValue::from("ssc-1.0.0-kinesis")),
        ("userAgent", DecodedValue::from(USER_AGENT)),
        ("path", DecodedValue::from(PATH)),
        ("body", DecodedValue::from(BODY)),
        (
            "headers",
            DecodedValue::List(HEADERS.iter().map(|h| DecodedValue::from(*h)).collect()),
        ),
        ("contentType", DecodedValue::from("application/json")),
        ("hostname", DecodedValue::from(HOSTNAME)),
        ("networkUserId", DecodedValue::from(NETWORK_USER_ID)),
    ])
}
