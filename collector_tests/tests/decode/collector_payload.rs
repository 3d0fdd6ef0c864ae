use anyhow::Result;
use collector_tests::fixture::{self, collector_payload_bytes, collector_payload_record};
use collector_tests::writer;
use collector_types::{
    decode, decode_with, CollectorPayload, DecodeError, DecodeOptions, DecodedValue, TagDialect,
    TypeTag, COLLECTOR_PAYLOAD_SCHEMA,
};
use std::collections::HashMap;

#[test]
fn decodes_captured_payload() -> Result<()> {
    let buf = collector_payload_bytes()?;
    let rec = decode(&buf, &COLLECTOR_PAYLOAD_SCHEMA)?;

    assert_eq!(
        rec.get("ipAddress").and_then(DecodedValue::as_str),
        Some(fixture::IP_ADDRESS)
    );
    assert_eq!(
        rec.get("userAgent").and_then(DecodedValue::as_str),
        Some(fixture::USER_AGENT)
    );
    assert_eq!(
        rec.get("networkUserId").and_then(DecodedValue::as_str),
        Some(fixture::NETWORK_USER_ID)
    );
    assert_eq!(rec.get("timestamp"), Some(&DecodedValue::Int(fixture::TIMESTAMP)));

    let headers = rec
        .get("headers")
        .and_then(DecodedValue::as_list)
        .unwrap_or_default()
        .iter()
        .filter_map(DecodedValue::as_str)
        .collect::<Vec<_>>();
    assert_eq!(headers, fixture::HEADERS);

    assert_eq!(rec, collector_payload_record());
    assert_eq!(
        rec.names().collect::<Vec<_>>(),
        [
            "schema",
            "ipAddress",
            "timestamp",
            "encoding",
            "collector",
            "userAgent",
            "path",
            "body",
            "headers",
            "contentType",
            "hostname",
            "networkUserId",
        ]
    );
    Ok(())
}

#[test]
fn captured_payload_as_request() -> Result<()> {
    let rec = decode(&collector_payload_bytes()?, &COLLECTOR_PAYLOAD_SCHEMA)?;
    let Some(req) = CollectorPayload::new(&rec) else {
        panic!("A payload with a body is a request.");
    };

    assert_eq!(req.schema(), Some(fixture::SCHEMA));
    assert_eq!(req.method(), "POST");
    assert_eq!(
        req.url(),
        "https://badbucket.invalid/com.snowplowanalytics.snowplow/tp2"
    );
    assert_eq!(req.hostname(), Some(fixture::HOSTNAME));
    assert_eq!(req.cookies(), vec![("sp", fixture::NETWORK_USER_ID)]);
    assert_eq!(req.body(), Some(fixture::BODY.as_bytes()));
    assert_eq!(req.content_type(), Some("application/json"));
    assert_eq!(req.ip_address(), Some(fixture::IP_ADDRESS));

    let headers = req.headers();
    // The bare content type line has no colon.
    assert_eq!(headers.len(), fixture::HEADERS.len() - 1);
    assert_eq!(headers[1], ("Host", fixture::HOSTNAME));
    assert_eq!(
        headers[7],
        ("Cookie", "sp=c2b4a6f0-1d3e-4f5a-8b7c-9d0e1f2a3b4c")
    );
    Ok(())
}

#[test]
fn schema_missing_a_field_id() -> Result<()> {
    let buf = collector_payload_bytes()?;
    let partial = COLLECTOR_PAYLOAD_SCHEMA
        .iter()
        .filter(|(id, _)| *id != 410)
        .map(|(id, name)| (id, name.to_string()))
        .collect::<HashMap<_, _>>();

    match decode(&buf, &partial) {
        Err(DecodeError::UnknownFieldId { field_id, offset }) => {
            assert_eq!(field_id, 410);
            assert_eq!(buf[offset + 1..offset + 3], 410u16.to_be_bytes());
        }
        res => panic!("Unexpected {res:?}"),
    }
    Ok(())
}

#[test]
fn dialects_are_not_interchangeable() -> Result<()> {
    let shifted = collector_payload_bytes()?;
    let opts = DecodeOptions::default().with_dialect(TagDialect::Standard);

    // Shifted string is tag 12, which the standard numbering assigns to struct.
    assert_eq!(
        decode_with(&shifted, &COLLECTOR_PAYLOAD_SCHEMA, &opts),
        Err(DecodeError::UnsupportedType {
            offset: 0,
            tag: TypeTag::Struct
        })
    );

    let expected = collector_payload_record();
    let standard =
        writer::encode(&expected, &COLLECTOR_PAYLOAD_SCHEMA, TagDialect::Standard, true)?;
    assert_ne!(standard, shifted);
    assert_eq!(decode_with(&standard, &COLLECTOR_PAYLOAD_SCHEMA, &opts)?, expected);
    Ok(())
}

#[test]
fn fixture_matches_encoder() -> Result<()> {
    let encoded = writer::encode(
        &collector_payload_record(),
        &COLLECTOR_PAYLOAD_SCHEMA,
        TagDialect::Shifted,
        true,
    )?;
    assert_eq!(encoded, collector_payload_bytes()?);
    Ok(())
}

#[test]
fn concurrent_decodes_share_nothing() -> Result<()> {
    let buf = collector_payload_bytes()?;
    let expected = collector_payload_record();
    std::thread::scope(|s| {
        let handles = (0..4)
            .map(|_| s.spawn(|| decode(&buf, &COLLECTOR_PAYLOAD_SCHEMA)))
            .collect::<Vec<_>>();
        for handle in handles {
            match handle.join() {
                Ok(res) => assert_eq!(res.as_ref(), Ok(&expected)),
                Err(_) => panic!("Decoding thread panicked."),
            }
        }
    });
    Ok(())
}
