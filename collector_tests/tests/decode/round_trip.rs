use anyhow::Result;
use collector_tests::fixture::collector_payload_record;
use collector_tests::writer;
use collector_types::{
    decode_with, DecodeOptions, DecodedValue, Record, StaticSchema, TagDialect,
    COLLECTOR_PAYLOAD_SCHEMA,
};
use itertools::Itertools;
use rand::seq::SliceRandom;

const MISC_SCHEMA: StaticSchema = StaticSchema(&[
    (1, "big"),
    (2, "negative"),
    (3, "raw"),
    (4, "empty"),
    (5, "nested"),
    (6, "flags"),
    (u16::MAX, "last"),
]);

fn verify(rec: &Record, schema: &StaticSchema, dialect: TagDialect) -> Result<()> {
    let opts = DecodeOptions::default().with_dialect(dialect);
    for with_end_tag in [false, true] {
        let buf = writer::encode(rec, schema, dialect, with_end_tag)?;
        let decoded = decode_with(&buf, schema, &opts)?;
        assert_eq!(&decoded, rec, "{dialect:?} {with_end_tag} {buf:?}");
    }
    Ok(())
}

#[test]
fn collector_payload_fields_in_any_subset_and_order() -> Result<()> {
    let mut rand_rng = rand::thread_rng();
    let fields = collector_payload_record().into_iter().collect::<Vec<_>>();

    for mut subset in fields.iter().powerset() {
        for dialect in [TagDialect::Shifted, TagDialect::Standard] {
            let rec = subset.iter().map(|(n, v)| (n.clone(), v.clone())).collect::<Record>();
            verify(&rec, &COLLECTOR_PAYLOAD_SCHEMA, dialect)?;
        }

        subset.shuffle(&mut rand_rng);
        let rec = subset.iter().map(|(n, v)| (n.clone(), v.clone())).collect::<Record>();
        verify(&rec, &COLLECTOR_PAYLOAD_SCHEMA, TagDialect::Shifted)?;
    }
    Ok(())
}

#[test]
fn edge_values() -> Result<()> {
    let rec = Record::from_iter([
        ("big", DecodedValue::Int((1 << 53) + 1)),
        ("negative", DecodedValue::Int(i64::MIN)),
        ("raw", DecodedValue::Bytes(vec![0x00, 0xff, 0xc3, 0x28, b'\n'])),
        ("empty", DecodedValue::Bytes(vec![])),
        (
            "nested",
            DecodedValue::List(vec![
                DecodedValue::List(vec![DecodedValue::Int(1), DecodedValue::Int(-1)]),
                DecodedValue::List(vec![]),
                DecodedValue::List(vec![DecodedValue::Int(i64::MAX)]),
            ]),
        ),
        (
            "flags",
            DecodedValue::List(vec![DecodedValue::Bool(true), DecodedValue::Bool(false)]),
        ),
        ("last", DecodedValue::List(vec![])),
    ]);
    for dialect in [TagDialect::Shifted, TagDialect::Standard] {
        verify(&rec, &MISC_SCHEMA, dialect)?;
    }
    Ok(())
}
