pub mod serde;
pub mod types;

pub use serde::{
    decode, decode_with, DecodeError, DecodeOptions, DecodedValue, Record, Result, TagDialect,
    TypeTag,
};
pub use types::{CollectorPayload, FieldSchema, StaticSchema, COLLECTOR_PAYLOAD_SCHEMA};
