//! # Serialization format
//!
//! A record is a flat sequence of numbered fields, closed by an end tag.
//! Field ids are given names by a [`crate::FieldSchema`]; the wire carries only ids.
//!
//! Every field starts with `type_tag`, encoded in `u8`, followed by `field_id`.
//! The byte value of each type tag depends on the [`TagDialect`].
//! All integers are big-endian, fixed width, two's-complement.
//!
//! Scalars have fixed body lengths; these lengths are not encoded.
//! Strings and collections have dynamic body lengths; a `u32` length or count
//! follows the (element) type.
//!
//! A list or set nests other values of one element type, including possibly
//! other lists and sets.
//!
//! ```text
//! struct Record {
//!     fields:             [Field; _],
//!     end_tag:            u8,             // 0x00; may be absent at end of buffer.
//! }
//!
//! struct Field {
//!     type_tag:           u8,
//!     field_id:           u16,
//!     value:              Value(type_tag),
//! }
//!
//! struct Value(Bool) {
//!     body:               u8,             // Nonzero is true.
//! }
//!
//! struct Value(Byte | I16 | I32 | I64) {
//!     body:               [u8; 1 | 2 | 4 | 8],
//! }
//!
//! struct Value(String) {
//!     body_len:           u32,
//!     body:               [u8; body_len],
//! }
//!
//! struct Value(List | Set) {
//!     elem_type_tag:      u8,
//!     elems_count:        u32,
//!     elem_0:             Value(elem_type_tag),
//!     elem_1:             Value(elem_type_tag),
//!     ...
//! }
//! ```
//!
//! `Double`, `Struct` and `Map` are recognized tags that are not decoded.

mod cursor;
mod error;
mod lengths;
mod options;
mod record;
mod type_tag;
mod value;

pub use cursor::*;
pub use error::*;
use lengths::*;
pub use options::*;
pub use record::*;
pub use type_tag::*;
pub use value::*;
