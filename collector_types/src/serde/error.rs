use crate::serde::TypeTag;
use thiserror::Error;

/// Errors that abort a decode.
///
/// All of them are deterministic for a given buffer, schema and options.
/// Each carries the byte offset at which the offending item starts.
#[derive(PartialEq, Eq, Clone, Debug, Error)]
pub enum DecodeError {
    /// Fewer bytes remain than a decode step requires.
    #[error("Truncated buffer at offset {offset}: {needed} bytes needed, {remaining} remaining")]
    TruncatedBuffer {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A type tag byte outside the dialect's table.
    #[error("Unknown type tag {tag} at offset {offset}")]
    UnknownTypeTag { offset: usize, tag: u8 },

    /// A recognized type tag that is not decoded.
    #[error("Unsupported type {tag:?} at offset {offset}")]
    UnsupportedType { offset: usize, tag: TypeTag },

    /// A field id with no entry in the schema.
    #[error("Unknown field id {field_id} at offset {offset}")]
    UnknownFieldId { offset: usize, field_id: u16 },

    /// Lists and sets nested deeper than the configured bound.
    #[error("Nesting deeper than {max_depth} at offset {offset}")]
    NestingTooDeep { offset: usize, max_depth: usize },
}

impl DecodeError {
    pub fn offset(&self) -> usize {
        match self {
            Self::TruncatedBuffer { offset, .. }
            | Self::UnknownTypeTag { offset, .. }
            | Self::UnsupportedType { offset, .. }
            | Self::UnknownFieldId { offset, .. }
            | Self::NestingTooDeep { offset, .. } => *offset,
        }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
