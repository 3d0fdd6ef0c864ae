use crate::serde::{ByteCursor, DecodeError, Result};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};

/// Semantic wire types.
///
/// Discriminants are the [`TagDialect::Shifted`] wire bytes.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, ToPrimitive, Debug)]
pub enum TypeTag {
    End = 0,
    Bool = 3,
    Byte = 4,
    Double = 5,
    I16 = 7,
    I32 = 9,
    I64 = 11,
    String = 12,
    Struct = 13,
    Map = 14,
    Set = 15,
    List = 16,
}

impl TypeTag {
    /// Whether a value of this type can be decoded.
    pub fn is_supported(self) -> bool {
        match self {
            Self::Bool
            | Self::Byte
            | Self::I16
            | Self::I32
            | Self::I64
            | Self::String
            | Self::Set
            | Self::List => true,
            Self::End | Self::Double | Self::Struct | Self::Map => false,
        }
    }

    /// Fewest bytes a value of this type occupies on the wire, excluding its own tag.
    pub fn min_wire_len(self) -> usize {
        match self {
            Self::Bool | Self::Byte => 1,
            Self::I16 => 2,
            Self::I32 | Self::String => 4,
            Self::I64 | Self::Double => 8,
            // elem tag + elems count
            Self::Set | Self::List => 5,
            Self::End | Self::Struct | Self::Map => 1,
        }
    }
}

/// Apache Thrift TType numbering, indexed by wire byte. Captured collector
/// payloads are written with this numbering.
const STANDARD_TAGS: [Option<TypeTag>; 16] = [
    Some(TypeTag::End),
    None,
    Some(TypeTag::Bool),
    Some(TypeTag::Byte),
    Some(TypeTag::Double),
    None,
    Some(TypeTag::I16),
    None,
    Some(TypeTag::I32),
    None,
    Some(TypeTag::I64),
    Some(TypeTag::String),
    Some(TypeTag::Struct),
    Some(TypeTag::Map),
    Some(TypeTag::Set),
    Some(TypeTag::List),
];

/// Which byte values stand for which [`TypeTag`]s.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub enum TagDialect {
    /// 0 end, 3 bool, 4 byte, 5 double, 7 i16, 9 i32, 11 i64, 12 string,
    /// 13 struct, 14 map, 15 set, 16 list.
    ///
    /// Each non-end tag sits one above its Thrift TType.
    #[default]
    Shifted,
    /// 0 end, 2 bool, 3 byte, 4 double, 6 i16, 8 i32, 10 i64, 11 string,
    /// 12 struct, 13 map, 14 set, 15 list.
    ///
    /// The Thrift binary protocol numbering, as used by real collectors.
    Standard,
}

impl TagDialect {
    pub fn lookup(self, byte: u8) -> Option<TypeTag> {
        match self {
            Self::Shifted => TypeTag::from_u8(byte),
            Self::Standard => STANDARD_TAGS.get(byte as usize).copied().flatten(),
        }
    }

    pub fn wire_byte(self, tag: TypeTag) -> u8 {
        match self {
            // Every discriminant fits in u8 by repr.
            Self::Shifted => tag.to_u8().unwrap_or_default(),
            Self::Standard => STANDARD_TAGS
                .iter()
                .position(|t| *t == Some(tag))
                .map_or(0, |pos| pos as u8),
        }
    }

    /// Reads one tag byte and resolves it. Unsupported-but-known tags are returned as is.
    pub fn deser(self, cur: &mut ByteCursor) -> Result<(usize, TypeTag)> {
        let offset = cur.position();
        let [byte] = cur.read_array::<1>()?;
        let tag = self
            .lookup(byte)
            .ok_or(DecodeError::UnknownTypeTag { offset, tag: byte })?;
        Ok((1, tag))
    }
}
