use crate::serde::{ByteCursor, Result};
use derive_more::Deref;
use std::mem;

#[derive(Deref, Clone, Copy)]
pub struct FieldId(u16);
impl FieldId {
    pub fn deser(cur: &mut ByteCursor) -> Result<(usize, Self)> {
        let buf = cur.read_array::<{ mem::size_of::<u16>() }>()?;
        let int = u16::from_be_bytes(buf);
        Ok((buf.len(), Self(int)))
    }
}

#[derive(Deref, Clone, Copy)]
pub struct BodyLen(u32);
impl BodyLen {
    pub fn deser(cur: &mut ByteCursor) -> Result<(usize, Self)> {
        let buf = cur.read_array::<{ mem::size_of::<u32>() }>()?;
        let int = u32::from_be_bytes(buf);
        Ok((buf.len(), Self(int)))
    }
}

#[derive(Deref, Clone, Copy)]
pub struct ElemsCount(u32);
impl ElemsCount {
    pub fn deser(cur: &mut ByteCursor) -> Result<(usize, Self)> {
        let buf = cur.read_array::<{ mem::size_of::<u32>() }>()?;
        let int = u32::from_be_bytes(buf);
        Ok((buf.len(), Self(int)))
    }
}
