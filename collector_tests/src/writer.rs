use anyhow::{anyhow, Result};
use collector_types::{DecodedValue, Record, StaticSchema, TagDialect, TypeTag};
use derive_more::Deref;
use std::io::Write;

/// Count of bytes written.
#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct WriteLen(usize);

/// Encodes [`Record`]s for use as test fixtures.
///
/// Wire types are inferred from values: `Bool` as bool, `Int` as i64, `Bytes`
/// as string, `List` as list typed by its first element (string when empty).
pub struct RecordWriter<W: Write> {
    w: W,
    dialect: TagDialect,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(w: W, dialect: TagDialect) -> Self {
        Self { w, dialect }
    }

    pub fn into_inner(self) -> W {
        self.w
    }

    /// Writes every field, then the end tag if `with_end_tag`.
    pub fn ser_record(
        &mut self,
        rec: &Record,
        schema: &StaticSchema,
        with_end_tag: bool,
    ) -> Result<WriteLen> {
        let mut w_len = 0;
        for (name, val) in rec.iter() {
            let field_id = schema
                .field_id(name)
                .ok_or(anyhow!("Field {name} is not in the schema."))?;
            w_len += *self.ser_field(field_id, val)?;
        }
        if with_end_tag {
            w_len += self.ser_tag(TypeTag::End)?;
        }
        Ok(WriteLen(w_len))
    }

    pub fn ser_field(&mut self, field_id: u16, val: &DecodedValue) -> Result<WriteLen> {
        let mut w_len = 0;
        w_len += self.ser_tag(Self::tag_of(val))?;
        w_len += self.w.write(&field_id.to_be_bytes())?;
        w_len += self.ser_value(val)?;
        Ok(WriteLen(w_len))
    }

    fn tag_of(val: &DecodedValue) -> TypeTag {
        match val {
            DecodedValue::Bool(_) => TypeTag::Bool,
            DecodedValue::Int(_) => TypeTag::I64,
            DecodedValue::Bytes(_) => TypeTag::String,
            DecodedValue::List(_) => TypeTag::List,
        }
    }

    fn ser_tag(&mut self, tag: TypeTag) -> Result<usize> {
        Ok(self.w.write(&[self.dialect.wire_byte(tag)])?)
    }

    fn ser_value(&mut self, val: &DecodedValue) -> Result<usize> {
        let mut w_len = 0;
        match val {
            DecodedValue::Bool(b) => w_len += self.w.write(&[u8::from(*b)])?,
            DecodedValue::Int(i) => w_len += self.w.write(&i.to_be_bytes())?,
            DecodedValue::Bytes(b) => {
                let body_len = u32::try_from(b.len())?;
                w_len += self.w.write(&body_len.to_be_bytes())?;
                w_len += self.w.write(b)?;
            }
            DecodedValue::List(elems) => {
                let elem_tag = elems.first().map_or(TypeTag::String, Self::tag_of);
                if elems.iter().any(|e| Self::tag_of(e) != elem_tag) {
                    return Err(anyhow!("Heterogeneous list {elems:?}"));
                }
                let elems_ct = u32::try_from(elems.len())?;
                w_len += self.ser_tag(elem_tag)?;
                w_len += self.w.write(&elems_ct.to_be_bytes())?;
                for elem in elems {
                    w_len += self.ser_value(elem)?;
                }
            }
        }
        Ok(w_len)
    }
}

/// Encodes `rec` into a fresh buffer.
pub fn encode(
    rec: &Record,
    schema: &StaticSchema,
    dialect: TagDialect,
    with_end_tag: bool,
) -> Result<Vec<u8>> {
    let mut w = RecordWriter::new(vec![], dialect);
    let w_len = w.ser_record(rec, schema, with_end_tag)?;
    let buf = w.into_inner();
    if buf.len() != *w_len {
        return Err(anyhow!("Wrote {} bytes but counted {}.", buf.len(), *w_len));
    }
    Ok(buf)
}
