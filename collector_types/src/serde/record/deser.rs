use crate::serde::{
    ByteCursor, DecodeError, DecodeOptions, DecodedValue, FieldId, Record, Result, TypeTag,
};
use crate::types::FieldSchema;
use tracing::trace;

impl Record {
    /// Reads fields until the end tag, or until the buffer runs out at a field boundary.
    ///
    /// Returns the count of bytes consumed, including the end tag if one was read.
    pub fn deser<S: FieldSchema + ?Sized>(
        cur: &mut ByteCursor,
        schema: &S,
        opts: &DecodeOptions,
    ) -> Result<(usize, Self)> {
        let mut r_len = 0;
        let mut rec = Record::new();

        loop {
            if cur.remaining() == 0 {
                if opts.require_end_marker {
                    return Err(DecodeError::TruncatedBuffer {
                        offset: cur.position(),
                        needed: 1,
                        remaining: 0,
                    });
                }
                break;
            }

            /* type_tag */
            let field_offset = cur.position();
            let (delta_r_len, tag) = opts.dialect.deser(cur)?;
            r_len += delta_r_len;
            if tag == TypeTag::End {
                break;
            }

            /* field_id */
            let (delta_r_len, field_id) = FieldId::deser(cur)?;
            r_len += delta_r_len;
            let name = schema
                .field_name(*field_id)
                .ok_or(DecodeError::UnknownFieldId {
                    offset: field_offset,
                    field_id: *field_id,
                })?;

            /* value */
            let value_offset = cur.position();
            let (delta_r_len, value) = DecodedValue::deser(cur, tag, field_offset, opts)?;
            debug_assert_eq!(cur.position() - value_offset, delta_r_len);
            r_len += delta_r_len;

            trace!(
                field_id = *field_id,
                field = name,
                offset = field_offset,
                len = delta_r_len,
                "decoded field"
            );
            rec.insert(name, value);
        }

        Ok((r_len, rec))
    }
}

/// Decodes a whole buffer with [`DecodeOptions::default()`].
pub fn decode<S: FieldSchema + ?Sized>(buf: &[u8], schema: &S) -> Result<Record> {
    decode_with(buf, schema, &DecodeOptions::default())
}

/// Decodes a whole buffer. Bytes after the end tag are ignored.
pub fn decode_with<S: FieldSchema + ?Sized>(
    buf: &[u8],
    schema: &S,
    opts: &DecodeOptions,
) -> Result<Record> {
    let mut cur = ByteCursor::from(buf);
    let (r_len, rec) = Record::deser(&mut cur, schema, opts)?;
    trace!(
        fields = rec.len(),
        consumed = r_len,
        trailing = cur.remaining(),
        "decoded record"
    );
    Ok(rec)
}
