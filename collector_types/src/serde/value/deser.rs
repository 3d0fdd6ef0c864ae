use crate::serde::{
    BodyLen, ByteCursor, DecodeError, DecodeOptions, DecodedValue, ElemsCount, Result, TypeTag,
};
use std::mem;

impl DecodedValue {
    /// Decodes one value of type `tag`, whose tag byte sits at `tag_offset`.
    ///
    /// Returns the count of bytes consumed, excluding the tag itself.
    pub fn deser(
        cur: &mut ByteCursor,
        tag: TypeTag,
        tag_offset: usize,
        opts: &DecodeOptions,
    ) -> Result<(usize, Self)> {
        Self::deser_(cur, tag, tag_offset, opts, 1)
    }

    fn deser_(
        cur: &mut ByteCursor,
        tag: TypeTag,
        tag_offset: usize,
        opts: &DecodeOptions,
        depth: usize,
    ) -> Result<(usize, Self)> {
        match tag {
            TypeTag::Bool => {
                let buf = cur.read_array::<{ mem::size_of::<u8>() }>()?;
                Ok((buf.len(), Self::Bool(buf[0] != 0)))
            }
            TypeTag::Byte => {
                let buf = cur.read_array::<{ mem::size_of::<i8>() }>()?;
                Ok((buf.len(), Self::Int(i8::from_be_bytes(buf).into())))
            }
            TypeTag::I16 => {
                let buf = cur.read_array::<{ mem::size_of::<i16>() }>()?;
                Ok((buf.len(), Self::Int(i16::from_be_bytes(buf).into())))
            }
            TypeTag::I32 => {
                let buf = cur.read_array::<{ mem::size_of::<i32>() }>()?;
                Ok((buf.len(), Self::Int(i32::from_be_bytes(buf).into())))
            }
            TypeTag::I64 => {
                let buf = cur.read_array::<{ mem::size_of::<i64>() }>()?;
                Ok((buf.len(), Self::Int(i64::from_be_bytes(buf))))
            }
            TypeTag::String => {
                let (mut r_len, body_len) = BodyLen::deser(cur)?;
                let body = cur.read(*body_len as usize)?;
                r_len += body.len();
                Ok((r_len, Self::Bytes(body.to_vec())))
            }
            TypeTag::Set | TypeTag::List => Self::deser_elems(cur, opts, depth),
            TypeTag::End | TypeTag::Double | TypeTag::Struct | TypeTag::Map => {
                Err(DecodeError::UnsupportedType {
                    offset: tag_offset,
                    tag,
                })
            }
        }
    }

    fn deser_elems(
        cur: &mut ByteCursor,
        opts: &DecodeOptions,
        depth: usize,
    ) -> Result<(usize, Self)> {
        let max_depth = opts.effective_max_depth();
        if depth > max_depth {
            return Err(DecodeError::NestingTooDeep {
                offset: cur.position(),
                max_depth,
            });
        }

        /* elem_type_tag */
        let elem_tag_offset = cur.position();
        let (mut r_len, elem_tag) = opts.dialect.deser(cur)?;
        if !elem_tag.is_supported() {
            return Err(DecodeError::UnsupportedType {
                offset: elem_tag_offset,
                tag: elem_tag,
            });
        }

        /* elems_count */
        let (delta_r_len, elems_ct) = ElemsCount::deser(cur)?;
        r_len += delta_r_len;

        /* elems */
        // Never reserve more elements than the remaining bytes could hold.
        let fit = cur.remaining() / elem_tag.min_wire_len();
        let mut elems = Vec::with_capacity((*elems_ct as usize).min(fit));
        for _ in 0..*elems_ct {
            let (delta_r_len, elem) =
                Self::deser_(cur, elem_tag, elem_tag_offset, opts, depth + 1)?;
            r_len += delta_r_len;
            elems.push(elem);
        }
        Ok((r_len, Self::List(elems)))
    }
}
