use std::io::Write;

use crate::{Error, Position};

use super::Value;

/// Writes the canonical byte encoding of `value` to `out`.
///
/// The encoding preserves relative magnitude rather than the value itself:
///
/// - [`Value::Null`] writes nothing, and references are followed first.
/// - Bytes, characters (as UTF-8), and strings are written raw, with no
///   length prefix or type tag.
/// - Sequences write each element in order; maps write each key then its
///   value, in stored order.
/// - Integers are written big-endian at their fixed width. [`Value::Int`]
///   and [`Value::Uint`] are first narrowed to the smallest width that holds
///   the value, with non-negative values narrowed to unsigned types.
/// - Booleans are one byte, floats are their big-endian IEEE-754 bits.
///
/// Because nothing is tagged, different values can share an encoding.
///
/// # Errors
///
/// Returns [`Error::Encoding`] if `out` rejects a write. Failures inside a
/// sequence or map are wrapped in [`Error::Conversion`] with the element's
/// position.
pub fn encode<W: Write + ?Sized>(value: &Value, out: &mut W) -> Result<(), Error> {
    match value.resolve() {
        Value::Null | Value::Ref(_) => {}
        Value::Bool(v) => out.write_all(&[u8::from(*v)])?,
        Value::I8(v) => out.write_all(&v.to_be_bytes())?,
        Value::I16(v) => out.write_all(&v.to_be_bytes())?,
        Value::I32(v) => out.write_all(&v.to_be_bytes())?,
        Value::I64(v) => out.write_all(&v.to_be_bytes())?,
        Value::U8(v) | Value::Byte(v) => out.write_all(&[*v])?,
        Value::U16(v) => out.write_all(&v.to_be_bytes())?,
        Value::U32(v) => out.write_all(&v.to_be_bytes())?,
        Value::U64(v) => out.write_all(&v.to_be_bytes())?,
        Value::Int(v) => write_narrow_signed(*v, out)?,
        Value::Uint(v) => write_narrow_unsigned(*v, out)?,
        Value::F32(v) => out.write_all(&v.to_be_bytes())?,
        Value::F64(v) => out.write_all(&v.to_be_bytes())?,
        Value::Bytes(v) => out.write_all(v)?,
        Value::Char(v) => out.write_all(v.encode_utf8(&mut [0; 4]).as_bytes())?,
        Value::Str(v) => out.write_all(v.as_bytes())?,
        Value::Seq(items) => {
            for (index, item) in items.iter().enumerate() {
                encode(item, out).map_err(|err| Error::at(Position::Index(index), err))?;
            }
        }
        Value::Map(entries) => {
            for (key, value) in entries {
                encode(key, out)
                    .and_then(|()| encode(value, out))
                    .map_err(|err| Error::at(Position::Key(key.to_string()), err))?;
            }
        }
    }
    Ok(())
}

fn write_narrow_signed<W: Write + ?Sized>(v: i64, out: &mut W) -> std::io::Result<()> {
    if let Ok(v) = u64::try_from(v) {
        return write_narrow_unsigned(v, out);
    }
    if let Ok(v) = i8::try_from(v) {
        out.write_all(&v.to_be_bytes())
    } else if let Ok(v) = i16::try_from(v) {
        out.write_all(&v.to_be_bytes())
    } else if let Ok(v) = i32::try_from(v) {
        out.write_all(&v.to_be_bytes())
    } else {
        out.write_all(&v.to_be_bytes())
    }
}

fn write_narrow_unsigned<W: Write + ?Sized>(v: u64, out: &mut W) -> std::io::Result<()> {
    if let Ok(v) = u8::try_from(v) {
        out.write_all(&[v])
    } else if let Ok(v) = u16::try_from(v) {
        out.write_all(&v.to_be_bytes())
    } else if let Ok(v) = u32::try_from(v) {
        out.write_all(&v.to_be_bytes())
    } else {
        out.write_all(&v.to_be_bytes())
    }
}
