//! The pack interpreter.

use binbuf_buffers::ByteBuf;

use crate::codec::PackCursor;
use crate::error::StructError;
use crate::format::{parse_format, Format};
use crate::size::calc_size_items;
use crate::value::Value;

/// Packs `vals` per `format` into a freshly allocated buffer of exactly the
/// layout's size.
///
/// # Example
///
/// ```
/// use binbuf_pack::{pack, Value};
///
/// let buf = pack("<i", &[Value::Int(0x01020304)]).unwrap();
/// assert_eq!(buf.as_slice(), &[0x04, 0x03, 0x02, 0x01]);
/// ```
pub fn pack(format: &str, vals: &[Value]) -> Result<ByteBuf, StructError> {
    let fmt = parse_format(format)?;
    let mut buf = ByteBuf::alloc(calc_size_items(&fmt.items));
    pack_format(&fmt, buf.as_mut_slice(), vals)?;
    Ok(buf)
}

/// Packs `vals` per `format` into the front of a caller-supplied buffer,
/// returning the number of bytes written.
///
/// Fails with [`StructError::BufferTooSmall`] before any write when the
/// buffer is shorter than the layout requires. Value exhaustion, by
/// contrast, is detected lazily per consumed value, so
/// [`StructError::NotEnoughValues`] surfaces after the earlier fields have
/// already been written into `buf`.
pub fn pack_into(buf: &mut [u8], format: &str, vals: &[Value]) -> Result<usize, StructError> {
    let fmt = parse_format(format)?;
    let needed = calc_size_items(&fmt.items);
    if buf.len() < needed {
        return Err(StructError::BufferTooSmall {
            needed,
            actual: buf.len(),
        });
    }
    pack_format(&fmt, buf, vals)?;
    Ok(needed)
}

/// Walks a parsed format in item order, dispatching each item to its codec.
pub(crate) fn pack_format(fmt: &Format, buf: &mut [u8], vals: &[Value]) -> Result<(), StructError> {
    let mut cursor = PackCursor::new(buf, fmt.little_endian, vals);
    for item in &fmt.items {
        cursor.pack_item(*item)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_exactly_the_layout_size() {
        let buf = pack("!bhl", &[1.into(), 2.into(), 3.into()]).unwrap();
        assert_eq!(buf.len(), 7);
    }

    #[test]
    fn buffer_too_small_reports_both_lengths() {
        let mut buf = [0u8; 3];
        assert_eq!(
            pack_into(&mut buf, "!bhl", &[1.into(), 2.into(), 3.into()]),
            Err(StructError::BufferTooSmall {
                needed: 7,
                actual: 3
            })
        );
        // The size check precedes the write loop.
        assert_eq!(buf, [0, 0, 0]);
    }

    #[test]
    fn oversized_buffer_packs_into_front() {
        let mut buf = [0xAAu8; 6];
        let written = pack_into(&mut buf, "!h", &[Value::Int(0x0102)]).unwrap();
        assert_eq!(written, 2);
        assert_eq!(buf, [0x01, 0x02, 0xAA, 0xAA, 0xAA, 0xAA]);
    }

    #[test]
    fn value_exhaustion_leaves_partial_writes() {
        let mut buf = [0u8; 3];
        assert_eq!(
            pack_into(&mut buf, "!bbb", &[Value::Int(1), Value::Int(2)]),
            Err(StructError::NotEnoughValues('b'))
        );
        // The first two fields were already written when the error surfaced.
        assert_eq!(buf, [1, 2, 0]);
    }

    #[test]
    fn no_values_needed_for_pad_only_tail() {
        let buf = pack("!b2x", &[Value::Int(7)]).unwrap();
        assert_eq!(buf.as_slice(), &[7, 0, 0]);
    }

    #[test]
    fn extra_values_are_ignored() {
        let buf = pack("!b", &[1.into(), 2.into(), 3.into()]).unwrap();
        assert_eq!(buf.as_slice(), &[1]);
    }
}
