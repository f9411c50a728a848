//! The unpack interpreter.

use crate::codec::UnpackCursor;
use crate::error::StructError;
use crate::format::{parse_format, Format};
use crate::size::calc_size_items;
use crate::value::Value;

/// Unpacks `buf` per `format`, returning decoded values in item order.
///
/// The result is always a list, even for a single-field format. `x` items
/// produce no value; `c`, `s`, and `p` produce [`Value::Bytes`] copies of
/// their sub-ranges (`s` keeps its zero padding, `p` drops its length prefix
/// and trailing pad).
///
/// # Example
///
/// ```
/// use binbuf_pack::{unpack, Value};
///
/// let vals = unpack(&[0x01, 0x02, 0x03, 0x04], ">i").unwrap();
/// assert_eq!(vals, vec![Value::Int(0x01020304)]);
/// ```
pub fn unpack(buf: &[u8], format: &str) -> Result<Vec<Value>, StructError> {
    let fmt = parse_format(format)?;
    let needed = calc_size_items(&fmt.items);
    if buf.len() < needed {
        return Err(StructError::BufferTooSmall {
            needed,
            actual: buf.len(),
        });
    }
    Ok(unpack_format(&fmt, buf))
}

/// Walks a parsed format in item order, appending each item's decoded values.
pub(crate) fn unpack_format(fmt: &Format, buf: &[u8]) -> Vec<Value> {
    let mut cursor = UnpackCursor::new(buf, fmt.little_endian);
    for item in &fmt.items {
        cursor.unpack_item(*item);
    }
    cursor.into_vals()
}
