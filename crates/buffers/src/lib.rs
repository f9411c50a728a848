//! Byte-buffer primitives for binbuf.
//!
//! This crate emulates a platform binary-data type on top of a plain byte
//! vector.
//!
//! # Overview
//!
//! - [`ByteBuf`] - An owned byte buffer with fixed-offset, endian-aware
//!   numeric accessors and the usual copy/fill/compare/search operations
//! - [`Encoding`] - Named string codecs (UTF-8, Latin-1, Base64, Hex,
//!   UTF-16LE) converting between strings and buffer contents
//! - [`endian`] - Free-function read/write primitives over byte slices
//! - [`bits`] - Bit-level accessors and whole-buffer bitwise operations
//! - [`decode_f16`] / [`encode_f16`] - Half-precision float conversions
//!
//! # Example
//!
//! ```
//! use binbuf_buffers::{ByteBuf, Encoding};
//!
//! let mut buf = ByteBuf::alloc(4);
//! buf.write_u16(0, 0x0102, false);
//! buf.write_u16(2, 0x0304, true);
//! assert_eq!(buf.as_slice(), &[0x01, 0x02, 0x04, 0x03]);
//!
//! let text = ByteBuf::from_str_encoded("68656c6c6f", Encoding::Hex).unwrap();
//! assert_eq!(text.to_string_encoded(Encoding::Utf8), "hello");
//! ```

pub mod bits;
pub mod endian;

mod buf;
mod cmp;
mod encodings;
mod f16;

pub use buf::ByteBuf;
pub use cmp::{cmp_bytes, eq_bytes};
pub use encodings::{Encoding, EncodingError};
pub use f16::{decode_f16, encode_f16};
