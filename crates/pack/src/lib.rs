//! Struct-style binary pack/unpack engine for binbuf.
//!
//! A format string is a compact DSL describing a sequence of typed binary
//! fields and a byte order, modeled on C-style struct packing conventions:
//!
//! ```text
//! format   := prefix? item+
//! prefix   := '@' | '=' | '<' | '>' | '!'
//! item     := repeat? typecode
//! ```
//!
//! | code | field                      | bytes | code | field                  | bytes |
//! |------|----------------------------|-------|------|------------------------|-------|
//! | `x`  | pad byte (no value)        | 1     | `q`  | signed 64-bit          | 8     |
//! | `c`  | single byte as buffer      | 1     | `Q`  | unsigned 64-bit        | 8     |
//! | `b`  | signed 8-bit               | 1     | `e`  | binary16 float         | 2     |
//! | `B`  | unsigned 8-bit             | 1     | `f`  | binary32 float         | 4     |
//! | `?`  | boolean                    | 1     | `d`  | binary64 float         | 8     |
//! | `h`  | signed 16-bit              | 2     | `s`  | byte string, width = repeat | repeat |
//! | `H`  | unsigned 16-bit            | 2     | `p`  | length-prefixed string, width = repeat | repeat |
//! | `i`/`l` | signed 32-bit           | 4     |      |                        |       |
//! | `I`/`L` | unsigned 32-bit         | 4     |      |                        |       |
//!
//! Fields are laid out strictly in item order, back to back; no implicit
//! padding or alignment is ever inserted. Callers wanting padding say so
//! with explicit `x` items.
//!
//! # Example
//!
//! ```
//! use binbuf_pack::{calc_size, iter_unpack, pack, unpack, Value};
//!
//! let buf = pack(
//!     "!bbbx5sbbb",
//!     &[
//!         1.into(),
//!         2.into(),
//!         3.into(),
//!         "test".into(),
//!         5.into(),
//!         6.into(),
//!         7.into(),
//!     ],
//! )
//! .unwrap();
//! assert_eq!(buf.len(), calc_size("!bbbx5sbbb").unwrap());
//! assert_eq!(
//!     buf.as_slice(),
//!     &[0x01, 0x02, 0x03, 0x00, b't', b'e', b's', b't', 0x00, 0x05, 0x06, 0x07]
//! );
//!
//! let vals = unpack(&buf, "!bbbx5sbbb").unwrap();
//! assert_eq!(vals[0], Value::Int(1));
//! assert_eq!(vals[3], Value::Bytes(b"test\0".to_vec()));
//!
//! let rows: Vec<_> = iter_unpack(&[1, 254, 1, 254], "!BB").unwrap().collect();
//! assert_eq!(rows.len(), 2);
//! ```
//!
//! The engine is synchronous and free of shared state: parsing and size
//! calculation are pure, and each pack/unpack call owns its cursor, so calls
//! may interleave freely.

mod codec;
mod error;
mod format;
mod iter;
mod pack;
mod size;
mod unpack;
mod value;

pub use error::StructError;
pub use format::{parse_format, Format, FormatItem, TypeCode, NATIVE_LITTLE_ENDIAN};
pub use iter::{iter_unpack, UnpackIter};
pub use pack::{pack, pack_into};
pub use size::{calc_size, calc_size_items};
pub use unpack::unpack;
pub use value::Value;
