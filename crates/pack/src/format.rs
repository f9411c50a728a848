//! Format string parsing.
//!
//! The grammar is an optional byte-order prefix followed by one or more
//! items, each an optional decimal repeat count and a single type code:
//!
//! ```text
//! format   := prefix? item+
//! prefix   := '@' | '=' | '<' | '>' | '!'
//! item     := repeat? typecode
//! typecode := 'x'|'c'|'b'|'B'|'?'|'h'|'H'|'i'|'I'|'l'|'L'|'q'|'Q'|'e'|'f'|'d'|'s'|'p'
//! ```
//!
//! `<` selects little-endian, `>` and `!` big-endian, `@`, `=`, and an absent
//! prefix the host's native order.

use crate::error::StructError;

/// Byte order of the host platform, probed from the in-memory layout of a
/// two-byte integer.
pub const NATIVE_LITTLE_ENDIAN: bool = u16::to_ne_bytes(1)[0] == 1;

/// A single field type, one variant per character of the format alphabet.
///
/// `i`/`l` and `I`/`L` are aliases with identical width and codec behavior;
/// they stay distinct variants so a parsed format renders back to the exact
/// characters it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    /// `x` - one zero pad byte, no value.
    Pad,
    /// `c` - a single byte carried as a one-byte buffer.
    Char,
    /// `b` - signed 8-bit integer.
    Int8,
    /// `B` - unsigned 8-bit integer.
    UInt8,
    /// `?` - boolean, one byte.
    Bool,
    /// `h` - signed 16-bit integer.
    Int16,
    /// `H` - unsigned 16-bit integer.
    UInt16,
    /// `i` - signed 32-bit integer.
    Int32,
    /// `I` - unsigned 32-bit integer.
    UInt32,
    /// `l` - signed 32-bit integer.
    Long,
    /// `L` - unsigned 32-bit integer.
    ULong,
    /// `q` - signed 64-bit integer.
    Int64,
    /// `Q` - unsigned 64-bit integer.
    UInt64,
    /// `e` - IEEE 754 binary16 float.
    Half,
    /// `f` - IEEE 754 binary32 float.
    Float,
    /// `d` - IEEE 754 binary64 float.
    Double,
    /// `s` - fixed-width byte string; the repeat count is the field width.
    Str,
    /// `p` - length-prefixed byte string; the repeat count is the field width.
    PascalStr,
}

impl TypeCode {
    /// Maps a format character to its type code.
    pub fn from_char(c: char) -> Option<TypeCode> {
        match c {
            'x' => Some(TypeCode::Pad),
            'c' => Some(TypeCode::Char),
            'b' => Some(TypeCode::Int8),
            'B' => Some(TypeCode::UInt8),
            '?' => Some(TypeCode::Bool),
            'h' => Some(TypeCode::Int16),
            'H' => Some(TypeCode::UInt16),
            'i' => Some(TypeCode::Int32),
            'I' => Some(TypeCode::UInt32),
            'l' => Some(TypeCode::Long),
            'L' => Some(TypeCode::ULong),
            'q' => Some(TypeCode::Int64),
            'Q' => Some(TypeCode::UInt64),
            'e' => Some(TypeCode::Half),
            'f' => Some(TypeCode::Float),
            'd' => Some(TypeCode::Double),
            's' => Some(TypeCode::Str),
            'p' => Some(TypeCode::PascalStr),
            _ => None,
        }
    }

    /// The format character for this type code.
    pub fn as_char(self) -> char {
        match self {
            TypeCode::Pad => 'x',
            TypeCode::Char => 'c',
            TypeCode::Int8 => 'b',
            TypeCode::UInt8 => 'B',
            TypeCode::Bool => '?',
            TypeCode::Int16 => 'h',
            TypeCode::UInt16 => 'H',
            TypeCode::Int32 => 'i',
            TypeCode::UInt32 => 'I',
            TypeCode::Long => 'l',
            TypeCode::ULong => 'L',
            TypeCode::Int64 => 'q',
            TypeCode::UInt64 => 'Q',
            TypeCode::Half => 'e',
            TypeCode::Float => 'f',
            TypeCode::Double => 'd',
            TypeCode::Str => 's',
            TypeCode::PascalStr => 'p',
        }
    }

    /// Byte width of one element.
    ///
    /// For `s` and `p` the element is a single byte; the repeat count is the
    /// total field width, so width times repeat stays the field size for
    /// every code.
    pub fn width(self) -> usize {
        match self {
            TypeCode::Pad
            | TypeCode::Char
            | TypeCode::Int8
            | TypeCode::UInt8
            | TypeCode::Bool
            | TypeCode::Str
            | TypeCode::PascalStr => 1,
            TypeCode::Int16 | TypeCode::UInt16 | TypeCode::Half => 2,
            TypeCode::Int32 | TypeCode::UInt32 | TypeCode::Long | TypeCode::ULong
            | TypeCode::Float => 4,
            TypeCode::Int64 | TypeCode::UInt64 | TypeCode::Double => 8,
        }
    }
}

/// One parsed format item: a repeat count and a type code.
///
/// For scalar codes the repeat is an element multiplier; for `s`/`p` it is
/// the total byte width of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatItem {
    pub repeat: usize,
    pub code: TypeCode,
}

/// The parsed representation of a format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    /// Resolved byte order for all multi-byte scalar fields.
    pub little_endian: bool,
    /// Items in layout order; never empty for a parsed format.
    pub items: Vec<FormatItem>,
}

/// Compiles a format string into a [`Format`].
///
/// Fails with [`StructError::MalformedFormat`] when the string does not match
/// the grammar, including a byte-order prefix with no type codes after it.
/// A `p` item's repeat count is clamped to 255, the most its one-byte length
/// prefix can address.
///
/// Parsing is pure: the same string always yields a structurally equal
/// `Format`, and nothing is cached across calls.
///
/// # Example
///
/// ```
/// use binbuf_pack::{parse_format, TypeCode};
///
/// let fmt = parse_format("<2hQ").unwrap();
/// assert!(fmt.little_endian);
/// assert_eq!(fmt.items.len(), 2);
/// assert_eq!(fmt.items[0].repeat, 2);
/// assert_eq!(fmt.items[0].code, TypeCode::Int16);
/// assert_eq!(fmt.items[1].code, TypeCode::UInt64);
/// ```
pub fn parse_format(format: &str) -> Result<Format, StructError> {
    let malformed = || StructError::MalformedFormat(format.to_string());

    let mut chars = format.chars().peekable();
    let little_endian = match chars.peek() {
        Some('<') => {
            chars.next();
            true
        }
        Some('>') | Some('!') => {
            chars.next();
            false
        }
        Some('@') | Some('=') => {
            chars.next();
            NATIVE_LITTLE_ENDIAN
        }
        _ => NATIVE_LITTLE_ENDIAN,
    };

    let mut items = Vec::new();
    while chars.peek().is_some() {
        let mut digits: Option<usize> = None;
        while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
            chars.next();
            let widened = digits
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|r| r.checked_add(d as usize))
                .ok_or_else(malformed)?;
            digits = Some(widened);
        }
        // A trailing digit run with no type code is rejected here.
        let code_char = chars.next().ok_or_else(malformed)?;
        let code = TypeCode::from_char(code_char).ok_or_else(malformed)?;
        let mut repeat = digits.unwrap_or(1);
        if code == TypeCode::PascalStr && repeat > 255 {
            repeat = 255;
        }
        items.push(FormatItem { repeat, code });
    }
    if items.is_empty() {
        return Err(malformed());
    }
    Ok(Format {
        little_endian,
        items,
    })
}
