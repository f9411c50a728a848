//! Pack engine error type.

use thiserror::Error;

/// Error type for format parsing, packing, and unpacking operations.
///
/// Every failure is immediate and terminal for the call that raised it; the
/// engine never retries. `NotEnoughValues` is the one error that can surface
/// after side effects: value exhaustion is detected lazily, per consumption,
/// so fields packed before the exhausted one remain written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructError {
    /// The format string does not match the grammar.
    #[error("malformed format string `{0}`")]
    MalformedFormat(String),
    /// The buffer is shorter than the layout requires.
    #[error("buffer too small, need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },
    /// The values list ran out while a codec still needed input.
    #[error("not enough values to pack for format `{0}`")]
    NotEnoughValues(char),
    /// A value does not fit the type code's representable range.
    #[error("value out of range for format `{0}`")]
    OutOfRange(char),
    /// A value's kind cannot be packed under the type code at all.
    #[error("unexpected value type for format `{0}`")]
    UnexpectedType(char),
    /// The format's window size is zero, so iteration cannot advance.
    #[error("cannot iterate over zero-sized format `{0}`")]
    ZeroSizedFormat(String),
}
