//! Layout size calculation.

use crate::error::StructError;
use crate::format::{parse_format, FormatItem};

/// Computes the number of bytes a format string's layout occupies.
///
/// # Example
///
/// ```
/// use binbuf_pack::calc_size;
///
/// assert_eq!(calc_size("!bhl").unwrap(), 7);
/// assert_eq!(calc_size("<3H8s").unwrap(), 14);
/// ```
pub fn calc_size(format: &str) -> Result<usize, StructError> {
    Ok(calc_size_items(&parse_format(format)?.items))
}

/// Computes the byte length of an already-parsed items list, avoiding a
/// re-parse when the caller holds a [`Format`](crate::Format).
///
/// An empty list has size 0; the parser never produces one, but a
/// caller-assembled list may.
pub fn calc_size_items(items: &[FormatItem]) -> usize {
    items
        .iter()
        .map(|item| item.repeat * item.code.width())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_code_widths() {
        for (fmt, size) in [
            ("x", 1),
            ("c", 1),
            ("b", 1),
            ("B", 1),
            ("?", 1),
            ("h", 2),
            ("H", 2),
            ("e", 2),
            ("i", 4),
            ("I", 4),
            ("l", 4),
            ("L", 4),
            ("f", 4),
            ("q", 8),
            ("Q", 8),
            ("d", 8),
        ] {
            assert_eq!(calc_size(fmt).unwrap(), size, "size of {fmt}");
        }
    }

    #[test]
    fn repeat_multiplies_scalars() {
        assert_eq!(calc_size("3h").unwrap(), 6);
        assert_eq!(calc_size("2d4B").unwrap(), 20);
        assert_eq!(calc_size("0h").unwrap(), 0);
    }

    #[test]
    fn string_repeat_is_total_width() {
        assert_eq!(calc_size("5s").unwrap(), 5);
        assert_eq!(calc_size("5p").unwrap(), 5);
        assert_eq!(calc_size("s").unwrap(), 1);
    }

    #[test]
    fn prefix_does_not_change_size() {
        assert_eq!(calc_size("!bhl").unwrap(), 7);
        assert_eq!(calc_size("<bhl").unwrap(), 7);
        assert_eq!(calc_size("bhl").unwrap(), 7);
    }

    #[test]
    fn empty_items_list_is_zero() {
        assert_eq!(calc_size_items(&[]), 0);
    }

    #[test]
    fn malformed_format_propagates() {
        assert!(calc_size("12").is_err());
    }
}
