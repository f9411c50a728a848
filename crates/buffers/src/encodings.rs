//! Named string codecs converting between strings and buffer contents.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;

/// Error type for string codec operations.
#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("invalid base64 text")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("invalid hex text")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("unknown encoding `{0}`")]
    UnknownEncoding(String),
}

/// A named string encoding.
///
/// Each codec converts in two directions: [`encode`](Encoding::encode) turns
/// a string into buffer bytes, and [`decode`](Encoding::decode) renders
/// buffer bytes back as a string. For `Base64` and `Hex` the string side is
/// the textual transport form, so `encode` parses that text into raw bytes
/// and `decode` formats raw bytes as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Utf8,
    Latin1,
    Base64,
    Hex,
    Utf16Le,
}

impl Encoding {
    /// Resolves a platform encoding name, case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// use binbuf_buffers::Encoding;
    ///
    /// assert_eq!(Encoding::from_name("utf-8").unwrap(), Encoding::Utf8);
    /// assert_eq!(Encoding::from_name("binary").unwrap(), Encoding::Latin1);
    /// assert_eq!(Encoding::from_name("ucs2").unwrap(), Encoding::Utf16Le);
    /// assert!(Encoding::from_name("ebcdic").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Encoding, EncodingError> {
        match name.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "latin1" | "binary" => Ok(Encoding::Latin1),
            "base64" => Ok(Encoding::Base64),
            "hex" => Ok(Encoding::Hex),
            "utf16le" | "utf-16le" | "ucs2" | "ucs-2" => Ok(Encoding::Utf16Le),
            _ => Err(EncodingError::UnknownEncoding(name.to_string())),
        }
    }

    /// Converts a string into buffer bytes.
    ///
    /// Latin-1 truncates each UTF-16 code unit to its low 8 bits. Base64 and
    /// Hex parse the text and fail on malformed input; the other codecs are
    /// total.
    pub fn encode(&self, s: &str) -> Result<Vec<u8>, EncodingError> {
        match self {
            Encoding::Utf8 => Ok(s.as_bytes().to_vec()),
            Encoding::Latin1 => Ok(s.encode_utf16().map(|u| (u & 0xFF) as u8).collect()),
            Encoding::Base64 => Ok(BASE64.decode(s)?),
            Encoding::Hex => Ok(hex::decode(s)?),
            Encoding::Utf16Le => Ok(s.encode_utf16().flat_map(|u| u.to_le_bytes()).collect()),
        }
    }

    /// Renders buffer bytes as a string.
    ///
    /// Lossy where the byte stream is not valid for the encoding: invalid
    /// UTF-8 sequences and unpaired UTF-16 surrogates become replacement
    /// characters, and a dangling trailing byte in UTF-16 is ignored.
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            Encoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Encoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
            Encoding::Base64 => BASE64.encode(bytes),
            Encoding::Hex => hex::encode(bytes),
            Encoding::Utf16Le => {
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16_lossy(&units)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_roundtrip() {
        let s = "héllo 日本";
        let bytes = Encoding::Utf8.encode(s).unwrap();
        assert_eq!(Encoding::Utf8.decode(&bytes), s);
    }

    #[test]
    fn test_utf8_lossy_decode() {
        assert_eq!(Encoding::Utf8.decode(&[0x68, 0xFF, 0x69]), "h\u{FFFD}i");
    }

    #[test]
    fn test_latin1() {
        let bytes = Encoding::Latin1.encode("café").unwrap();
        assert_eq!(bytes, [0x63, 0x61, 0x66, 0xE9]);
        assert_eq!(Encoding::Latin1.decode(&bytes), "café");
        // Code units above 0xFF are truncated to their low byte.
        assert_eq!(Encoding::Latin1.encode("\u{0101}").unwrap(), [0x01]);
    }

    #[test]
    fn test_base64() {
        let bytes = Encoding::Base64.encode("aGVsbG8gd29ybGQ=").unwrap();
        assert_eq!(bytes, b"hello world");
        assert_eq!(Encoding::Base64.decode(b"hello world"), "aGVsbG8gd29ybGQ=");
        assert!(Encoding::Base64.encode("not base64!!!").is_err());
    }

    #[test]
    fn test_hex() {
        let bytes = Encoding::Hex.encode("01ff7e").unwrap();
        assert_eq!(bytes, [0x01, 0xFF, 0x7E]);
        assert_eq!(Encoding::Hex.decode(&bytes), "01ff7e");
        assert!(Encoding::Hex.encode("odd").is_err());
        assert!(Encoding::Hex.encode("zz").is_err());
    }

    #[test]
    fn test_utf16le() {
        let bytes = Encoding::Utf16Le.encode("hi").unwrap();
        assert_eq!(bytes, [0x68, 0x00, 0x69, 0x00]);
        assert_eq!(Encoding::Utf16Le.decode(&bytes), "hi");
        // Dangling trailing byte is ignored.
        assert_eq!(Encoding::Utf16Le.decode(&[0x68, 0x00, 0x69]), "h");
    }

    #[test]
    fn test_utf16le_surrogate_pair() {
        let s = "𝄞"; // U+1D11E, encoded as a surrogate pair
        let bytes = Encoding::Utf16Le.encode(s).unwrap();
        assert_eq!(bytes.len(), 4);
        assert_eq!(Encoding::Utf16Le.decode(&bytes), s);
    }

    #[test]
    fn test_from_name_unknown() {
        match Encoding::from_name("shift-jis") {
            Err(EncodingError::UnknownEncoding(name)) => assert_eq!(name, "shift-jis"),
            other => panic!("expected UnknownEncoding, got {other:?}"),
        }
    }
}
