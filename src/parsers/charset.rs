//! Character encodings accepted by metadata readers.
//!
//! Readers never guess an encoding: the caller names one explicitly.

use super::ParseError;
use std::fmt;
use std::str::FromStr;

const BOM: char = '\u{feff}';

/// A supported character encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Charset {
    #[default]
    Utf8,
    UsAscii,
    /// ISO-8859-1
    Latin1,
    /// UTF-16 with an optional byte order mark, big-endian otherwise
    Utf16,
    Utf16Le,
    Utf16Be,
}

impl Charset {
    /// Canonical name of the encoding
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::UsAscii => "US-ASCII",
            Self::Latin1 => "ISO-8859-1",
            Self::Utf16 => "UTF-16",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf16Be => "UTF-16BE",
        }
    }

    /// Decode raw bytes into text, dropping a leading byte order mark.
    pub fn decode(&self, bytes: &[u8]) -> Result<String, ParseError> {
        let text = match self {
            Self::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|e| self.error(e))?,
            Self::UsAscii => {
                if let Some(pos) = bytes.iter().position(|b| !b.is_ascii()) {
                    return Err(self.error(format!("non-ASCII byte at offset {pos}")));
                }
                bytes.iter().map(|&b| char::from(b)).collect()
            }
            Self::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
            Self::Utf16 => match bytes {
                [0xFF, 0xFE, rest @ ..] => self.decode_utf16(rest, u16::from_le_bytes)?,
                [0xFE, 0xFF, rest @ ..] => self.decode_utf16(rest, u16::from_be_bytes)?,
                _ => self.decode_utf16(bytes, u16::from_be_bytes)?,
            },
            Self::Utf16Le => self.decode_utf16(bytes, u16::from_le_bytes)?,
            Self::Utf16Be => self.decode_utf16(bytes, u16::from_be_bytes)?,
        };
        Ok(match text.strip_prefix(BOM) {
            Some(stripped) => stripped.to_string(),
            None => text,
        })
    }

    fn decode_utf16(
        &self,
        bytes: &[u8],
        to_unit: fn([u8; 2]) -> u16,
    ) -> Result<String, ParseError> {
        if bytes.len() % 2 != 0 {
            return Err(self.error("odd number of bytes"));
        }
        let units = bytes.chunks_exact(2).map(|pair| to_unit([pair[0], pair[1]]));
        char::decode_utf16(units)
            .collect::<Result<String, _>>()
            .map_err(|e| self.error(e))
    }

    fn error(&self, message: impl fmt::Display) -> ParseError {
        ParseError::Decoding {
            charset: self.name(),
            message: message.to_string(),
        }
    }
}

impl FromStr for Charset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "us-ascii" | "ascii" => Ok(Self::UsAscii),
            "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" => Ok(Self::Latin1),
            "utf-16" | "utf16" => Ok(Self::Utf16),
            "utf-16le" | "utf16le" => Ok(Self::Utf16Le),
            "utf-16be" | "utf16be" => Ok(Self::Utf16Be),
            _ => Err(ParseError::UnsupportedCharset(s.to_string())),
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
