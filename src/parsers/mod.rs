//! Configuration metadata readers.
//!
//! Readers turn a metadata document into a [`MetadataSnapshot`]. Input is
//! decoded with an explicitly named charset; nothing is sniffed.
//!
//! ## Usage
//!
//! ```no_run
//! use config_metadata_diff::parsers::{parse_metadata, parse_metadata_str};
//! use std::path::Path;
//!
//! let path = Path::new("spring-configuration-metadata.json");
//! let snapshot = parse_metadata(path, "UTF-8").unwrap();
//! println!("{} properties", snapshot.property_count());
//!
//! let inline = parse_metadata_str(r#"{"properties": [{"id": "server.port"}]}"#).unwrap();
//! assert_eq!(inline.property_count(), 1);
//! ```

mod charset;
mod description;
mod json;
mod schema;
mod traits;

pub use charset::Charset;
pub use description::extract_short_description;
pub use json::JsonMetadataReader;
pub use traits::{MetadataReader, ParseError};

use crate::model::MetadataSnapshot;
use std::io::Read;
use std::path::Path;

/// Maximum metadata file size (64 MB).
const MAX_METADATA_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Parse a metadata snapshot from already-decoded text.
pub fn parse_metadata_str(content: &str) -> Result<MetadataSnapshot, ParseError> {
    JsonMetadataReader::new().parse_str(content)
}

/// Read a metadata snapshot from a byte stream using the named charset.
///
/// The stream is consumed but not closed; the caller owns it.
pub fn read_metadata<R: Read>(input: R, charset: &str) -> Result<MetadataSnapshot, ParseError> {
    JsonMetadataReader::new().read(input, charset)
}

/// Read a metadata snapshot from a file using the named charset.
///
/// Returns an error if the file exceeds [`MAX_METADATA_FILE_SIZE`].
pub fn parse_metadata(path: &Path, charset: &str) -> Result<MetadataSnapshot, ParseError> {
    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_METADATA_FILE_SIZE {
        return Err(ParseError::IoError(format!(
            "metadata file is {} MB, exceeding the {} MB limit",
            metadata.len() / (1024 * 1024),
            MAX_METADATA_FILE_SIZE / (1024 * 1024),
        )));
    }
    JsonMetadataReader::new().read_path(path, charset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_metadata_with_charset() {
        let bytes: Vec<u8> = r#"{"properties": [{"id": "a.b", "description": "Café."}]}"#
            .chars()
            .map(|c| u8::try_from(u32::from(c)).expect("latin1 test input"))
            .collect();
        let snapshot = read_metadata(Cursor::new(bytes), "ISO-8859-1").expect("latin1 document");
        assert_eq!(
            snapshot.property("a.b").and_then(|p| p.description.as_deref()),
            Some("Café.")
        );
    }

    #[test]
    fn test_read_metadata_unknown_charset() {
        let result = read_metadata(Cursor::new(b"{}".to_vec()), "KOI8-R");
        assert!(matches!(result, Err(ParseError::UnsupportedCharset(_))));
    }

    #[test]
    fn test_parse_metadata_missing_file() {
        let result = parse_metadata(Path::new("/nonexistent/metadata.json"), "UTF-8");
        assert!(matches!(result, Err(ParseError::IoError(_))));
    }

    #[test]
    fn test_reader_does_not_close_stream() {
        let mut cursor = Cursor::new(b"{}".to_vec());
        read_metadata(&mut cursor, "UTF-8").expect("empty document");
        assert_eq!(cursor.position(), 2);
    }
}
