//! Reader trait definitions and error types.

use super::Charset;
use crate::model::MetadataSnapshot;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors raised when a metadata document cannot be turned into a snapshot.
///
/// Every structural variant carries the path of the offending element, such
/// as `properties[3].type`, so that callers can point at the exact field.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Invalid JSON at line {line}, column {column}: {message}")]
    InvalidJson {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("{path}: expected a JSON object")]
    NotAnObject { path: String },

    #[error("{path}: missing required field '{field}'")]
    MissingField { path: String, field: String },

    #[error("{path}: expected {expected}, found {found}")]
    InvalidType {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{path}: {message}")]
    InvalidValue { path: String, message: String },

    #[error("Unsupported character encoding: {0}")]
    UnsupportedCharset(String),

    #[error("Input is not valid {charset}: {message}")]
    Decoding {
        charset: &'static str,
        message: String,
    },
}

impl ParseError {
    /// Path of the offending element, when the error is tied to one.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::NotAnObject { path }
            | Self::MissingField { path, .. }
            | Self::InvalidType { path, .. }
            | Self::InvalidValue { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

/// Trait for configuration metadata readers.
///
/// Implementors provide [`parse_str`](MetadataReader::parse_str); decoding a
/// byte stream with an explicit charset is shared. Readers never open or
/// close streams themselves.
pub trait MetadataReader {
    /// Parse a snapshot from already-decoded text
    fn parse_str(&self, content: &str) -> Result<MetadataSnapshot, ParseError>;

    /// Name of the document format this reader understands
    fn format_name(&self) -> &str;

    /// Read a snapshot from a byte stream using the named charset.
    fn read<R: Read>(&self, mut input: R, charset: &str) -> Result<MetadataSnapshot, ParseError>
    where
        Self: Sized,
    {
        let charset: Charset = charset.parse()?;
        let mut bytes = Vec::new();
        input.read_to_end(&mut bytes)?;
        let content = charset.decode(&bytes)?;
        self.parse_str(&content)
    }

    /// Read a snapshot from a file using the named charset.
    fn read_path(&self, path: &Path, charset: &str) -> Result<MetadataSnapshot, ParseError>
    where
        Self: Sized,
    {
        let file = std::fs::File::open(path)?;
        self.read(std::io::BufReader::new(file), charset)
    }
}
