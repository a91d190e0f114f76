//! Unified error types for config-metadata-diff.
//!
//! Component-level errors ([`ParseError`], [`SourceError`], [`ReportError`])
//! are wrapped by [`ConfigDiffError`], which carries a chain of context
//! strings describing where the failure happened.

use crate::parsers::ParseError;
use crate::reports::ReportError;
use crate::source::SourceError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for config-metadata-diff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigDiffError {
    /// Malformed metadata document
    #[error("Failed to read metadata: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseError,
    },

    /// A snapshot could not be located for a version
    #[error("Failed to resolve snapshot: {context}")]
    Source {
        context: String,
        #[source]
        source: SourceError,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportError,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Convenient Result type for config-metadata-diff operations
pub type Result<T> = std::result::Result<T, ConfigDiffError>;

impl ConfigDiffError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseError) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a snapshot resolution error with context
    pub fn resolution(context: impl Into<String>, source: SourceError) -> Self {
        Self::Source {
            context: context.into(),
            source,
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportError) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Field path of the offending metadata entry, if this is a parse error.
    #[must_use]
    pub fn metadata_path(&self) -> Option<&str> {
        match self {
            Self::Parse { source, .. } => source.path(),
            _ => None,
        }
    }
}

impl From<ParseError> for ConfigDiffError {
    fn from(err: ParseError) -> Self {
        Self::parse(String::new(), err)
    }
}

impl From<SourceError> for ConfigDiffError {
    fn from(err: SourceError) -> Self {
        Self::resolution(String::new(), err)
    }
}

impl From<ReportError> for ConfigDiffError {
    fn from(err: ReportError) -> Self {
        Self::report(String::new(), err)
    }
}

impl From<std::io::Error> for ConfigDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

/// Extension trait for adding context to errors.
///
/// Context strings are chained, outermost first:
///
/// ```
/// use config_metadata_diff::error::{ErrorContext, Result};
/// use config_metadata_diff::parsers::parse_metadata_str;
///
/// fn load(version: &str, json: &str) -> Result<usize> {
///     let snapshot = parse_metadata_str(json)
///         .with_context(|| format!("version {version}"))?;
///     Ok(snapshot.property_count())
/// }
///
/// let err = load("1.0.0", "[]").unwrap_err();
/// assert!(err.to_string().contains("version 1.0.0"));
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<ConfigDiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: ConfigDiffError, new_ctx: &str) -> ConfigDiffError {
    match err {
        ConfigDiffError::Parse {
            context: existing,
            source,
        } => ConfigDiffError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ConfigDiffError::Source {
            context: existing,
            source,
        } => ConfigDiffError::Source {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ConfigDiffError::Report {
            context: existing,
            source,
        } => ConfigDiffError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ConfigDiffError::Io {
            path,
            message,
            source,
        } => ConfigDiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        ConfigDiffError::Config(msg) => ConfigDiffError::Config(chain_context(new_ctx, &msg)),
        ConfigDiffError::Validation(msg) => {
            ConfigDiffError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings together.
///
/// Returns "`new`: `existing`", or just `new` when nothing was recorded yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to a validation error with the given message.
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| ConfigDiffError::Validation(context.into()))
    }
}
