//! **A library for diffing configuration-property metadata across releases.**
//!
//! Frameworks in the Spring Boot family publish a JSON document describing
//! every configuration property an artifact understands: its id, type,
//! default value, description and deprecation status. `config-metadata-diff`
//! reads two of those documents and reports what changed between them, so a
//! maintainer can publish a changelog of configurable settings.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The in-memory snapshot of one metadata document,
//!   [`MetadataSnapshot`], with its groups, properties and hints.
//! - **[`parsers`]**: Readers that decode a metadata document in an explicit
//!   charset and build a snapshot. Malformed input yields a [`parsers::ParseError`]
//!   naming the offending field path.
//! - **[`diff`]**: The [`DiffEngine`], which compares two snapshots and
//!   produces a [`DiffResult`] of additions, deletions, replacements,
//!   deprecations and field changes.
//! - **[`reports`]**: Formatters rendering a `DiffResult` as AsciiDoc,
//!   Markdown, JSON or a terminal summary.
//! - **[`source`]**: Resolution of a version string to a metadata stream.
//! - **[`pipeline`]**: Read → diff → report orchestration shared by the CLI.
//!
//! ## Getting Started: Diffing Two Documents
//!
//! ```
//! use config_metadata_diff::{parse_metadata_str, DiffEngine};
//! use config_metadata_diff::reports::{DiffFormatter, MarkdownFormatter};
//!
//! let old = parse_metadata_str(r#"{"properties": [
//!     {"id": "server.port", "type": "java.lang.Integer", "defaultValue": 8080},
//!     {"id": "server.host", "deprecation": {"replacement": "server.address"}}
//! ]}"#)?;
//! let new = parse_metadata_str(r#"{"properties": [
//!     {"id": "server.port", "type": "java.lang.Integer", "defaultValue": 8081},
//!     {"id": "server.address"}
//! ]}"#)?;
//!
//! let diff = DiffEngine::new().diff(&old, &new);
//! assert_eq!(diff.replacements[0].replacement_id(), "server.address");
//! assert_eq!(diff.changes[0].field.name(), "defaultValue");
//!
//! let markdown = MarkdownFormatter::new().format_diff(&diff)?;
//! assert!(markdown.contains("## Replaced Properties"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the library crate. The `config-metadata-diff`
//! binary wraps it with `diff`, `diff-versions` and `view` subcommands.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;
pub mod source;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use diff::{DiffEngine, DiffResult};
pub use error::{ConfigDiffError, ErrorContext, OptionContext, Result};
pub use model::{MetadataGroup, MetadataHint, MetadataProperty, MetadataSnapshot};
pub use parsers::{parse_metadata, parse_metadata_str, read_metadata, MetadataReader};
pub use reports::{DiffFormatter, ReportFormat};
pub use source::{DirectorySnapshotSource, SnapshotSource};
