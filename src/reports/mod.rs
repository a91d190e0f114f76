//! Report generation for diff results.
//!
//! This module provides multiple output formats for metadata diff results:
//! - AsciiDoc: Changelog tables for documentation sites
//! - Markdown: Human-readable documentation
//! - JSON: Structured data for programmatic integration
//! - Summary: Compact shell-friendly output
//!
//! Every formatter lists each entry of a [`DiffResult`] exactly once, grouped
//! by category in the order the diff engine produced them.
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation.
//! All document-provided data (ids, descriptions, default values) should
//! be escaped before embedding in table-based reports.

mod asciidoc;
pub mod escape;
mod json;
mod markdown;
mod summary;
mod tables;
mod types;

pub use asciidoc::AsciiDocFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use summary::SummaryFormatter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::diff::DiffResult;
use crate::model::MetadataSnapshot;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for diff formatters
pub trait DiffFormatter {
    /// Generate a report from diff results
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Generate a report for a single snapshot (view mode)
    fn generate_view_report(
        &self,
        snapshot: &MetadataSnapshot,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Render diff results with the default configuration
    fn format_diff(&self, result: &DiffResult) -> Result<String, ReportError> {
        self.generate_diff_report(result, &ReportConfig::default())
    }

    /// Write report to a writer
    fn write_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_diff_report(result, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this formatter produces
    fn format(&self) -> ReportFormat;
}

/// Create a formatter for the given format
#[must_use]
pub fn create_formatter(format: ReportFormat) -> Box<dyn DiffFormatter> {
    create_formatter_with_options(format, true)
}

/// Create a formatter with color control
#[must_use]
pub fn create_formatter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn DiffFormatter> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryFormatter::new())
            } else {
                Box::new(SummaryFormatter::new().no_color())
            }
        }
        ReportFormat::Asciidoc => Box::new(AsciiDocFormatter::new()),
        ReportFormat::Markdown => Box::new(MarkdownFormatter::new()),
        ReportFormat::Json => Box::new(JsonFormatter::new()),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::diff::{DiffEngine, DiffResult};
    use crate::model::{Deprecation, MetadataGroup, MetadataProperty, MetadataSnapshot};

    /// A diff touching every change category once.
    pub(crate) fn sample_result() -> DiffResult {
        let mut old = MetadataSnapshot::new();
        old.add_property(
            MetadataProperty::new("server.host").with_deprecation(
                Deprecation::replaced_by("server.address").with_reason("Use server.address."),
            ),
        );
        old.add_property(MetadataProperty::new("server.legacy").with_default(true));
        old.add_property(
            MetadataProperty::new("server.port")
                .with_type("java.lang.String")
                .with_default(8080_i64),
        );
        old.add_property(MetadataProperty::new("server.use-forward-headers"));
        old.add_property(MetadataProperty::new("server.servlet.context-path"));

        let mut new = MetadataSnapshot::new();
        let mut group = MetadataGroup::new("server");
        group.type_name = Some("org.example.ServerProperties".to_string());
        new.add_group(group);
        new.add_property(
            MetadataProperty::new("server.address")
                .with_description("Network address to which the server should bind. Optional."),
        );
        new.add_property(
            MetadataProperty::new("server.port")
                .with_type("java.lang.Integer")
                .with_default(8081_i64),
        );
        new.add_property(
            MetadataProperty::new("server.use-forward-headers")
                .with_deprecation(Deprecation::replaced_by("server.forward-headers-strategy")),
        );
        new.add_property(MetadataProperty::new("server.servlet.context-path"));

        DiffEngine::new().diff(&old, &new).with_versions("1.0", "2.0")
    }
}
