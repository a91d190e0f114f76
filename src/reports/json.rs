//! JSON report generator.

use super::{DiffFormatter, ReportConfig, ReportError, ReportFormat};
use crate::diff::{
    DiffResult, DiffSummary, GroupChanges, PropertyAddition, PropertyChange, PropertyDeletion,
    PropertyDeprecation, PropertyReplacement,
};
use crate::model::MetadataSnapshot;
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonFormatter {
    /// Pretty print output
    pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn serialize<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffFormatter for JsonFormatter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonDiffReport {
            metadata: JsonReportMetadata::new(config),
            old_version: result.old_version.as_deref(),
            new_version: result.new_version.as_deref(),
            summary: &result.summary,
            additions: &result.additions,
            deletions: &result.deletions,
            deprecations: &result.deprecations,
            changes: &result.changes,
            replacements: &result.replacements,
            groups: &result.groups,
        };
        self.serialize(&report)
    }

    fn generate_view_report(
        &self,
        snapshot: &MetadataSnapshot,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonViewReport {
            metadata: JsonReportMetadata::new(config),
            group_count: snapshot.group_count(),
            property_count: snapshot.property_count(),
            deprecated_count: snapshot.deprecated_count(),
            snapshot,
        };
        self.serialize(&report)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// ============================================================================
// JSON report structures
// ============================================================================

#[derive(Serialize)]
struct JsonDiffReport<'a> {
    metadata: JsonReportMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    old_version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_version: Option<&'a str>,
    summary: &'a DiffSummary,
    additions: &'a [PropertyAddition],
    deletions: &'a [PropertyDeletion],
    deprecations: &'a [PropertyDeprecation],
    changes: &'a [PropertyChange],
    replacements: &'a [PropertyReplacement],
    groups: &'a GroupChanges,
}

#[derive(Serialize)]
struct JsonViewReport<'a> {
    metadata: JsonReportMetadata,
    group_count: usize,
    property_count: usize,
    deprecated_count: usize,
    snapshot: &'a MetadataSnapshot,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    old_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_path: Option<String>,
}

impl JsonReportMetadata {
    fn new(config: &ReportConfig) -> Self {
        Self {
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            generated_at: Utc::now().to_rfc3339(),
            title: config.title.clone(),
            old_path: config.metadata.old_path.clone(),
            new_path: config.metadata.new_path.clone(),
        }
    }
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}
