//! Configuration types for config-metadata-diff operations.

use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfigBuilder`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// How metadata documents are located and decoded
    pub input: InputConfig,
    /// Diff engine options
    pub diff: DiffOptions,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl From<AppConfig> for AppConfigBuilder {
    fn from(config: AppConfig) -> Self {
        Self { config }
    }
}

impl AppConfigBuilder {
    /// Set the charset used to decode metadata documents.
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.config.input.charset = charset.into();
        self
    }

    /// Set the directory holding per-version metadata files.
    pub fn metadata_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.config.input.metadata_dir = dir;
        self
    }

    /// Set the per-version file name template.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.config.input.template = template.into();
        self
    }

    /// Report group additions and removals.
    pub const fn include_groups(mut self, include: bool) -> Self {
        self.config.diff.include_groups = include;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Set the report title.
    pub fn title(mut self, title: Option<String>) -> Self {
        self.config.output.title = title;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Enable fail-on-change mode.
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_change = fail;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Input-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct InputConfig {
    /// Character encoding of metadata documents
    /// (UTF-8, US-ASCII, ISO-8859-1, UTF-16, UTF-16LE, UTF-16BE)
    pub charset: String,
    /// Directory of per-version metadata files used by `diff-versions`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_dir: Option<PathBuf>,
    /// File name template inside `metadata_dir`; `{version}` is replaced by the version
    pub template: String,
}

/// Diff engine options
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DiffOptions {
    /// Report added and removed groups
    pub include_groups: bool,
}

/// Output-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Report title, derived from the compared versions when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Behavior flags
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 if any changes detected
    pub fail_on_change: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}
