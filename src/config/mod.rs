//! Configuration module for config-metadata-diff.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//!
//! # Quick Start
//!
//! ```
//! use config_metadata_diff::config::{AppConfig, Validatable};
//! use config_metadata_diff::reports::ReportFormat;
//!
//! let config = AppConfig::builder()
//!     .output_format(ReportFormat::Asciidoc)
//!     .charset("ISO-8859-1")
//!     .fail_on_change(true)
//!     .build();
//! assert!(config.is_valid());
//! ```
//!
//! # Configuration File
//!
//! Place a `.config-metadata-diff.yaml` file in your project root or
//! `~/.config/config-metadata-diff/`:
//!
//! ```yaml
//! input:
//!   metadata_dir: ./metadata
//!   template: spring-boot-{version}.json
//! output:
//!   format: asciidoc
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{DEFAULT_CHARSET, DEFAULT_METADATA_TEMPLATE};
pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, DiffOptions, InputConfig, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all options that can be set in
/// `.config-metadata-diff.yaml` files, for editor validation and completion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
