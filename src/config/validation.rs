//! Configuration validation for config-metadata-diff.

use super::types::{AppConfig, InputConfig, OutputConfig};
use crate::error::{ConfigDiffError, Result};
use crate::parsers::Charset;
use crate::source::VERSION_PLACEHOLDER;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Pass the value through when valid, otherwise fail with every error found.
    fn into_validated(self) -> Result<Self>
    where
        Self: Sized,
    {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(self);
        }
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        Err(ConfigDiffError::validation(messages.join("; ")))
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.input.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for InputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Err(e) = self.charset.parse::<Charset>() {
            errors.push(ConfigError {
                field: "input.charset".to_string(),
                message: e.to_string(),
            });
        }

        if !self.template.contains(VERSION_PLACEHOLDER) {
            errors.push(ConfigError {
                field: "input.template".to_string(),
                message: format!(
                    "Template '{}' must contain the {VERSION_PLACEHOLDER} placeholder",
                    self.template
                ),
            });
        }

        if let Some(ref dir) = self.metadata_dir {
            if dir.exists() && !dir.is_dir() {
                errors.push(ConfigError {
                    field: "input.metadata_dir".to_string(),
                    message: format!("{} is not a directory", dir.display()),
                });
            }
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // Validate output file path if specified
        if let Some(parent) = self.file.as_deref().and_then(std::path::Path::parent) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError {
                    field: "output.file".to_string(),
                    message: format!("Parent directory does not exist: {}", parent.display()),
                });
            }
        }

        errors
    }
}
