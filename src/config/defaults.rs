//! Default values for config-metadata-diff settings.

use super::types::{AppConfig, BehaviorConfig, DiffOptions, InputConfig, OutputConfig};
use crate::reports::ReportFormat;
use crate::source::DEFAULT_TEMPLATE;

/// Charset used when neither the CLI nor the config file names one.
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// File name template used by `diff-versions` when none is configured.
pub const DEFAULT_METADATA_TEMPLATE: &str = DEFAULT_TEMPLATE;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            diff: DiffOptions::default(),
            output: OutputConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            charset: DEFAULT_CHARSET.to_string(),
            metadata_dir: None,
            template: DEFAULT_METADATA_TEMPLATE.to_string(),
        }
    }
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            include_groups: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Summary,
            file: None,
            no_color: false,
            title: None,
        }
    }
}
