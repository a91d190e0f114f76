//! View command handler.
//!
//! Implements the `view` subcommand for summarizing a single metadata file.

use crate::config::AppConfig;
use crate::pipeline::{exit_codes, output_view_report, parse_snapshot_file};
use anyhow::Result;
use std::path::Path;

/// Run the view command
pub fn run_view(config: &AppConfig, path: &Path) -> Result<i32> {
    let quiet = config.behavior.quiet;
    let parsed = parse_snapshot_file(path, &config.input.charset, quiet)?;
    output_view_report(&config.output, quiet, &parsed)?;
    Ok(exit_codes::SUCCESS)
}
