//! Diff command handlers.
//!
//! Implements the `diff` subcommand for comparing two metadata files and the
//! `diff-versions` subcommand for comparing two versions from a metadata
//! directory.

use crate::config::AppConfig;
use crate::error::{ConfigDiffError, OptionContext};
use crate::pipeline::{
    compute_diff, exit_code_for, output_report, parse_file_pair, read_version_pair,
    ParsedSnapshot,
};
use crate::source::DirectorySnapshotSource;
use anyhow::Result;
use std::path::Path;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_diff(config: &AppConfig, old: &Path, new: &Path) -> Result<i32> {
    let (old_parsed, new_parsed) =
        parse_file_pair(old, new, &config.input.charset, config.behavior.quiet)?;
    report_and_exit_code(config, &old_parsed, &new_parsed)
}

/// Run the diff-versions command, returning the desired exit code.
pub fn run_diff_versions(config: &AppConfig, old_version: &str, new_version: &str) -> Result<i32> {
    let dir = config.input.metadata_dir.as_deref().context_none(
        "no metadata directory configured; pass --metadata-dir or set input.metadata_dir",
    )?;
    if !dir.is_dir() {
        return Err(ConfigDiffError::config(format!(
            "metadata directory {} does not exist",
            dir.display()
        ))
        .into());
    }

    let source = DirectorySnapshotSource::new(dir).with_template(config.input.template.as_str());
    let (old_parsed, new_parsed) = read_version_pair(
        &source,
        old_version,
        new_version,
        &config.input.charset,
        config.behavior.quiet,
    )?;
    report_and_exit_code(config, &old_parsed, &new_parsed)
}

fn report_and_exit_code(
    config: &AppConfig,
    old: &ParsedSnapshot,
    new: &ParsedSnapshot,
) -> Result<i32> {
    let quiet = config.behavior.quiet;
    if !quiet {
        tracing::info!(
            "Parsed {} properties from {}, {} from {}",
            old.snapshot().property_count(),
            old.origin(),
            new.snapshot().property_count(),
            new.origin()
        );
    }

    let result = compute_diff(old, new, &config.diff, quiet);
    output_report(&config.output, quiet, &result, old, new)?;

    Ok(exit_code_for(&result, config.behavior.fail_on_change))
}
