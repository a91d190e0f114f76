//! Diff computation stage.

use super::exit_codes;
use super::parse::ParsedSnapshot;
use crate::config::DiffOptions;
use crate::diff::{DiffEngine, DiffResult};

/// Diff two parsed snapshots, labelling the result with their versions when known.
pub fn compute_diff(
    old: &ParsedSnapshot,
    new: &ParsedSnapshot,
    options: &DiffOptions,
    quiet: bool,
) -> DiffResult {
    if !quiet {
        tracing::info!("Computing diff...");
    }

    let engine = DiffEngine::new().include_groups(options.include_groups);
    let mut result = engine.diff(old.snapshot(), new.snapshot());
    if let (Some(old_version), Some(new_version)) = (old.version(), new.version()) {
        result = result.with_versions(old_version, new_version);
    }

    if !quiet {
        tracing::info!(
            "Diff complete: {} added, {} removed, {} replaced, {} deprecated, {} changed",
            result.summary.properties_added,
            result.summary.properties_removed,
            result.summary.properties_replaced,
            result.summary.properties_deprecated,
            result.summary.properties_changed
        );
    }

    result
}

/// Exit code for a finished diff.
#[must_use]
pub fn exit_code_for(result: &DiffResult, fail_on_change: bool) -> i32 {
    if fail_on_change && result.has_changes() {
        exit_codes::CHANGES_DETECTED
    } else {
        exit_codes::SUCCESS
    }
}
