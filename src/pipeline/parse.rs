//! Snapshot reading stage.
//!
//! Reads metadata from files or a [`SnapshotSource`] and attaches the context
//! (file or version) that error messages need.

use crate::error::{ErrorContext, Result};
use crate::model::MetadataSnapshot;
use crate::parsers::{parse_metadata, read_metadata};
use crate::source::SnapshotSource;
use std::path::Path;

/// A parsed snapshot together with where it came from.
#[derive(Debug, Clone)]
pub struct ParsedSnapshot {
    snapshot: MetadataSnapshot,
    version: Option<String>,
    origin: String,
}

impl ParsedSnapshot {
    /// Wrap an already-built snapshot.
    pub fn new(snapshot: MetadataSnapshot, origin: impl Into<String>) -> Self {
        Self {
            snapshot,
            version: None,
            origin: origin.into(),
        }
    }

    /// Attach the version label the snapshot was resolved from.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub const fn snapshot(&self) -> &MetadataSnapshot {
        &self.snapshot
    }

    /// Version label, when the snapshot was resolved by version
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// File path or source location, for reports and diagnostics
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn into_snapshot(self) -> MetadataSnapshot {
        self.snapshot
    }
}

/// Parse a metadata file, naming the file in any error.
pub fn parse_snapshot_file(path: &Path, charset: &str, quiet: bool) -> Result<ParsedSnapshot> {
    if !quiet {
        tracing::info!("Parsing metadata: {}", path.display());
    }

    let snapshot = parse_metadata(path, charset)
        .with_context(|| format!("file {}", path.display()))?;
    snapshot.log_collision_summary();

    Ok(ParsedSnapshot::new(snapshot, path.display().to_string()))
}

/// Resolve `version` through `source` and parse it, naming the version in any error.
///
/// The stream opened from the source is dropped before this returns.
pub fn read_version(
    source: &dyn SnapshotSource,
    version: &str,
    charset: &str,
    quiet: bool,
) -> Result<ParsedSnapshot> {
    let origin = source.describe(version);
    if !quiet {
        tracing::info!("Reading metadata for version {version} from {origin}");
    }

    let stream = source
        .open(version)
        .with_context(|| format!("version {version}"))?;
    let snapshot =
        read_metadata(stream, charset).with_context(|| format!("version {version} ({origin})"))?;
    snapshot.log_collision_summary();

    Ok(ParsedSnapshot::new(snapshot, origin).with_version(version))
}

/// Parse two metadata files in parallel.
pub fn parse_file_pair(
    old: &Path,
    new: &Path,
    charset: &str,
    quiet: bool,
) -> Result<(ParsedSnapshot, ParsedSnapshot)> {
    let (old, new) = rayon::join(
        || parse_snapshot_file(old, charset, quiet),
        || parse_snapshot_file(new, charset, quiet),
    );
    Ok((old?, new?))
}

/// Resolve and parse two versions in parallel.
pub fn read_version_pair(
    source: &dyn SnapshotSource,
    old: &str,
    new: &str,
    charset: &str,
    quiet: bool,
) -> Result<(ParsedSnapshot, ParsedSnapshot)> {
    let (old, new) = rayon::join(
        || read_version(source, old, charset, quiet),
        || read_version(source, new, charset, quiet),
    );
    Ok((old?, new?))
}
