//! Snapshot sources: resolving a version string to a metadata byte stream.
//!
//! Locating metadata inside a released artifact is left to implementations of
//! [`SnapshotSource`]. The crate ships a filesystem-backed source that reads
//! one metadata file per version from a directory.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Placeholder replaced by the version in file name templates.
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Default file name template for [`DirectorySnapshotSource`].
pub const DEFAULT_TEMPLATE: &str = "{version}.json";

/// Errors raised when a version cannot be resolved to metadata.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("No metadata found for version '{version}' at {}", path.display())]
    NotFound { version: String, path: PathBuf },

    #[error("Invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("Failed to open metadata for version '{version}' at {}: {source}", path.display())]
    Io {
        version: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// Version that failed to resolve
    #[must_use]
    pub fn version(&self) -> &str {
        match self {
            Self::NotFound { version, .. }
            | Self::InvalidVersion { version, .. }
            | Self::Io { version, .. } => version,
        }
    }
}

/// Resolves a version string to a readable metadata stream.
///
/// The returned stream is owned by the caller, which closes it by dropping it.
pub trait SnapshotSource: Send + Sync {
    /// Open the metadata of `version`.
    fn open(&self, version: &str) -> Result<Box<dyn Read + Send>, SourceError>;

    /// Human-readable location of `version`, for diagnostics.
    fn describe(&self, version: &str) -> String;
}

/// Reads metadata files from a directory, one file per version.
///
/// ```no_run
/// use config_metadata_diff::source::{DirectorySnapshotSource, SnapshotSource};
///
/// let source =
///     DirectorySnapshotSource::new("metadata").with_template("spring-boot-{version}.json");
/// let stream = source.open("3.2.0").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DirectorySnapshotSource {
    root: PathBuf,
    template: String,
}

impl DirectorySnapshotSource {
    /// Create a source rooted at `root` using the default `{version}.json` template
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    /// Use a custom file name template containing `{version}`
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Path of the metadata file for `version`.
    pub fn path_for(&self, version: &str) -> Result<PathBuf, SourceError> {
        validate_version(version)?;
        Ok(self
            .root
            .join(self.template.replace(VERSION_PLACEHOLDER, version)))
    }
}

impl SnapshotSource for DirectorySnapshotSource {
    fn open(&self, version: &str) -> Result<Box<dyn Read + Send>, SourceError> {
        let path = self.path_for(version)?;
        tracing::debug!(version, path = %path.display(), "Opening metadata snapshot");
        match File::open(&path) {
            Ok(file) => Ok(Box::new(BufReader::new(file))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(SourceError::NotFound {
                version: version.to_string(),
                path,
            }),
            Err(source) => Err(SourceError::Io {
                version: version.to_string(),
                path,
                source,
            }),
        }
    }

    fn describe(&self, version: &str) -> String {
        self.path_for(version).map_or_else(
            |_| format!("{version} (invalid)"),
            |path| path.display().to_string(),
        )
    }
}

/// Reject versions that would escape the source directory.
fn validate_version(version: &str) -> Result<(), SourceError> {
    let reason = if version.trim().is_empty() {
        Some("version must not be empty")
    } else if version.contains(['/', '\\']) {
        Some("version must not contain path separators")
    } else if version == "." || version == ".." {
        Some("version must not be a relative path component")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(SourceError::InvalidVersion {
            version: version.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_existing_version() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("1.0.json"), b"{}").expect("write");
        let source = DirectorySnapshotSource::new(dir.path());

        let mut content = String::new();
        source
            .open("1.0")
            .expect("version exists")
            .read_to_string(&mut content)
            .expect("read");
        assert_eq!(content, "{}");
    }

    #[test]
    fn test_missing_version() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = DirectorySnapshotSource::new(dir.path());
        match source.open("9.9") {
            Err(SourceError::NotFound { version, path }) => {
                assert_eq!(version, "9.9");
                assert!(path.ends_with("9.9.json"));
            }
            Err(other) => panic!("Expected NotFound, got {other:?}"),
            Ok(_) => panic!("Expected NotFound, got a stream"),
        }
    }

    #[test]
    fn test_custom_template() {
        let source =
            DirectorySnapshotSource::new("/meta").with_template("boot-{version}/metadata.json");
        let path = source.path_for("3.2.0").expect("valid version");
        assert_eq!(path, Path::new("/meta/boot-3.2.0/metadata.json"));
    }

    #[test]
    fn test_rejects_path_traversal() {
        let source = DirectorySnapshotSource::new("/meta");
        for version in ["../etc/passwd", "a/b", "..", "", "  "] {
            let err = source.path_for(version).expect_err("invalid version");
            assert!(matches!(err, SourceError::InvalidVersion { .. }), "{version}");
            assert_eq!(err.version(), version);
        }
    }

    #[test]
    fn test_describe() {
        let source = DirectorySnapshotSource::new("/meta");
        assert!(source.describe("1.0").ends_with("1.0.json"));
        assert_eq!(source.describe(".."), ".. (invalid)");
    }
}
