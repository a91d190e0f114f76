//! In-memory representation of configuration metadata.
//!
//! A [`MetadataSnapshot`] holds everything one metadata document declares:
//! groups, properties and hints. Readers in [`crate::parsers`] build
//! snapshots; the [`crate::diff`] engine compares two of them.
//!
//! ```
//! use config_metadata_diff::model::{Deprecation, MetadataProperty, MetadataSnapshot};
//!
//! let mut snapshot = MetadataSnapshot::new();
//! snapshot.add_property(
//!     MetadataProperty::new("server.port")
//!         .with_type("java.lang.Integer")
//!         .with_default(8080_i64),
//! );
//! snapshot.add_property(
//!     MetadataProperty::new("server.host")
//!         .with_deprecation(Deprecation::replaced_by("server.address")),
//! );
//! assert_eq!(snapshot.deprecated_count(), 1);
//! ```

mod hint;
mod metadata;
mod snapshot;
mod value;

pub use hint::*;
pub use metadata::*;
pub use snapshot::*;
pub use value::*;
