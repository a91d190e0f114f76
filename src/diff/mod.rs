//! Diff engine for configuration metadata snapshots.
//!
//! Properties are keyed by id. The engine reports which ids appeared or
//! disappeared between two snapshots, pairs removed properties with their
//! declared replacement, and compares the attributes of properties present in
//! both.
//!
//! # Architecture
//!
//! The diff system is built on traits for extensibility:
//!
//! - [`ChangeComputer`](traits::ChangeComputer): Trait for computing specific types of changes
//! - Individual change computers in the [`changes`] module
//!
//! # Example
//!
//! ```
//! use config_metadata_diff::diff::DiffEngine;
//! use config_metadata_diff::model::{MetadataProperty, MetadataSnapshot};
//!
//! let mut old = MetadataSnapshot::new();
//! old.add_property(MetadataProperty::new("server.port").with_type("java.lang.String"));
//! let mut new = MetadataSnapshot::new();
//! new.add_property(MetadataProperty::new("server.port").with_type("java.lang.Integer"));
//!
//! let result = DiffEngine::new().diff(&old, &new);
//! assert_eq!(result.changes.len(), 1);
//! assert_eq!(result.changes[0].field.name(), "type");
//! ```

pub mod changes;
mod engine;
mod result;
pub mod traits;

pub use engine::DiffEngine;
pub use result::{
    ChangedField, DiffResult, DiffSummary, GroupChanges, PropertyAddition, PropertyChange,
    PropertyDeletion, PropertyDeprecation, PropertyReplacement,
};
pub use traits::{ChangeComputer, FieldChangeSet, GroupChangeSet, MembershipChangeSet};
