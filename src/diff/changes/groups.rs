//! Group change computer implementation.

use crate::diff::traits::{ChangeComputer, GroupChangeSet};
use crate::model::MetadataSnapshot;

/// Computes groups added to or removed from the newer snapshot.
pub struct GroupChangeComputer;

impl GroupChangeComputer {
    /// Create a new group change computer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for GroupChangeComputer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeComputer for GroupChangeComputer {
    type ChangeSet = GroupChangeSet;

    fn compute(&self, old: &MetadataSnapshot, new: &MetadataSnapshot) -> GroupChangeSet {
        GroupChangeSet {
            added: new
                .groups
                .values()
                .filter(|g| !old.groups.contains_key(&g.id))
                .cloned()
                .collect(),
            removed: old
                .groups
                .values()
                .filter(|g| !new.groups.contains_key(&g.id))
                .cloned()
                .collect(),
        }
    }

    fn name(&self) -> &'static str {
        "GroupChangeComputer"
    }
}
