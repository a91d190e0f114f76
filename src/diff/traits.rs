//! Trait definitions for diff computation strategies.
//!
//! This module provides abstractions for computing different types of changes,
//! enabling modular and testable diff operations.

use super::{
    GroupChanges, PropertyAddition, PropertyChange, PropertyDeletion, PropertyDeprecation,
    PropertyReplacement,
};
use crate::model::MetadataSnapshot;

/// Trait for computing a specific type of change between snapshots.
///
/// Implementors provide logic for detecting a particular category of changes
/// (property membership, property fields, groups).
pub trait ChangeComputer: Send + Sync {
    /// The type of changes this computer produces.
    type ChangeSet;

    /// Compute changes between the older and newer snapshot.
    fn compute(&self, old: &MetadataSnapshot, new: &MetadataSnapshot) -> Self::ChangeSet;

    /// Get the name of this change computer for logging/debugging.
    fn name(&self) -> &str;
}

/// Properties that appeared or disappeared between snapshots.
#[derive(Debug, Clone, Default)]
pub struct MembershipChangeSet {
    pub additions: Vec<PropertyAddition>,
    pub deletions: Vec<PropertyDeletion>,
    pub replacements: Vec<PropertyReplacement>,
}

impl MembershipChangeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.deletions.is_empty() && self.replacements.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.additions.len() + self.deletions.len() + self.replacements.len()
    }
}

/// Differences in properties present in both snapshots.
#[derive(Debug, Clone, Default)]
pub struct FieldChangeSet {
    pub deprecations: Vec<PropertyDeprecation>,
    pub changes: Vec<PropertyChange>,
}

impl FieldChangeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deprecations.is_empty() && self.changes.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.deprecations.len() + self.changes.len()
    }
}

/// Group changes share the result representation.
pub type GroupChangeSet = GroupChanges;
