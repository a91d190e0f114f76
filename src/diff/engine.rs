//! Diff engine implementation.

use super::changes::{FieldChangeComputer, GroupChangeComputer, MembershipChangeComputer};
use super::traits::ChangeComputer;
use super::DiffResult;
use crate::model::MetadataSnapshot;

/// Engine comparing an older metadata snapshot with a newer one.
///
/// Diffing never fails: any two well-formed snapshots can be compared.
#[derive(Debug, Clone)]
pub struct DiffEngine {
    include_groups: bool,
}

impl DiffEngine {
    /// Create a new diff engine with default settings
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_groups: true,
        }
    }

    /// Report groups that were added or removed
    #[must_use]
    pub const fn include_groups(mut self, include: bool) -> Self {
        self.include_groups = include;
        self
    }

    /// Check if group changes are reported
    #[must_use]
    pub const fn groups_included(&self) -> bool {
        self.include_groups
    }

    /// Compare two snapshots and return the diff result
    pub fn diff(&self, old: &MetadataSnapshot, new: &MetadataSnapshot) -> DiffResult {
        let mut result = DiffResult::new();
        result.summary.old_property_count = old.property_count();
        result.summary.new_property_count = new.property_count();

        // Quick check: if content hashes match, snapshots are identical
        if old.content_hash == new.content_hash && old.content_hash != 0 {
            tracing::debug!("Snapshots have identical content hashes, skipping comparison");
            return result;
        }

        self.compute_all_changes(old, new, &mut result);
        result.sort();
        result.calculate_summary();

        tracing::debug!(
            added = result.summary.properties_added,
            removed = result.summary.properties_removed,
            replaced = result.summary.properties_replaced,
            deprecated = result.summary.properties_deprecated,
            changed = result.summary.properties_changed,
            "Computed metadata diff"
        );
        result
    }

    /// Compute all changes using the modular change computers.
    fn compute_all_changes(
        &self,
        old: &MetadataSnapshot,
        new: &MetadataSnapshot,
        result: &mut DiffResult,
    ) {
        let membership = MembershipChangeComputer::new().compute(old, new);
        result.additions = membership.additions;
        result.deletions = membership.deletions;
        result.replacements = membership.replacements;

        let fields = FieldChangeComputer::new().compute(old, new);
        result.deprecations = fields.deprecations;
        result.changes = fields.changes;

        if self.include_groups {
            result.groups = GroupChangeComputer::new().compute(old, new);
        }
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::ChangedField;
    use crate::model::{Deprecation, MetadataGroup, MetadataProperty, MetadataValue};

    fn snapshot(properties: Vec<MetadataProperty>) -> MetadataSnapshot {
        let mut snapshot = MetadataSnapshot::new();
        for property in properties {
            snapshot.add_property(property);
        }
        snapshot
    }

    #[test]
    fn test_empty_diff() {
        let engine = DiffEngine::new();
        let snapshot = MetadataSnapshot::default();
        let result = engine.diff(&snapshot, &snapshot);
        assert!(!result.has_changes());
    }

    #[test]
    fn test_self_diff_is_empty() {
        let mut snapshot = snapshot(vec![
            MetadataProperty::new("a").with_description("A."),
            MetadataProperty::new("b").with_deprecation(Deprecation::replaced_by("a")),
        ]);
        snapshot.add_group(MetadataGroup::new("g"));
        let result = DiffEngine::new().diff(&snapshot, &snapshot);
        assert!(!result.has_changes());

        // Same outcome through the hash fast path
        snapshot.calculate_content_hash();
        let result = DiffEngine::new().diff(&snapshot, &snapshot.clone());
        assert!(!result.has_changes());
        assert_eq!(result.summary.old_property_count, 2);
    }

    #[test]
    fn test_type_change_is_single_change() {
        let old =
            snapshot(vec![MetadataProperty::new("server.port").with_type("java.lang.String")]);
        let new =
            snapshot(vec![MetadataProperty::new("server.port").with_type("java.lang.Integer")]);
        let result = DiffEngine::new().diff(&old, &new);
        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.changes[0].field, ChangedField::Type);
        assert_eq!(result.changes[0].old_value, Some(MetadataValue::from("java.lang.String")));
        assert_eq!(result.changes[0].new_value, Some(MetadataValue::from("java.lang.Integer")));
        assert!(result.additions.is_empty());
        assert!(result.deletions.is_empty());
        assert!(result.deprecations.is_empty());
    }

    #[test]
    fn test_removed_property_is_single_deletion() {
        let old = snapshot(vec![MetadataProperty::new("a"), MetadataProperty::new("b")]);
        let new = snapshot(vec![MetadataProperty::new("b")]);
        let result = DiffEngine::new().diff(&old, &new);
        assert_eq!(result.deletions.len(), 1);
        assert_eq!(result.deletions[0].id(), "a");
        assert_eq!(result.summary.total_changes, 1);
    }

    #[test]
    fn test_rename_target_is_not_deleted() {
        // Named by a deprecation in the newer snapshot
        let old = snapshot(vec![MetadataProperty::new("a"), MetadataProperty::new("b")]);
        let new = snapshot(vec![
            MetadataProperty::new("b").with_deprecation(Deprecation::replaced_by("a"))
        ]);
        let result = DiffEngine::new().diff(&old, &new);
        assert!(result.deletions.is_empty());
        assert!(result.replacements.is_empty());

        // Named by a deprecation already present in the older snapshot
        let c = MetadataProperty::new("c").with_deprecation(Deprecation::replaced_by("a"));
        let old = snapshot(vec![MetadataProperty::new("a"), c.clone()]);
        let new = snapshot(vec![c]);
        let result = DiffEngine::new().diff(&old, &new);
        assert!(result.deletions.is_empty());
        assert!(!result.has_changes());
    }

    #[test]
    fn test_new_deprecation_is_exclusive() {
        let old = snapshot(vec![MetadataProperty::new("p").with_type("java.lang.String")]);
        let new = snapshot(vec![MetadataProperty::new("p")
            .with_type("java.lang.Integer")
            .with_deprecation(Deprecation::default())]);
        let result = DiffEngine::new().diff(&old, &new);
        assert_eq!(result.deprecations.len(), 1);
        assert!(result.changes.is_empty());
        assert_eq!(result.summary.properties_changed, 0);
    }

    #[test]
    fn test_results_are_sorted() {
        let old = snapshot(vec![MetadataProperty::new("z.old"), MetadataProperty::new("a.old")]);
        let new = snapshot(vec![MetadataProperty::new("m.new"), MetadataProperty::new("b.new")]);
        let result = DiffEngine::new().diff(&old, &new);
        let added: Vec<_> = result.additions.iter().map(|a| a.id()).collect();
        let removed: Vec<_> = result.deletions.iter().map(|d| d.id()).collect();
        assert_eq!(added, vec!["b.new", "m.new"]);
        assert_eq!(removed, vec!["a.old", "z.old"]);
    }

    #[test]
    fn test_groups_can_be_excluded() {
        let old = MetadataSnapshot::new();
        let mut new = MetadataSnapshot::new();
        new.add_group(MetadataGroup::new("spring.foo"));

        let result = DiffEngine::new().diff(&old, &new);
        assert_eq!(result.groups.added.len(), 1);

        let result = DiffEngine::new().include_groups(false).diff(&old, &new);
        assert!(result.groups.is_empty());
        assert!(!result.has_changes());
    }
}
