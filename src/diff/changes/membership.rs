//! Property membership change computer implementation.

use crate::diff::traits::{ChangeComputer, MembershipChangeSet};
use crate::diff::{PropertyAddition, PropertyDeletion, PropertyReplacement};
use crate::model::{MetadataProperty, MetadataSnapshot};
use std::collections::HashSet;

/// Computes added, removed and replaced properties.
///
/// A removed property counts as replaced when its deprecation in the older
/// snapshot names a replacement that exists in the newer snapshot. Chains of
/// replacements are followed through the older snapshot.
///
/// A removed property that another deprecated property, in either snapshot,
/// names as its replacement is a known rename and is not reported as deleted.
pub struct MembershipChangeComputer;

impl MembershipChangeComputer {
    /// Create a new membership change computer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MembershipChangeComputer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeComputer for MembershipChangeComputer {
    type ChangeSet = MembershipChangeSet;

    fn compute(&self, old: &MetadataSnapshot, new: &MetadataSnapshot) -> MembershipChangeSet {
        let mut result = MembershipChangeSet::new();
        let targets = replacement_targets(old, new);

        for (id, property) in &new.properties {
            if !old.properties.contains_key(id) {
                result.additions.push(PropertyAddition {
                    property: property.clone(),
                });
            }
        }

        for (id, property) in &old.properties {
            if new.properties.contains_key(id) {
                continue;
            }
            match resolve_replacement(property, old, new) {
                Some(replacement) => result.replacements.push(PropertyReplacement {
                    property: property.clone(),
                    replacement: replacement.clone(),
                }),
                None if targets.contains(id.as_str()) => {
                    tracing::debug!(property = %id, "Removed property is a replacement target");
                }
                None => result.deletions.push(PropertyDeletion {
                    property: property.clone(),
                }),
            }
        }

        result
    }

    fn name(&self) -> &'static str {
        "MembershipChangeComputer"
    }
}

/// Ids named as a replacement by a deprecated property of either snapshot.
///
/// A property naming itself does not count.
fn replacement_targets<'a>(
    old: &'a MetadataSnapshot,
    new: &'a MetadataSnapshot,
) -> HashSet<&'a str> {
    old.properties
        .values()
        .chain(new.properties.values())
        .filter_map(|p| {
            p.deprecation
                .as_ref()
                .and_then(|d| d.replacement_id())
                .filter(|target| *target != p.id)
        })
        .collect()
}

/// Follow the replacement chain of a removed property until it lands in `new`.
///
/// Ids are matched exactly. Returns `None` when the chain breaks or loops.
fn resolve_replacement<'a>(
    property: &'a MetadataProperty,
    old: &'a MetadataSnapshot,
    new: &'a MetadataSnapshot,
) -> Option<&'a MetadataProperty> {
    let mut visited: HashSet<&str> = HashSet::from([property.id.as_str()]);
    let mut next = property.deprecation.as_ref()?.replacement_id()?;
    loop {
        if let Some(found) = new.property(next) {
            return Some(found);
        }
        if !visited.insert(next) {
            tracing::debug!(property = %property.id, "Replacement chain loops");
            return None;
        }
        next = old.property(next)?.deprecation.as_ref()?.replacement_id()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Deprecation;

    fn snapshot(properties: Vec<MetadataProperty>) -> MetadataSnapshot {
        let mut snapshot = MetadataSnapshot::new();
        for property in properties {
            snapshot.add_property(property);
        }
        snapshot
    }

    #[test]
    fn test_name() {
        assert_eq!(MembershipChangeComputer::new().name(), "MembershipChangeComputer");
    }

    #[test]
    fn test_empty_snapshots() {
        let empty = MetadataSnapshot::new();
        assert!(MembershipChangeComputer::new().compute(&empty, &empty).is_empty());
    }

    #[test]
    fn test_additions_and_deletions() {
        let old = snapshot(vec![MetadataProperty::new("a"), MetadataProperty::new("b")]);
        let new = snapshot(vec![MetadataProperty::new("b"), MetadataProperty::new("c")]);
        let result = MembershipChangeComputer::new().compute(&old, &new);
        assert_eq!(result.additions.len(), 1);
        assert_eq!(result.additions[0].id(), "c");
        assert_eq!(result.deletions.len(), 1);
        assert_eq!(result.deletions[0].id(), "a");
        assert!(result.replacements.is_empty());
    }

    #[test]
    fn test_replacement_present_in_newer() {
        let old = snapshot(vec![MetadataProperty::new("server.host")
            .with_deprecation(Deprecation::replaced_by("server.address"))]);
        let new = snapshot(vec![MetadataProperty::new("server.address")]);
        let result = MembershipChangeComputer::new().compute(&old, &new);
        assert!(result.deletions.is_empty());
        assert_eq!(result.replacements.len(), 1);
        assert_eq!(result.replacements[0].id(), "server.host");
        assert_eq!(result.replacements[0].replacement_id(), "server.address");
        // The replacement is also new, so it stays an addition
        assert_eq!(result.additions.len(), 1);
    }

    #[test]
    fn test_replacement_missing_from_newer_is_deletion() {
        let old = snapshot(vec![
            MetadataProperty::new("a").with_deprecation(Deprecation::replaced_by("gone"))
        ]);
        let new = MetadataSnapshot::new();
        let result = MembershipChangeComputer::new().compute(&old, &new);
        assert_eq!(result.deletions.len(), 1);
        assert!(result.replacements.is_empty());
    }

    #[test]
    fn test_replacement_requires_exact_id() {
        let old = snapshot(vec![
            MetadataProperty::new("a").with_deprecation(Deprecation::replaced_by("b"))
        ]);
        let new = snapshot(vec![MetadataProperty::new("b.enabled")]);
        let result = MembershipChangeComputer::new().compute(&old, &new);
        assert_eq!(result.deletions.len(), 1);
    }

    #[test]
    fn test_replacement_chain_through_older() {
        let old = snapshot(vec![
            MetadataProperty::new("a").with_deprecation(Deprecation::replaced_by("b")),
            MetadataProperty::new("b").with_deprecation(Deprecation::replaced_by("c")),
        ]);
        let new = snapshot(vec![MetadataProperty::new("c")]);
        let result = MembershipChangeComputer::new().compute(&old, &new);
        let replaced: Vec<_> = result
            .replacements
            .iter()
            .map(|r| (r.id(), r.replacement_id()))
            .collect();
        assert_eq!(replaced, vec![("a", "c"), ("b", "c")]);
    }

    #[test]
    fn test_replacement_cycle_terminates() {
        let old = snapshot(vec![
            MetadataProperty::new("a").with_deprecation(Deprecation::replaced_by("b")),
            MetadataProperty::new("b").with_deprecation(Deprecation::replaced_by("a")),
        ]);
        let new = MetadataSnapshot::new();
        let result = MembershipChangeComputer::new().compute(&old, &new);
        assert!(result.replacements.is_empty());
        // Each names the other, so neither is a plain deletion
        assert!(result.deletions.is_empty());
    }

    #[test]
    fn test_self_replacement_does_not_suppress_deletion() {
        let old = snapshot(vec![
            MetadataProperty::new("a").with_deprecation(Deprecation::replaced_by("a"))
        ]);
        let result = MembershipChangeComputer::new().compute(&old, &MetadataSnapshot::new());
        assert_eq!(result.deletions.len(), 1);
    }

    #[test]
    fn test_target_named_in_newer_is_not_deleted() {
        let old = snapshot(vec![MetadataProperty::new("a"), MetadataProperty::new("b")]);
        let new = snapshot(vec![
            MetadataProperty::new("b").with_deprecation(Deprecation::replaced_by("a"))
        ]);
        let result = MembershipChangeComputer::new().compute(&old, &new);
        assert!(result.deletions.is_empty());
        assert!(result.replacements.is_empty());
    }

    #[test]
    fn test_target_named_in_older_is_not_deleted() {
        let c = MetadataProperty::new("c").with_deprecation(Deprecation::replaced_by("a"));
        let old = snapshot(vec![MetadataProperty::new("a"), c.clone()]);
        let new = snapshot(vec![c]);
        let result = MembershipChangeComputer::new().compute(&old, &new);
        assert!(result.deletions.is_empty());
        assert!(result.additions.is_empty());
    }

    #[test]
    fn test_unrelated_replacement_does_not_suppress_deletion() {
        let old = snapshot(vec![MetadataProperty::new("a"), MetadataProperty::new("b")]);
        let new = snapshot(vec![
            MetadataProperty::new("b").with_deprecation(Deprecation::replaced_by("a.enabled"))
        ]);
        let result = MembershipChangeComputer::new().compute(&old, &new);
        assert_eq!(result.deletions.len(), 1);
        assert_eq!(result.deletions[0].id(), "a");
    }
}
