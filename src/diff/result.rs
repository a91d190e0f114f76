//! Diff result structures.

use crate::model::{Deprecation, MetadataGroup, MetadataProperty, MetadataValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete result of comparing two metadata snapshots.
///
/// Every list is ordered by property id, ties broken by field name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[must_use]
pub struct DiffResult {
    /// Summary statistics
    pub summary: DiffSummary,
    /// Label of the older snapshot, usually its version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_version: Option<String>,
    /// Label of the newer snapshot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_version: Option<String>,
    /// Properties only present in the newer snapshot
    pub additions: Vec<PropertyAddition>,
    /// Properties only present in the older snapshot
    pub deletions: Vec<PropertyDeletion>,
    /// Removed properties whose replacement exists in the newer snapshot
    pub replacements: Vec<PropertyReplacement>,
    /// Properties that became deprecated
    pub deprecations: Vec<PropertyDeprecation>,
    /// Field-level changes of properties present in both snapshots
    pub changes: Vec<PropertyChange>,
    /// Group additions and removals
    #[serde(default)]
    pub groups: GroupChanges,
}

impl DiffResult {
    /// Create a new empty diff result
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach version labels to the result
    pub fn with_versions(mut self, old: impl Into<String>, new: impl Into<String>) -> Self {
        self.old_version = Some(old.into());
        self.new_version = Some(new.into());
        self
    }

    /// Calculate and update summary statistics
    pub fn calculate_summary(&mut self) {
        self.summary.properties_added = self.additions.len();
        self.summary.properties_removed = self.deletions.len();
        self.summary.properties_replaced = self.replacements.len();
        self.summary.properties_deprecated = self.deprecations.len();
        self.summary.properties_changed = self
            .changes
            .iter()
            .map(|c| c.id.as_str())
            .collect::<std::collections::HashSet<_>>()
            .len();
        self.summary.field_changes = self.changes.len();
        self.summary.groups_added = self.groups.added.len();
        self.summary.groups_removed = self.groups.removed.len();

        self.summary.total_changes = self.summary.properties_added
            + self.summary.properties_removed
            + self.summary.properties_replaced
            + self.summary.properties_deprecated
            + self.summary.field_changes
            + self.summary.groups_added
            + self.summary.groups_removed;
    }

    /// Check if there are any changes
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.additions.is_empty()
            || !self.deletions.is_empty()
            || !self.replacements.is_empty()
            || !self.deprecations.is_empty()
            || !self.changes.is_empty()
            || !self.groups.is_empty()
    }

    /// Field changes recorded for one property
    #[must_use]
    pub fn changes_for(&self, id: &str) -> Vec<&PropertyChange> {
        self.changes.iter().filter(|c| c.id == id).collect()
    }

    /// Sort every list by id, ties broken by field name.
    pub(crate) fn sort(&mut self) {
        self.additions.sort_by(|a, b| a.id().cmp(b.id()));
        self.deletions.sort_by(|a, b| a.id().cmp(b.id()));
        self.replacements.sort_by(|a, b| a.id().cmp(b.id()));
        self.deprecations.sort_by(|a, b| a.id().cmp(b.id()));
        self.changes.sort_by(|a, b| {
            a.id.cmp(&b.id)
                .then_with(|| a.field.name().cmp(b.field.name()))
        });
        self.groups.added.sort_by(|a, b| a.id.cmp(&b.id));
        self.groups.removed.sort_by(|a, b| a.id.cmp(&b.id));
    }
}

/// Summary statistics for a diff
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub total_changes: usize,
    pub properties_added: usize,
    pub properties_removed: usize,
    pub properties_replaced: usize,
    pub properties_deprecated: usize,
    /// Distinct properties with at least one field change
    pub properties_changed: usize,
    pub field_changes: usize,
    pub groups_added: usize,
    pub groups_removed: usize,
    /// Property count of the older snapshot
    pub old_property_count: usize,
    /// Property count of the newer snapshot
    pub new_property_count: usize,
}

/// A property present only in the newer snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyAddition {
    pub property: MetadataProperty,
}

impl PropertyAddition {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.property.id
    }
}

/// A property present only in the older snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDeletion {
    pub property: MetadataProperty,
}

impl PropertyDeletion {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.property.id
    }
}

/// A removed property paired with the newer property its deprecation named.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyReplacement {
    /// The property as declared in the older snapshot
    pub property: MetadataProperty,
    /// The replacement as declared in the newer snapshot
    pub replacement: MetadataProperty,
}

impl PropertyReplacement {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.property.id
    }

    #[must_use]
    pub fn replacement_id(&self) -> &str {
        &self.replacement.id
    }
}

/// A property that is not deprecated in the older snapshot but is in the newer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDeprecation {
    pub old: MetadataProperty,
    pub new: MetadataProperty,
}

impl PropertyDeprecation {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.new.id
    }

    /// The deprecation declared by the newer snapshot
    #[must_use]
    pub fn deprecation(&self) -> Option<&Deprecation> {
        self.new.deprecation.as_ref()
    }
}

/// Property attribute compared between snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChangedField {
    Type,
    Description,
    DefaultValue,
    Deprecation,
}

impl ChangedField {
    /// Field name as it appears in metadata documents
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Description => "description",
            Self::DefaultValue => "defaultValue",
            Self::Deprecation => "deprecation",
        }
    }
}

impl fmt::Display for ChangedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One differing field of a property present in both snapshots.
///
/// A value of `None` means the field was absent on that side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyChange {
    pub id: String,
    pub field: ChangedField,
    pub old_value: Option<MetadataValue>,
    pub new_value: Option<MetadataValue>,
}

impl PropertyChange {
    pub fn new(
        id: impl Into<String>,
        field: ChangedField,
        old_value: Option<MetadataValue>,
        new_value: Option<MetadataValue>,
    ) -> Self {
        Self {
            id: id.into(),
            field,
            old_value,
            new_value,
        }
    }
}

/// Groups added to or removed from the newer snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupChanges {
    pub added: Vec<MetadataGroup>,
    pub removed: Vec<MetadataGroup>,
}

impl GroupChanges {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_has_no_changes() {
        let mut result = DiffResult::new();
        result.calculate_summary();
        assert!(!result.has_changes());
        assert_eq!(result.summary.total_changes, 0);
    }

    #[test]
    fn test_sort_breaks_ties_by_field_name() {
        let mut result = DiffResult::new();
        result.changes = vec![
            PropertyChange::new("b", ChangedField::Type, None, None),
            PropertyChange::new("a", ChangedField::Type, None, None),
            PropertyChange::new("a", ChangedField::DefaultValue, None, None),
            PropertyChange::new("a", ChangedField::Description, None, None),
        ];
        result.sort();
        let order: Vec<_> = result
            .changes
            .iter()
            .map(|c| (c.id.as_str(), c.field.name()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("a", "defaultValue"),
                ("a", "description"),
                ("a", "type"),
                ("b", "type"),
            ]
        );
    }

    #[test]
    fn test_summary_counts_distinct_changed_properties() {
        let mut result = DiffResult::new();
        result.changes = vec![
            PropertyChange::new("a", ChangedField::Type, None, None),
            PropertyChange::new("a", ChangedField::Description, None, None),
        ];
        result.additions.push(PropertyAddition {
            property: MetadataProperty::new("c"),
        });
        result.calculate_summary();
        assert_eq!(result.summary.properties_changed, 1);
        assert_eq!(result.summary.field_changes, 2);
        assert_eq!(result.summary.total_changes, 3);
        assert!(result.has_changes());
    }

    #[test]
    fn test_changed_field_serializes_as_document_name() {
        let json = serde_json::to_string(&ChangedField::DefaultValue).expect("serialize");
        assert_eq!(json, "\"defaultValue\"");
    }
}
