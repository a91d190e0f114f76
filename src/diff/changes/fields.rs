//! Field-level change computer implementation.

use crate::diff::traits::{ChangeComputer, FieldChangeSet};
use crate::diff::{ChangedField, PropertyChange, PropertyDeprecation};
use crate::model::{Deprecation, MetadataProperty, MetadataSnapshot, MetadataValue};

/// Compares the attributes of properties present in both snapshots.
///
/// A property that gains a deprecation is reported as a deprecation and
/// nothing else. Otherwise every differing attribute yields one
/// [`PropertyChange`].
pub struct FieldChangeComputer;

impl FieldChangeComputer {
    /// Create a new field change computer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn compare(old: &MetadataProperty, new: &MetadataProperty, result: &mut FieldChangeSet) {
        let id = &new.id;

        if old.deprecation.is_none() && new.deprecation.is_some() {
            result.deprecations.push(PropertyDeprecation {
                old: old.clone(),
                new: new.clone(),
            });
            return;
        }

        if old.type_name != new.type_name {
            result.changes.push(PropertyChange::new(
                id,
                ChangedField::Type,
                Some(MetadataValue::from(old.type_name.as_str())),
                Some(MetadataValue::from(new.type_name.as_str())),
            ));
        }

        // Surrounding whitespace is not significant, absence is
        if old.description.as_deref().map(str::trim) != new.description.as_deref().map(str::trim) {
            result.changes.push(PropertyChange::new(
                id,
                ChangedField::Description,
                old.description.as_deref().map(MetadataValue::from),
                new.description.as_deref().map(MetadataValue::from),
            ));
        }

        if old.default_value != new.default_value {
            result.changes.push(PropertyChange::new(
                id,
                ChangedField::DefaultValue,
                old.default_value.clone(),
                new.default_value.clone(),
            ));
        }

        if old.deprecation != new.deprecation {
            result.changes.push(PropertyChange::new(
                id,
                ChangedField::Deprecation,
                old.deprecation.as_ref().map(Deprecation::to_value),
                new.deprecation.as_ref().map(Deprecation::to_value),
            ));
        }
    }
}

impl Default for FieldChangeComputer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeComputer for FieldChangeComputer {
    type ChangeSet = FieldChangeSet;

    fn compute(&self, old: &MetadataSnapshot, new: &MetadataSnapshot) -> FieldChangeSet {
        let mut result = FieldChangeSet::new();
        for (id, old_property) in &old.properties {
            if let Some(new_property) = new.property(id) {
                Self::compare(old_property, new_property, &mut result);
            }
        }
        result
    }

    fn name(&self) -> &'static str {
        "FieldChangeComputer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeprecationLevel;

    fn compute(old: MetadataProperty, new: MetadataProperty) -> FieldChangeSet {
        let mut old_snapshot = MetadataSnapshot::new();
        old_snapshot.add_property(old);
        let mut new_snapshot = MetadataSnapshot::new();
        new_snapshot.add_property(new);
        FieldChangeComputer::new().compute(&old_snapshot, &new_snapshot)
    }

    #[test]
    fn test_identical_properties() {
        let prop = MetadataProperty::new("a").with_description("Text.").with_default(true);
        assert!(compute(prop.clone(), prop).is_empty());
    }

    #[test]
    fn test_type_change() {
        let result = compute(
            MetadataProperty::new("a").with_type("java.lang.String"),
            MetadataProperty::new("a").with_type("java.lang.Integer"),
        );
        assert_eq!(result.changes.len(), 1);
        let change = &result.changes[0];
        assert_eq!(change.field, ChangedField::Type);
        assert_eq!(change.old_value, Some(MetadataValue::from("java.lang.String")));
        assert_eq!(change.new_value, Some(MetadataValue::from("java.lang.Integer")));
    }

    #[test]
    fn test_description_whitespace_is_ignored() {
        let result = compute(
            MetadataProperty::new("a").with_description("Text. "),
            MetadataProperty::new("a").with_description("  Text."),
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_absent_description_differs_from_empty() {
        let result = compute(
            MetadataProperty::new("a"),
            MetadataProperty::new("a").with_description(""),
        );
        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.changes[0].old_value, None);
        assert_eq!(result.changes[0].new_value, Some(MetadataValue::from("")));
    }

    #[test]
    fn test_default_value_change() {
        let result = compute(
            MetadataProperty::new("a").with_default(8080_i64),
            MetadataProperty::new("a"),
        );
        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.changes[0].field, ChangedField::DefaultValue);
        assert_eq!(result.changes[0].new_value, None);
    }

    #[test]
    fn test_new_deprecation() {
        let result = compute(
            MetadataProperty::new("a").with_type("int"),
            MetadataProperty::new("a")
                .with_type("long")
                .with_deprecation(Deprecation::replaced_by("b")),
        );
        assert_eq!(result.deprecations.len(), 1);
        assert_eq!(
            result.deprecations[0].deprecation().and_then(Deprecation::replacement_id),
            Some("b")
        );
        // The deprecation stands in for the other differences
        assert!(result.changes.is_empty());
    }

    #[test]
    fn test_new_deprecation_hides_every_other_field() {
        let result = compute(
            MetadataProperty::new("p")
                .with_type("java.lang.String")
                .with_description("Old.")
                .with_default(1_i64),
            MetadataProperty::new("p")
                .with_type("java.lang.Integer")
                .with_description("New.")
                .with_default(2_i64)
                .with_deprecation(Deprecation::default()),
        );
        assert_eq!(result.deprecations.len(), 1);
        assert_eq!(result.deprecations[0].old.type_name, "java.lang.String");
        assert_eq!(result.deprecations[0].new.type_name, "java.lang.Integer");
        assert!(result.changes.is_empty());
    }

    #[test]
    fn test_deprecation_level_change() {
        let result = compute(
            MetadataProperty::new("a").with_deprecation(Deprecation::default()),
            MetadataProperty::new("a")
                .with_deprecation(Deprecation::default().with_level(DeprecationLevel::Error)),
        );
        assert!(result.deprecations.is_empty());
        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.changes[0].field, ChangedField::Deprecation);
    }

    #[test]
    fn test_removed_deprecation() {
        let result = compute(
            MetadataProperty::new("a").with_deprecation(Deprecation::default()),
            MetadataProperty::new("a"),
        );
        assert!(result.deprecations.is_empty());
        assert_eq!(result.changes.len(), 1);
        assert!(result.changes[0].old_value.is_some());
        assert_eq!(result.changes[0].new_value, None);
    }
}
