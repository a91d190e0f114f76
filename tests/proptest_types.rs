//! Property-based tests for the metadata model and the diff engine.

use config_metadata_diff::model::{
    default_name, Deprecation, MetadataProperty, MetadataSnapshot,
};
use config_metadata_diff::DiffEngine;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Property ids drawn from a small pool so that snapshots overlap.
fn property_id() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "server.port",
        "server.address",
        "server.host",
        "spring.datasource.url",
        "spring.datasource.driver",
        "spring.datasource.driver-class-name",
        "logging.level",
        "management.enabled",
    ])
    .prop_map(String::from)
}

fn arb_property() -> impl Strategy<Value = MetadataProperty> {
    (
        property_id(),
        prop::option::of("java\\.lang\\.(String|Integer|Boolean)"),
        prop::option::of("[A-Za-z ]{0,30}\\."),
        prop::option::of(any::<i64>()),
        prop::option::of(prop::option::of(property_id())),
    )
        .prop_map(|(id, type_name, description, default, deprecation)| {
            let mut property = MetadataProperty::new(id);
            if let Some(type_name) = type_name {
                property = property.with_type(type_name);
            }
            if let Some(description) = description {
                property = property.with_description(description);
            }
            if let Some(default) = default {
                property = property.with_default(default);
            }
            match deprecation {
                Some(Some(replacement)) => {
                    property.with_deprecation(Deprecation::replaced_by(replacement))
                }
                Some(None) => property.with_deprecation(Deprecation::default()),
                None => property,
            }
        })
}

fn arb_snapshot() -> impl Strategy<Value = MetadataSnapshot> {
    prop::collection::vec(arb_property(), 0..8).prop_map(|properties| {
        let mut snapshot = MetadataSnapshot::new();
        for property in properties {
            snapshot.add_property(property);
        }
        snapshot
    })
}

/// Ids that some deprecated property of either snapshot names as its replacement.
fn rename_targets(a: &MetadataSnapshot, b: &MetadataSnapshot) -> BTreeSet<String> {
    a.properties
        .values()
        .chain(b.properties.values())
        .filter_map(|p| {
            let target = p.deprecation.as_ref()?.replacement_id()?;
            (target != p.id).then(|| target.to_string())
        })
        .collect()
}

fn ids<'a>(iter: impl Iterator<Item = &'a str>) -> BTreeSet<String> {
    iter.map(String::from).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn self_diff_is_empty(snapshot in arb_snapshot()) {
        let result = DiffEngine::new().diff(&snapshot, &snapshot);
        prop_assert!(!result.has_changes());
        prop_assert_eq!(result.summary.old_property_count, snapshot.property_count());
    }

    #[test]
    fn additions_mirror_unpaired_deletions(a in arb_snapshot(), b in arb_snapshot()) {
        let forward = DiffEngine::new().diff(&a, &b);
        let backward = DiffEngine::new().diff(&b, &a);
        let targets = rename_targets(&a, &b);

        for (there, back) in [(&forward, &backward), (&backward, &forward)] {
            let added = ids(there.additions.iter().map(|x| x.id()));
            let replaced = ids(back.replacements.iter().map(|x| x.id()));
            let deleted = ids(back.deletions.iter().map(|x| x.id()));
            prop_assert!(replaced.is_subset(&added));

            let unpaired: BTreeSet<String> = added
                .difference(&replaced)
                .filter(|id| !targets.contains(*id))
                .cloned()
                .collect();
            prop_assert_eq!(deleted, unpaired);
        }
    }

    #[test]
    fn every_id_is_reported_in_one_category(a in arb_snapshot(), b in arb_snapshot()) {
        let result = DiffEngine::new().diff(&a, &b);
        let mut seen = BTreeSet::new();
        for id in result.additions.iter().map(|x| x.id())
            .chain(result.deletions.iter().map(|x| x.id()))
            .chain(result.replacements.iter().map(|x| x.id()))
        {
            prop_assert!(seen.insert(id.to_string()), "{} reported twice", id);
        }
        for replacement in &result.replacements {
            prop_assert!(b.property(replacement.replacement_id()).is_some());
            prop_assert!(a.property(replacement.id()).is_some());
        }
    }

    #[test]
    fn changes_are_sorted(a in arb_snapshot(), b in arb_snapshot()) {
        let result = DiffEngine::new().diff(&a, &b);
        let keys: Vec<(&str, &str)> = result
            .changes
            .iter()
            .map(|c| (c.id.as_str(), c.field.name()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        prop_assert_eq!(keys, sorted);
    }

    #[test]
    fn content_hash_ignores_declaration_order(
        properties in prop::collection::vec(arb_property(), 0..8),
    ) {
        let mut unique = Vec::new();
        let mut seen = BTreeSet::new();
        for property in properties.into_iter().rev() {
            if seen.insert(property.id.clone()) {
                unique.push(property);
            }
        }

        let mut forward = MetadataSnapshot::new();
        for property in &unique {
            forward.add_property(property.clone());
        }
        let mut reversed = MetadataSnapshot::new();
        for property in unique.iter().rev() {
            reversed.add_property(property.clone());
        }
        forward.calculate_content_hash();
        reversed.calculate_content_hash();
        prop_assert_eq!(forward.content_hash, reversed.content_hash);
    }

    #[test]
    fn default_name_is_last_segment(segments in prop::collection::vec("[a-z][a-z-]{0,10}", 1..5)) {
        let id = segments.join(".");
        let last = segments.last().map(String::as_str).unwrap_or_default();
        prop_assert_eq!(default_name(&id), last);
        prop_assert_eq!(MetadataProperty::new(id.clone()).name, last);
    }
}
