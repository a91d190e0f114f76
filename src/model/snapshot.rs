//! The root container for one parsed metadata document.

use super::{MetadataGroup, MetadataHint, MetadataProperty};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

/// Parsed configuration metadata for one version of an artifact.
///
/// Groups and properties are keyed by id and keep document order. A snapshot
/// is assembled once by a reader and only read afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataSnapshot {
    /// Groups indexed by id
    pub groups: IndexMap<String, MetadataGroup>,
    /// Properties indexed by id
    pub properties: IndexMap<String, MetadataProperty>,
    /// Hints in document order
    pub hints: Vec<MetadataHint>,
    /// Content hash for quick equality checks
    pub content_hash: u64,
    /// Number of entries that reused an id already present in the document
    #[serde(skip)]
    pub collision_count: usize,
}

impl MetadataSnapshot {
    /// Create an empty snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group.
    ///
    /// Returns `true` if a group with the same id was already present and has
    /// been overwritten.
    pub fn add_group(&mut self, group: MetadataGroup) -> bool {
        // Several sources may contribute the same group; only count genuinely different ones
        let collided = match self.groups.get(&group.id) {
            Some(existing) => {
                if existing != &group {
                    self.collision_count += 1;
                }
                true
            }
            None => false,
        };
        self.groups.insert(group.id.clone(), group);
        collided
    }

    /// Add a property.
    ///
    /// Returns `true` if a property with the same id was already present and
    /// has been overwritten.
    pub fn add_property(&mut self, property: MetadataProperty) -> bool {
        let collided = match self.properties.get(&property.id) {
            Some(existing) => {
                if existing != &property {
                    self.collision_count += 1;
                }
                true
            }
            None => false,
        };
        self.properties.insert(property.id.clone(), property);
        collided
    }

    pub fn add_hint(&mut self, hint: MetadataHint) {
        self.hints.push(hint);
    }

    /// Log a single summary line if any id collisions occurred during parsing.
    pub fn log_collision_summary(&self) {
        if self.collision_count > 0 {
            tracing::warn!(
                collision_count = self.collision_count,
                "{} metadata entries reused an existing id with different content; \
                 the last declaration was kept",
                self.collision_count
            );
        }
    }

    #[must_use]
    pub fn property(&self, id: &str) -> Option<&MetadataProperty> {
        self.properties.get(id)
    }

    #[must_use]
    pub fn group(&self, id: &str) -> Option<&MetadataGroup> {
        self.groups.get(id)
    }

    #[must_use]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Hints that target the property or one of its map keys/values.
    #[must_use]
    pub fn hints_for(&self, property_id: &str) -> Vec<&MetadataHint> {
        self.hints
            .iter()
            .filter(|hint| hint.applies_to(property_id))
            .collect()
    }

    /// Number of deprecated properties
    #[must_use]
    pub fn deprecated_count(&self) -> usize {
        self.properties
            .values()
            .filter(|p| p.is_deprecated())
            .count()
    }

    /// Calculate and update the content hash.
    ///
    /// The hash covers groups and properties in id order, so two documents
    /// declaring the same entries in a different order hash identically.
    pub fn calculate_content_hash(&mut self) {
        let mut hasher_input = Vec::new();

        let mut group_ids: Vec<_> = self.groups.keys().collect();
        group_ids.sort();
        for id in group_ids {
            if let Some(json) = self.groups.get(id).and_then(|g| serde_json::to_vec(g).ok()) {
                hasher_input.extend(json);
            }
        }

        let mut property_ids: Vec<_> = self.properties.keys().collect();
        property_ids.sort();
        for id in property_ids {
            if let Some(json) = self
                .properties
                .get(id)
                .and_then(|p| serde_json::to_vec(p).ok())
            {
                hasher_input.extend(json);
            }
        }

        self.content_hash = xxh3_64(&hasher_input);
    }
}
