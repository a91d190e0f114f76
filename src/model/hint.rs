//! Value hints and value providers.

use super::MetadataValue;
use crate::parsers::extract_short_description;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Supplementary guidance for a property or a map key of a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataHint {
    /// Property id, optionally suffixed with `.keys` or `.values`
    pub id: String,
    #[serde(default, rename = "values")]
    pub value_hints: Vec<ValueHint>,
    #[serde(default, rename = "providers")]
    pub value_providers: Vec<ValueProvider>,
}

impl MetadataHint {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value_hints: Vec::new(),
            value_providers: Vec::new(),
        }
    }

    /// Whether this hint targets `property_id` itself or one of its map keys/values.
    #[must_use]
    pub fn applies_to(&self, property_id: &str) -> bool {
        self.id == property_id
            || self
                .id
                .strip_prefix(property_id)
                .is_some_and(|rest| rest.starts_with('.'))
    }
}

/// One allowed or suggested value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueHint {
    pub value: MetadataValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ValueHint {
    pub fn new(value: impl Into<MetadataValue>) -> Self {
        Self {
            value: value.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn short_description(&self) -> Option<String> {
        extract_short_description(self.description.as_deref())
    }
}

/// A named strategy that supplies values, such as `handle-as` or `any`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueProvider {
    pub name: String,
    #[serde(default)]
    pub parameters: IndexMap<String, MetadataValue>,
}

impl ValueProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: IndexMap::new(),
        }
    }
}
