//! Groups, properties and deprecation metadata.

use super::MetadataValue;
use crate::parsers::extract_short_description;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type assumed for properties that do not declare one.
pub const DEFAULT_PROPERTY_TYPE: &str = "java.lang.String";

/// A logical owner of properties, typically a configuration class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataGroup {
    pub id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MetadataGroup {
    /// Create a group with only its id set
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_name: None,
            source_type: None,
            source_method: None,
            description: None,
        }
    }

    /// First sentence of the description
    #[must_use]
    pub fn short_description(&self) -> Option<String> {
        extract_short_description(self.description.as_deref())
    }
}

/// Severity of a deprecation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeprecationLevel {
    /// The property is still bound but should no longer be used
    #[default]
    Warning,
    /// The property is no longer supported
    Error,
}

impl DeprecationLevel {
    /// Parse a level name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for DeprecationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deprecation information attached to a property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deprecation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
    #[serde(default)]
    pub level: DeprecationLevel,
}

impl Deprecation {
    /// A warning-level deprecation pointing at `replacement`
    pub fn replaced_by(replacement: impl Into<String>) -> Self {
        Self {
            reason: None,
            replacement: Some(replacement.into()),
            level: DeprecationLevel::Warning,
        }
    }

    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    #[must_use]
    pub const fn with_level(mut self, level: DeprecationLevel) -> Self {
        self.level = level;
        self
    }

    /// Replacement id, ignoring blank values.
    #[must_use]
    pub fn replacement_id(&self) -> Option<&str> {
        self.replacement
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }

    /// Convert to an opaque value so it can travel in a field change.
    #[must_use]
    pub fn to_value(&self) -> MetadataValue {
        let mut map = indexmap::IndexMap::new();
        map.insert(
            "level".to_string(),
            MetadataValue::from(self.level.as_str()),
        );
        if let Some(reason) = &self.reason {
            map.insert("reason".to_string(), MetadataValue::from(reason.as_str()));
        }
        if let Some(replacement) = &self.replacement {
            map.insert(
                "replacement".to_string(),
                MetadataValue::from(replacement.as_str()),
            );
        }
        MetadataValue::Map(map)
    }
}

/// A single configurable setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataProperty {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<MetadataValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation: Option<Deprecation>,
}

impl MetadataProperty {
    /// Create a property with the default name and type derived from `id`.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: default_name(&id).to_string(),
            type_name: DEFAULT_PROPERTY_TYPE.to_string(),
            id,
            description: None,
            source_type: None,
            source_method: None,
            default_value: None,
            deprecation: None,
        }
    }

    #[must_use]
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<MetadataValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_deprecation(mut self, deprecation: Deprecation) -> Self {
        self.deprecation = Some(deprecation);
        self
    }

    #[must_use]
    pub const fn is_deprecated(&self) -> bool {
        self.deprecation.is_some()
    }

    /// First sentence of the description
    #[must_use]
    pub fn short_description(&self) -> Option<String> {
        extract_short_description(self.description.as_deref())
    }
}

/// Display name for a property id: the segment after the final dot.
#[must_use]
pub fn default_name(id: &str) -> &str {
    id.rsplit_once('.').map_or(id, |(_, last)| last)
}
