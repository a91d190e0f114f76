//! JSON configuration metadata reader.
//!
//! Understands the `groups`/`properties`/`hints` document layout as well as
//! the legacy `sources`/`items` names, which resolve to the same model.

use super::schema::{
    check_entry, child_path, json_kind, FieldSpec, DEPRECATION_FIELDS, GROUP_FIELDS, HINT_FIELDS,
    PROPERTY_FIELDS, PROVIDER_FIELDS, VALUE_HINT_FIELDS,
};
use super::traits::{MetadataReader, ParseError};
use crate::model::{
    default_name, Deprecation, DeprecationLevel, MetadataGroup, MetadataHint, MetadataProperty,
    MetadataSnapshot, MetadataValue, ValueHint, ValueProvider, DEFAULT_PROPERTY_TYPE,
};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Section names for groups, modern name first.
const GROUP_SECTIONS: &[&str] = &["groups", "sources"];
/// Section names for properties, modern name first.
const PROPERTY_SECTIONS: &[&str] = &["properties", "items"];
const HINT_SECTION: &str = "hints";

/// Reader for JSON configuration metadata documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMetadataReader;

impl JsonMetadataReader {
    /// Create a new JSON metadata reader
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn convert_group(raw: RawGroup, path: &str) -> Result<MetadataGroup, ParseError> {
        Ok(MetadataGroup {
            id: non_empty_id(raw.id, path)?,
            type_name: raw.type_name,
            source_type: raw.source_type,
            source_method: raw.source_method,
            description: raw.description,
        })
    }

    fn convert_property(
        raw: RawProperty,
        entry: &Map<String, Value>,
        path: &str,
    ) -> Result<MetadataProperty, ParseError> {
        let id = non_empty_id(raw.id, path)?;
        let deprecation = match entry.get("deprecation").filter(|v| !v.is_null()) {
            Some(value) => Some(Self::convert_deprecation(
                value,
                &child_path(path, "deprecation"),
            )?),
            // Older documents only flag deprecated properties
            None if raw.deprecated == Some(true) => Some(Deprecation::default()),
            None => None,
        };

        Ok(MetadataProperty {
            name: raw.name.unwrap_or_else(|| default_name(&id).to_string()),
            type_name: raw
                .type_name
                .unwrap_or_else(|| DEFAULT_PROPERTY_TYPE.to_string()),
            id,
            description: raw.description,
            source_type: raw.source_type,
            source_method: raw.source_method,
            default_value: raw
                .default_value
                .filter(|v| !v.is_null())
                .map(MetadataValue::from),
            deprecation,
        })
    }

    fn convert_deprecation(value: &Value, path: &str) -> Result<Deprecation, ParseError> {
        let raw: RawDeprecation = decode(value, path, DEPRECATION_FIELDS)?;
        let level = match raw.level {
            Some(level) => {
                DeprecationLevel::parse(&level).ok_or_else(|| ParseError::InvalidValue {
                    path: child_path(path, "level"),
                    message: format!("unknown deprecation level '{level}'"),
                })?
            }
            None => DeprecationLevel::default(),
        };
        Ok(Deprecation {
            reason: raw.reason,
            replacement: raw.replacement,
            level,
        })
    }

    fn convert_hint(entry: &Value, path: &str) -> Result<MetadataHint, ParseError> {
        let object = check_entry(entry, path, HINT_FIELDS)?;
        let id = ["name", "id"]
            .iter()
            .find_map(|key| object.get(*key).and_then(Value::as_str))
            .ok_or_else(|| ParseError::MissingField {
                path: path.to_string(),
                field: "name".to_string(),
            })?;
        let mut hint = MetadataHint::new(non_empty_id(id.to_string(), path)?);

        for (i, value) in array_field(object, "values") {
            let value_path = format!("{}[{i}]", child_path(path, "values"));
            let raw: RawValueHint = decode(value, &value_path, VALUE_HINT_FIELDS)?;
            hint.value_hints.push(ValueHint {
                value: MetadataValue::from(raw.value),
                description: raw.description,
            });
        }

        for (i, value) in array_field(object, "providers") {
            let provider_path = format!("{}[{i}]", child_path(path, "providers"));
            let raw: RawValueProvider = decode(value, &provider_path, PROVIDER_FIELDS)?;
            hint.value_providers.push(ValueProvider {
                name: raw.name,
                parameters: raw
                    .parameters
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(k, v)| (k, MetadataValue::from(v)))
                    .collect(),
            });
        }

        Ok(hint)
    }
}

impl MetadataReader for JsonMetadataReader {
    fn parse_str(&self, content: &str) -> Result<MetadataSnapshot, ParseError> {
        let document: Value = serde_json::from_str(content)?;
        let Value::Object(root) = document else {
            return Err(ParseError::NotAnObject {
                path: "$".to_string(),
            });
        };

        let mut snapshot = MetadataSnapshot::new();

        for (path, entry) in section_entries(&root, GROUP_SECTIONS)? {
            let raw: RawGroup = decode(entry, &path, GROUP_FIELDS)?;
            snapshot.add_group(Self::convert_group(raw, &path)?);
        }

        for (path, entry) in section_entries(&root, PROPERTY_SECTIONS)? {
            let raw: RawProperty = decode(entry, &path, PROPERTY_FIELDS)?;
            let object = entry.as_object().ok_or_else(|| ParseError::NotAnObject {
                path: path.clone(),
            })?;
            snapshot.add_property(Self::convert_property(raw, object, &path)?);
        }

        for (path, entry) in section_entries(&root, &[HINT_SECTION])? {
            snapshot.add_hint(Self::convert_hint(entry, &path)?);
        }

        snapshot.calculate_content_hash();
        tracing::debug!(
            groups = snapshot.group_count(),
            properties = snapshot.property_count(),
            hints = snapshot.hints.len(),
            "Parsed configuration metadata"
        );
        Ok(snapshot)
    }

    fn format_name(&self) -> &str {
        "JSON configuration metadata"
    }
}

/// Entries of every present section, each paired with its path.
fn section_entries<'a>(
    root: &'a Map<String, Value>,
    sections: &[&str],
) -> Result<Vec<(String, &'a Value)>, ParseError> {
    let mut entries = Vec::new();
    for section in sections {
        match root.get(*section) {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => {
                entries.extend(
                    items
                        .iter()
                        .enumerate()
                        .map(|(i, item)| (format!("{section}[{i}]"), item)),
                );
            }
            Some(other) => {
                return Err(ParseError::InvalidType {
                    path: (*section).to_string(),
                    expected: "an array",
                    found: json_kind(other),
                });
            }
        }
    }
    Ok(entries)
}

/// Items of an optional array field, already checked by the schema.
fn array_field<'a>(
    object: &'a Map<String, Value>,
    field: &str,
) -> impl Iterator<Item = (usize, &'a Value)> {
    object
        .get(field)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .enumerate()
}

/// Check an entry against its field declarations, then decode it.
fn decode<T: DeserializeOwned>(
    value: &Value,
    path: &str,
    fields: &[FieldSpec],
) -> Result<T, ParseError> {
    check_entry(value, path, fields)?;
    T::deserialize(value).map_err(|e| ParseError::InvalidValue {
        path: path.to_string(),
        message: e.to_string(),
    })
}

fn non_empty_id(id: String, path: &str) -> Result<String, ParseError> {
    if id.trim().is_empty() {
        return Err(ParseError::InvalidValue {
            path: child_path(path, "id"),
            message: "id must not be empty".to_string(),
        });
    }
    Ok(id)
}

// ============================================================================
// Raw document structures
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGroup {
    id: String,
    #[serde(rename = "type")]
    type_name: Option<String>,
    source_type: Option<String>,
    source_method: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProperty {
    id: String,
    name: Option<String>,
    #[serde(rename = "type")]
    type_name: Option<String>,
    description: Option<String>,
    source_type: Option<String>,
    source_method: Option<String>,
    default_value: Option<Value>,
    deprecated: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawDeprecation {
    reason: Option<String>,
    replacement: Option<String>,
    level: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawValueHint {
    value: Value,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawValueProvider {
    name: String,
    parameters: Option<IndexMap<String, Value>>,
}
