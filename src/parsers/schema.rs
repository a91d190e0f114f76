//! Structural checks run on each JSON entry before it is decoded.
//!
//! Decoding with serde alone reports type mismatches without naming the
//! field. Checking every known field against its expected JSON kind first
//! lets errors point at paths like `properties[2].type`.

use super::ParseError;
use serde_json::{Map, Value};

/// Expected JSON kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    String,
    Boolean,
    Object,
    Array,
    /// Any JSON value, including null
    Any,
}

impl FieldKind {
    const fn name(self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Boolean => "a boolean",
            Self::Object => "an object",
            Self::Array => "an array",
            Self::Any => "any value",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Boolean => value.is_boolean(),
            Self::Object => value.is_object(),
            Self::Array => value.is_array(),
            Self::Any => true,
        }
    }
}

/// Declaration of one known field of an entry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn required(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        required: true,
    }
}

const fn optional(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        required: false,
    }
}

pub(crate) const GROUP_FIELDS: &[FieldSpec] = &[
    required("id", FieldKind::String),
    optional("type", FieldKind::String),
    optional("sourceType", FieldKind::String),
    optional("sourceMethod", FieldKind::String),
    optional("description", FieldKind::String),
];

pub(crate) const PROPERTY_FIELDS: &[FieldSpec] = &[
    required("id", FieldKind::String),
    optional("name", FieldKind::String),
    optional("type", FieldKind::String),
    optional("description", FieldKind::String),
    optional("sourceType", FieldKind::String),
    optional("sourceMethod", FieldKind::String),
    optional("defaultValue", FieldKind::Any),
    optional("deprecated", FieldKind::Boolean),
    optional("deprecation", FieldKind::Object),
];

pub(crate) const DEPRECATION_FIELDS: &[FieldSpec] = &[
    optional("reason", FieldKind::String),
    optional("replacement", FieldKind::String),
    optional("level", FieldKind::String),
];

/// Hints name their target with `name`; `id` is accepted as an alias.
pub(crate) const HINT_FIELDS: &[FieldSpec] = &[
    optional("name", FieldKind::String),
    optional("id", FieldKind::String),
    optional("values", FieldKind::Array),
    optional("providers", FieldKind::Array),
];

pub(crate) const VALUE_HINT_FIELDS: &[FieldSpec] = &[
    required("value", FieldKind::Any),
    optional("description", FieldKind::String),
];

pub(crate) const PROVIDER_FIELDS: &[FieldSpec] = &[
    required("name", FieldKind::String),
    optional("parameters", FieldKind::Object),
];

/// JSON kind of a value, for error messages.
pub(crate) const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Join a parent path and a field name.
pub(crate) fn child_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{parent}.{field}")
    }
}

/// Check that `value` is an object whose known fields have the right kinds.
///
/// Optional fields may be explicitly `null`; unknown fields are ignored.
pub(crate) fn check_entry<'a>(
    value: &'a Value,
    path: &str,
    fields: &[FieldSpec],
) -> Result<&'a Map<String, Value>, ParseError> {
    let Some(object) = value.as_object() else {
        return Err(ParseError::NotAnObject {
            path: path.to_string(),
        });
    };

    for expected_field in fields {
        match object.get(expected_field.name) {
            None => {
                if expected_field.required {
                    return Err(ParseError::MissingField {
                        path: path.to_string(),
                        field: expected_field.name.to_string(),
                    });
                }
            }
            Some(Value::Null) if !expected_field.required => {}
            Some(field) => {
                if !expected_field.kind.matches(field) {
                    return Err(ParseError::InvalidType {
                        path: child_path(path, expected_field.name),
                        expected: expected_field.kind.name(),
                        found: json_kind(field),
                    });
                }
            }
        }
    }

    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_required_field() {
        let err = check_entry(&json!({"name": "x"}), "properties[0]", PROPERTY_FIELDS)
            .expect_err("id is required");
        match err {
            ParseError::MissingField { path, field } => {
                assert_eq!(path, "properties[0]");
                assert_eq!(field, "id");
            }
            other => panic!("Expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_type_reports_field_path() {
        let err = check_entry(&json!({"id": 42}), "groups[1]", GROUP_FIELDS)
            .expect_err("id must be a string");
        assert_eq!(err.path(), Some("groups[1].id"));
        assert!(err.to_string().contains("expected a string, found a number"));
    }

    #[test]
    fn test_null_optional_is_accepted() {
        let entry = json!({"id": "a", "type": null, "unknown": [1, 2]});
        assert!(check_entry(&entry, "properties[0]", PROPERTY_FIELDS).is_ok());
    }

    #[test]
    fn test_null_required_is_rejected() {
        let err = check_entry(&json!({"id": null}), "properties[0]", PROPERTY_FIELDS)
            .expect_err("null id");
        assert!(matches!(err, ParseError::InvalidType { found: "null", .. }));
    }

    #[test]
    fn test_not_an_object() {
        let err = check_entry(&json!("text"), "hints[0]", HINT_FIELDS).expect_err("string entry");
        assert!(matches!(err, ParseError::NotAnObject { .. }));
    }

    #[test]
    fn test_value_hint_accepts_any_value() {
        assert!(check_entry(&json!({"value": null}), "v", VALUE_HINT_FIELDS).is_ok());
        assert!(check_entry(&json!({"value": [1]}), "v", VALUE_HINT_FIELDS).is_ok());
    }
}
