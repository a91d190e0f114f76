//! Opaque metadata values.
//!
//! Default values, value hints and provider parameters may hold any JSON
//! value. They are kept as a tagged union so that they survive a
//! parse/serialize round trip without losing their shape.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A JSON-shaped value declared in configuration metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    List(Vec<MetadataValue>),
    Map(IndexMap<String, MetadataValue>),
}

impl MetadataValue {
    /// Borrow the value as a string slice if it is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the JSON kind, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::List(_) => "array",
            Self::Map(_) => "object",
        }
    }
}

impl From<serde_json::Value> for MetadataValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

/// Renders strings bare and everything else in compact JSON notation.
impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {item}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_preserves_shape() {
        let value = MetadataValue::from(json!({"b": [1, true, null], "a": "x"}));
        match &value {
            MetadataValue::Map(map) => {
                let keys: Vec<_> = map.keys().cloned().collect();
                assert_eq!(keys.len(), 2);
                assert_eq!(
                    map.get("b"),
                    Some(&MetadataValue::List(vec![
                        MetadataValue::from(1_i64),
                        MetadataValue::Bool(true),
                        MetadataValue::Null,
                    ]))
                );
            }
            other => panic!("Expected map, got {other:?}"),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(MetadataValue::from("text").to_string(), "text");
        assert_eq!(MetadataValue::from(42_i64).to_string(), "42");
        assert_eq!(
            MetadataValue::List(vec![MetadataValue::from(1_i64), MetadataValue::from("a")])
                .to_string(),
            "[1, a]"
        );
    }

    #[test]
    fn test_null_is_not_empty_string() {
        assert_ne!(MetadataValue::Null, MetadataValue::from(""));
        assert_eq!(MetadataValue::Null.kind(), "null");
    }

    #[test]
    fn test_serde_roundtrip_untagged() {
        let value = MetadataValue::from(json!([1.5, "x", {"k": false}]));
        let text = serde_json::to_string(&value).expect("serialize");
        assert_eq!(text, r#"[1.5,"x",{"k":false}]"#);
        let back: MetadataValue = serde_json::from_str(&text).expect("deserialize");
        assert_eq!(back, value);
    }
}
