//! Field values and record access.
//!
//! Items handed to the engine are opaque to it: every read goes through a
//! field's `get_value` accessor, which yields a [`FieldValue`]. When a field
//! does not supply its own accessor, the item's [`Record`] implementation is
//! used to look the value up by field id.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Runtime representation of a single field value.
///
/// Mirrors the shapes a JSON item can hold. Objects nested inside an item are
/// not addressable by fields and are carried as their JSON text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
    List(Vec<FieldValue>),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Numeric view of the value, for `Integer` and `Number` only.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(n) => Some(*n as f64),
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// The value seen as a set of members.
    ///
    /// A list yields its items, `Null` yields nothing, and any other scalar is
    /// a one-element set containing itself.
    pub fn members(&self) -> &[FieldValue] {
        match self {
            FieldValue::List(items) => items,
            FieldValue::Null => &[],
            other => std::slice::from_ref(other),
        }
    }

    /// Whether `needle` is one of this value's [`members`](Self::members).
    pub fn has_member(&self, needle: &FieldValue) -> bool {
        self.members().contains(needle)
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::Null, FieldValue::Null) => true,
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a == b,
            (FieldValue::Text(a), FieldValue::Text(b)) => a == b,
            (FieldValue::List(a), FieldValue::List(b)) => a == b,
            // Integer and Number are one numeric domain.
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }
}

/// String coercion used by global search.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::List(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        FieldValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl From<&Value> for FieldValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => n
                .as_i64()
                .map(FieldValue::Integer)
                .or_else(|| n.as_f64().map(FieldValue::Number))
                .unwrap_or_default(),
            Value::String(s) => FieldValue::Text(s.clone()),
            Value::Array(items) => FieldValue::List(items.iter().map(FieldValue::from).collect()),
            Value::Object(_) => FieldValue::Text(value.to_string()),
        }
    }
}

/// Keyed access to an item's raw values.
///
/// This is the default `get_value` for fields that don't declare one: the
/// field id is the key.
pub trait Record {
    fn value_of(&self, field_id: &str) -> FieldValue;
}

impl Record for Value {
    fn value_of(&self, field_id: &str) -> FieldValue {
        match self {
            Value::Object(map) => map.value_of(field_id),
            _ => FieldValue::Null,
        }
    }
}

impl Record for Map<String, Value> {
    fn value_of(&self, field_id: &str) -> FieldValue {
        self.get(field_id).map(FieldValue::from).unwrap_or_default()
    }
}

impl Record for HashMap<String, FieldValue> {
    fn value_of(&self, field_id: &str) -> FieldValue {
        self.get(field_id).cloned().unwrap_or_default()
    }
}

impl Record for BTreeMap<String, FieldValue> {
    fn value_of(&self, field_id: &str) -> FieldValue {
        self.get(field_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_and_number_are_equal_when_numerically_equal() {
        assert_eq!(FieldValue::Integer(14), FieldValue::Number(14.0));
        assert_ne!(FieldValue::Integer(14), FieldValue::Number(14.5));
        assert_ne!(FieldValue::Integer(1), FieldValue::Bool(true));
        assert_ne!(FieldValue::Text("1".into()), FieldValue::Integer(1));
    }

    #[test]
    fn display_coerces_like_search_expects() {
        assert_eq!(FieldValue::Null.to_string(), "");
        assert_eq!(FieldValue::Number(14.0).to_string(), "14");
        assert_eq!(FieldValue::Number(1.5).to_string(), "1.5");
        assert_eq!(FieldValue::from(vec!["Space", "NASA"]).to_string(), "Space,NASA");
        assert_eq!(FieldValue::Bool(false).to_string(), "false");
    }

    #[test]
    fn members_of_scalars_and_lists() {
        assert!(FieldValue::Null.members().is_empty());
        assert_eq!(FieldValue::from("a").members(), &[FieldValue::from("a")]);
        assert_eq!(FieldValue::from(vec!["a", "b"]).members().len(), 2);
        assert!(FieldValue::from(vec!["a", "b"]).has_member(&"b".into()));
        assert!(!FieldValue::from("ab").has_member(&"a".into()));
    }

    #[test]
    fn converts_from_json() {
        assert_eq!(FieldValue::from(&json!(3)), FieldValue::Integer(3));
        assert_eq!(FieldValue::from(&json!(2.5)), FieldValue::Number(2.5));
        assert_eq!(
            FieldValue::from(&json!(["x", 1])),
            FieldValue::List(vec!["x".into(), FieldValue::Integer(1)])
        );
        assert_eq!(FieldValue::from(&json!(null)), FieldValue::Null);
    }

    #[test]
    fn deserializes_untagged() {
        let value: FieldValue = serde_json::from_str(r#"["is", 2, null]"#).unwrap();
        assert_eq!(
            value,
            FieldValue::List(vec!["is".into(), FieldValue::Integer(2), FieldValue::Null])
        );
    }

    #[test]
    fn json_record_reads_object_keys() {
        let item = json!({ "title": "Neptune", "satellites": 14 });
        assert_eq!(item.value_of("title"), FieldValue::from("Neptune"));
        assert_eq!(item.value_of("satellites"), FieldValue::Integer(14));
        assert!(item.value_of("missing").is_null());
        assert!(json!([1, 2]).value_of("title").is_null());
    }

    #[test]
    fn map_record_reads_keys() {
        let mut item = BTreeMap::new();
        item.insert("status".to_string(), FieldValue::from("draft"));
        assert_eq!(item.value_of("status"), FieldValue::from("draft"));
        assert!(item.value_of("other").is_null());
    }
}
