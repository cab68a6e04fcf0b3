//! A [`Record`] over an untyped JSON object.
//!
//! Fetched payloads arrive as JSON; rather than forcing every payload
//! through a typed struct, `JsonRecord` exposes the object's top-level
//! members as fields keyed by name. Strings and numbers are primitive,
//! everything else (booleans, arrays, nested objects, `null`) is
//! [`FieldValue::Other`].

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::record::{FieldValue, Number, Record, RecordId};

/// Name of the identifier member.
pub const ID_FIELD: &str = "id";

/// One JSON object viewed as a listable record.
///
/// Serializes as the bare object. There is no `Deserialize`: records are
/// built with [`JsonRecord::from_value`] so they know their position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct JsonRecord {
    fields: Map<String, Value>,
    #[serde(skip)]
    position: usize,
}

impl JsonRecord {
    /// Wraps an object. `position` is its index in the source array and is
    /// used as the id when the object has no usable `id` member.
    pub fn new(fields: Map<String, Value>, position: usize) -> Self {
        Self { fields, position }
    }

    /// Converts a JSON value into a record, rejecting non-objects.
    pub fn from_value(value: Value, position: usize) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self::new(fields, position)),
            other => Err(Error::payload(format!(
                "item {position} is {}, expected an object",
                json_kind(&other)
            ))),
        }
    }

    /// Returns the raw member, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns the underlying object.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl Record for JsonRecord {
    type Key = String;

    fn id(&self) -> RecordId {
        match self.fields.get(ID_FIELD) {
            Some(Value::String(s)) => RecordId::Text(s.clone()),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(i) => RecordId::Number(i),
                None => RecordId::Text(n.to_string()),
            },
            // "#<position>" cannot collide with an explicit numeric id
            _ => RecordId::Text(format!("#{}", self.position)),
        }
    }

    fn field(&self, key: &String) -> Option<FieldValue<'_>> {
        self.fields.get(key.as_str()).map(|value| match value {
            Value::String(s) => FieldValue::Text(s),
            Value::Number(n) => FieldValue::Number(Number::from(n)),
            _ => FieldValue::Other,
        })
    }
}

/// Human-readable name of a JSON value's type, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> JsonRecord {
        JsonRecord::from_value(value, 0).unwrap()
    }

    #[test]
    fn test_text_and_number_fields() {
        let rec = record(json!({"id": "svc1", "name": "Payments", "slo": 99.9}));
        assert_eq!(rec.field(&"name".to_string()), Some(FieldValue::Text("Payments")));
        assert_eq!(
            rec.field(&"slo".to_string()),
            Some(FieldValue::Number(Number::Float(99.9)))
        );
    }

    #[test]
    fn test_nested_and_bool_fields_are_other() {
        let rec = record(json!({"id": 1, "tags": ["a"], "meta": {"k": "v"}, "installed": true}));
        assert_eq!(rec.field(&"tags".to_string()), Some(FieldValue::Other));
        assert_eq!(rec.field(&"meta".to_string()), Some(FieldValue::Other));
        assert_eq!(rec.field(&"installed".to_string()), Some(FieldValue::Other));
    }

    #[test]
    fn test_missing_field_is_none() {
        let rec = record(json!({"id": 1}));
        assert_eq!(rec.field(&"owner".to_string()), None);
    }

    #[test]
    fn test_id_variants() {
        assert_eq!(record(json!({"id": "svc1"})).id(), RecordId::from("svc1"));
        assert_eq!(record(json!({"id": 42})).id(), RecordId::Number(42));
        assert_eq!(record(json!({"id": 1.5})).id(), RecordId::from("1.5"));
    }

    #[test]
    fn test_id_falls_back_to_position() {
        let rec = JsonRecord::from_value(json!({"name": "anon"}), 3).unwrap();
        assert_eq!(rec.id(), RecordId::from("#3"));
    }

    #[test]
    fn test_positional_id_differs_from_numeric_id() {
        let explicit = JsonRecord::from_value(json!({"id": 1}), 0).unwrap();
        let positional = JsonRecord::from_value(json!({"name": "anon"}), 1).unwrap();
        assert_eq!(explicit.id(), RecordId::Number(1));
        assert_ne!(explicit.id(), positional.id());
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        let err = JsonRecord::from_value(json!("text"), 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid payload: item 2 is a string, expected an object"
        );
    }
}
