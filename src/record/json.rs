//! `serde_json` documents as records

use std::borrow::Cow;

use serde_json::{Map, Value as JsonValue};

use super::{FieldValue, Record, ToFieldValue};

impl ToFieldValue for JsonValue {
    fn to_field_value(&self) -> FieldValue<'_> {
        match self {
            JsonValue::Null => FieldValue::Null,
            JsonValue::Bool(b) => FieldValue::Bool(*b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    FieldValue::UInt(u)
                } else {
                    FieldValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            JsonValue::String(s) => FieldValue::Str(Cow::Borrowed(s.as_str())),
            JsonValue::Array(items) => {
                FieldValue::Seq(items.iter().map(ToFieldValue::to_field_value).collect())
            }
            JsonValue::Object(map) => FieldValue::Record(map),
        }
    }
}

impl Record for Map<String, JsonValue> {
    fn attribute_names(&self) -> Option<Vec<&str>> {
        Some(self.keys().map(String::as_str).collect())
    }

    fn attribute(&self, name: &str) -> Option<FieldValue<'_>> {
        self.get(name).map(ToFieldValue::to_field_value)
    }

    fn type_name(&self) -> &str {
        "object"
    }
}

/// only JSON objects are records
impl Record for JsonValue {
    fn attribute_names(&self) -> Option<Vec<&str>> {
        self.as_object().and_then(|map| map.attribute_names())
    }

    fn attribute(&self, name: &str) -> Option<FieldValue<'_>> {
        self.as_object().and_then(|map| map.attribute(name))
    }

    fn type_name(&self) -> &str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "bool",
            JsonValue::Number(_) => "number",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }
}
