//! string-keyed maps as records

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use super::{FieldValue, Record, ToFieldValue};

impl<V: ToFieldValue, S: BuildHasher> Record for HashMap<String, V, S> {
    fn attribute_names(&self) -> Option<Vec<&str>> {
        Some(self.keys().map(String::as_str).collect())
    }

    fn attribute(&self, name: &str) -> Option<FieldValue<'_>> {
        self.get(name).map(ToFieldValue::to_field_value)
    }

    fn type_name(&self) -> &str {
        "map"
    }
}

impl<V: ToFieldValue> Record for BTreeMap<String, V> {
    fn attribute_names(&self) -> Option<Vec<&str>> {
        Some(self.keys().map(String::as_str).collect())
    }

    fn attribute(&self, name: &str) -> Option<FieldValue<'_>> {
        self.get(name).map(ToFieldValue::to_field_value)
    }

    fn type_name(&self) -> &str {
        "map"
    }
}
