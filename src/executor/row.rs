use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::executor::value::FieldValue;

/// One row: field name -> raw value, in insertion order.
///
/// A missing key (`get` returns `None`) is not the same as a key holding
/// `FieldValue::Null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(pub IndexMap<String, FieldValue>);

/// A named table's rows, in source order.
pub type Table = Vec<Record>;

impl Record {
    pub fn new() -> Self { Self(IndexMap::new()) }

    pub fn get(&self, key: &str) -> Option<&FieldValue> { self.0.get(key) }

    pub fn contains(&self, key: &str) -> bool { self.0.contains_key(key) }

    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        self.0.insert(key.into(), value);
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> { self.0.keys() }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> { self.0.iter() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Same keys as `self`, every value `Null`.
    pub fn null_shaped(&self) -> Self {
        Self(self.0.keys().map(|k| (k.clone(), FieldValue::Null)).collect())
    }

    pub fn into_value(self) -> Value {
        let map: Map<String, Value> = self.0.into_iter().map(|(k, v)| (k, v.to_json())).collect();
        Value::Object(map)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn absent_and_null_are_distinct() {
        let mut r = Record::new();
        r.insert("a", FieldValue::Null);
        assert!(r.contains("a"));
        assert_eq!(r.get("a"), Some(&FieldValue::Null));
        assert!(!r.contains("b"));
        assert_eq!(r.get("b"), None);
    }

    #[test]
    fn null_shape_keeps_key_order() {
        let r: Record = [("id", "1"), ("name", "Bob")].into_iter().collect();
        let shaped = r.null_shaped();
        assert_eq!(shaped.keys().collect::<Vec<_>>(), vec!["id", "name"]);
        assert!(shaped.iter().all(|(_, v)| v.is_null()));
    }

    #[test]
    fn into_value_serializes_in_order() {
        let r: Record = [("name", "Ann"), ("id", "2")].into_iter().collect();
        let value = r.clone().into_value();
        assert_eq!(value, json!({ "name": "Ann", "id": "2" }));
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "id"]);
        assert_eq!(serde_json::to_string(&r).unwrap(), r#"{"name":"Ann","id":"2"}"#);
    }
}
