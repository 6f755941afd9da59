use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::value::Value;

/// Ordered field-name to value projection of one record.
///
/// Iteration and serialization follow insertion order, which the projector
/// sets to the requested field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapedRecord {
    entries: IndexMap<&'static str, Value>,
}

impl ShapedRecord {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Appends a field, replacing the value in place if the name is already
    /// present.
    pub fn insert(&mut self, name: &'static str, value: Value) {
        self.entries.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ShapedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(*name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_preserved() {
        let mut record = ShapedRecord::default();
        record.insert("Name", Value::from("Nancy Rye"));
        record.insert("Id", Value::from(7));
        record.insert("Age", Value::from(41));

        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["Name", "Id", "Age"]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"Name":"Nancy Rye","Id":7,"Age":41}"#);
    }

    #[test]
    fn reinserting_keeps_position() {
        let mut record = ShapedRecord::default();
        record.insert("A", Value::from(1));
        record.insert("B", Value::from(2));
        record.insert("A", Value::from(3));

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("A"), Some(&Value::Int(3)));
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["A", "B"]);
    }
}
