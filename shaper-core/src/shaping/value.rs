//! Tagged values read out of records by field accessors.
//!
//! A [`Value`] holds any field type a shaped record can carry. Values also
//! serve as sort keys: comparisons between values of the same kind use the
//! natural ordering, and [`Value::Null`] always sorts after present values.

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(OrderedFloat<f64>),
    Text(String),
    Uuid(Uuid),
    DateTime(DateTime<Utc>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Rank used to order values of different kinds. Null ranks last.
    fn rank(&self) -> u8 {
        match self {
            Value::Bool(_) => 0,
            Value::Int(_) | Value::Float(_) => 1,
            Value::Text(_) => 2,
            Value::Uuid(_) => 3,
            Value::DateTime(_) => 4,
            Value::Null => u8::MAX,
        }
    }

    /// Compares two values for an ordering in the given direction while
    /// keeping nulls last either way.
    pub fn compare_with_order(&self, other: &Self, descending: bool) -> Ordering {
        match (self.is_null(), other.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                if descending {
                    other.cmp(self)
                } else {
                    self.cmp(other)
                }
            }
        }
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.cmp(b),
            (Value::Int(a), Value::Float(b)) => {
                OrderedFloat(*a as f64).cmp(b).then(Ordering::Less)
            }
            (Value::Float(a), Value::Int(b)) => {
                a.cmp(&OrderedFloat(*b as f64)).then(Ordering::Greater)
            }
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Uuid(a), Value::Uuid(b)) => a.cmp(b),
            (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Int(value) => serializer.serialize_i64(*value),
            Value::Float(value) => serializer.serialize_f64(value.into_inner()),
            Value::Text(value) => serializer.serialize_str(value),
            Value::Uuid(value) => value.serialize(serializer),
            Value::DateTime(value) => value.serialize(serializer),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(OrderedFloat(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Value::Uuid(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::DateTime(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_sort_last() {
        let present = Value::from("test");
        let missing = Value::Null;
        assert!(present < missing);
        assert_eq!(present.compare_with_order(&missing, false), Ordering::Less);
        assert_eq!(present.compare_with_order(&missing, true), Ordering::Less);
        assert_eq!(missing.compare_with_order(&present, true), Ordering::Greater);
    }

    #[test]
    fn test_key_ordering() {
        let a = Value::from("apple");
        let b = Value::from("banana");
        assert!(a < b);
        assert_eq!(a.compare_with_order(&b, true), Ordering::Greater);

        let low = Value::from(1.0);
        let high = Value::from(10.0);
        assert!(low < high);
        assert!(Value::from(2) < Value::from(2.5));
    }

    #[test]
    fn serializes_as_plain_json() {
        let json = serde_json::to_value(vec![
            Value::from(42),
            Value::from("text"),
            Value::Null,
            Value::from(true),
        ])
        .unwrap();
        assert_eq!(json, serde_json::json!([42, "text", null, true]));
    }
}
