//! Static field tables for shapeable record types.
//!
//! Each record type lists its public fields once, in declaration order, as
//! `(name, accessor)` pairs. The table is built on first use and shared by
//! every request for that type, so projecting a record is a table lookup
//! followed by plain function calls.

use std::fmt;

use super::value::Value;
use crate::mapping::Shape;

/// One named field of `T` with its accessor.
pub struct Field<T> {
    name: &'static str,
    read: fn(&T) -> Value,
}

impl<T> Field<T> {
    pub const fn new(name: &'static str, read: fn(&T) -> Value) -> Self {
        Self { name, read }
    }

    /// Canonical declared name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn read(&self, record: &T) -> Value {
        (self.read)(record)
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.name).finish()
    }
}

/// Ordered set of the fields `T` exposes.
pub struct FieldSet<T> {
    fields: Vec<Field<T>>,
}

impl<T> FieldSet<T> {
    pub fn new(fields: Vec<Field<T>>) -> Self {
        debug_assert!(
            fields.iter().enumerate().all(|(i, a)| {
                fields[i + 1..]
                    .iter()
                    .all(|b| !a.name.eq_ignore_ascii_case(b.name))
            }),
            "field names must be unique ignoring case"
        );
        Self { fields }
    }

    /// Field whose name matches `name` ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&Field<T>> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field<T>> {
        self.fields.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T> fmt::Debug for FieldSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Record types whose fields can be projected and sorted by name.
///
/// The record name used in error messages is the [`Shape::SHAPE`] tag.
pub trait Shaped: Shape + Sized + 'static {
    fn field_set() -> &'static FieldSet<Self>;
}

/// Whether every comma-separated name in `raw` is a field of `T`.
///
/// Blank input is valid. This is the non-failing pre-check handlers run
/// before shaping so unknown fields become a uniform bad request.
pub fn type_has_properties<T: Shaped>(raw: &str) -> bool {
    if raw.trim().is_empty() {
        return true;
    }
    let fields = T::field_set();
    raw.split(',')
        .all(|name| fields.find(name.trim()).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    struct Point {
        x: i64,
        label: Option<String>,
    }

    impl Shape for Point {
        const SHAPE: &'static str = "Point";
    }

    static POINT_FIELDS: Lazy<FieldSet<Point>> = Lazy::new(|| {
        FieldSet::new(vec![
            Field::new("X", |p: &Point| Value::from(p.x)),
            Field::new("Label", |p: &Point| Value::from(p.label.clone())),
        ])
    });

    impl Shaped for Point {
        fn field_set() -> &'static FieldSet<Self> {
            &POINT_FIELDS
        }
    }

    #[test]
    fn find_ignores_case() {
        let fields = Point::field_set();
        assert_eq!(fields.find("label").map(Field::name), Some("Label"));
        assert_eq!(fields.find("x").map(Field::name), Some("X"));
        assert!(fields.find("y").is_none());
    }

    #[test]
    fn accessors_read_values() {
        let point = Point {
            x: 3,
            label: None,
        };
        let fields = Point::field_set();
        assert_eq!(fields.find("X").unwrap().read(&point), Value::Int(3));
        assert_eq!(fields.find("Label").unwrap().read(&point), Value::Null);
    }

    #[test]
    fn property_check_accepts_blank_and_known_names() {
        assert!(type_has_properties::<Point>(""));
        assert!(type_has_properties::<Point>(" x , LABEL "));
        assert!(!type_has_properties::<Point>("x,y"));
    }
}
