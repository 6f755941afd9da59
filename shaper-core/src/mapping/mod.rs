//! Property mapping between public resource shapes and storage shapes.
//!
//! A [`PropertyMappingTable`] translates each public field name to one or more
//! internal field names plus a direction-reversal flag. Tables are registered
//! per [`ShapePair`] in a [`MappingRegistry`] that is built once during
//! startup and is read-only afterwards.

mod registry;
mod table;

pub use registry::{MappingRegistry, MappingRegistryBuilder};
pub use table::{PropertyMappingEntry, PropertyMappingTable, PropertyMappingTableBuilder};

use std::fmt;

/// Compile-time tag naming a resource shape.
///
/// Registry keys are built from these tags rather than discovered from the
/// types at lookup time.
pub trait Shape {
    /// Stable identifier of the shape, also used in error messages.
    const SHAPE: &'static str;
}

/// Key identifying one (source shape, destination shape) mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapePair {
    pub source: &'static str,
    pub destination: &'static str,
}

impl ShapePair {
    pub const fn new(source: &'static str, destination: &'static str) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn of<S: Shape, D: Shape>() -> Self {
        Self::new(S::SHAPE, D::SHAPE)
    }
}

impl fmt::Display for ShapePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.source, self.destination)
    }
}

/// Property name of a trimmed field reference, without any direction
/// suffix: the text before the first space.
pub(crate) fn property_name(trimmed: &str) -> &str {
    match trimmed.find(' ') {
        Some(index) => &trimmed[..index],
        None => trimmed,
    }
}

/// Checks that every comma-separated reference in `raw` names a key of
/// `table`.
///
/// Each entry is trimmed and may carry a direction suffix (`"age desc"`),
/// which is ignored. Blank input is vacuously valid.
pub fn fields_are_valid(table: &PropertyMappingTable, raw: &str) -> bool {
    if raw.trim().is_empty() {
        return true;
    }

    raw.split(',').all(|field| {
        let name = property_name(field.trim());
        let known = table.contains_key(name);
        if !known {
            tracing::debug!(property = name, "field reference has no mapping");
        }
        known
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author_table() -> PropertyMappingTable {
        PropertyMappingTable::builder()
            .map("Id", ["Id"])
            .map("MainCategory", ["MainCategory"])
            .map_reversed("Age", ["DateOfBirth"])
            .map("Name", ["FirstName", "LastName"])
            .build()
            .unwrap()
    }

    #[test]
    fn blank_references_are_valid() {
        let table = author_table();
        assert!(fields_are_valid(&table, ""));
        assert!(fields_are_valid(&table, "   "));
    }

    #[test]
    fn known_references_with_directions_are_valid() {
        let table = author_table();
        assert!(fields_are_valid(&table, "name"));
        assert!(fields_are_valid(&table, "age, mainCategory desc"));
        assert!(fields_are_valid(&table, " ID desc ,Name"));
    }

    #[test]
    fn any_unknown_reference_is_invalid() {
        let table = author_table();
        assert!(!fields_are_valid(&table, "age, shoeSize desc"));
        assert!(!fields_are_valid(&table, "dateOfBirth"));
        assert!(!fields_are_valid(&table, "id,,name"));
    }

    #[test]
    fn property_name_strips_direction() {
        assert_eq!(property_name("age desc"), "age");
        assert_eq!(property_name("age"), "age");
        assert_eq!(property_name("age  asc"), "age");
    }

    #[test]
    fn shape_pair_display() {
        let pair = ShapePair::new("AuthorDto", "Author");
        assert_eq!(pair.to_string(), "<AuthorDto, Author>");
    }
}
