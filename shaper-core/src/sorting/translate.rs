use std::fmt;

use tracing::{debug, error};

use super::clause::{SortClause, SortOrder};
use crate::error::{QueryError, Result};
use crate::mapping::PropertyMappingTable;

/// One internal field and the direction to order it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingTerm {
    pub field: String,
    pub order: SortOrder,
}

impl OrderingTerm {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }

    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, SortOrder::Ascending)
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self::new(field, SortOrder::Descending)
    }
}

impl fmt::Display for OrderingTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.order)
    }
}

/// Ordered list of internal sort terms, most significant first.
///
/// Renders as `"FirstName ascending, LastName descending"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderingExpr {
    terms: Vec<OrderingTerm>,
}

impl OrderingExpr {
    pub fn new(terms: Vec<OrderingTerm>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[OrderingTerm] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Appends the terms of `other` after this expression's terms.
    pub fn extend(&mut self, other: OrderingExpr) {
        self.terms.extend(other.terms);
    }
}

impl fmt::Display for OrderingExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, term) in self.terms.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

impl IntoIterator for OrderingExpr {
    type Item = OrderingTerm;
    type IntoIter = std::vec::IntoIter<OrderingTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

/// Translates a raw `orderBy` list into internal ordering terms using
/// `table`.
///
/// Each clause expands to one term per destination field of its mapping
/// entry, in clause order then entry order. A `reverse` entry flips the
/// requested direction. Blank input produces an empty expression.
///
/// A property with no entry fails with [`QueryError::UnknownSortField`].
/// Callers are expected to have checked the clause list with
/// [`fields_are_valid`](crate::mapping::fields_are_valid) first, so reaching
/// that error means validation and translation disagree.
pub fn translate_order_by(raw: &str, table: &PropertyMappingTable) -> Result<OrderingExpr> {
    let mut terms = Vec::new();

    for clause in SortClause::parse_list(raw) {
        let Some(entry) = table.get(&clause.property_name) else {
            error!(
                property = %clause.property_name,
                order_by = raw,
                "sort clause reached translation without a mapping"
            );
            return Err(QueryError::UnknownSortField {
                property: clause.property_name,
            });
        };

        let order = if entry.reverse() {
            clause.order().flip()
        } else {
            clause.order()
        };

        terms.extend(
            entry
                .destination_fields()
                .iter()
                .map(|field| OrderingTerm::new(field.as_str(), order)),
        );
    }

    let expr = OrderingExpr::new(terms);
    debug!(order_by = raw, ordering = %expr, "translated sort clauses");
    Ok(expr)
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
    fn blank_order_by_is_empty() {
        let expr = translate_order_by("  ", &author_table()).unwrap();
        assert!(expr.is_empty());
        assert_eq!(expr.to_string(), "");
    }

    #[test]
    fn reverse_entry_flips_direction() {
        let table = author_table();
        let expr = translate_order_by("age", &table).unwrap();
        assert_eq!(expr.terms(), [OrderingTerm::descending("DateOfBirth")]);

        let expr = translate_order_by("age desc", &table).unwrap();
        assert_eq!(expr.terms(), [OrderingTerm::ascending("DateOfBirth")]);
    }

    #[test]
    fn multi_field_entries_expand_in_order() {
        let expr = translate_order_by("name desc, id", &author_table()).unwrap();
        assert_eq!(
            expr.to_string(),
            "FirstName descending, LastName descending, Id ascending"
        );
    }

    #[test]
    fn translation_composes_over_comma_splitting() {
        let table = author_table();
        let mut left = translate_order_by("name", &table).unwrap();
        left.extend(translate_order_by("age desc", &table).unwrap());
        let whole = translate_order_by("name, age desc", &table).unwrap();
        assert_eq!(left, whole);
    }

    #[test]
    fn unknown_property_fails() {
        let err = translate_order_by("id, shoeSize", &author_table()).unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownSortField {
                property: "shoeSize".into()
            }
        );
    }
}
