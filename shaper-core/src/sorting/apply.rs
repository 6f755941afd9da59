//! In-memory ordering of shapeable records by internal field names.

use std::cmp::Ordering;

use tracing::error;

use super::translate::OrderingExpr;
use crate::error::{QueryError, Result};
use crate::shaping::{Field, Shaped, Value};

/// Sorts `records` by the terms of `ordering`, first term most significant.
///
/// Keys are read once per record. The sort is stable, so records equal on
/// every term keep their source order. Null values sort last regardless of
/// direction. An empty ordering returns the records untouched.
pub fn sort_by_ordering<T: Shaped>(records: Vec<T>, ordering: &OrderingExpr) -> Result<Vec<T>> {
    if ordering.is_empty() {
        return Ok(records);
    }

    let field_set = T::field_set();
    let mut columns: Vec<(Field<T>, bool)> = Vec::with_capacity(ordering.len());
    for term in ordering.terms() {
        let Some(field) = field_set.find(&term.field) else {
            error!(field = %term.field, record = T::SHAPE, "ordering term names an unknown field");
            return Err(QueryError::UnknownSortField {
                property: term.field.clone(),
            });
        };
        columns.push((*field, term.order.is_descending()));
    }

    let mut keyed: Vec<(Vec<Value>, T)> = records
        .into_iter()
        .map(|record| {
            let keys = columns.iter().map(|(field, _)| field.read(&record)).collect();
            (keys, record)
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        columns
            .iter()
            .zip(a.iter().zip(b.iter()))
            .map(|((_, descending), (left, right))| left.compare_with_order(right, *descending))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });

    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::Shape;
    use crate::shaping::FieldSet;
    use crate::sorting::OrderingTerm;
    use once_cell::sync::Lazy;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        tag: u32,
        first: &'static str,
        last: &'static str,
        rank: Option<i64>,
    }

    impl Shape for Row {
        const SHAPE: &'static str = "Row";
    }

    static ROW_FIELDS: Lazy<FieldSet<Row>> = Lazy::new(|| {
        FieldSet::new(vec![
            Field::new("Tag", |r: &Row| Value::from(r.tag)),
            Field::new("First", |r: &Row| Value::from(r.first)),
            Field::new("Last", |r: &Row| Value::from(r.last)),
            Field::new("Rank", |r: &Row| Value::from(r.rank)),
        ])
    });

    impl Shaped for Row {
        fn field_set() -> &'static FieldSet<Self> {
            &ROW_FIELDS
        }
    }

    fn row(tag: u32, first: &'static str, last: &'static str, rank: Option<i64>) -> Row {
        Row {
            tag,
            first,
            last,
            rank,
        }
    }

    fn tags(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.tag).collect()
    }

    fn rows() -> Vec<Row> {
        vec![
            row(1, "Jaimy", "Johnson", Some(3)),
            row(2, "Berry", "Griffin", None),
            row(3, "Jaimy", "Adams", Some(1)),
            row(4, "Anne", "Adams", Some(3)),
        ]
    }

    #[test]
    fn keys_compose_first_most_significant() {
        let ordering = OrderingExpr::new(vec![
            OrderingTerm::ascending("First"),
            OrderingTerm::ascending("Last"),
        ]);
        let sorted = sort_by_ordering(rows(), &ordering).unwrap();
        assert_eq!(tags(&sorted), vec![4, 2, 3, 1]);
    }

    #[test]
    fn descending_keeps_nulls_last() {
        let ordering = OrderingExpr::new(vec![OrderingTerm::descending("Rank")]);
        let sorted = sort_by_ordering(rows(), &ordering).unwrap();
        assert_eq!(tags(&sorted), vec![1, 4, 3, 2]);

        let ordering = OrderingExpr::new(vec![OrderingTerm::ascending("Rank")]);
        let sorted = sort_by_ordering(rows(), &ordering).unwrap();
        assert_eq!(tags(&sorted), vec![3, 1, 4, 2]);
    }

    #[test]
    fn ties_keep_source_order() {
        let ordering = OrderingExpr::new(vec![OrderingTerm::ascending("Last")]);
        let sorted = sort_by_ordering(rows(), &ordering).unwrap();
        assert_eq!(tags(&sorted), vec![3, 4, 2, 1]);
    }

    #[test]
    fn empty_ordering_is_identity() {
        let sorted = sort_by_ordering(rows(), &OrderingExpr::default()).unwrap();
        assert_eq!(sorted, rows());
    }

    #[test]
    fn unknown_field_fails() {
        let ordering = OrderingExpr::new(vec![OrderingTerm::ascending("Height")]);
        let err = sort_by_ordering(rows(), &ordering).unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownSortField {
                property: "Height".into()
            }
        );
    }
}
