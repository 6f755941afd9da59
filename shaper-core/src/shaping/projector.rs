use std::fmt;

use tracing::{debug, warn};

use super::fields::{Field, Shaped};
use super::record::ShapedRecord;
use crate::error::{QueryError, Result};

/// Fields of `T` resolved from a raw `fields` string.
///
/// Resolution happens once; the selection is then applied to any number of
/// records.
pub struct FieldSelection<T: Shaped> {
    fields: Vec<Field<T>>,
}

impl<T: Shaped> FieldSelection<T> {
    /// Every field of `T` in declaration order.
    pub fn all() -> Self {
        Self {
            fields: T::field_set().iter().copied().collect(),
        }
    }

    /// Resolves each comma-separated name in `raw` against `T`'s field set,
    /// ignoring case. Blank input selects every field.
    ///
    /// A name that matches no field fails with [`QueryError::UnknownField`].
    /// A name requested twice is kept at its first position.
    pub fn resolve(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::all());
        }

        let field_set = T::field_set();
        let mut fields: Vec<Field<T>> = Vec::new();
        for token in raw.split(',') {
            let name = token.trim();
            let Some(field) = field_set.find(name) else {
                warn!(field = name, record = T::SHAPE, "requested field does not exist");
                return Err(QueryError::UnknownField {
                    field: name.to_string(),
                    record: T::SHAPE,
                });
            };
            if fields.iter().all(|known| known.name() != field.name()) {
                fields.push(*field);
            }
        }

        debug!(record = T::SHAPE, fields = fields.len(), "resolved field selection");
        Ok(Self { fields })
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(Field::name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Projects `record` onto the selected fields, keyed by their declared
    /// names.
    pub fn project(&self, record: &T) -> ShapedRecord {
        let mut shaped = ShapedRecord::with_capacity(self.fields.len());
        for field in &self.fields {
            shaped.insert(field.name(), field.read(record));
        }
        shaped
    }

    /// Lazily projects every record yielded by `records`.
    pub fn project_all<I>(self, records: I) -> ShapedIter<I::IntoIter, T>
    where
        I: IntoIterator,
        I::Item: std::borrow::Borrow<T>,
    {
        ShapedIter {
            records: records.into_iter(),
            selection: self,
        }
    }
}

impl<T: Shaped> fmt::Debug for FieldSelection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSelection")
            .field("record", &T::SHAPE)
            .field("fields", &self.fields)
            .finish()
    }
}

/// Iterator returned by [`shape_data`] and [`FieldSelection::project_all`].
pub struct ShapedIter<I, T: Shaped> {
    records: I,
    selection: FieldSelection<T>,
}

impl<I, T> Iterator for ShapedIter<I, T>
where
    I: Iterator,
    I::Item: std::borrow::Borrow<T>,
    T: Shaped,
{
    type Item = ShapedRecord;

    fn next(&mut self) -> Option<Self::Item> {
        use std::borrow::Borrow;
        self.records
            .next()
            .map(|record| self.selection.project(record.borrow()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl<I, T: Shaped> fmt::Debug for ShapedIter<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapedIter")
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

/// Resolves `fields` once against `T` and returns a lazy projection of
/// `records`.
pub fn shape_data<T, I>(records: I, fields: &str) -> Result<ShapedIter<I::IntoIter, T>>
where
    T: Shaped,
    I: IntoIterator,
    I::Item: std::borrow::Borrow<T>,
{
    Ok(FieldSelection::<T>::resolve(fields)?.project_all(records))
}

/// Projects a single record.
pub fn shape_one<T: Shaped>(record: &T, fields: &str) -> Result<ShapedRecord> {
    Ok(FieldSelection::<T>::resolve(fields)?.project(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::Shape;
    use crate::shaping::{FieldSet, Value};
    use once_cell::sync::Lazy;

    struct Book {
        id: i64,
        title: String,
        subtitle: Option<String>,
    }

    impl Shape for Book {
        const SHAPE: &'static str = "Book";
    }

    static BOOK_FIELDS: Lazy<FieldSet<Book>> = Lazy::new(|| {
        FieldSet::new(vec![
            Field::new("Id", |b: &Book| Value::from(b.id)),
            Field::new("Title", |b: &Book| Value::from(b.title.as_str())),
            Field::new("Subtitle", |b: &Book| Value::from(b.subtitle.clone())),
        ])
    });

    impl Shaped for Book {
        fn field_set() -> &'static FieldSet<Self> {
            &BOOK_FIELDS
        }
    }

    fn books() -> Vec<Book> {
        vec![
            Book {
                id: 1,
                title: "Dune".into(),
                subtitle: None,
            },
            Book {
                id: 2,
                title: "Emma".into(),
                subtitle: Some("A Novel".into()),
            },
        ]
    }

    #[test]
    fn blank_selection_uses_declaration_order() {
        let selection = FieldSelection::<Book>::resolve("  ").unwrap();
        assert_eq!(
            selection.names().collect::<Vec<_>>(),
            vec!["Id", "Title", "Subtitle"]
        );
    }

    #[test]
    fn requested_order_and_canonical_names_are_kept() {
        let shaped = shape_one(&books()[1], "title , ID").unwrap();
        assert_eq!(shaped.keys().collect::<Vec<_>>(), vec!["Title", "Id"]);
        assert_eq!(shaped.get("Title"), Some(&Value::Text("Emma".into())));
        assert_eq!(shaped.get("Id"), Some(&Value::Int(2)));
    }

    #[test]
    fn unknown_field_names_the_token_and_record() {
        let err = FieldSelection::<Book>::resolve("id,isbn").unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownField {
                field: "isbn".into(),
                record: "Book",
            }
        );
    }

    #[test]
    fn empty_token_is_unknown() {
        assert!(FieldSelection::<Book>::resolve("id,,title").is_err());
    }

    #[test]
    fn repeated_names_collapse() {
        let selection = FieldSelection::<Book>::resolve("title,id,TITLE").unwrap();
        assert_eq!(selection.names().collect::<Vec<_>>(), vec!["Title", "Id"]);
    }

    #[test]
    fn shape_data_projects_every_record() {
        let records = books();
        let shaped: Vec<ShapedRecord> = shape_data::<Book, _>(&records, "subtitle")
            .unwrap()
            .collect();
        assert_eq!(shaped.len(), 2);
        assert_eq!(shaped[0].get("Subtitle"), Some(&Value::Null));
        assert_eq!(
            serde_json::to_string(&shaped).unwrap(),
            r#"[{"Subtitle":null},{"Subtitle":"A Novel"}]"#
        );
    }

    #[test]
    fn shape_data_fails_before_projecting() {
        let records = books();
        assert!(shape_data::<Book, _>(&records, "pages").is_err());
    }
}
