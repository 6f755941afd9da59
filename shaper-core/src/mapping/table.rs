use indexmap::IndexMap;

use crate::error::{QueryError, Result};

/// Internal fields a public field expands to, plus whether the sort
/// direction flips when ordering by it.
///
/// `reverse` is set when the public value is derived inversely from the
/// internal one, e.g. an `Age` view over a `DateOfBirth` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMappingEntry {
    destination_fields: Vec<String>,
    reverse: bool,
}

impl PropertyMappingEntry {
    pub fn new<I, S>(destination_fields: I, reverse: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let destination_fields: Vec<String> =
            destination_fields.into_iter().map(Into::into).collect();

        if destination_fields.is_empty() {
            return Err(QueryError::InvalidMapping(
                "a mapping entry needs at least one destination field".into(),
            ));
        }
        if let Some(blank) = destination_fields.iter().find(|f| f.trim().is_empty()) {
            return Err(QueryError::InvalidMapping(format!(
                "destination field '{blank}' is blank"
            )));
        }

        Ok(Self {
            destination_fields,
            reverse,
        })
    }

    pub fn destination_fields(&self) -> &[String] {
        &self.destination_fields
    }

    pub fn reverse(&self) -> bool {
        self.reverse
    }
}

/// Case-insensitive table from public field name to [`PropertyMappingEntry`].
///
/// Keys keep the casing they were declared with; lookups ignore case.
#[derive(Debug, Clone, Default)]
pub struct PropertyMappingTable {
    // lowercased name -> (declared name, entry)
    entries: IndexMap<String, (String, PropertyMappingEntry)>,
}

impl PropertyMappingTable {
    pub fn builder() -> PropertyMappingTableBuilder {
        PropertyMappingTableBuilder::default()
    }

    pub fn get(&self, name: &str) -> Option<&PropertyMappingEntry> {
        self.entries
            .get(&name.to_lowercase())
            .map(|(_, entry)| entry)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_lowercase())
    }

    /// Public field names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyMappingEntry)> {
        self.entries
            .values()
            .map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, name: String, entry: PropertyMappingEntry) -> Result<()> {
        let key = name.to_lowercase();
        if self.entries.contains_key(&key) {
            return Err(QueryError::InvalidMapping(format!(
                "public field '{name}' is mapped more than once"
            )));
        }
        self.entries.insert(key, (name, entry));
        Ok(())
    }
}

/// Declarative builder for a [`PropertyMappingTable`].
///
/// Validation is deferred to [`build`](Self::build) so a table reads as one
/// expression at the registration site.
#[derive(Debug, Default)]
pub struct PropertyMappingTableBuilder {
    pending: Vec<(String, Vec<String>, bool)>,
}

impl PropertyMappingTableBuilder {
    /// Maps `name` to `fields`, keeping the requested direction.
    pub fn map<I, S>(self, name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(name.into(), fields, false)
    }

    /// Maps `name` to `fields`, flipping the requested direction.
    pub fn map_reversed<I, S>(self, name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(name.into(), fields, true)
    }

    fn push<I, S>(mut self, name: String, fields: I, reverse: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pending
            .push((name, fields.into_iter().map(Into::into).collect(), reverse));
        self
    }

    pub fn build(self) -> Result<PropertyMappingTable> {
        let mut table = PropertyMappingTable::default();
        for (name, fields, reverse) in self.pending {
            if name.trim().is_empty() || name.contains([' ', ',']) {
                return Err(QueryError::InvalidMapping(format!(
                    "public field name '{name}' must be a single word"
                )));
            }
            let entry = PropertyMappingEntry::new(fields, reverse)?;
            table.insert(name, entry)?;
        }
        Ok(table)
    }
}
