use std::fmt;

use crate::mapping::property_name;

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }

    pub fn is_descending(self) -> bool {
        matches!(self, SortOrder::Descending)
    }

    /// The opposite order.
    pub fn flip(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a raw `orderBy` list: a public property name and the
/// direction the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortClause {
    pub property_name: String,
    pub descending: bool,
}

impl SortClause {
    /// Parses a single clause such as `"age"` or `"mainCategory desc"`.
    ///
    /// The clause is descending when it ends with a ` desc` token in any
    /// case. The property name is the text before the first space.
    pub fn parse(clause: &str) -> Self {
        let trimmed = clause.trim();
        let descending = trimmed
            .len()
            .checked_sub(DESC_SUFFIX.len())
            .and_then(|start| trimmed.get(start..))
            .is_some_and(|tail| tail.eq_ignore_ascii_case(DESC_SUFFIX));

        Self {
            property_name: property_name(trimmed).to_string(),
            descending,
        }
    }

    /// Splits `raw` on commas and parses each piece. Blank input yields no
    /// clauses.
    pub fn parse_list(raw: &str) -> Vec<Self> {
        if raw.trim().is_empty() {
            return Vec::new();
        }
        raw.split(',').map(Self::parse).collect()
    }

    pub fn order(&self) -> SortOrder {
        SortOrder::from_descending(self.descending)
    }
}

const DESC_SUFFIX: &str = " desc";
