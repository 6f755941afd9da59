//! Sort clause translation
//!
//! Turns a caller's `orderBy` string into an [`OrderingExpr`] over internal
//! field names through a [`PropertyMappingTable`](crate::mapping::PropertyMappingTable),
//! and applies such an expression to in-memory records.

pub mod apply;
mod clause;
mod translate;

pub use apply::sort_by_ordering;
pub use clause::{SortClause, SortOrder};
pub use translate::{OrderingExpr, OrderingTerm, translate_order_by};
