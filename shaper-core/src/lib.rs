//! # Shaper Core
//!
//! Query shaping for resource collections: sort, select and page records
//! addressed by public field names that differ from their stored layout.
//!
//! ## Overview
//!
//! A listing request carries three loosely typed strings: `orderBy`,
//! `fields` and a page position. `shaper-core` turns them into typed
//! operations:
//!
//! - **Mapping** ([`mapping`]): per (public shape, stored shape) pair, a
//!   table from public field name to stored field names plus a direction
//!   flag. Tables live in a [`MappingRegistry`] that is frozen at startup.
//! - **Sorting** ([`sorting`]): translates `orderBy` through a table into an
//!   [`OrderingExpr`] and applies it to records.
//! - **Shaping** ([`shaping`]): projects records onto a requested field list
//!   using each type's static [`FieldSet`].
//! - **Paging** ([`paging`]): slices an ordered source into a
//!   [`PagedList`] with totals for navigation.
//!
//! [`catalog`] wires the course-library records into these modules and
//! [`library`] runs the listing pipeline against an in-memory store.
//!
//! ## Examples
//!
//! ```
//! use shaper_core::{
//!     catalog,
//!     mapping::fields_are_valid,
//!     sorting::translate_order_by,
//! };
//!
//! # fn main() -> shaper_core::Result<()> {
//! let table = catalog::author_mapping_table()?;
//! assert!(fields_are_valid(&table, "age desc, name"));
//!
//! let ordering = translate_order_by("age desc, name", &table)?;
//! assert_eq!(
//!     ordering.to_string(),
//!     "DateOfBirth ascending, FirstName ascending, LastName ascending"
//! );
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod library;
pub mod mapping;
pub mod paging;
pub mod shaping;
pub mod sorting;

pub use error::{QueryError, Result};
pub use mapping::{MappingRegistry, PropertyMappingTable, Shape, ShapePair};
pub use paging::{PageRequest, PagedList, PaginationMetadata, ResourceUriType};
pub use shaping::{FieldSet, Shaped, ShapedRecord, Value};
pub use sorting::{OrderingExpr, SortClause};

pub use shaper_model;
