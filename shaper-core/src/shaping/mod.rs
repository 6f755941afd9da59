//! Field projection for shapeable record types.
//!
//! A caller asks for a subset of a record's public fields by name. The
//! names are resolved once against the record type's [`FieldSet`] and the
//! resulting [`FieldSelection`] projects each record into a
//! [`ShapedRecord`] holding only those fields, in the requested order.

mod fields;
mod projector;
mod record;
mod value;

pub use fields::{Field, FieldSet, Shaped, type_has_properties};
pub use projector::{FieldSelection, ShapedIter, shape_data, shape_one};
pub use record::ShapedRecord;
pub use value::Value;
