//! Pagination over ordered sources.
//!
//! [`PagedList::create`] counts the whole source, skips to the requested
//! page and takes at most one page of items. The counts travel with the page
//! so transports can report [`PaginationMetadata`] and build navigation
//! links.

mod list;
mod metadata;
mod request;

pub use list::{PageSource, PagedList};
pub use metadata::{PaginationMetadata, ResourceUriType};
pub use request::PageRequest;
