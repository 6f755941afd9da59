//! Data access for the course library.
//!
//! [`CourseLibrary`] owns the stored authors and courses and runs listing
//! queries through the mapping, sorting and paging modules.

mod ids;
mod parameters;
pub mod seed;
mod store;

pub use ids::parse_id_list;
pub use parameters::{
    AuthorsResourceParameters, DEFAULT_ORDER_BY, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageLimits,
};
pub use store::CourseLibrary;
