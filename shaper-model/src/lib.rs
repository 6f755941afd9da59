//! Core data model definitions shared across Shaper crates.
#![allow(missing_docs)]

pub use ::chrono;

pub mod author;
pub mod course;
pub mod error;
pub mod ids;

pub use author::{Author, AuthorDto, AuthorForCreation, current_age};
pub use course::{Course, CourseDto, CourseForCreation, CourseForUpdate};
pub use error::{ModelError, Result as ModelResult};
pub use ids::{AuthorID, CourseID};
