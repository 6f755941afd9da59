//! Field tables and property mappings for the course-library records.
//!
//! `AuthorDto` is the public shape callers sort and select against; `Author`
//! is the stored shape that ordering expressions are evaluated on.

use once_cell::sync::Lazy;
use shaper_model::{Author, AuthorDto, Course, CourseDto};

use crate::error::Result;
use crate::mapping::{MappingRegistry, PropertyMappingTable, Shape};
use crate::shaping::{Field, FieldSet, Shaped, Value};

impl Shape for Author {
    const SHAPE: &'static str = "Author";
}

impl Shape for AuthorDto {
    const SHAPE: &'static str = "AuthorDto";
}

impl Shape for Course {
    const SHAPE: &'static str = "Course";
}

impl Shape for CourseDto {
    const SHAPE: &'static str = "CourseDto";
}

static AUTHOR_FIELDS: Lazy<FieldSet<Author>> = Lazy::new(|| {
    FieldSet::new(vec![
        Field::new("Id", |a: &Author| Value::from(a.id.to_uuid())),
        Field::new("FirstName", |a: &Author| Value::from(a.first_name.as_str())),
        Field::new("LastName", |a: &Author| Value::from(a.last_name.as_str())),
        Field::new("DateOfBirth", |a: &Author| Value::from(a.date_of_birth)),
        Field::new("MainCategory", |a: &Author| Value::from(a.main_category.as_str())),
    ])
});

static AUTHOR_DTO_FIELDS: Lazy<FieldSet<AuthorDto>> = Lazy::new(|| {
    FieldSet::new(vec![
        Field::new("Id", |a: &AuthorDto| Value::from(a.id.to_uuid())),
        Field::new("Name", |a: &AuthorDto| Value::from(a.name.as_str())),
        Field::new("Age", |a: &AuthorDto| Value::from(a.age)),
        Field::new("MainCategory", |a: &AuthorDto| {
            Value::from(a.main_category.as_str())
        }),
    ])
});

static COURSE_FIELDS: Lazy<FieldSet<Course>> = Lazy::new(|| {
    FieldSet::new(vec![
        Field::new("Id", |c: &Course| Value::from(c.id.to_uuid())),
        Field::new("AuthorId", |c: &Course| Value::from(c.author_id.to_uuid())),
        Field::new("Title", |c: &Course| Value::from(c.title.as_str())),
        Field::new("Description", |c: &Course| {
            Value::from(c.description.as_deref())
        }),
    ])
});

static COURSE_DTO_FIELDS: Lazy<FieldSet<CourseDto>> = Lazy::new(|| {
    FieldSet::new(vec![
        Field::new("Id", |c: &CourseDto| Value::from(c.id.to_uuid())),
        Field::new("Title", |c: &CourseDto| Value::from(c.title.as_str())),
        Field::new("Description", |c: &CourseDto| {
            Value::from(c.description.as_deref())
        }),
    ])
});

impl Shaped for Author {
    fn field_set() -> &'static FieldSet<Self> {
        &AUTHOR_FIELDS
    }
}

impl Shaped for AuthorDto {
    fn field_set() -> &'static FieldSet<Self> {
        &AUTHOR_DTO_FIELDS
    }
}

impl Shaped for Course {
    fn field_set() -> &'static FieldSet<Self> {
        &COURSE_FIELDS
    }
}

impl Shaped for CourseDto {
    fn field_set() -> &'static FieldSet<Self> {
        &COURSE_DTO_FIELDS
    }
}

/// `AuthorDto -> Author` mapping: `Age` is derived from `DateOfBirth`, so
/// it sorts in the opposite direction, and `Name` expands to both name
/// columns.
pub fn author_mapping_table() -> Result<PropertyMappingTable> {
    PropertyMappingTable::builder()
        .map("Id", ["Id"])
        .map("MainCategory", ["MainCategory"])
        .map_reversed("Age", ["DateOfBirth"])
        .map("Name", ["FirstName", "LastName"])
        .build()
}

/// Registry holding every mapping the course library needs.
pub fn default_registry() -> Result<MappingRegistry> {
    let mut builder = MappingRegistry::builder();
    builder.register::<AuthorDto, Author>(author_mapping_table()?)?;
    Ok(builder.build())
}
