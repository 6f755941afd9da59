use chrono::{DateTime, Datelike, Utc};

use crate::course::{Course, CourseForCreation};
use crate::ids::AuthorID;

/// Author as held by the store, with the internal field layout that
/// sorting expressions are written against.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Author {
    pub id: AuthorID,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateTime<Utc>,
    pub main_category: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub courses: Vec<Course>,
}

impl Author {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Public-facing author representation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AuthorDto {
    pub id: AuthorID,
    pub name: String,
    pub age: i32,
    pub main_category: String,
}

impl AuthorDto {
    /// Builds the DTO with `age` computed against `now`.
    pub fn from_author_at(author: &Author, now: DateTime<Utc>) -> Self {
        Self {
            id: author.id,
            name: author.full_name(),
            age: current_age(author.date_of_birth, now),
            main_category: author.main_category.clone(),
        }
    }
}

impl From<&Author> for AuthorDto {
    fn from(author: &Author) -> Self {
        Self::from_author_at(author, Utc::now())
    }
}

/// Payload accepted when creating an author, optionally with courses.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AuthorForCreation {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateTime<Utc>,
    pub main_category: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub courses: Vec<CourseForCreation>,
}

impl AuthorForCreation {
    /// Converts into an [`Author`] with a nil id; the store assigns ids.
    pub fn into_author(self) -> Author {
        let author_id = AuthorID(uuid::Uuid::nil());
        Author {
            id: author_id,
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            main_category: self.main_category,
            courses: self
                .courses
                .into_iter()
                .map(|course| course.into_course(author_id))
                .collect(),
        }
    }
}

/// Whole years elapsed between `date_of_birth` and `now`.
pub fn current_age(date_of_birth: DateTime<Utc>, now: DateTime<Utc>) -> i32 {
    let mut age = now.year() - date_of_birth.year();
    if (now.month(), now.day()) < (date_of_birth.month(), date_of_birth.day())
    {
        age -= 1;
    }
    age
}
