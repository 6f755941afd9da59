use crate::ids::{AuthorID, CourseID};

/// Course as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Course {
    pub id: CourseID,
    pub author_id: AuthorID,
    pub title: String,
    pub description: Option<String>,
}

/// Public-facing course representation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CourseDto {
    pub id: CourseID,
    pub title: String,
    pub description: Option<String>,
}

impl From<&Course> for CourseDto {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id,
            title: course.title.clone(),
            description: course.description.clone(),
        }
    }
}

/// Payload accepted when creating a course.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CourseForCreation {
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
}

impl CourseForCreation {
    pub fn into_course(self, author_id: AuthorID) -> Course {
        Course {
            id: CourseID(uuid::Uuid::nil()),
            author_id,
            title: self.title,
            description: self.description,
        }
    }
}

/// Payload accepted when replacing a course. Unlike creation, the
/// description is required.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CourseForUpdate {
    pub title: String,
    pub description: String,
}

impl CourseForUpdate {
    /// Overwrites the mutable fields of `course`.
    pub fn apply_to(self, course: &mut Course) {
        course.title = self.title;
        course.description = Some(self.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_leaves_id_unassigned() {
        let author_id = AuthorID::new();
        let course = CourseForCreation {
            title: "Commandeering a Ship Without Getting Caught".into(),
            description: None,
        }
        .into_course(author_id);
        assert!(course.id.is_nil());
        assert_eq!(course.author_id, author_id);
    }

    #[test]
    fn update_replaces_title_and_description() {
        let mut course = Course {
            id: CourseID::new(),
            author_id: AuthorID::new(),
            title: "Old".into(),
            description: None,
        };
        CourseForUpdate {
            title: "New".into(),
            description: "Rewritten".into(),
        }
        .apply_to(&mut course);
        assert_eq!(course.title, "New");
        assert_eq!(course.description.as_deref(), Some("Rewritten"));
    }
}
