use crate::error::ModelError;
use std::str::FromStr;
use uuid::Uuid;

/// Strongly typed ID for authors
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AuthorID(pub Uuid);

impl Default for AuthorID {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthorID {
    pub fn new() -> Self {
        AuthorID(Uuid::now_v7())
    }

    pub fn from_string(id: &str) -> Result<Self, ModelError> {
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidId(
                "Author ID cannot be empty".to_string(),
            ));
        }
        Ok(AuthorID(Uuid::parse_str(trimmed)?))
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for AuthorID {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for AuthorID {
    fn from(value: Uuid) -> Self {
        AuthorID(value)
    }
}

impl FromStr for AuthorID {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl std::fmt::Display for AuthorID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed ID for courses
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CourseID(pub Uuid);

impl Default for CourseID {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseID {
    pub fn new() -> Self {
        CourseID(Uuid::now_v7())
    }

    pub fn from_string(id: &str) -> Result<Self, ModelError> {
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidId(
                "Course ID cannot be empty".to_string(),
            ));
        }
        Ok(CourseID(Uuid::parse_str(trimmed)?))
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for CourseID {
    fn from(value: Uuid) -> Self {
        CourseID(value)
    }
}

impl FromStr for CourseID {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl std::fmt::Display for CourseID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_id_parses_trimmed_input() {
        let raw = "  5b3621c0-7b12-4e80-9c8b-3398cba7ee05 ";
        let id: AuthorID = raw.parse().unwrap();
        assert_eq!(id.to_string(), raw.trim());
    }

    #[test]
    fn empty_ids_are_rejected() {
        assert!(AuthorID::from_string("   ").is_err());
        assert!(CourseID::from_string("").is_err());
        assert!(CourseID::from_string("not-a-uuid").is_err());
    }
}
