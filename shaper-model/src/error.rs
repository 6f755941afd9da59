use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug)]
pub enum ModelError {
    InvalidId(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidId(msg) => write!(f, "invalid id: {msg}"),
        }
    }
}

impl std::error::Error for ModelError {}

impl From<uuid::Error> for ModelError {
    fn from(err: uuid::Error) -> Self {
        ModelError::InvalidId(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
