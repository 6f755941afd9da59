use thiserror::Error;

use crate::mapping::ShapePair;

/// Errors raised while mapping, sorting, shaping or paging a resource
/// collection.
///
/// Variants split into two families. Client-correctable errors come from a
/// request that references something that does not exist and are surfaced
/// as a bad request; see [`QueryError::is_client_error`]. Everything else is
/// a configuration or integrity defect that should never be reached by a
/// well-behaved orchestrator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Cannot find exact property mapping for {0}")]
    MappingNotFound(ShapePair),

    #[error("Property mapping for {0} is already registered")]
    DuplicateMapping(ShapePair),

    #[error("Invalid property mapping: {0}")]
    InvalidMapping(String),

    #[error("Mapping registry has already been installed")]
    RegistryAlreadyInstalled,

    #[error("Mapping registry has not been installed")]
    RegistryNotInstalled,

    #[error("Key mapping for {property} is missing")]
    UnknownSortField { property: String },

    #[error("Sort clause '{order_by}' references an unmapped property")]
    InvalidSortRequest { order_by: String },

    #[error("Property {field} was not found on {record}")]
    UnknownField { field: String, record: &'static str },

    #[error(
        "Invalid pagination parameters: page number {page_number} and page size {page_size} must both be positive"
    )]
    InvalidPaginationParams { page_number: i64, page_size: i64 },

    #[error("Invalid identifier list: {0}")]
    InvalidIdList(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl QueryError {
    /// Whether the caller can fix this error by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            QueryError::UnknownField { .. }
                | QueryError::InvalidSortRequest { .. }
                | QueryError::InvalidPaginationParams { .. }
                | QueryError::InvalidIdList(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrity_errors_are_not_client_errors() {
        let err = QueryError::UnknownSortField {
            property: "mainCategory".into(),
        };
        assert!(!err.is_client_error());
        assert_eq!(err.to_string(), "Key mapping for mainCategory is missing");
        assert!(!QueryError::RegistryNotInstalled.is_client_error());
    }

    #[test]
    fn request_errors_are_client_errors() {
        let err = QueryError::UnknownField {
            field: "shoeSize".into(),
            record: "AuthorDto",
        };
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Property shoeSize was not found on AuthorDto");

        let err = QueryError::InvalidPaginationParams {
            page_number: 0,
            page_size: 10,
        };
        assert!(err.is_client_error());
    }
}
