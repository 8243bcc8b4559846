//! Domain-level error types.

use serde::Serialize;
use thiserror::Error;

use crate::ports::PasswordError;

/// A single field-level validation failure, rendered verbatim to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Domain errors - the closed taxonomy every service failure belongs to.
///
/// Each kind maps to exactly one HTTP status code; the boundary renders the
/// code and message without reclassifying the error.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("Validation failed")]
    Validation(Vec<FieldViolation>),

    #[error("{0}")]
    Internal(String),
}

impl DomainError {
    /// HTTP status code for this error kind.
    pub fn status_code(&self) -> u16 {
        match self {
            DomainError::BadRequest(_) => 400,
            DomainError::Unauthorized => 401,
            DomainError::Forbidden => 403,
            DomainError::NotFound(_) => 404,
            DomainError::Duplicate(_) => 409,
            DomainError::Validation(_) => 422,
            DomainError::Internal(_) => 500,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => DomainError::NotFound("Resource not found".to_string()),
            RepoError::Constraint(msg) => DomainError::Duplicate(msg),
            RepoError::Connection(msg) | RepoError::Query(msg) => DomainError::Internal(msg),
        }
    }
}

impl From<PasswordError> for DomainError {
    fn from(err: PasswordError) -> Self {
        DomainError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_expected_status_codes() {
        assert_eq!(DomainError::BadRequest(String::new()).status_code(), 400);
        assert_eq!(DomainError::Unauthorized.status_code(), 401);
        assert_eq!(DomainError::Forbidden.status_code(), 403);
        assert_eq!(DomainError::NotFound(String::new()).status_code(), 404);
        assert_eq!(DomainError::Duplicate(String::new()).status_code(), 409);
        assert_eq!(DomainError::Validation(Vec::new()).status_code(), 422);
        assert_eq!(DomainError::Internal(String::new()).status_code(), 500);
    }

    #[test]
    fn constraint_violations_surface_as_duplicates() {
        let err: DomainError = RepoError::Constraint("email taken".to_string()).into();
        assert!(matches!(err, DomainError::Duplicate(msg) if msg == "email taken"));
    }

    #[test]
    fn query_failures_surface_as_internal() {
        let err: DomainError = RepoError::Query("syntax error".to_string()).into();
        assert!(matches!(err, DomainError::Internal(_)));
    }
}
