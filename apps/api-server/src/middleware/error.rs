//! Error boundary - renders every failure as the response envelope.

use std::fmt;

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{http::StatusCode, HttpRequest, HttpResponse, ResponseError};

use blog_core::error::{DomainError, FieldViolation};
use blog_shared::{ApiResponse, FieldError};

/// Application-level error. Wraps the domain taxonomy so each kind renders
/// with its own status code and message; nothing is reclassified on the way
/// out except unrecognized internals, which are logged and masked.
#[derive(Debug)]
pub struct AppError(pub DomainError);

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let body = match &self.0 {
            DomainError::Validation(violations) => ApiResponse::error_with_fields(
                "Validation failed",
                violations.iter().map(field_error).collect(),
            ),
            DomainError::Internal(detail) => {
                // Never leak internal detail to the caller.
                tracing::error!("Internal error: {detail}");
                ApiResponse::error("Internal server error")
            }
            other => ApiResponse::error(other.to_string()),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

fn field_error(violation: &FieldViolation) -> FieldError {
    FieldError {
        field: violation.field.clone(),
        message: violation.message.clone(),
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

// Extractor failures (malformed JSON, bad path/query types) render as the
// same 422 envelope the original request-validation layer produced.

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    validation_error("body", err.to_string())
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    validation_error("query", err.to_string())
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    validation_error("path", err.to_string())
}

fn validation_error(field: &str, message: String) -> actix_web::Error {
    AppError(DomainError::Validation(vec![FieldViolation::new(
        field, message,
    )]))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        let cases = [
            (DomainError::BadRequest("x".into()), 400),
            (DomainError::NotFound("x".into()), 404),
            (DomainError::Duplicate("x".into()), 409),
            (DomainError::Validation(Vec::new()), 422),
            (DomainError::Internal("x".into()), 500),
        ];
        for (err, code) in cases {
            assert_eq!(AppError(err).status_code().as_u16(), code);
        }
    }
}
