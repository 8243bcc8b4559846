//! The uniform response envelope wrapping every API result.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

/// One field-level error, surfaced on validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Envelope carried by every body-bearing response:
/// `{status, message, data?, error?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ApiStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Vec<FieldError>>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ApiStatus::Success,
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Success without a payload (e.g. deletions).
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::Success,
            message: message.into(),
            data: None,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::Error,
            message: message.into(),
            data: None,
            error: None,
        }
    }

    pub fn error_with_fields(message: impl Into<String>, error: Vec<FieldError>) -> Self {
        Self {
            status: ApiStatus::Error,
            message: message.into(),
            data: None,
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::success("User created", json!({"id": 1})))
            .unwrap();
        assert_eq!(
            body,
            json!({"status": "success", "message": "User created", "data": {"id": 1}})
        );
    }

    #[test]
    fn error_envelope_omits_data() {
        let body = serde_json::to_value(ApiResponse::error("Resource not found")).unwrap();
        assert_eq!(
            body,
            json!({"status": "error", "message": "Resource not found"})
        );
    }

    #[test]
    fn validation_envelope_carries_field_errors() {
        let body = serde_json::to_value(ApiResponse::error_with_fields(
            "Validation failed",
            vec![FieldError {
                field: "email".to_string(),
                message: "must be a valid email address".to_string(),
            }],
        ))
        .unwrap();
        assert_eq!(body["error"][0]["field"], "email");
        assert_eq!(body["status"], "error");
    }
}
