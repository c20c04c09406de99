//! Domain error conditions raised through the
//! [`ErrorSignal`](crate::ports::ErrorSignal) output port.
//!
//! ## HTTP mapping
//!
//! | DomainError | HTTP Status |
//! |-------------|-------------|
//! | `AlreadyExists` | 409 Conflict |
//! | `NotFound` | 404 Not Found |
//! | `BusinessRuleViolation` | 409 Conflict |
//! | `CreationFailed` | 500 Internal Server Error |
//! | `NotImplemented` | 501 Not Implemented |

use actix_web::ResponseError;
use actix_web::http::StatusCode;
use thiserror::Error;

use crate::errors::ErrorCode;

/// Business-level failure with its payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Uniqueness conflict, optionally discriminated by a structured code.
    #[error("Entity already exists: {message}")]
    AlreadyExists {
        code: Option<ErrorCode>,
        message: String,
    },

    /// A required entity is missing.
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Materializing a new entity failed.
    #[error("Entity creation failed: {0}")]
    CreationFailed(String),

    /// A business rule was violated.
    #[error("Business rule violation: {0}")]
    BusinessRuleViolation(String),

    /// Programmer error: the named operation has no implementation.
    /// Not meant to reach production callers.
    #[error("Unimplemented operation '{0}'")]
    NotImplemented(&'static str),
}

impl DomainError {
    /// Structured code, when one was attached.
    pub fn code(&self) -> Option<&ErrorCode> {
        match self {
            DomainError::AlreadyExists { code, .. } => code.as_ref(),
            _ => None,
        }
    }

    /// The caller-supplied message, or the operation name for
    /// `NotImplemented`.
    pub fn message(&self) -> &str {
        match self {
            DomainError::AlreadyExists { message, .. } => message,
            DomainError::NotFound(message)
            | DomainError::CreationFailed(message)
            | DomainError::BusinessRuleViolation(message) => message,
            DomainError::NotImplemented(operation) => operation,
        }
    }
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        match self {
            DomainError::AlreadyExists { .. } => StatusCode::CONFLICT,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::BusinessRuleViolation(_) => StatusCode::CONFLICT,
            DomainError::CreationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DomainError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
        }
    }

    /// `{"error": "..."}`, plus `"code"` when a structured code is attached.
    fn error_response(&self) -> actix_web::HttpResponse {
        let mut body = serde_json::json!({ "error": self.to_string() });
        if let Some(code) = self.code() {
            body["code"] = serde_json::json!(code.code());
        }

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_response() {
        let error = DomainError::AlreadyExists {
            code: Some(ErrorCode::ENTITY_ALREADY_EXISTS),
            message: "person AB12345 already registered".to_string(),
        };

        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
        assert_eq!(error.code(), Some(&ErrorCode::ENTITY_ALREADY_EXISTS));
    }

    #[test]
    fn test_not_found_response() {
        let error = DomainError::NotFound("gender 9".to_string());

        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(error.message(), "gender 9");
    }

    #[test]
    fn test_creation_failed_response() {
        let error = DomainError::CreationFailed("insert rejected".to_string());

        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_business_rule_violation_response() {
        let error = DomainError::BusinessRuleViolation("battery already closed".to_string());

        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_not_implemented_response() {
        let error = DomainError::NotImplemented("signal_business_rule_violation");

        assert_eq!(error.error_response().status(), StatusCode::NOT_IMPLEMENTED);
        assert_eq!(
            error.to_string(),
            "Unimplemented operation 'signal_business_rule_violation'"
        );
    }
}
