//! Application-level error type.
//!
//! Wraps validation failures and domain errors together with the I/O and
//! parsing failures of the command-line entry point.
//!
//! ## HTTP mapping
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ValidationError` | 400 Bad Request |
//! | `DomainError` | see [`DomainError`] |
//! | `UsageError` | 400 Bad Request |
//! | `IoError` / `JsonError` | 500 Internal Server Error |

use actix_web::ResponseError;
use actix_web::http::StatusCode;
use thiserror::Error;

use crate::errors::DomainError;
use crate::validation::Violation;

#[derive(Error, Debug)]
pub enum AppError {
    /// Request failed validation. Carries the violations in report order.
    #[error("Validation error: {} violation(s)", .0.len())]
    ValidationError(Vec<Violation>),

    /// Business-rule condition raised through the error signal port.
    #[error(transparent)]
    DomainError(#[from] DomainError),

    /// Bad command-line invocation.
    #[error("Usage error: {0}")]
    UsageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::UsageError(_) => StatusCode::BAD_REQUEST,
            AppError::DomainError(e) => e.status_code(),
            AppError::IoError(_) | AppError::JsonError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        match self {
            AppError::DomainError(e) => e.error_response(),
            AppError::ValidationError(violations) => actix_web::HttpResponse::build(self.status_code())
                .json(serde_json::json!({
                    "error": self.to_string(),
                    "violations": violations,
                })),
            _ => actix_web::HttpResponse::build(self.status_code()).json(serde_json::json!({
                "error": self.to_string()
            })),
        }
    }
}

/// Convenience alias for `Result<T, AppError>`.
pub type AppResult<T> = Result<T, AppError>;
