//! # Error Handling System
//!
//! Error types shared across the crate, built on `thiserror` and mapped to
//! HTTP responses through `actix_web::ResponseError`.
//!
//! - [`DomainError`] - conditions raised by the error signal port
//! - [`ErrorCode`] - structured discriminator attached to a condition
//! - [`AppError`] - application-level wrapper used at the boundary
//!
//! Validation violations are not errors: they are returned as
//! [`ValidationOutcome`](crate::validation::ValidationOutcome) data and only
//! become [`AppError::ValidationError`] when a caller chooses to reject the
//! request.

pub mod app_error;
pub mod domain_error;
pub mod error_code;

pub use app_error::{AppError, AppResult};
pub use domain_error::DomainError;
pub use error_code::ErrorCode;
