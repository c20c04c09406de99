//! Validation outcome types.
//!
//! Validation results are plain data: a request is either `Valid` or carries
//! the ordered list of violations of the phase that was active.

use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

use crate::errors::{AppError, AppResult};

/// A single failed rule.
///
/// `message` is a message-catalog key (e.g. `person.firstName.notBlank`),
/// never resolved text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: &'static str,
}

impl Violation {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Result of validating one request.
///
/// Serializes as `{"status":"valid"}` or
/// `{"status":"invalid","violations":[{"field":..,"message":..}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "violations", rename_all = "lowercase")]
pub enum ValidationOutcome {
    Valid,
    Invalid(Vec<Violation>),
}

impl ValidationOutcome {
    pub(crate) fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            ValidationOutcome::Valid
        } else {
            ValidationOutcome::Invalid(violations)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// Violations in report order. Empty when valid.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ValidationOutcome::Valid => &[],
            ValidationOutcome::Invalid(violations) => violations,
        }
    }

    /// Message keys reported for `field`, in report order.
    pub fn messages_for(&self, field: &str) -> Vec<&'static str> {
        self.violations()
            .iter()
            .filter(|violation| violation.field == field)
            .map(|violation| violation.message)
            .collect()
    }

    /// Converts into the `validator` crate's error map so handlers can keep
    /// the usual `payload.validate()?` flow.
    ///
    /// Each violation becomes a `ValidationError` whose code is the message
    /// key. Report order is kept per field.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(violations) => {
                let mut errors = ValidationErrors::new();
                for violation in violations {
                    errors.add(violation.field, ValidationError::new(violation.message));
                }
                Err(errors)
            }
        }
    }

    /// Same as [`into_result`](Self::into_result) but for the application
    /// error type.
    pub fn ensure_valid(self) -> AppResult<()> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(violations) => Err(AppError::ValidationError(violations)),
        }
    }
}
