//! Structured error codes.
//!
//! An [`ErrorCode`] is attached to a raised condition when callers need to
//! tell failures apart without parsing the human-readable message.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Machine-readable error discriminator.
///
/// `code` is stable across releases; `message_key` points into the message
/// catalog for the generic description of the code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode {
    code: Cow<'static, str>,
    message_key: Cow<'static, str>,
}

impl ErrorCode {
    pub const ENTITY_NOT_FOUND: ErrorCode = ErrorCode::from_static("GC-0001", "error.entity.notFound");
    pub const ENTITY_ALREADY_EXISTS: ErrorCode =
        ErrorCode::from_static("GC-0002", "error.entity.alreadyExists");
    pub const ENTITY_CREATION_FAILED: ErrorCode =
        ErrorCode::from_static("GC-0003", "error.entity.creationFailed");
    pub const BUSINESS_RULE_VIOLATION: ErrorCode =
        ErrorCode::from_static("GC-0004", "error.businessRule.violated");

    pub const fn from_static(code: &'static str, message_key: &'static str) -> Self {
        Self {
            code: Cow::Borrowed(code),
            message_key: Cow::Borrowed(message_key),
        }
    }

    pub fn new(code: impl Into<Cow<'static, str>>, message_key: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message_key: message_key.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message_key(&self) -> &str {
        &self.message_key
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
