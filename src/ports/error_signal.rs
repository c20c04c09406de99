//! Error signal output port.
//!
//! Business logic reports domain-error conditions through this trait
//! instead of building error values itself. Every operation returns
//! `Err(..)`; the `Ok` type is [`Infallible`], so no value ever comes back
//! and `?` always leaves the calling function.
//!
//! ```rust,ignore
//! fn register(signal: &dyn ErrorSignal, exists: bool) -> Result<(), DomainError> {
//!     if exists {
//!         signal.signal_already_exists_with_code(
//!             ErrorCode::ENTITY_ALREADY_EXISTS,
//!             "person.alreadyExists",
//!         )?;
//!     }
//!     Ok(())
//! }
//! ```

use std::convert::Infallible;

use crate::errors::{DomainError, ErrorCode};

/// Result of a signal operation. Always `Err`.
pub type SignalResult = Result<Infallible, DomainError>;

/// Output port for raising domain-error conditions.
pub trait ErrorSignal: Send + Sync {
    /// Uniqueness conflict without a structured code.
    fn signal_already_exists(&self, message: &str) -> SignalResult;

    /// Uniqueness conflict carrying a machine-readable code.
    fn signal_already_exists_with_code(&self, code: ErrorCode, message: &str) -> SignalResult;

    fn signal_not_found(&self, message: &str) -> SignalResult;

    /// Business-rule violation. Implementations may leave this as a
    /// placeholder that reports `NotImplemented`.
    fn signal_business_rule_violation(&self, message: &str) -> SignalResult;

    fn signal_creation_failed(&self, message: &str) -> SignalResult;
}
