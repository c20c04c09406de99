//! # Output Adapters
//!
//! Implementations of the traits in [`crate::ports`].

pub mod result_formatter;

pub use result_formatter::{BUSINESS_RULE_PLACEHOLDER, ResultFormatter};
