//! # Configuration Module
//!
//! Environment-variable based settings. Values can come from the process
//! environment or from a profile `.env` file loaded at startup.
//!
//! ## Module layout
//!
//! - [`validation_config`] - birth-year plausibility bounds
//! - [`signal_config`] - business-rule signaling policy
//!
//! ## Environment variables
//!
//! ```bash
//! # Birth year plausibility (ages, inclusive)
//! export BIRTH_YEAR_MIN_AGE="14"
//! export BIRTH_YEAR_MAX_AGE="100"
//!
//! # placeholder (default) or raise
//! export BUSINESS_RULE_SIGNAL="placeholder"
//! ```
//!
//! Invalid values never abort startup; they fall back to the defaults with
//! a warning.

pub mod signal_config;
pub mod validation_config;

pub use signal_config::*;
pub use validation_config::*;
