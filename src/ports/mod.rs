//! # Output Ports
//!
//! Traits the business layer depends on; concrete implementations live in
//! [`crate::adapters`].

pub mod error_signal;

pub use error_signal::{ErrorSignal, SignalResult};
