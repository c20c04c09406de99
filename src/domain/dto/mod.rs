//! # Data Transfer Objects
//!
//! Wire-level request types. DTOs carry raw client input, including blank
//! or missing values, so validation can report every problem back to the
//! caller.

pub mod persons;

pub use persons::*;
