//! Shared utility functions.
//!
//! # Modules
//!
//! - [`string_utils`] - string predicates used by the validation rules

pub mod string_utils;
