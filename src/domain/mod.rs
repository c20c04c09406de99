//! # Domain Module
//!
//! Request DTOs of the psychosocial risk battery person management slice.

pub mod dto;

pub use dto::*;
