//! Person DTOs.

pub mod request;

pub use request::*;
