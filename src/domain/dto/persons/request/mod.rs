//! # Person request DTOs
//!
//! Inbound payloads for creating and updating evaluated persons. Both
//! deserialize from camelCase JSON and validate through the two-phase rule
//! pipeline in [`crate::validation`].
//!
//! | DTO | Identity fields | Used for |
//! |-----|-----------------|----------|
//! | [`PersonCreateRequest`] | yes | registering a person |
//! | [`PersonUpdateRequest`] | no | editing a registered person |

pub mod create_person;
pub mod update_person;

pub use create_person::PersonCreateRequest;
pub use update_person::PersonUpdateRequest;
