//! Person request validation and domain error signaling for the
//! psychosocial risk battery management backend.
//!
//! # Features
//!
//! - **Person DTOs**: create/update request payloads (camelCase JSON)
//! - **Two-phase validation**: presence rules first, format rules only when
//!   every presence rule passed
//! - **Pluggable birth-year rule**: plausibility decided by an injected
//!   collaborator
//! - **Error signal port**: tagged domain errors for not-found, duplicate,
//!   creation-failure and business-rule conditions
//! - **HTTP mapping**: every error type implements `actix_web::ResponseError`
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │   Inbound payload    │ ← JSON (excluded transport layer)
//! └──────────────────────┘
//!            │
//!            ▼
//! ┌──────────────────────┐
//! │  domain::dto::persons│ ← PersonCreateRequest / PersonUpdateRequest
//! └──────────────────────┘
//!            │ validate_with(&BirthYearRule)
//!            ▼
//! ┌──────────────────────┐
//! │      validation      │ ← ValidationOutcome (data, never an error)
//! └──────────────────────┘
//!            │ Valid
//!            ▼
//! ┌──────────────────────┐
//! │ business logic (ext.)│ ─► ports::ErrorSignal ─► adapters::ResultFormatter
//! └──────────────────────┘                              │
//!                                                       ▼
//!                                              errors::DomainError
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use asst_person_core::domain::PersonCreateRequest;
//! use asst_person_core::validation::RangeBirthYearRule;
//!
//! let request: PersonCreateRequest = serde_json::from_str(payload)?;
//! let outcome = request.validate_with(&RangeBirthYearRule::from_config());
//!
//! if !outcome.is_valid() {
//!     for violation in outcome.violations() {
//!         println!("{}: {}", violation.field, violation.message);
//!     }
//! }
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod utils;
pub mod validation;
