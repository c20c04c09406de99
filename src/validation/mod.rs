//! # Validation Module
//!
//! Two-phase, data-driven validation of inbound person requests.
//!
//! ## Module layout
//!
//! - [`rule`] - `Rule` / `RuleSet` pipeline and phase gating
//! - [`outcome`] - `ValidationOutcome` and `Violation`
//! - [`birth_year`] - `BirthYearRule` collaborator and the range default
//! - [`person_rules`] - rule tables and message keys for person requests
//!
//! ## Phases
//!
//! | Phase | Rules | Evaluated |
//! |-------|-------|-----------|
//! | `Presence` | not null / not blank | always |
//! | `Format` | length, character set, surrounding whitespace | only if every presence rule passed |
//! | `Ungated` | birth-year plausibility | always, reported with the active phase |
//!
//! Validation never fails with an error; violations are returned as data
//! and their messages are catalog keys, not localized text.

pub mod birth_year;
pub mod outcome;
pub mod person_rules;
pub mod rule;

pub use birth_year::{BirthYearRule, RangeBirthYearRule};
pub use outcome::{ValidationOutcome, Violation};
pub use rule::{Phase, Rule, RuleContext, RuleSet};
