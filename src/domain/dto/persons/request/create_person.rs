//! # Person creation request DTO
//!
//! Payload used to register an evaluated person in the psychosocial risk
//! battery system.
//!
//! ## Validation rules
//!
//! ### `identificationNumber`
//! - Required, not blank
//! - 6-20 characters from `[a-zA-Z0-9-]`
//! - No leading or trailing whitespace
//!
//! ### `firstName` / `lastName`
//! - Required, not blank
//! - 1-80 characters: letters (including `ÁÉÍÓÚáéíóúÑñ`), digits and spaces
//! - No leading or trailing whitespace
//!
//! ### `birthYear`
//! - Required
//! - Must be plausible according to the configured [`BirthYearRule`]
//!
//! ### `email`
//! - Required, not blank
//! - 10-100 characters, `local@domain.tld` shape
//! - No leading or trailing whitespace
//!
//! ### `identificationTypeId` / `genderId`
//! - Required catalog ids
//!
//! Presence rules run first. Format rules only run when every presence rule
//! passed, so a blank field never also reports a format error.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use actix_web::{web, HttpResponse};
//! use validator::Validate;
//!
//! async fn create_person(
//!     payload: web::Json<PersonCreateRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate_with(&RangeBirthYearRule::from_config()).ensure_valid()?;
//!     // persistence happens elsewhere
//!     Ok(HttpResponse::Created().finish())
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::validation::person_rules;
use crate::validation::{BirthYearRule, RangeBirthYearRule, RuleContext, ValidationOutcome};

/// Request DTO for creating an evaluated person.
///
/// Every field is optional at the type level so that missing or `null`
/// JSON values reach the validator and are reported as violations instead
/// of failing deserialization.
///
/// # JSON example
///
/// ```json
/// {
///   "identificationNumber": "AB12345",
///   "firstName": "Ana",
///   "lastName": "Lopez",
///   "birthYear": 1990,
///   "email": "ana.lopez@example.com",
///   "identificationTypeId": 1,
///   "genderId": 1
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonCreateRequest {
    /// Identification document number (unique per person).
    pub identification_number: Option<String>,

    /// Given names.
    pub first_name: Option<String>,

    /// Surnames.
    pub last_name: Option<String>,

    /// Year of birth.
    pub birth_year: Option<i32>,

    /// Contact email.
    pub email: Option<String>,

    /// Selected identification type (e.g. 1 for national id, 2 for passport).
    pub identification_type_id: Option<i64>,

    /// Selected gender catalog id.
    pub gender_id: Option<i64>,
}

impl PersonCreateRequest {
    /// Validates the request using `birth_year` for the plausibility check.
    pub fn validate_with(&self, birth_year: &dyn BirthYearRule) -> ValidationOutcome {
        let outcome = person_rules::create_rules().evaluate(self, &RuleContext::new(birth_year));
        log::debug!(
            "Person create request validated: {} violation(s)",
            outcome.violations().len()
        );
        outcome
    }
}

impl Validate for PersonCreateRequest {
    /// Validates with the configured [`RangeBirthYearRule`].
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.validate_with(&RangeBirthYearRule::from_config()).into_result()
    }
}
