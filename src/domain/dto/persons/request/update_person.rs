//! # Person update request DTO
//!
//! Identity fields (`identificationNumber`, `identificationTypeId`) cannot
//! change after creation, so they are not part of this payload. The other
//! fields follow the same rules as [`PersonCreateRequest`](super::PersonCreateRequest).

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::validation::person_rules;
use crate::validation::{BirthYearRule, RangeBirthYearRule, RuleContext, ValidationOutcome};

/// Request DTO for updating an evaluated person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonUpdateRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_year: Option<i32>,
    pub email: Option<String>,
    pub gender_id: Option<i64>,
}

impl PersonUpdateRequest {
    pub fn validate_with(&self, birth_year: &dyn BirthYearRule) -> ValidationOutcome {
        let outcome = person_rules::update_rules().evaluate(self, &RuleContext::new(birth_year));
        log::debug!(
            "Person update request validated: {} violation(s)",
            outcome.violations().len()
        );
        outcome
    }
}

impl Validate for PersonUpdateRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.validate_with(&RangeBirthYearRule::from_config()).into_result()
    }
}
