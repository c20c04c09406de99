//! Default [`ErrorSignal`] adapter.
//!
//! Converts each signal into the matching [`DomainError`] variant. Shared
//! by every domain so business code stays independent of how errors are
//! represented.
//!
//! ## Business-rule signaling
//!
//! `signal_business_rule_violation` has two explicit behaviors selected by
//! [`BusinessRulePolicy`]:
//!
//! | Policy | Result |
//! |--------|--------|
//! | `Placeholder` (default) | `NotImplemented("signal_business_rule_violation")`, message ignored |
//! | `Raise` | `BusinessRuleViolation(message)` |

use crate::config::{BusinessRulePolicy, SignalConfig};
use crate::errors::{DomainError, ErrorCode};
use crate::ports::{ErrorSignal, SignalResult};

/// Operation name reported by the business-rule placeholder.
pub const BUSINESS_RULE_PLACEHOLDER: &str = "signal_business_rule_violation";

#[derive(Debug, Clone, Copy, Default)]
pub struct ResultFormatter {
    business_rule_policy: BusinessRulePolicy,
}

impl ResultFormatter {
    /// Adapter with the placeholder business-rule behavior.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(business_rule_policy: BusinessRulePolicy) -> Self {
        Self { business_rule_policy }
    }

    /// Adapter configured from `BUSINESS_RULE_SIGNAL`.
    pub fn from_config() -> Self {
        Self::configured(SignalConfig::business_rule_policy())
    }

    /// Adapter configured from a raw `BUSINESS_RULE_SIGNAL` value.
    pub fn from_policy_source(raw: Option<&str>) -> Self {
        Self::configured(SignalConfig::business_rule_policy_from(raw))
    }

    fn configured(policy: BusinessRulePolicy) -> Self {
        log::info!("Error signal adapter initialized (business rule policy: {})", policy);
        Self::with_policy(policy)
    }

    pub fn business_rule_policy(&self) -> BusinessRulePolicy {
        self.business_rule_policy
    }
}

impl ErrorSignal for ResultFormatter {
    fn signal_already_exists(&self, message: &str) -> SignalResult {
        log::debug!("Signaling AlreadyExists: {}", message);
        Err(DomainError::AlreadyExists {
            code: None,
            message: message.to_string(),
        })
    }

    fn signal_already_exists_with_code(&self, code: ErrorCode, message: &str) -> SignalResult {
        log::debug!("Signaling AlreadyExists [{}]: {}", code, message);
        Err(DomainError::AlreadyExists {
            code: Some(code),
            message: message.to_string(),
        })
    }

    fn signal_not_found(&self, message: &str) -> SignalResult {
        log::debug!("Signaling NotFound: {}", message);
        Err(DomainError::NotFound(message.to_string()))
    }

    fn signal_business_rule_violation(&self, message: &str) -> SignalResult {
        match self.business_rule_policy {
            BusinessRulePolicy::Placeholder => {
                log::warn!(
                    "{} is not implemented; business rule message dropped: {}",
                    BUSINESS_RULE_PLACEHOLDER,
                    message
                );
                Err(DomainError::NotImplemented(BUSINESS_RULE_PLACEHOLDER))
            }
            BusinessRulePolicy::Raise => {
                log::debug!("Signaling BusinessRuleViolation: {}", message);
                Err(DomainError::BusinessRuleViolation(message.to_string()))
            }
        }
    }

    fn signal_creation_failed(&self, message: &str) -> SignalResult {
        log::debug!("Signaling CreationFailed: {}", message);
        Err(DomainError::CreationFailed(message.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raised(result: SignalResult) -> DomainError {
        match result {
            Err(error) => error,
            Ok(never) => match never {},
        }
    }

    #[test]
    fn test_already_exists_without_code() {
        let error = raised(ResultFormatter::new().signal_already_exists("dup"));

        assert_eq!(
            error,
            DomainError::AlreadyExists {
                code: None,
                message: "dup".to_string()
            }
        );
        assert_eq!(error.code(), None);
    }

    #[test]
    fn test_already_exists_with_code() {
        let code = ErrorCode::new("PER-0001", "person.identificationNumber.alreadyExists");
        let error = raised(ResultFormatter::new().signal_already_exists_with_code(code.clone(), "dup"));

        assert_eq!(error.code(), Some(&code));
        assert_eq!(error.message(), "dup");
    }

    #[test]
    fn test_not_found() {
        let error = raised(ResultFormatter::new().signal_not_found("gender 7"));

        assert_eq!(error, DomainError::NotFound("gender 7".to_string()));
    }

    #[test]
    fn test_creation_failed() {
        let error = raised(ResultFormatter::new().signal_creation_failed("person"));

        assert_eq!(error, DomainError::CreationFailed("person".to_string()));
    }

    #[test]
    fn test_business_rule_placeholder_ignores_message() {
        let formatter = ResultFormatter::new();

        let first = raised(formatter.signal_business_rule_violation("battery closed"));
        let second = raised(formatter.signal_business_rule_violation(""));

        assert_eq!(first, DomainError::NotImplemented(BUSINESS_RULE_PLACEHOLDER));
        assert_eq!(first, second);
    }

    #[test]
    fn test_business_rule_raise_policy() {
        let formatter = ResultFormatter::with_policy(BusinessRulePolicy::Raise);

        let error = raised(formatter.signal_business_rule_violation("battery closed"));

        assert_eq!(error, DomainError::BusinessRuleViolation("battery closed".to_string()));
    }

    #[test]
    fn test_policy_source_selects_business_rule_behavior() {
        let placeholder = ResultFormatter::from_policy_source(None);
        let raising = ResultFormatter::from_policy_source(Some("raise"));

        assert_eq!(placeholder.business_rule_policy(), BusinessRulePolicy::Placeholder);
        assert_eq!(
            raised(placeholder.signal_business_rule_violation("battery closed")),
            DomainError::NotImplemented(BUSINESS_RULE_PLACEHOLDER)
        );
        assert_eq!(raising.business_rule_policy(), BusinessRulePolicy::Raise);
        assert_eq!(
            raised(raising.signal_business_rule_violation("battery closed")),
            DomainError::BusinessRuleViolation("battery closed".to_string())
        );
    }

    #[test]
    fn test_unknown_policy_source_keeps_placeholder() {
        let formatter = ResultFormatter::from_policy_source(Some("throw"));

        assert_eq!(formatter.business_rule_policy(), BusinessRulePolicy::Placeholder);
    }

    #[test]
    fn test_from_config_follows_signal_config() {
        assert_eq!(
            ResultFormatter::from_config().business_rule_policy(),
            SignalConfig::business_rule_policy()
        );
    }

    #[test]
    fn test_question_mark_leaves_caller() {
        fn register(signal: &dyn ErrorSignal, duplicated: bool) -> Result<&'static str, DomainError> {
            if duplicated {
                signal.signal_already_exists_with_code(ErrorCode::ENTITY_ALREADY_EXISTS, "duplicated")?;
            }
            Ok("registered")
        }

        let formatter = ResultFormatter::new();

        assert_eq!(register(&formatter, false), Ok("registered"));
        assert!(matches!(
            register(&formatter, true),
            Err(DomainError::AlreadyExists { code: Some(_), .. })
        ));
    }
}
