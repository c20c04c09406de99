//! Error signal settings.

use std::env;
use std::fmt;
use std::str::FromStr;

/// What `signal_business_rule_violation` produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BusinessRulePolicy {
    /// Returns `DomainError::NotImplemented`, whatever the message.
    #[default]
    Placeholder,
    /// Returns `DomainError::BusinessRuleViolation(message)`.
    Raise,
}

impl FromStr for BusinessRulePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "placeholder" => Ok(BusinessRulePolicy::Placeholder),
            "raise" => Ok(BusinessRulePolicy::Raise),
            other => Err(format!("unknown business rule policy '{}'", other)),
        }
    }
}

impl fmt::Display for BusinessRulePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusinessRulePolicy::Placeholder => f.write_str("placeholder"),
            BusinessRulePolicy::Raise => f.write_str("raise"),
        }
    }
}

/// Error signal adapter settings.
pub struct SignalConfig;

impl SignalConfig {
    /// Business-rule signaling policy. Default: `placeholder`
    ///
    /// # Environment Variables
    ///
    /// - `BUSINESS_RULE_SIGNAL`: `placeholder` or `raise`
    pub fn business_rule_policy() -> BusinessRulePolicy {
        Self::business_rule_policy_from(env::var("BUSINESS_RULE_SIGNAL").ok().as_deref())
    }

    pub fn business_rule_policy_from(raw: Option<&str>) -> BusinessRulePolicy {
        match raw {
            None => BusinessRulePolicy::default(),
            Some(value) => value.parse().unwrap_or_else(|e| {
                log::warn!("BUSINESS_RULE_SIGNAL: {}. Using placeholder", e);
                BusinessRulePolicy::default()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_from_string() {
        assert_eq!("raise".parse::<BusinessRulePolicy>(), Ok(BusinessRulePolicy::Raise));
        assert_eq!(" Placeholder ".parse::<BusinessRulePolicy>(), Ok(BusinessRulePolicy::Placeholder));
        assert!("throw".parse::<BusinessRulePolicy>().is_err());
    }

    #[test]
    fn test_policy_defaults_to_placeholder() {
        assert_eq!(SignalConfig::business_rule_policy_from(None), BusinessRulePolicy::Placeholder);
        assert_eq!(
            SignalConfig::business_rule_policy_from(Some("unknown")),
            BusinessRulePolicy::Placeholder
        );
        assert_eq!(SignalConfig::business_rule_policy_from(Some("RAISE")), BusinessRulePolicy::Raise);
    }

    #[test]
    fn test_policy_display_round_trips() {
        for policy in [BusinessRulePolicy::Placeholder, BusinessRulePolicy::Raise] {
            assert_eq!(policy.to_string().parse::<BusinessRulePolicy>(), Ok(policy));
        }
    }
}
