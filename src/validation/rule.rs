//! Data-driven rule pipeline.
//!
//! A [`RuleSet`] is an ordered table of [`Rule`]s. Each rule names the field
//! it guards, the phase it belongs to and the message key reported when its
//! check fails.
//!
//! ## Evaluation order
//!
//! ```text
//! presence + ungated rules ──► any presence failure? ──yes──► report (presence + ungated)
//!                                        │
//!                                        no
//!                                        ▼
//!                              format rules ──► report (format + ungated)
//! ```
//!
//! Format rules are never evaluated once a presence rule has failed, so a
//! blank field cannot also report a format violation. Ungated rules are
//! evaluated exactly once per call and reported with whichever phase is
//! active. Violations always come out in the table's declaration order.

use crate::validation::birth_year::BirthYearRule;
use crate::validation::outcome::{ValidationOutcome, Violation};

/// Tier a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not-null / not-blank checks. Evaluated first.
    Presence,
    /// Length, character-set and whitespace checks. Evaluated only when no
    /// presence rule failed.
    Format,
    /// Evaluated on every call regardless of gating.
    Ungated,
}

/// Collaborators a rule may consult while checking a value.
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    pub birth_year: &'a dyn BirthYearRule,
}

impl<'a> RuleContext<'a> {
    pub fn new(birth_year: &'a dyn BirthYearRule) -> Self {
        Self { birth_year }
    }
}

type Check<T> = Box<dyn Fn(&T, &RuleContext<'_>) -> bool + Send + Sync>;

/// One validation rule. `check` returns `true` when the value is acceptable.
pub struct Rule<T> {
    pub field: &'static str,
    pub phase: Phase,
    pub message: &'static str,
    check: Check<T>,
}

impl<T> Rule<T> {
    pub fn new<F>(field: &'static str, phase: Phase, message: &'static str, check: F) -> Self
    where
        F: Fn(&T, &RuleContext<'_>) -> bool + Send + Sync + 'static,
    {
        Self {
            field,
            phase,
            message,
            check: Box::new(check),
        }
    }

    pub fn holds(&self, target: &T, context: &RuleContext<'_>) -> bool {
        (self.check)(target, context)
    }

    fn violation(&self) -> Violation {
        Violation::new(self.field, self.message)
    }
}

impl<T> std::fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("field", &self.field)
            .field("phase", &self.phase)
            .field("message", &self.message)
            .finish()
    }
}

/// Ordered rule table for one request type.
#[derive(Debug)]
pub struct RuleSet<T> {
    rules: Vec<Rule<T>>,
}

impl<T> Default for RuleSet<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T> RuleSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule<F>(mut self, field: &'static str, phase: Phase, message: &'static str, check: F) -> Self
    where
        F: Fn(&T, &RuleContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule::new(field, phase, message, check));
        self
    }

    pub fn presence<F>(self, field: &'static str, message: &'static str, check: F) -> Self
    where
        F: Fn(&T, &RuleContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.rule(field, Phase::Presence, message, check)
    }

    pub fn format<F>(self, field: &'static str, message: &'static str, check: F) -> Self
    where
        F: Fn(&T, &RuleContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.rule(field, Phase::Format, message, check)
    }

    pub fn ungated<F>(self, field: &'static str, message: &'static str, check: F) -> Self
    where
        F: Fn(&T, &RuleContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.rule(field, Phase::Ungated, message, check)
    }

    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs the two-phase pipeline against `target`.
    pub fn evaluate(&self, target: &T, context: &RuleContext<'_>) -> ValidationOutcome {
        let mut failed = self.failing(target, context, |phase| phase != Phase::Format);
        let presence_failed = failed.iter().any(|(_, rule)| rule.phase == Phase::Presence);

        if !presence_failed {
            // only ungated failures are in `failed` at this point
            failed.extend(self.failing(target, context, |phase| phase == Phase::Format));
            failed.sort_by_key(|(index, _)| *index);
        }

        ValidationOutcome::from_violations(failed.into_iter().map(|(_, rule)| rule.violation()).collect())
    }

    fn failing<'s>(
        &'s self,
        target: &T,
        context: &RuleContext<'_>,
        include: impl Fn(Phase) -> bool,
    ) -> Vec<(usize, &'s Rule<T>)> {
        self.rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| include(rule.phase))
            .filter(|(_, rule)| !rule.holds(target, context))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct Sample {
        name: Option<String>,
        code: Option<String>,
    }

    fn any_year_rule() -> impl BirthYearRule {
        |_year: i32| true
    }

    fn sample_rules() -> RuleSet<Sample> {
        RuleSet::<Sample>::new()
            .presence("name", "name.notBlank", |s: &Sample, _| {
                s.name.as_deref().is_some_and(|v| !v.trim().is_empty())
            })
            .format("name", "name.size", |s: &Sample, _| {
                s.name.as_deref().is_none_or(|v| v.len() <= 5)
            })
            .presence("code", "code.notBlank", |s: &Sample, _| s.code.is_some())
            .format("code", "code.digits", |s: &Sample, _| {
                s.code.as_deref().is_none_or(|v| v.chars().all(|c| c.is_ascii_digit()))
            })
    }

    #[test]
    fn test_presence_failure_skips_format_phase() {
        let year_rule = any_year_rule();
        let context = RuleContext::new(&year_rule);
        let sample = Sample {
            name: Some("   ".to_string()),
            code: Some("abc".to_string()),
        };

        let outcome = sample_rules().evaluate(&sample, &context);

        assert_eq!(outcome.violations(), &[Violation::new("name", "name.notBlank")]);
    }

    #[test]
    fn test_format_phase_reports_in_declaration_order() {
        let year_rule = any_year_rule();
        let context = RuleContext::new(&year_rule);
        let sample = Sample {
            name: Some("too long".to_string()),
            code: Some("x1".to_string()),
        };

        let outcome = sample_rules().evaluate(&sample, &context);

        assert_eq!(
            outcome.violations(),
            &[
                Violation::new("name", "name.size"),
                Violation::new("code", "code.digits"),
            ]
        );
    }

    #[test]
    fn test_format_checks_not_called_when_presence_fails() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let rules = RuleSet::<Sample>::new()
            .presence("name", "name.notBlank", |s: &Sample, _| s.name.is_some())
            .format("name", "name.size", move |_: &Sample, _| {
                counter.fetch_add(1, Ordering::SeqCst);
                true
            });
        let year_rule = any_year_rule();
        let context = RuleContext::new(&year_rule);

        rules.evaluate(&Sample::default(), &context);

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_ungated_rule_runs_once_in_either_phase() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let rules = RuleSet::<Sample>::new()
            .presence("name", "name.notBlank", |s: &Sample, _| s.name.is_some())
            .ungated("code", "code.rejected", move |_: &Sample, _| {
                counter.fetch_add(1, Ordering::SeqCst);
                false
            });
        let year_rule = any_year_rule();
        let context = RuleContext::new(&year_rule);

        let blank = rules.evaluate(&Sample::default(), &context);
        assert_eq!(
            blank.violations(),
            &[
                Violation::new("name", "name.notBlank"),
                Violation::new("code", "code.rejected"),
            ]
        );

        let named = Sample {
            name: Some("ok".to_string()),
            ..Sample::default()
        };
        let present = rules.evaluate(&named, &context);
        assert_eq!(present.violations(), &[Violation::new("code", "code.rejected")]);

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_empty_rule_set_is_valid() {
        let rules = RuleSet::<Sample>::new();
        let year_rule = any_year_rule();
        let context = RuleContext::new(&year_rule);

        assert!(rules.is_empty());
        assert!(rules.evaluate(&Sample::default(), &context).is_valid());
    }
}
