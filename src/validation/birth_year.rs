//! Birth-year plausibility collaborator.
//!
//! The validator does not decide what a plausible birth year is. It asks a
//! [`BirthYearRule`] once per non-null `birthYear`. Closures can be used
//! directly:
//!
//! ```rust,ignore
//! let adults_only = |year: i32| year <= 2008;
//! let outcome = request.validate_with(&adults_only);
//! ```

use chrono::Datelike;

use crate::config::BirthYearConfig;

/// Predicate deciding whether a birth year is acceptable.
pub trait BirthYearRule: Send + Sync {
    fn is_plausible(&self, year: i32) -> bool;
}

impl<F> BirthYearRule for F
where
    F: Fn(i32) -> bool + Send + Sync,
{
    fn is_plausible(&self, year: i32) -> bool {
        self(year)
    }
}

/// Accepts years that put the person between `min_age` and `max_age`
/// years old in `current_year`, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeBirthYearRule {
    min_age: u32,
    max_age: u32,
    current_year: i32,
}

impl RangeBirthYearRule {
    pub fn new(min_age: u32, max_age: u32, current_year: i32) -> Self {
        Self {
            min_age,
            max_age,
            current_year,
        }
    }

    /// Builds the rule from `BIRTH_YEAR_MIN_AGE` / `BIRTH_YEAR_MAX_AGE` and
    /// the local calendar year.
    pub fn from_config() -> Self {
        let (min_age, max_age) = BirthYearConfig::age_bounds();
        Self::new(min_age, max_age, chrono::Local::now().year())
    }

    pub fn earliest_year(&self) -> i32 {
        self.current_year.saturating_sub_unsigned(self.max_age)
    }

    pub fn latest_year(&self) -> i32 {
        self.current_year.saturating_sub_unsigned(self.min_age)
    }
}

impl BirthYearRule for RangeBirthYearRule {
    fn is_plausible(&self, year: i32) -> bool {
        (self.earliest_year()..=self.latest_year()).contains(&year)
    }
}
