//! Validation settings.

use std::env;

/// Age bounds used by the default birth-year plausibility rule.
pub struct BirthYearConfig;

impl BirthYearConfig {
    pub const DEFAULT_MIN_AGE: u32 = 14;
    pub const DEFAULT_MAX_AGE: u32 = 100;

    /// Minimum age in years. Default: 14
    ///
    /// # Environment Variables
    ///
    /// - `BIRTH_YEAR_MIN_AGE`
    pub fn min_age() -> u32 {
        Self::age_bounds().0
    }

    /// Maximum age in years. Default: 100
    ///
    /// # Environment Variables
    ///
    /// - `BIRTH_YEAR_MAX_AGE`
    pub fn max_age() -> u32 {
        Self::age_bounds().1
    }

    /// `(min_age, max_age)` read from the environment.
    pub fn age_bounds() -> (u32, u32) {
        Self::age_bounds_from(
            env::var("BIRTH_YEAR_MIN_AGE").ok().as_deref(),
            env::var("BIRTH_YEAR_MAX_AGE").ok().as_deref(),
        )
    }

    /// Parses raw settings. Unparseable values fall back to their default;
    /// an inverted pair (`min > max`) falls back to both defaults.
    pub fn age_bounds_from(min_raw: Option<&str>, max_raw: Option<&str>) -> (u32, u32) {
        let min_age = parse_age("BIRTH_YEAR_MIN_AGE", min_raw, Self::DEFAULT_MIN_AGE);
        let max_age = parse_age("BIRTH_YEAR_MAX_AGE", max_raw, Self::DEFAULT_MAX_AGE);

        if min_age > max_age {
            log::warn!(
                "BIRTH_YEAR_MIN_AGE ({}) exceeds BIRTH_YEAR_MAX_AGE ({}), using defaults {}-{}",
                min_age,
                max_age,
                Self::DEFAULT_MIN_AGE,
                Self::DEFAULT_MAX_AGE
            );
            return (Self::DEFAULT_MIN_AGE, Self::DEFAULT_MAX_AGE);
        }

        (min_age, max_age)
    }
}

fn parse_age(name: &str, raw: Option<&str>, default: u32) -> u32 {
    match raw {
        None => default,
        Some(value) => value.trim().parse::<u32>().unwrap_or_else(|e| {
            log::warn!("{} parse failed ({}): {}. Using default {}", name, value, e, default);
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(BirthYearConfig::age_bounds_from(None, None), (14, 100));
    }

    #[test]
    fn test_custom_bounds() {
        assert_eq!(BirthYearConfig::age_bounds_from(Some("18"), Some(" 75 ")), (18, 75));
    }

    #[test]
    fn test_unparseable_value_falls_back() {
        assert_eq!(BirthYearConfig::age_bounds_from(Some("adult"), Some("90")), (14, 90));
        assert_eq!(BirthYearConfig::age_bounds_from(Some("-3"), None), (14, 100));
    }

    #[test]
    fn test_getters_match_age_bounds() {
        assert_eq!((BirthYearConfig::min_age(), BirthYearConfig::max_age()), BirthYearConfig::age_bounds());
    }

    #[test]
    fn test_inverted_bounds_fall_back_to_defaults() {
        assert_eq!(BirthYearConfig::age_bounds_from(Some("80"), Some("20")), (14, 100));
    }
}
