//! # String utilities
//!
//! Small string predicates shared by the validation rules.

/// Returns `true` when `value` is empty or contains only whitespace.
///
/// # Examples
/// ```rust,ignore
/// use crate::utils::string_utils::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank(" \t\n"));
/// assert!(!is_blank(" a "));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// `None` counts as blank.
pub fn is_absent_or_blank(value: Option<&str>) -> bool {
    value.is_none_or(is_blank)
}
