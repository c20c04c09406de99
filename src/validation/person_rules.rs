//! Rule tables for person create/update requests.
//!
//! Tables are built once and shared process-wide. Field order follows the
//! request declaration order, which is also the report order:
//!
//! | field | presence | format |
//! |-------|----------|--------|
//! | `identificationNumber` (create) | not blank | 6-20 chars, `[a-zA-Z0-9-]`, no surrounding whitespace |
//! | `firstName` | not blank | 1-80 chars, letters (incl. accented, ñ) / digits / spaces, no surrounding whitespace |
//! | `lastName` | not blank | same as `firstName` |
//! | `birthYear` | not null | plausibility via [`BirthYearRule`](super::BirthYearRule), ungated |
//! | `email` | not blank | 10-100 chars, address pattern, no surrounding whitespace |
//! | `identificationTypeId` (create) | not null | - |
//! | `genderId` | not null | - |

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateLength;

use crate::domain::dto::persons::request::{PersonCreateRequest, PersonUpdateRequest};
use crate::utils::string_utils::is_absent_or_blank;
use crate::validation::rule::RuleSet;

/// Message-catalog keys reported by the person rules.
pub mod keys {
    pub const IDENTIFICATION_NUMBER_NOT_BLANK: &str = "person.identificationNumber.notBlank";
    pub const IDENTIFICATION_NUMBER_SIZE: &str = "person.identificationNumber.size";
    pub const IDENTIFICATION_NUMBER_PATTERN: &str = "person.identificationNumber.pattern";
    pub const IDENTIFICATION_NUMBER_NO_TRAILING_SPACES: &str = "person.identificationNumber.noTrailingSpaces";

    pub const FIRST_NAME_NOT_BLANK: &str = "person.firstName.notBlank";
    pub const FIRST_NAME_SIZE: &str = "person.firstName.size";
    pub const FIRST_NAME_PATTERN: &str = "person.firstName.pattern";
    pub const FIRST_NAME_NO_TRAILING_SPACES: &str = "person.firstName.noTrailingSpaces";

    pub const LAST_NAME_NOT_BLANK: &str = "person.lastName.notBlank";
    pub const LAST_NAME_SIZE: &str = "person.lastName.size";
    pub const LAST_NAME_PATTERN: &str = "person.lastName.pattern";
    pub const LAST_NAME_NO_TRAILING_SPACES: &str = "person.lastName.noTrailingSpaces";

    pub const BIRTH_YEAR_NOT_NULL: &str = "person.birthYear.notNull";
    pub const BIRTH_YEAR_INVALID: &str = "person.birthYear.invalid";

    pub const EMAIL_NOT_BLANK: &str = "person.email.notBlank";
    pub const EMAIL_SIZE: &str = "person.email.size";
    pub const EMAIL_PATTERN: &str = "person.email.pattern";
    pub const EMAIL_NO_TRAILING_SPACES: &str = "person.email.noTrailingSpaces";

    pub const IDENTIFICATION_TYPE_ID_NOT_NULL: &str = "person.identificationTypeId.notNull";
    pub const GENDER_ID_NOT_NULL: &str = "person.genderId.notNull";
}

/// Wire names of the validated fields.
pub mod fields {
    pub const IDENTIFICATION_NUMBER: &str = "identificationNumber";
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const BIRTH_YEAR: &str = "birthYear";
    pub const EMAIL: &str = "email";
    pub const IDENTIFICATION_TYPE_ID: &str = "identificationTypeId";
    pub const GENDER_ID: &str = "genderId";
}

static IDENTIFICATION_NUMBER_CHARSET: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z0-9-]+$"));

static PERSON_NAME_CHARSET: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Za-zÁÉÍÓÚáéíóúÑñ0-9 ]+$"));

static EMAIL_ADDRESS: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$"));

// a single non-whitespace character passes
static NO_SURROUNDING_WHITESPACE: Lazy<Regex> = Lazy::new(|| compile(r"^\S(?:.*\S)?$"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

/// Constraints of one free-text field.
struct TextField {
    name: &'static str,
    min_chars: u64,
    max_chars: u64,
    charset: &'static Lazy<Regex>,
    not_blank: &'static str,
    size: &'static str,
    pattern: &'static str,
    no_trailing_spaces: &'static str,
}

static IDENTIFICATION_NUMBER: TextField = TextField {
    name: fields::IDENTIFICATION_NUMBER,
    min_chars: 6,
    max_chars: 20,
    charset: &IDENTIFICATION_NUMBER_CHARSET,
    not_blank: keys::IDENTIFICATION_NUMBER_NOT_BLANK,
    size: keys::IDENTIFICATION_NUMBER_SIZE,
    pattern: keys::IDENTIFICATION_NUMBER_PATTERN,
    no_trailing_spaces: keys::IDENTIFICATION_NUMBER_NO_TRAILING_SPACES,
};

static FIRST_NAME: TextField = TextField {
    name: fields::FIRST_NAME,
    min_chars: 1,
    max_chars: 80,
    charset: &PERSON_NAME_CHARSET,
    not_blank: keys::FIRST_NAME_NOT_BLANK,
    size: keys::FIRST_NAME_SIZE,
    pattern: keys::FIRST_NAME_PATTERN,
    no_trailing_spaces: keys::FIRST_NAME_NO_TRAILING_SPACES,
};

static LAST_NAME: TextField = TextField {
    name: fields::LAST_NAME,
    min_chars: 1,
    max_chars: 80,
    charset: &PERSON_NAME_CHARSET,
    not_blank: keys::LAST_NAME_NOT_BLANK,
    size: keys::LAST_NAME_SIZE,
    pattern: keys::LAST_NAME_PATTERN,
    no_trailing_spaces: keys::LAST_NAME_NO_TRAILING_SPACES,
};

static EMAIL: TextField = TextField {
    name: fields::EMAIL,
    min_chars: 10,
    max_chars: 100,
    charset: &EMAIL_ADDRESS,
    not_blank: keys::EMAIL_NOT_BLANK,
    size: keys::EMAIL_SIZE,
    pattern: keys::EMAIL_PATTERN,
    no_trailing_spaces: keys::EMAIL_NO_TRAILING_SPACES,
};

/// Appends the presence and format rules of a text field.
///
/// Format checks accept `None`; absence is the presence rule's concern.
fn text_field<T: 'static>(rules: RuleSet<T>, field: &TextField, get: fn(&T) -> Option<&String>) -> RuleSet<T> {
    let (min, max, charset) = (field.min_chars, field.max_chars, field.charset);

    rules
        .presence(field.name, field.not_blank, move |target, _| {
            !is_absent_or_blank(get(target).map(String::as_str))
        })
        .format(field.name, field.size, move |target, _| {
            get(target).is_none_or(|value| value.validate_length(Some(min), Some(max), None))
        })
        .format(field.name, field.pattern, move |target, _| {
            get(target).is_none_or(|value| charset.is_match(value))
        })
        .format(field.name, field.no_trailing_spaces, move |target, _| {
            get(target).is_none_or(|value| NO_SURROUNDING_WHITESPACE.is_match(value))
        })
}

fn birth_year_field<T: 'static>(rules: RuleSet<T>, get: fn(&T) -> Option<i32>) -> RuleSet<T> {
    rules
        .presence(fields::BIRTH_YEAR, keys::BIRTH_YEAR_NOT_NULL, move |target, _| get(target).is_some())
        .ungated(fields::BIRTH_YEAR, keys::BIRTH_YEAR_INVALID, move |target, context| {
            get(target).is_none_or(|year| context.birth_year.is_plausible(year))
        })
}

fn required_id<T: 'static>(
    rules: RuleSet<T>,
    field: &'static str,
    message: &'static str,
    get: fn(&T) -> Option<i64>,
) -> RuleSet<T> {
    rules.presence(field, message, move |target, _| get(target).is_some())
}

static CREATE_RULES: Lazy<RuleSet<PersonCreateRequest>> = Lazy::new(|| {
    let rules = RuleSet::<PersonCreateRequest>::new();
    let rules = text_field(rules, &IDENTIFICATION_NUMBER, |r: &PersonCreateRequest| {
        r.identification_number.as_ref()
    });
    let rules = text_field(rules, &FIRST_NAME, |r: &PersonCreateRequest| r.first_name.as_ref());
    let rules = text_field(rules, &LAST_NAME, |r: &PersonCreateRequest| r.last_name.as_ref());
    let rules = birth_year_field(rules, |r: &PersonCreateRequest| r.birth_year);
    let rules = text_field(rules, &EMAIL, |r: &PersonCreateRequest| r.email.as_ref());
    let rules = required_id(
        rules,
        fields::IDENTIFICATION_TYPE_ID,
        keys::IDENTIFICATION_TYPE_ID_NOT_NULL,
        |r: &PersonCreateRequest| r.identification_type_id,
    );
    required_id(rules, fields::GENDER_ID, keys::GENDER_ID_NOT_NULL, |r: &PersonCreateRequest| {
        r.gender_id
    })
});

static UPDATE_RULES: Lazy<RuleSet<PersonUpdateRequest>> = Lazy::new(|| {
    let rules = RuleSet::<PersonUpdateRequest>::new();
    let rules = text_field(rules, &FIRST_NAME, |r: &PersonUpdateRequest| r.first_name.as_ref());
    let rules = text_field(rules, &LAST_NAME, |r: &PersonUpdateRequest| r.last_name.as_ref());
    let rules = birth_year_field(rules, |r: &PersonUpdateRequest| r.birth_year);
    let rules = text_field(rules, &EMAIL, |r: &PersonUpdateRequest| r.email.as_ref());
    required_id(rules, fields::GENDER_ID, keys::GENDER_ID_NOT_NULL, |r: &PersonUpdateRequest| {
        r.gender_id
    })
});

pub fn create_rules() -> &'static RuleSet<PersonCreateRequest> {
    &CREATE_RULES
}

pub fn update_rules() -> &'static RuleSet<PersonUpdateRequest> {
    &UPDATE_RULES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::rule::Phase;

    #[test]
    fn test_create_table_field_order() {
        let mut order: Vec<&str> = create_rules().rules().iter().map(|rule| rule.field).collect();
        order.dedup();

        assert_eq!(
            order,
            vec![
                fields::IDENTIFICATION_NUMBER,
                fields::FIRST_NAME,
                fields::LAST_NAME,
                fields::BIRTH_YEAR,
                fields::EMAIL,
                fields::IDENTIFICATION_TYPE_ID,
                fields::GENDER_ID,
            ]
        );
    }

    #[test]
    fn test_update_table_has_no_identity_rules() {
        let rules = update_rules().rules();

        assert!(rules.iter().all(|rule| rule.field != fields::IDENTIFICATION_NUMBER));
        assert!(rules.iter().all(|rule| rule.field != fields::IDENTIFICATION_TYPE_ID));
        assert!(rules.iter().any(|rule| rule.field == fields::GENDER_ID));
    }

    #[test]
    fn test_only_birth_year_plausibility_is_ungated() {
        let ungated: Vec<&str> = create_rules()
            .rules()
            .iter()
            .filter(|rule| rule.phase == Phase::Ungated)
            .map(|rule| rule.message)
            .collect();

        assert_eq!(ungated, vec![keys::BIRTH_YEAR_INVALID]);
    }

    #[test]
    fn test_whitespace_pattern() {
        assert!(NO_SURROUNDING_WHITESPACE.is_match("a"));
        assert!(NO_SURROUNDING_WHITESPACE.is_match("Ana Maria"));
        assert!(!NO_SURROUNDING_WHITESPACE.is_match(" Ana"));
        assert!(!NO_SURROUNDING_WHITESPACE.is_match("Ana "));
        assert!(!NO_SURROUNDING_WHITESPACE.is_match("\tAna"));
        assert!(!NO_SURROUNDING_WHITESPACE.is_match(""));
    }

    #[test]
    fn test_name_charset_accepts_spanish_letters() {
        assert!(PERSON_NAME_CHARSET.is_match("José Ñuñez"));
        assert!(PERSON_NAME_CHARSET.is_match("María 2"));
        assert!(!PERSON_NAME_CHARSET.is_match("O'Brien"));
        assert!(!PERSON_NAME_CHARSET.is_match("Zoë"));
    }

    #[test]
    fn test_email_pattern() {
        assert!(EMAIL_ADDRESS.is_match("ana.lopez@example.com"));
        assert!(EMAIL_ADDRESS.is_match("a_b+c%d@sub.domain.co"));
        assert!(!EMAIL_ADDRESS.is_match("not-an-email"));
        assert!(!EMAIL_ADDRESS.is_match("ana@example.c"));
        assert!(!EMAIL_ADDRESS.is_match("ana lopez@example.com"));
    }
}
