//! Field extraction and validation rules.
//!
//! Raw input arrives as a JSON object of named fields. The helpers here pull
//! typed values out of it, and each declared field has exactly one rule
//! function that both record construction and the field's setter go through.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use validator::ValidateEmail;

use crate::constants::{MIN_AGE, MIN_PASSWORD_LENGTH, PASSWORD_SPECIAL_CHARS};
use crate::error::{DomainError, DomainResult};

/// Raw named inputs for record construction
pub(crate) type RawFields = Map<String, Value>;

static DIGIT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());
static SPECIAL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[!@#$%^&*]").unwrap());

// =============================================================================
// Raw input extraction
// =============================================================================

/// Require the input to be a JSON object of named fields
pub(crate) fn as_object<'a>(kind: &'static str, input: &'a Value) -> DomainResult<&'a RawFields> {
    input.as_object().ok_or_else(|| {
        DomainError::validation("input", format!("{} expects an object of named fields", kind))
    })
}

/// Reject the first key that is not in the kind's declared field list
pub(crate) fn reject_unknown(
    kind: &'static str,
    declared: &[&str],
    fields: &RawFields,
) -> DomainResult<()> {
    match fields.keys().find(|key| !declared.contains(&key.as_str())) {
        Some(key) => Err(DomainError::schema(kind, key.as_str())),
        None => Ok(()),
    }
}

fn require<'a>(fields: &'a RawFields, field: &'static str) -> DomainResult<&'a Value> {
    fields
        .get(field)
        .ok_or_else(|| DomainError::validation(field, "field is required"))
}

pub(crate) fn require_str<'a>(
    fields: &'a RawFields,
    field: &'static str,
) -> DomainResult<&'a str> {
    require(fields, field)?
        .as_str()
        .ok_or_else(|| DomainError::validation(field, "must be a string"))
}

pub(crate) fn require_int(fields: &RawFields, field: &'static str) -> DomainResult<i64> {
    require(fields, field)?
        .as_i64()
        .ok_or_else(|| DomainError::validation(field, "must be an integer"))
}

// =============================================================================
// Field rules
// =============================================================================

/// Email must satisfy local-part@domain grammar; stored as given.
pub(crate) fn email(raw: &str) -> DomainResult<String> {
    if !raw.validate_email() {
        return Err(DomainError::validation("email", "invalid email format"));
    }
    Ok(raw.to_owned())
}

/// Names are trimmed, must be non-empty, and are stored capitalized
/// (first character upper, remainder lower).
pub(crate) fn name(field: &'static str, raw: &str) -> DomainResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(field, "name cannot be empty"));
    }

    let mut chars = trimmed.chars();
    let mut capitalized = String::with_capacity(trimmed.len());
    if let Some(first) = chars.next() {
        capitalized.extend(first.to_uppercase());
    }
    capitalized.extend(chars.flat_map(|c| c.to_lowercase()));
    Ok(capitalized)
}

/// Password strength rule: minimum length, at least one digit, at least one
/// special character. The original string is stored verbatim.
pub(crate) fn password(raw: &str) -> DomainResult<String> {
    if raw.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(DomainError::validation(
            "password",
            format!("must be at least {} characters", MIN_PASSWORD_LENGTH),
        ));
    }
    if !DIGIT_PATTERN.is_match(raw) {
        return Err(DomainError::validation(
            "password",
            "must contain at least one digit",
        ));
    }
    if !SPECIAL_PATTERN.is_match(raw) {
        return Err(DomainError::validation(
            "password",
            format!(
                "must contain at least one special character ({})",
                PASSWORD_SPECIAL_CHARS
            ),
        ));
    }
    Ok(raw.to_owned())
}

/// Age floor check.
pub(crate) fn age(value: i64) -> DomainResult<i64> {
    if value < MIN_AGE {
        return Err(DomainError::validation(
            "age",
            format!("must be at least {}", MIN_AGE),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed_and_capitalized() {
        assert_eq!(name("first_name", "  ada  ").unwrap(), "Ada");
        assert_eq!(name("first_name", "LOVELACE").unwrap(), "Lovelace");
        assert_eq!(name("first_name", "mIXED").unwrap(), "Mixed");
    }

    #[test]
    fn test_name_capitalization_is_unicode_aware() {
        assert_eq!(name("first_name", "élodie").unwrap(), "Élodie");
    }

    #[test]
    fn test_name_rejects_blank_input() {
        assert!(name("first_name", "").is_err());
        assert!(name("last_name", "   ").is_err());
    }

    #[test]
    fn test_email_accepts_local_at_domain() {
        assert_eq!(email("a@b.com").unwrap(), "a@b.com");
    }

    #[test]
    fn test_email_rejects_malformed_input() {
        assert!(email("invalid-email").is_err());
        assert!(email("").is_err());
    }

    #[test]
    fn test_password_minimum_length() {
        // Exactly 8 characters with a digit and a special character
        assert!(password("Abcde1!x").is_ok());
        assert!(password("A1!").is_err());
    }

    #[test]
    fn test_password_requires_digit_and_special() {
        assert!(password("Abcdefgh!").is_err());
        assert!(password("Abcd1234").is_err());
        assert!(password("Abcd1234!").is_ok());
    }

    #[test]
    fn test_password_is_stored_verbatim() {
        assert_eq!(password("  Pass 123!  ").unwrap(), "  Pass 123!  ");
    }

    #[test]
    fn test_age_floor() {
        assert_eq!(age(18).unwrap(), 18);
        assert!(age(17).is_err());
        assert!(age(-5).is_err());
    }
}
