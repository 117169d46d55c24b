//! Fail-fast field checks shared by every request schema.
//!
//! Each schema validator runs its checks in a fixed order (presence/type,
//! allowed fields, format, path id) and reports only the first failure. The
//! messages below are part of the API: callers tell the failing rule apart by
//! them.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use uuid::Uuid;
use validator::ValidateEmail;

use crate::core::error::{AppError, Result};

/// A required field is missing, empty or not a string
pub const MSG_MISSING_INPUTS: &str = "Please enter a valid inputs!";

/// The body carries a key outside the schema
pub const MSG_DISALLOWED_FIELDS: &str = "Only valid fields are allowed";

/// A field (or the path id) has the wrong format
pub const MSG_INVALID_INPUTS: &str = "Please enter a valid inputs";

/// Minimum password length for the strong password policy
pub const MIN_PASSWORD_LENGTH: usize = 6;

lazy_static! {
    /// ASCII letters only, at least one
    /// - Valid: "Germany", "DE", "Fajr"
    /// - Invalid: "123", "New York", "Köln", ""
    pub static ref ALPHA_REGEX: Regex = Regex::new(r"^[A-Za-z]+$").unwrap();

    /// ASCII letters and digits only, at least one
    /// - Valid: "abc123", "0192a4c5e0b27d3e8f1a2b3c4d5e6f70"
    /// - Invalid: "abc-123", "a b", ""
    pub static ref ALPHANUMERIC_REGEX: Regex = Regex::new(r"^[A-Za-z0-9]+$").unwrap();

    /// User display names: 4 to 10 ASCII letters
    pub static ref USER_NAME_REGEX: Regex = Regex::new(r"^[A-Za-z]{4,10}$").unwrap();
}

pub fn is_alpha(value: &str) -> bool {
    ALPHA_REGEX.is_match(value)
}

pub fn is_alphanumeric(value: &str) -> bool {
    ALPHANUMERIC_REGEX.is_match(value)
}

pub fn is_email(value: &str) -> bool {
    value.validate_email()
}

/// Strong password policy: at least `MIN_PASSWORD_LENGTH` characters with one
/// lowercase letter, one uppercase letter, one digit and one symbol.
/// Letters count only when ASCII; symbols are ASCII punctuation, space or `£`.
pub fn is_strong_password(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_LENGTH
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value
            .chars()
            .any(|c| c.is_ascii_punctuation() || c == ' ' || c == '£')
}

/// A required field: present, a JSON string, and non-empty
pub fn required_str(value: &Option<Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    }
}

/// An optional field: absent/null is `None`, a string is kept, anything else
/// fails the presence/type check
pub fn optional_str(value: &Option<Value>) -> Result<Option<&str>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(invalid(MSG_MISSING_INPUTS)),
    }
}

pub fn invalid(message: &str) -> AppError {
    AppError::Validation(message.to_string())
}

/// Fail with a validation error carrying `message` unless `condition` holds
pub fn check(condition: bool, message: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(invalid(message))
    }
}

/// Keys the schema did not declare end up in `extra`
pub fn check_allowed_fields(extra: &BTreeMap<String, Value>) -> Result<()> {
    if let Some(key) = extra.keys().next() {
        tracing::debug!("Rejected disallowed field '{}'", key);
    }
    check(extra.is_empty(), MSG_DISALLOWED_FIELDS)
}

/// The update path id, when present, must be alphanumeric
pub fn check_path_id(id: Option<&str>) -> Result<()> {
    match id {
        Some(id) => check(is_alphanumeric(id), MSG_INVALID_INPUTS),
        None => Ok(()),
    }
}

/// A reference field must be alphanumeric and name a well-formed record id
pub fn parse_reference(raw: &str) -> Result<Uuid> {
    check(is_alphanumeric(raw), MSG_INVALID_INPUTS)?;
    Uuid::try_parse(raw).map_err(|_| invalid(MSG_INVALID_INPUTS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_alpha_regex() {
        assert!(is_alpha("Germany"));
        assert!(is_alpha("DE"));
        assert!(!is_alpha("123"));
        assert!(!is_alpha("New York")); // space
        assert!(!is_alpha("Köln")); // non-ASCII
        assert!(!is_alpha(""));
    }

    #[test]
    fn test_alphanumeric_regex() {
        assert!(is_alphanumeric("abc123"));
        assert!(is_alphanumeric("0192a4c5e0b27d3e8f1a2b3c4d5e6f70"));
        assert!(!is_alphanumeric("abc-123"));
        assert!(!is_alphanumeric("a b"));
        assert!(!is_alphanumeric(""));
    }

    #[test]
    fn test_strong_password_policy() {
        assert!(!is_strong_password("abc123")); // no uppercase, no symbol
        assert!(is_strong_password("Abc123!"));
        assert!(!is_strong_password("Ab1!")); // too short
        assert!(!is_strong_password("ABC123!")); // no lowercase
        assert!(!is_strong_password("Abcdef!")); // no digit
        assert!(!is_strong_password("ABC12!é")); // é is not an ASCII lowercase letter
        assert!(is_strong_password("Abc123£"));
    }

    #[test]
    fn test_email() {
        assert!(is_email("imam@example.com"));
        assert!(!is_email("imam@"));
        assert!(!is_email("not-an-email"));
    }

    #[test]
    fn test_required_str() {
        assert_eq!(required_str(&Some(json!("Fajr"))), Some("Fajr"));
        assert_eq!(required_str(&Some(json!(""))), None);
        assert_eq!(required_str(&Some(json!(42))), None);
        assert_eq!(required_str(&None), None);
    }

    #[test]
    fn test_optional_str() {
        assert_eq!(optional_str(&None).ok(), Some(None));
        assert_eq!(optional_str(&Some(Value::Null)).ok(), Some(None));
        assert_eq!(
            optional_str(&Some(json!("old town"))).ok(),
            Some(Some("old town"))
        );
        assert!(optional_str(&Some(json!(["x"]))).is_err());
    }

    #[test]
    fn test_parse_reference() {
        let id = Uuid::now_v7();
        assert_eq!(parse_reference(&id.simple().to_string()).ok(), Some(id));
        assert!(parse_reference(&id.hyphenated().to_string()).is_err());
        assert!(parse_reference("abc").is_err());
    }

    #[test]
    fn test_check_path_id() {
        assert!(check_path_id(None).is_ok());
        assert!(check_path_id(Some("abc123")).is_ok());
        let err = check_path_id(Some("abc-123")).unwrap_err();
        assert_eq!(err.message(), MSG_INVALID_INPUTS);
    }
}
