use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ValidationError;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4,}$").unwrap());

static ID_DOCUMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9]{7,}$").unwrap());

// The regex crate has no lookahead, so the password policy is the conjunction
// of these two searches plus a character-count range.
static PASSWORD_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"["~`!@#$%^&*()_\-+={\[\]}|:;'<,>.?/¡¿¬€]"#).unwrap());

static PASSWORD_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").unwrap());

/// Check against the email pattern.
pub fn email(value: &str) -> Result<String, ValidationError> {
    if EMAIL_RE.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(ValidationError::NotAnEmail)
    }
}

/// Check for four or more consecutive digits.
pub fn phone(value: &str) -> Result<String, ValidationError> {
    if PHONE_RE.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(ValidationError::NotAPhone)
    }
}

/// Check against the ID document pattern.
///
/// The match runs on the uppercased value and the uppercased form is what is
/// returned on success, so this rule normalizes as well as checks.
pub fn id_document(value: &str) -> Result<String, ValidationError> {
    let upper = value.to_uppercase();
    if ID_DOCUMENT_RE.is_match(&upper) {
        Ok(upper)
    } else {
        Err(ValidationError::NotValidId)
    }
}

/// Check that the value is not empty.
pub fn not_empty(value: &str) -> Result<String, ValidationError> {
    if value.is_empty() {
        Err(ValidationError::EmptyValue)
    } else {
        Ok(value.to_string())
    }
}

/// Check the password policy: at least one symbol, at least one digit,
/// 8 to 16 characters.
pub fn password(value: &str) -> Result<String, ValidationError> {
    let len = value.chars().count();
    if (8..=16).contains(&len)
        && PASSWORD_SYMBOL_RE.is_match(value)
        && PASSWORD_DIGIT_RE.is_match(value)
    {
        Ok(value.to_string())
    } else {
        Err(ValidationError::PasswordNotValid)
    }
}

/// Check a minimum character count.
pub fn min_length(value: &str, min: usize) -> Result<String, ValidationError> {
    if value.chars().count() < min {
        Err(ValidationError::MinLengthNotSatisfied)
    } else {
        Ok(value.to_string())
    }
}

/// Check a maximum character count.
pub fn max_length(value: &str, max: usize) -> Result<String, ValidationError> {
    if value.chars().count() > max {
        Err(ValidationError::MaxLengthExceeded)
    } else {
        Ok(value.to_string())
    }
}
