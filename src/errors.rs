use thiserror::Error;

/// Failure reasons produced by the rule catalog.
///
/// The set is closed: one variant per rule kind that can fail, plus the
/// reserved `NotANumber` and the sentinel `None`, which no current rule
/// produces.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Sentinel member of the closed set, produced by no rule
    #[error("no validation error")]
    None,

    /// The value does not match the email pattern
    #[error("value is not a valid email address")]
    NotAnEmail,

    /// The value does not match the phone pattern
    #[error("value is not a valid phone number")]
    NotAPhone,

    /// The value does not match the ID document pattern
    #[error("value is not a valid ID document")]
    NotValidId,

    /// Reserved for numeric validation; no rule currently produces it
    #[error("value is not a number")]
    NotANumber,

    /// The value is empty
    #[error("value is empty")]
    EmptyValue,

    /// The value does not satisfy the password policy
    #[error("value does not satisfy the password policy")]
    PasswordNotValid,

    /// The value is shorter than the required minimum length
    #[error("value is shorter than the required minimum length")]
    MinLengthNotSatisfied,

    /// The value is longer than the allowed maximum length
    #[error("value is longer than the allowed maximum length")]
    MaxLengthExceeded,
}

/// Errors returned by the form registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// No field registered under this name
    #[error("Field '{0}' not found in form")]
    FieldNotFound(String),
}
