//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during field validation.
///
/// The display text of each variant is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value was not textual. Carries the field kind ("name", "phone").
    #[error("The {0} field should be a string")]
    InvalidFieldType(&'static str),

    /// The name is empty.
    #[error("The username is required.")]
    InvalidName,

    /// The phone does not have the required number of digits.
    #[error("The phone number length should be 10 digits.")]
    InvalidPhoneLength,

    /// The phone contains something other than decimal digits.
    #[error("The phone number should contain only digits.")]
    InvalidPhoneFormat,
}
