//! Phone value object.

use super::errors::ValidationError;
use super::field::{FieldRule, ValidatedField};
use once_cell::sync::Lazy;
use regex::Regex;

/// Number of digits a phone number must have.
pub const PHONE_LENGTH: usize = 10;

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]*$").expect("valid regex"));

/// Rule for phone numbers: exactly [`PHONE_LENGTH`] ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PhoneRule;

impl FieldRule for PhoneRule {
    const KIND: &'static str = "phone";

    /// # Validation Rules
    ///
    /// - Must contain only ASCII digits (checked first)
    /// - Must be exactly 10 digits long
    fn check(value: &str) -> Result<(), ValidationError> {
        if !DIGITS.is_match(value) {
            return Err(ValidationError::InvalidPhoneFormat);
        }
        if value.len() != PHONE_LENGTH {
            return Err(ValidationError::InvalidPhoneLength);
        }
        Ok(())
    }
}

/// A phone number.
///
/// # Example
///
/// ```
/// use assistant_bot::domain::Phone;
///
/// let phone = Phone::new("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// assert!(Phone::new("123-456-7890").is_err());
/// ```
pub type Phone = ValidatedField<PhoneRule>;
