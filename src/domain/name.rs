//! Name value object.

use super::errors::ValidationError;
use super::field::{FieldRule, ValidatedField};

/// Rule for contact names: any non-empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NameRule;

impl FieldRule for NameRule {
    const KIND: &'static str = "name";

    fn check(value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::InvalidName);
        }
        Ok(())
    }
}

/// A contact name.
///
/// # Example
///
/// ```
/// use assistant_bot::domain::Name;
///
/// let name = Name::new("John").unwrap();
/// assert_eq!(name.as_str(), "John");
/// assert!(Name::new("").is_err());
/// ```
pub type Name = ValidatedField<NameRule>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = Name::new("John").unwrap();
        assert_eq!(name.as_str(), "John");
        assert_eq!(name.to_string(), "John");
    }

    #[test]
    fn test_name_rejects_empty() {
        assert_eq!(Name::new(""), Err(ValidationError::InvalidName));
    }

    #[test]
    fn test_name_keeps_whitespace_and_case() {
        assert_eq!(Name::new(" ").unwrap().as_str(), " ");
        assert_ne!(Name::new("john").unwrap(), Name::new("John").unwrap());
    }

    #[test]
    fn test_name_serialization() {
        let name = Name::new("Jane").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Jane\"");
    }

    #[test]
    fn test_name_deserialization_rejects_non_string() {
        let err = serde_json::from_str::<Name>("true").unwrap_err();
        assert!(err.to_string().contains("The name field should be a string"));
    }

    #[test]
    fn test_name_deserialization_empty_fails() {
        let err = serde_json::from_str::<Name>("\"\"").unwrap_err();
        assert!(err.to_string().contains("The username is required."));
    }
}
