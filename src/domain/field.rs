//! Generic validated field.
//!
//! A [`ValidatedField`] holds a string that has passed the validation rule
//! of its [`FieldRule`]. Every way of producing or changing the value goes
//! through the rule, so a field can never hold an invalid value.

use super::errors::ValidationError;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// A validation rule for a [`ValidatedField`].
pub trait FieldRule {
    /// Human-readable field kind, used in type errors ("name", "phone").
    const KIND: &'static str;

    /// Check a candidate value.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` describing why `value` is rejected.
    fn check(value: &str) -> Result<(), ValidationError>;
}

/// A string value guarded by the rule `R`.
///
/// Equality, ordering and hashing are by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValidatedField<R> {
    value: String,
    rule: PhantomData<R>,
}

impl<R: FieldRule> ValidatedField<R> {
    /// Create a new field, applying the rule to `value`.
    ///
    /// # Errors
    ///
    /// Returns the rule's `ValidationError` if `value` is rejected.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        R::check(&value)?;
        Ok(Self {
            value,
            rule: PhantomData,
        })
    }

    /// Replace the value, re-running the rule.
    ///
    /// On error the previous value is kept.
    pub fn set_value(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        R::check(&value)?;
        self.value = value;
        Ok(())
    }

    /// Get the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl<R: FieldRule> FromStr for ValidatedField<R> {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<R: FieldRule> TryFrom<String> for ValidatedField<R> {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<R: FieldRule> TryFrom<&str> for ValidatedField<R> {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<R> AsRef<str> for ValidatedField<R> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

// Display support
impl<R> fmt::Display for ValidatedField<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

// Serde support - serialize as string
impl<R> Serialize for ValidatedField<R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation.
// Non-string input reports `InvalidFieldType` instead of serde's generic type error.
impl<'de, R: FieldRule> Deserialize<'de> for ValidatedField<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FieldVisitor(PhantomData))
    }
}

struct FieldVisitor<R>(PhantomData<R>);

impl<R: FieldRule> FieldVisitor<R> {
    fn type_error<E: de::Error>() -> E {
        E::custom(ValidationError::InvalidFieldType(R::KIND))
    }
}

impl<'de, R: FieldRule> Visitor<'de> for FieldVisitor<R> {
    type Value = ValidatedField<R>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} string", R::KIND)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        ValidatedField::new(v).map_err(E::custom)
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        ValidatedField::new(v).map_err(E::custom)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Err(Self::type_error())
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Err(Self::type_error())
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Err(Self::type_error())
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Err(Self::type_error())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(Self::type_error())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(Self::type_error())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _: A) -> Result<Self::Value, A::Error> {
        Err(Self::type_error())
    }

    fn visit_map<A: MapAccess<'de>>(self, _: A) -> Result<Self::Value, A::Error> {
        Err(Self::type_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
    struct UpperRule;

    impl FieldRule for UpperRule {
        const KIND: &'static str = "upper";

        fn check(value: &str) -> Result<(), ValidationError> {
            if value.chars().all(|c| c.is_ascii_uppercase()) {
                Ok(())
            } else {
                Err(ValidationError::InvalidName)
            }
        }
    }

    type Upper = ValidatedField<UpperRule>;

    #[test]
    fn test_new_applies_rule() {
        assert_eq!(Upper::new("ABC").unwrap().as_str(), "ABC");
        assert_eq!(Upper::new("abc"), Err(ValidationError::InvalidName));
    }

    #[test]
    fn test_set_value_reruns_rule_and_keeps_old_on_error() {
        let mut field = Upper::new("ABC").unwrap();
        assert!(field.set_value("XYZ").is_ok());
        assert_eq!(field.as_str(), "XYZ");

        assert_eq!(field.set_value("xyz"), Err(ValidationError::InvalidName));
        assert_eq!(field.as_str(), "XYZ");
    }

    #[test]
    fn test_parse_and_try_from() {
        let parsed: Upper = "QRS".parse().unwrap();
        assert_eq!(parsed, Upper::try_from("QRS").unwrap());
        assert!(Upper::try_from(String::from("qrs")).is_err());
    }

    #[test]
    fn test_non_string_deserialization_is_type_error() {
        let err = serde_json::from_str::<Upper>("42").unwrap_err();
        assert!(err.to_string().contains("The upper field should be a string"));

        let err = serde_json::from_str::<Upper>("[\"A\"]").unwrap_err();
        assert!(err.to_string().contains("should be a string"));
    }

    #[test]
    fn test_deserialization_validates() {
        let field: Upper = serde_json::from_str("\"ABC\"").unwrap();
        assert_eq!(field.as_str(), "ABC");
        assert!(serde_json::from_str::<Upper>("\"abc\"").is_err());
    }
}
