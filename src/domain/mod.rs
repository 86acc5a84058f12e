//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for contact names and phone
//! numbers. Both are built on [`ValidatedField`], which applies a validation
//! rule at construction time and on every assignment, so invalid data can
//! never be represented in the system.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::{FieldRule, ValidatedField};
pub use name::{Name, NameRule};
pub use phone::{Phone, PhoneRule, PHONE_LENGTH};
