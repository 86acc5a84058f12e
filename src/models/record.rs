//! Record model: one contact with its phone numbers.

use crate::domain::{Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of [`Record::add_phone`].
///
/// Adding a phone that is already present is an idempotent no-op and still
/// reports success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddPhoneOutcome {
    /// The phone was appended.
    Added { phone: Phone, contact: Name },
    /// An equal phone was already stored; nothing changed.
    AlreadyPresent { phone: Phone, contact: Name },
}

impl fmt::Display for AddPhoneOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { phone, contact } | Self::AlreadyPresent { phone, contact } => {
                write!(f, "Phone {} added to contact {}.", phone, contact)
            }
        }
    }
}

/// Result of [`Record::edit_phone`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditPhoneOutcome {
    /// The old phone was replaced in place.
    Updated { old: Phone, new: Phone },
    /// The phone to replace is not stored on the record.
    NotFound { old: String, contact: Name },
    /// The replacement is already stored elsewhere on the record.
    AlreadyPresent { new: Phone, contact: Name },
}

impl EditPhoneOutcome {
    /// Whether the record was changed.
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}

impl fmt::Display for EditPhoneOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated { .. } => write!(f, "Contact updated."),
            Self::NotFound { old, contact } => {
                write!(f, "Phone {} is not present for contact {}.", old, contact)
            }
            Self::AlreadyPresent { new, contact } => {
                write!(f, "Phone {} is already present for contact {}.", new, contact)
            }
        }
    }
}

/// A contact: a validated name plus an ordered list of unique phones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
        })
    }

    /// Create a record that starts with one phone.
    pub fn with_phone(
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let mut record = Self::new(name)?;
        record.add_phone(phone)?;
        Ok(record)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Phones joined with `"; "`, in stored order.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Add a phone unless an equal one is already stored.
    ///
    /// # Errors
    ///
    /// Propagates the phone's `ValidationError`.
    pub fn add_phone(
        &mut self,
        phone: impl Into<String>,
    ) -> Result<AddPhoneOutcome, ValidationError> {
        let phone = Phone::new(phone)?;
        let contact = self.name.clone();

        if self.phones.contains(&phone) {
            return Ok(AddPhoneOutcome::AlreadyPresent { phone, contact });
        }

        self.phones.push(phone.clone());
        Ok(AddPhoneOutcome::Added { phone, contact })
    }

    /// Remove a phone. Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// Propagates the phone's `ValidationError`.
    pub fn delete_phone(&mut self, phone: impl Into<String>) -> Result<bool, ValidationError> {
        let phone = Phone::new(phone)?;
        match self.position(&phone) {
            Some(index) => {
                self.phones.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replace `old` with `new`, keeping its position.
    ///
    /// `new` is validated before anything else. A missing `old` and an `new`
    /// that is already stored are reported as distinct outcomes; neither
    /// changes the record.
    ///
    /// # Errors
    ///
    /// Propagates the `ValidationError` of `new`.
    pub fn edit_phone(
        &mut self,
        old: impl Into<String>,
        new: impl Into<String>,
    ) -> Result<EditPhoneOutcome, ValidationError> {
        let new = Phone::new(new)?;
        let old = old.into();

        let Some(index) = self.phones.iter().position(|p| p.as_str() == old) else {
            return Ok(EditPhoneOutcome::NotFound {
                old,
                contact: self.name.clone(),
            });
        };

        if let Some(existing) = self.position(&new) {
            if existing != index {
                return Ok(EditPhoneOutcome::AlreadyPresent {
                    new,
                    contact: self.name.clone(),
                });
            }
        }

        let old = std::mem::replace(&mut self.phones[index], new.clone());
        Ok(EditPhoneOutcome::Updated { old, new })
    }

    /// Find a stored phone by value.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    fn position(&self, phone: &Phone) -> Option<usize> {
        self.phones.iter().position(|p| p == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )
    }
}
