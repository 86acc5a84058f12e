//! Error types for the assistant bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can return.
///
/// The display text of each variant is the message printed to the user, so
/// the dispatcher never has to let an error escape the command loop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The handler got more or fewer arguments than it unpacks
    #[error("Give me name and phone please.")]
    WrongArity,

    /// The requested contact is not in the address book
    #[error("Contact is not found.")]
    ContactNotFound,

    /// A required name argument is missing
    #[error("Give me name please.")]
    MissingName,

    /// A name or phone argument failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CommandError {
    /// The message shown to the user for this error.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
