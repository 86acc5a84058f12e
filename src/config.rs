//! Configuration management for the assistant bot.
//!
//! This module handles loading and validating configuration from environment variables.
//! Every setting has a default, so the bot runs with no environment at all.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default prompt printed before each command is read.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Configuration for the assistant bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prompt printed before reading each command (default: "Enter a command: ")
    pub prompt: String,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_PROMPT`: Prompt text (default: "Enter a command: ")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout; a missing file is fine
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        if prompt.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_PROMPT".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config { prompt, log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: "error".to_string(),
        }
    }
}
