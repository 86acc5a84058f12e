//! Assistant Bot - an interactive command-line contact manager.
//!
//! Contacts are stored in memory as a name plus any number of phone numbers.
//! Names and phones are validated when they are created or changed, and a
//! small command language (`add`, `change`, `phone`, `all`, ...) edits them.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (`Name`, `Phone`) and their errors
//! - **models**: `Record` (one contact) and `AddressBook` (all contacts)
//! - **commands**: Input parsing, the command table and handlers
//! - **session**: The async prompt/read/dispatch loop
//! - **error**: Command and configuration error types
//! - **config**: Configuration management from environment variables
//! - **metrics**: Per-session command counters

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod session;

pub use commands::{dispatch, Reply};
pub use config::Config;
pub use domain::{Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError};
pub use metrics::{MetricsSummary, SessionMetrics};
pub use models::{AddPhoneOutcome, AddressBook, EditPhoneOutcome, Record};
pub use session::Session;
