//! Contact storage models.
//!
//! A [`Record`] owns one validated name and its phones; the
//! [`AddressBook`] owns every record, keyed by name.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::{AddPhoneOutcome, EditPhoneOutcome, Record};
