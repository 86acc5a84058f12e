//! Command handlers.
//!
//! Every handler takes the parsed arguments and the address book and returns
//! either the reply text or a [`CommandError`] that the dispatcher turns into
//! a user message.

use super::COMMANDS;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};

pub fn hello(_args: &[String], _book: &mut AddressBook) -> CommandResult<String> {
    Ok("How can I help you?".to_string())
}

/// `add <name> <phone>`: create a contact unless the name is taken.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = args else {
        return Err(CommandError::WrongArity);
    };

    if book.find(name).is_some() {
        return Ok(format!("Contact {} is already present.", name));
    }

    let record = Record::with_phone(name.as_str(), phone.as_str())?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old_phone> <new_phone>`: replace one phone of a contact.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old, new] = args else {
        return Err(CommandError::WrongArity);
    };

    let Some(record) = book.find_mut(name) else {
        return Ok(format!("Contact {} is not in contacts.", name));
    };

    let outcome = record.edit_phone(old.as_str(), new.as_str())?;
    Ok(outcome.to_string())
}

/// `phone <name>`: show the phones of a contact.
pub fn show_phone(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = args.first().ok_or(CommandError::MissingName)?;
    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;
    Ok(record.phones_display())
}

/// `all`: one `<name> - <phones>` line per contact.
pub fn show_all(_args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("No contacts saved.".to_string());
    }

    let lines: Vec<String> = book
        .entries()
        .into_iter()
        .map(|(name, phones)| format!("{} - {}", name, phones))
        .collect();
    Ok(lines.join("\n"))
}

/// `delete <name>`: remove a contact.
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = args.first().ok_or(CommandError::MissingName)?;
    book.delete(name).ok_or(CommandError::ContactNotFound)?;
    Ok("Contact deleted.".to_string())
}

pub fn help(_args: &[String], _book: &mut AddressBook) -> CommandResult<String> {
    let lines: Vec<String> = COMMANDS
        .iter()
        .map(|spec| format!("{} - {}", spec.usage, spec.summary))
        .chain(std::iter::once("exit | close - leave the assistant".to_string()))
        .collect();
    Ok(lines.join("\n"))
}
