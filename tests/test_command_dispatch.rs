//! End-to-end tests for command dispatch against one address book.
//!
//! These tests drive the dispatcher the way the interactive loop does: one
//! raw line at a time, checking the exact reply text.

use assistant_bot::commands::{dispatch, Reply};
use assistant_bot::{AddressBook, SessionMetrics};

/// Dispatch a line and return the printed message.
fn reply(line: &str, book: &mut AddressBook, metrics: &SessionMetrics) -> String {
    match dispatch(line, book, metrics) {
        Reply::Message(message) => message,
        other => panic!("Expected a message for {:?}, got: {:?}", line, other),
    }
}

/// Test the full add / duplicate / phone / change / all scenario.
#[test]
fn test_contact_lifecycle_scenario() {
    let mut book = AddressBook::new();
    let metrics = SessionMetrics::new();

    assert_eq!(
        reply("add John 1234567890", &mut book, &metrics),
        "Contact added."
    );
    assert_eq!(
        reply("add John 1234567890", &mut book, &metrics),
        "Contact John is already present."
    );
    assert_eq!(book.len(), 1);
    assert_eq!(book.find("John").unwrap().phones().len(), 1);

    assert_eq!(reply("phone John", &mut book, &metrics), "1234567890");
    assert_eq!(
        reply("change John 1234567890 1112223333", &mut book, &metrics),
        "Contact updated."
    );
    assert_eq!(reply("phone John", &mut book, &metrics), "1112223333");
    assert_eq!(reply("all", &mut book, &metrics), "John - 1112223333");

    assert_eq!(metrics.commands_total(), 6);
    assert_eq!(metrics.command_errors_total(), 0);
}

#[test]
fn test_add_missing_phone() {
    let mut book = AddressBook::new();
    let metrics = SessionMetrics::new();

    assert_eq!(
        reply("add John", &mut book, &metrics),
        "Give me name and phone please."
    );
    assert!(book.is_empty());
}

#[test]
fn test_phone_unknown_name() {
    let mut book = AddressBook::new();
    let metrics = SessionMetrics::new();

    assert_eq!(
        reply("phone NoSuchName", &mut book, &metrics),
        "Contact is not found."
    );
}

#[test]
fn test_names_are_case_sensitive_commands_are_not() {
    let mut book = AddressBook::new();
    let metrics = SessionMetrics::new();

    reply("ADD John 1234567890", &mut book, &metrics);
    assert_eq!(reply("Phone John", &mut book, &metrics), "1234567890");
    assert_eq!(
        reply("phone john", &mut book, &metrics),
        "Contact is not found."
    );
}

#[test]
fn test_validation_errors_do_not_stop_dispatch() {
    let mut book = AddressBook::new();
    let metrics = SessionMetrics::new();

    assert_eq!(
        reply("add John 12345", &mut book, &metrics),
        "The phone number length should be 10 digits."
    );
    assert_eq!(
        reply("add John 123-456-78", &mut book, &metrics),
        "The phone number should contain only digits."
    );
    assert_eq!(
        reply("add John 1234567890", &mut book, &metrics),
        "Contact added."
    );
    assert_eq!(
        reply("change John 1234567890 abc", &mut book, &metrics),
        "The phone number should contain only digits."
    );
    assert_eq!(reply("phone John", &mut book, &metrics), "1234567890");
    assert_eq!(metrics.command_errors_total(), 3);
}

#[test]
fn test_change_outcomes_are_distinct() {
    let mut book = AddressBook::new();
    let metrics = SessionMetrics::new();

    reply("add John 1234567890", &mut book, &metrics);
    book.find_mut("John").unwrap().add_phone("5555555555").unwrap();

    assert_eq!(
        reply("change John 0000000000 1112223333", &mut book, &metrics),
        "Phone 0000000000 is not present for contact John."
    );
    assert_eq!(
        reply("change John 1234567890 5555555555", &mut book, &metrics),
        "Phone 5555555555 is already present for contact John."
    );
    assert_eq!(
        reply("change Ghost 1234567890 5555555555", &mut book, &metrics),
        "Contact Ghost is not in contacts."
    );
    assert_eq!(
        reply("phone John", &mut book, &metrics),
        "1234567890; 5555555555"
    );
}

#[test]
fn test_delete_then_list() {
    let mut book = AddressBook::new();
    let metrics = SessionMetrics::new();

    reply("add John 1234567890", &mut book, &metrics);
    reply("add Jane 9876543210", &mut book, &metrics);
    assert_eq!(
        reply("all", &mut book, &metrics),
        "John - 1234567890\nJane - 9876543210"
    );

    assert_eq!(reply("remove John", &mut book, &metrics), "Contact deleted.");
    assert_eq!(reply("all", &mut book, &metrics), "Jane - 9876543210");

    assert_eq!(reply("delete Jane", &mut book, &metrics), "Contact deleted.");
    assert_eq!(reply("all", &mut book, &metrics), "No contacts saved.");
}

#[test]
fn test_unknown_and_exit_commands() {
    let mut book = AddressBook::new();
    let metrics = SessionMetrics::new();

    assert_eq!(reply("dance", &mut book, &metrics), "Invalid command.");
    assert_eq!(
        dispatch("Exit", &mut book, &metrics),
        Reply::Exit("Good bye!".to_string())
    );
    assert_eq!(
        dispatch("close", &mut book, &metrics),
        Reply::Exit("Good bye!".to_string())
    );
    assert_eq!(metrics.invalid_commands_total(), 1);
}
