//! Command dispatch.
//!
//! Input lines are tokenized by [`parse_input`], the command token is looked
//! up in the static [`COMMANDS`] table and the matching handler runs against
//! the address book. Handler errors are translated into user messages here,
//! so no failure ever leaves the command loop.

pub mod handlers;
pub mod parser;

pub use parser::{parse_input, ParsedInput};

use crate::error::CommandResult;
use crate::metrics::SessionMetrics;
use crate::models::AddressBook;

/// Signature shared by all command handlers.
pub type Handler = fn(&[String], &mut AddressBook) -> CommandResult<String>;

/// One entry of the command table.
#[derive(Clone, Copy)]
pub struct CommandSpec {
    /// Accepted (lower-case) command tokens
    pub aliases: &'static [&'static str],
    /// Usage line shown by `help`
    pub usage: &'static str,
    /// Short description shown by `help`
    pub summary: &'static str,
    pub handler: Handler,
}

/// Tokens that end the session. Checked before the command table.
pub const EXIT_COMMANDS: &[&str] = &["close", "exit"];

pub const WELCOME_MESSAGE: &str = "Welcome to the assistant bot!";
pub const FAREWELL_MESSAGE: &str = "Good bye!";
pub const INVALID_COMMAND_MESSAGE: &str = "Invalid command.";

/// The command table. The first entry listing a token wins.
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        aliases: &["hello"],
        usage: "hello",
        summary: "greet the assistant",
        handler: handlers::hello,
    },
    CommandSpec {
        aliases: &["add"],
        usage: "add <name> <phone>",
        summary: "add a new contact",
        handler: handlers::add_contact,
    },
    CommandSpec {
        aliases: &["change"],
        usage: "change <name> <old_phone> <new_phone>",
        summary: "replace a phone of a contact",
        handler: handlers::change_contact,
    },
    CommandSpec {
        aliases: &["phone"],
        usage: "phone <name>",
        summary: "show the phones of a contact",
        handler: handlers::show_phone,
    },
    CommandSpec {
        aliases: &["all"],
        usage: "all",
        summary: "list every contact",
        handler: handlers::show_all,
    },
    CommandSpec {
        aliases: &["delete", "remove"],
        usage: "delete <name>",
        summary: "remove a contact",
        handler: handlers::delete_contact,
    },
    CommandSpec {
        aliases: &["help"],
        usage: "help",
        summary: "show this list",
        handler: handlers::help,
    },
];

/// What the session should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep reading.
    Message(String),
    /// Print the message and stop.
    Exit(String),
    /// Blank line; print nothing.
    Nothing,
}

/// Whether `command` (already lower-cased) ends the session.
pub fn is_exit(command: &str) -> bool {
    EXIT_COMMANDS.contains(&command)
}

/// Find the table entry for a lower-cased command token.
pub fn resolve(command: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.aliases.contains(&command))
}

/// Run a handler and translate any error into its user message.
pub fn execute(
    spec: &CommandSpec,
    args: &[String],
    book: &mut AddressBook,
    metrics: &SessionMetrics,
) -> String {
    metrics.record_command();
    match (spec.handler)(args, book) {
        Ok(reply) => reply,
        Err(e) => {
            metrics.record_command_error();
            tracing::warn!(command = spec.usage, error = ?e, "Command failed");
            e.user_message()
        }
    }
}

/// Handle one raw input line.
pub fn dispatch(line: &str, book: &mut AddressBook, metrics: &SessionMetrics) -> Reply {
    let Some(ParsedInput { command, args }) = parse_input(line) else {
        return Reply::Nothing;
    };

    if is_exit(&command) {
        return Reply::Exit(FAREWELL_MESSAGE.to_string());
    }

    tracing::debug!(command = %command, args = args.len(), "Dispatching command");

    match resolve(&command) {
        Some(spec) => Reply::Message(execute(spec, &args, book, metrics)),
        None => {
            metrics.record_invalid_command();
            tracing::debug!(command = %command, "Unknown command");
            Reply::Message(INVALID_COMMAND_MESSAGE.to_string())
        }
    }
}
