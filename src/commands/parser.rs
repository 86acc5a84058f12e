//! Input line tokenizer.

/// A command line split into its command token and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Lower-cased command token
    pub command: String,
    /// Remaining tokens, case preserved
    pub args: Vec<String>,
}

/// Split a line on whitespace into a command token and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.trim().to_lowercase();
    let args = tokens.map(str::to_string).collect();

    Some(ParsedInput { command, args })
}
