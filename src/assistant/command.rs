//! Command parsing.

use std::fmt;
use std::str::FromStr;

/// A command the assistant understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    DeletePhone,
    AddBirthday,
    ShowBirthday,
    Phone,
    Birthdays,
    All,
    DeleteContact,
    Help,
    /// `close` or `exit`
    Exit,
    /// Anything else, kept as typed
    Unknown(String),
}

impl FromStr for Command {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "delete-phone" => Command::DeletePhone,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "phone" => Command::Phone,
            "birthdays" => Command::Birthdays,
            "all" => Command::All,
            "delete-contact" => Command::DeleteContact,
            "help" => Command::Help,
            "close" | "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::DeletePhone => "delete-phone",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Phone => "phone",
            Command::Birthdays => "birthdays",
            Command::All => "all",
            Command::DeleteContact => "delete-contact",
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Unknown(other) => other,
        };
        f.write_str(name)
    }
}

/// A parsed input line: the command and its whitespace-separated arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    pub args: Vec<String>,
}

/// Split a line into a command and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut words = line.split_whitespace();
    let command = words.next()?.parse().ok()?;
    let args = words.map(str::to_string).collect();
    Some(ParsedInput { command, args })
}
