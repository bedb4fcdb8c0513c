//! The interactive session: read a line, run it, show the reply.

use super::command::{parse_input, Command};
use super::handlers::{self, EMPTY_INPUT, HELP_TEXT, INVALID_COMMAND};
use super::sink::MessageSink;
use crate::error::{BookError, BookResult};
use crate::models::AddressBook;
use chrono::NaiveDate;
use std::io::{self, BufRead};

/// Greeting shown when a session starts.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Prompt shown before each command.
pub const PROMPT: &str = "Enter a command: ";

/// Reply to `close` / `exit`.
pub const GOODBYE: &str = "Good bye!";

/// What the session should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Show the reply and read the next line
    Continue(String),
    /// Show the reply and end the session
    Exit(String),
}

/// The message a user sees for a failed command.
pub fn user_message(err: &BookError) -> String {
    match err {
        BookError::MissingArgument => "Enter the argument for the command.".to_string(),
        BookError::NotFound(name) => format!("{} contact is not in the address book", name),
        other => format!("Error: {}", other),
    }
}

/// Run one input line against the book.
///
/// Errors never end the session; they become the reply.
pub fn execute(book: &mut AddressBook, line: &str, today: NaiveDate) -> Outcome {
    let Some(input) = parse_input(line) else {
        return Outcome::Continue(EMPTY_INPUT.to_string());
    };

    tracing::debug!("Command: {} {:?}", input.command, input.args);
    let args = input.args.as_slice();

    let result: BookResult<String> = match &input.command {
        Command::Exit => return Outcome::Exit(GOODBYE.to_string()),
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => handlers::add_contact(book, args),
        Command::Change => handlers::change_phone(book, args),
        Command::DeletePhone => handlers::delete_phone(book, args),
        Command::AddBirthday => handlers::add_birthday(book, args),
        Command::ShowBirthday => handlers::show_birthday(book, args),
        Command::Phone => handlers::show_phone(book, args),
        Command::Birthdays => Ok(handlers::show_birthdays(book, today)),
        Command::All => Ok(handlers::display_contacts(book)),
        Command::DeleteContact => handlers::delete_contact(book, args),
        Command::Help => Ok(HELP_TEXT.to_string()),
        Command::Unknown(_) => Ok(INVALID_COMMAND.to_string()),
    };

    match result {
        Ok(reply) => Outcome::Continue(reply),
        Err(e) => {
            tracing::warn!("Command {} failed: {}", input.command, e);
            Outcome::Continue(user_message(&e))
        }
    }
}

/// Drive a whole session until `exit`/`close` or the end of input.
///
/// `today` is asked for the date each time a command runs, so a session
/// left open past midnight reports the right birthdays.
pub fn run_session<R, S, C>(
    book: &mut AddressBook,
    input: R,
    sink: &mut S,
    today: C,
) -> io::Result<()>
where
    R: BufRead,
    S: MessageSink + ?Sized,
    C: Fn() -> NaiveDate,
{
    sink.message(WELCOME)?;

    let mut lines = input.lines();
    loop {
        sink.prompt(PROMPT)?;

        let Some(line) = lines.next() else {
            tracing::info!("End of input, closing session");
            sink.message(GOODBYE)?;
            return Ok(());
        };

        match execute(book, &line?, today()) {
            Outcome::Continue(reply) => sink.message(&reply)?,
            Outcome::Exit(reply) => {
                sink.message(&reply)?;
                return Ok(());
            }
        }
    }
}
