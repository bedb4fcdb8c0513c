//! The command layer.
//!
//! Turns lines of user text into address book operations and replies.
//! The book is owned by the caller and passed in explicitly; output goes
//! through a [`MessageSink`] so the same session can drive the console or
//! a test.

pub mod command;
pub mod handlers;
pub mod session;
pub mod sink;

pub use command::{parse_input, Command, ParsedInput};
pub use session::{execute, run_session, user_message, Outcome, GOODBYE, PROMPT, WELCOME};
pub use sink::{ConsoleSink, MessageSink};
