//! Output sinks for assistant replies.

use std::io::{self, Write};

/// Where the session sends what the user should see.
pub trait MessageSink {
    /// Show a complete message.
    fn message(&mut self, text: &str) -> io::Result<()>;

    /// Show an input prompt. Sinks that are not interactive ignore it.
    fn prompt(&mut self, _text: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Sink printing to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl MessageSink for ConsoleSink {
    fn message(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", text)
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        write!(out, "{}", text)?;
        out.flush()
    }
}

/// Captures messages, for tests and scripted use.
impl MessageSink for Vec<String> {
    fn message(&mut self, text: &str) -> io::Result<()> {
        self.push(text.to_string());
        Ok(())
    }
}
