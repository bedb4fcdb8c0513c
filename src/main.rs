//! Contact Assistant - Main entry point
//!
//! Loads the address book, runs the interactive session on stdin/stdout and
//! saves the book when the session ends.

use anyhow::{Context, Result};
use contact_assistant::assistant::{run_session, ConsoleSink};
use contact_assistant::{AddressBookRepository, Config, JsonFileRepository};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only, stdout is the conversation)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting contact assistant with data file: {}",
        config.address_book_path.display()
    );

    let repository = JsonFileRepository::new(&config.address_book_path);
    let mut book = repository
        .load()
        .with_context(|| format!("Failed to load {}", repository.path().display()))?;

    let mut sink = ConsoleSink;
    let session = run_session(&mut book, io::stdin().lock(), &mut sink, || {
        chrono::Local::now().date_naive()
    });
    if let Err(e) = &session {
        error!("Session ended with an I/O error: {}", e);
    }

    // Save even if the session was cut short
    if let Err(e) = repository.save(&book) {
        error!("Failed to save address book: {}", e);
        eprintln!("Failed to save address book: {}", e);
        return Err(e.into());
    }

    session.context("Session failed")?;
    info!("Contact assistant shutdown complete");
    Ok(())
}
