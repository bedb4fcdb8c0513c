//! Contact Assistant - an interactive command-line contact manager.
//!
//! This library stores contacts (a name, phone numbers and an optional
//! birthday), persists them between runs, and works out which contacts to
//! congratulate in the coming week.
//!
//! # Architecture
//!
//! - **domain**: Validated value holders for names, phones and birthdays
//! - **models**: The `Record` of one contact and the `AddressBook` of all of them
//! - **services**: Birthday reminder scheduling
//! - **repositories**: Loading and saving the address book
//! - **assistant**: Command parsing, handlers and the interactive session
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod assistant;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError, StorageError, StorageResult};
pub use models::{AddressBook, Record};
pub use repositories::{AddressBookRepository, JsonFileRepository};
pub use services::{format_reminders, upcoming_birthdays, BirthdayReminder};
