//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when operating on records and the address book.
///
/// Every variant is recoverable: the command layer turns it into a message
/// and the session continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Malformed phone or birthday text
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The phone is already on the record
    #[error("Contact {contact} already has phone number {phone}")]
    DuplicatePhone { contact: String, phone: String },

    /// The phone is not on the record
    #[error("Contact {contact} has no phone number: {phone}")]
    PhoneNotFound { contact: String, phone: String },

    /// The record already carries a birthday
    #[error("Contact {contact} has already added birthday {birthday}")]
    BirthdayAlreadySet { contact: String, birthday: String },

    /// No record with this name
    #[error("No such contact: {0}")]
    NotFound(String),

    /// The caller supplied fewer arguments than the operation needs
    #[error("Missing argument")]
    MissingArgument,
}

/// Errors that can occur when loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not a valid address book
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
