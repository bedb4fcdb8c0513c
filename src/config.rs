//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is honoured if present; it is loaded without printing anything, since
//! stdout is the conversation with the user.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the address book data file.
pub const DEFAULT_ADDRESS_BOOK_PATH: &str = "addressbook.json";

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book is loaded from and saved to
    pub address_book_path: PathBuf,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: Data file (default: "addressbook.json")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let address_book_path = match env::var("ADDRESS_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_ADDRESS_BOOK_PATH),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            address_book_path,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            address_book_path: PathBuf::from(DEFAULT_ADDRESS_BOOK_PATH),
            log_level: "error".to_string(),
        }
    }
}
