//! Data models for the contact assistant.
//!
//! This module contains the records stored in the address book and the
//! address book itself.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::{Record, NO_BIRTHDAY};
