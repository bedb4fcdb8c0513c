//! Domain value objects and types.
//!
//! This module contains the value holders a contact is built from: its
//! name, its phone numbers and its birthday. Phone and birthday validate
//! their input at construction time, so an invalid value can never be
//! stored in a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
