//! Record model: one contact in the address book.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker shown in place of a birthday that has not been added.
pub const NO_BIRTHDAY: &str = "not set";

/// A contact: a name, an ordered list of phones and an optional birthday.
///
/// All mutations validate their input before touching the record, so a
/// failed call leaves the record exactly as it was.
///
/// Loading accepts any state the methods can produce, including the
/// repeated phone an [`edit_phone`](Record::edit_phone) can leave behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The birthday, if one has been added.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Add a phone to the end of the list.
    ///
    /// # Errors
    ///
    /// - `BookError::Validation` if `phone` is not ten digits
    /// - `BookError::DuplicatePhone` if the record already has this number
    pub fn add_phone(&mut self, phone: &str) -> BookResult<()> {
        let phone = Phone::new(phone)?;
        if self.phones.contains(&phone) {
            return Err(BookError::DuplicatePhone {
                contact: self.name.to_string(),
                phone: phone.into_inner(),
            });
        }

        tracing::debug!("Adding phone {} to contact {}", phone, self.name);
        self.phones.push(phone);
        Ok(())
    }

    /// Remove a phone, keeping the remaining phones in their order.
    ///
    /// Returns the removed phone.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<Phone> {
        let index = self.position_of(phone)?;
        tracing::debug!("Removing phone {} from contact {}", phone, self.name);
        Ok(self.phones.remove(index))
    }

    /// Replace `old` with `new` in place.
    ///
    /// `new` is validated but not checked against the record's other
    /// phones, so an edit can leave two equal numbers on one record.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self.position_of(old)?;
        let new = Phone::new(new)?;

        tracing::debug!("Changing phone {} to {} for contact {}", old, new, self.name);
        self.phones[index] = new;
        Ok(())
    }

    /// Exact lookup of a phone by its digits.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Set the birthday. A birthday can be added only once.
    ///
    /// # Errors
    ///
    /// - `BookError::BirthdayAlreadySet` if the record has a birthday
    /// - `BookError::Validation` if `birthday` is not a `DD.MM.YYYY` date
    pub fn add_birthday(&mut self, birthday: &str) -> BookResult<()> {
        if let Some(existing) = &self.birthday {
            return Err(BookError::BirthdayAlreadySet {
                contact: self.name.to_string(),
                birthday: existing.to_string(),
            });
        }

        let birthday = Birthday::new(birthday)?;
        tracing::debug!("Setting birthday {} for contact {}", birthday, self.name);
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Human-readable one-line summary of the record.
    pub fn describe(&self) -> String {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        format!(
            "Contact name: {}, phones: {}, birthday: {}",
            self.name,
            phones,
            self.birthday_text()
        )
    }

    /// The birthday as text, or the "not set" marker.
    pub fn birthday_text(&self) -> String {
        self.birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| NO_BIRTHDAY.to_string())
    }

    fn position_of(&self, phone: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| BookError::PhoneNotFound {
                contact: self.name.to_string(),
                phone: phone.to_string(),
            })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
