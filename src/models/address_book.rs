//! AddressBook model: all records, keyed by contact name.

use super::record::Record;
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The in-memory collection of every contact.
///
/// Records are keyed by their name and kept in insertion order. Replacing
/// a record through [`AddressBook::add_record`] keeps its original position.
///
/// Records live in a `Vec`, so lookups by name are a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AddressBookData")]
pub struct AddressBook {
    records: Vec<Record>,
}

#[derive(Deserialize)]
struct AddressBookData {
    #[serde(default)]
    records: Vec<Record>,
}

impl From<AddressBookData> for AddressBook {
    fn from(data: AddressBookData) -> Self {
        data.records.into_iter().collect()
    }
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name.
    ///
    /// There is no duplicate check: a record already filed under the same
    /// name is silently replaced. Callers that want to extend a contact
    /// should [`find_mut`](Self::find_mut) it instead.
    pub fn add_record(&mut self, record: Record) {
        match self.records.iter_mut().find(|r| r.name() == record.name()) {
            Some(existing) => {
                tracing::debug!("Replacing contact {}", record.name());
                *existing = record;
            }
            None => {
                tracing::debug!("Adding contact {}", record.name());
                self.records.push(record);
            }
        }
    }

    /// Exact lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Exact lookup by name, for editing the record in place.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the record filed under `name` and return it.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if there is no such record.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let index = self
            .records
            .iter()
            .position(|r| r.name().as_str() == name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;

        tracing::debug!("Deleting contact {}", name);
        Ok(self.records.remove(index))
    }

    /// All records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
