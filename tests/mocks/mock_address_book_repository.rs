use contact_assistant::error::StorageResult;
use contact_assistant::{AddressBook, AddressBookRepository};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock address book repository for testing.
///
/// Keeps the "saved" book in memory and tracks method calls for verification.
/// Clones share state, so a test can hand one clone to the code under test
/// and inspect the other.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockAddressBookRepository {
    saved: Arc<Mutex<Option<AddressBook>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockAddressBookRepository {
    /// Create a repository with nothing saved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.saved.lock().unwrap() = Some(book);
        repo
    }

    /// The last saved book, if any.
    pub fn saved(&self) -> Option<AddressBook> {
        self.saved.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl AddressBookRepository for MockAddressBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");
        Ok(self.saved().unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");
        *self.saved.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
