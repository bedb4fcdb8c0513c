use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book between runs.
///
/// The whole book is loaded once at start and saved once at exit, so the
/// repository deals in complete books rather than single records. This
/// enables different implementations (file-backed, in-memory for tests).
pub trait AddressBookRepository {
    /// Load the saved book, or an empty book if nothing has been saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the saved state with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
